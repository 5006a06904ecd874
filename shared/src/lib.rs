//! Shared types and models for the Crop Advisory Platform
//!
//! This crate contains types shared between the backend, frontend (via WASM),
//! and other components of the system, plus the rainfall estimation core.

pub mod models;
pub mod rainfall;
pub mod types;
pub mod validation;

pub use models::*;
pub use rainfall::*;
pub use types::*;
pub use validation::*;
