//! HTTP handlers for the Crop Advisory Platform

pub mod health;
pub mod recommendation;
pub mod weather;

pub use health::*;
pub use recommendation::*;
pub use weather::*;
