//! Domain models for the Crop Advisory Platform

mod crop;
mod weather;

pub use crop::*;
pub use weather::*;
