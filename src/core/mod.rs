//! Core types and constants for the walk companion

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
