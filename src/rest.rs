//! REST API endpoints for Alpha Vantage
pub mod decoded;
pub mod raw;

// Re-export raw module for convenience.
pub use raw::*;
