//! Endpoint constructors returning raw response bodies
pub mod forex;
pub mod fundamentals;
