//! Fundamental data request parameters

/// Earnings calendar request builder
pub mod earnings_calendar;

pub use earnings_calendar::EarningsCalendar;
