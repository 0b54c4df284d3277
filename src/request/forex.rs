//! Foreign exchange request parameters

/// Realtime currency exchange rate request builder
pub mod exchange_rate;

pub use exchange_rate::CurrencyExchangeRate;
