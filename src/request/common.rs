//! Common types used across multiple endpoints
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How far ahead the earnings calendar looks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    /// Next three months
    #[default]
    #[serde(rename = "3month")]
    ThreeMonths,
    /// Next six months
    #[serde(rename = "6month")]
    SixMonths,
    /// Next twelve months
    #[serde(rename = "12month")]
    TwelveMonths,
}

impl FromStr for Horizon {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "3month" => Ok(Horizon::ThreeMonths),
            "6month" => Ok(Horizon::SixMonths),
            "12month" => Ok(Horizon::TwelveMonths),
            _ => Err(crate::error::Error::Custom(format!("Invalid horizon: {s}"))),
        }
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Horizon::ThreeMonths => write!(f, "3month"),
            Horizon::SixMonths => write!(f, "6month"),
            Horizon::TwelveMonths => write!(f, "12month"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_horizon_is_three_months() {
        assert_eq!(Horizon::default().to_string(), "3month");
    }

    #[test]
    fn horizon_parsing_ignores_case() {
        assert_eq!("12MONTH".parse::<Horizon>().unwrap(), Horizon::TwelveMonths);
        assert!("1year".parse::<Horizon>().is_err());
    }
}
