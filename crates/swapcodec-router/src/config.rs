//! Summary rendering configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use swapcodec_core::error::DecodeError;

/// How `describe` renders native-asset legs and amounts of unknown tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Label for the chain's native asset, e.g. "ETH" or "ONE"
    #[serde(default = "default_native_symbol")]
    pub native_symbol: String,
    #[serde(default = "default_decimals")]
    pub native_decimals: u8,
    /// Decimals assumed for tokens missing from the token table
    #[serde(default = "default_decimals")]
    pub default_decimals: u8,
    /// Decimals of LP liquidity tokens
    #[serde(default = "default_decimals")]
    pub liquidity_decimals: u8,
}

fn default_native_symbol() -> String {
    "ETH".into()
}

fn default_decimals() -> u8 {
    18
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            native_symbol: default_native_symbol(),
            native_decimals: 18,
            default_decimals: 18,
            liquidity_decimals: 18,
        }
    }
}

impl SummaryConfig {
    /// Same defaults with a different native asset label.
    pub fn with_native_symbol(symbol: impl Into<String>) -> Self {
        Self {
            native_symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, DecodeError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}
