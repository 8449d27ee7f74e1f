//! Kernel error type for settings that fail to load or validate

use thiserror::Error;
use crate::money::MoneyError;

/// Errors raised while turning raw settings into kernel types
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Invalid setting '{key}': {message}")]
    Configuration { key: &'static str, message: String },
}

impl CoreError {
    pub fn configuration(key: &'static str, message: impl Into<String>) -> Self {
        CoreError::Configuration {
            key,
            message: message.into(),
        }
    }

    /// Name of the offending setting, if the failure is tied to one
    pub fn key(&self) -> Option<&'static str> {
        match self {
            CoreError::Configuration { key, .. } => Some(key),
            CoreError::Money(_) => None,
        }
    }
}
