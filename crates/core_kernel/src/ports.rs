//! Ports and Adapters Infrastructure
//!
//! The lifecycle engine talks to its collaborators (applicant, application and
//! worker stores) only through port traits. Each domain defines its own port
//! traits extending [`DomainPort`]; adapters implement them.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            Workflow Service              │
//! └──────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌──────────────────────────────────────────┐
//! │   Port Traits (ApplicationRepository..)  │
//! └──────────────────────────────────────────┘
//!                      ▲
//!                      │
//!            ┌─────────┴─────────┐
//!            │  In-memory store  │
//!            └───────────────────┘
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so that adapters can be shared
/// behind an `Arc` across request handlers.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Application", "APP-123");
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Not found: Application with id APP-123");
    }

    #[test]
    fn test_conflict_is_not_a_lookup_miss() {
        let conflict = PortError::conflict("expert E-1 already exists");
        assert!(!conflict.is_not_found());
        assert_eq!(conflict.to_string(), "Conflict: expert E-1 already exists");
    }

    #[test]
    fn test_internal_carries_message() {
        let error = PortError::internal("store poisoned");
        assert!(matches!(error, PortError::Internal { source: None, .. }));
        assert!(error.to_string().contains("store poisoned"));
    }
}
