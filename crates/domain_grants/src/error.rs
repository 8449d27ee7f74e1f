//! Grant review domain errors

use std::fmt;

use thiserror::Error;

use core_kernel::{MoneyError, PortError};
use crate::application::ApplicationStatus;

/// Errors that can occur in the grant review domain
#[derive(Debug, Error)]
pub enum GrantError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("Cannot {action} an application in status {from}")]
    InvalidTransition {
        from: ApplicationStatus,
        action: &'static str,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error("Repository error: {0}")]
    Port(PortError),
}

impl GrantError {
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        GrantError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn invalid_transition(from: ApplicationStatus, action: &'static str) -> Self {
        GrantError::InvalidTransition { from, action }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        GrantError::Validation(message.into())
    }

    /// Returns true if this error indicates a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, GrantError::NotFound { .. })
    }

    /// Returns true if this error indicates a rejected state-machine edge
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, GrantError::InvalidTransition { .. })
    }
}

impl From<PortError> for GrantError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { entity_type, id } => GrantError::NotFound {
                entity: entity_type,
                id,
            },
            other => GrantError::Port(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_not_found_becomes_domain_not_found() {
        let err: GrantError = PortError::not_found("Application", "APP-1").into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Application not found: APP-1");
    }

    #[test]
    fn test_other_port_errors_are_wrapped() {
        let err: GrantError = PortError::conflict("duplicate").into();
        assert!(matches!(err, GrantError::Port(PortError::Conflict { .. })));
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = GrantError::invalid_transition(ApplicationStatus::Submitted, "edit");
        assert_eq!(err.to_string(), "Cannot edit an application in status submitted");
    }
}
