//! Core Kernel - Foundational types shared by the grant review system
//!
//! This crate provides the building blocks used by every other crate:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers for applicants, applications and workers
//! - The port vocabulary used by repository adapters

pub mod money;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{
    ApplicantId, ApplicationId, GrantId, EvaluationId, DecisionId, ExpertId, FounderId,
};
pub use error::CoreError;
pub use ports::{PortError, DomainPort};
