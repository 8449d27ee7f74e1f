//! Funding decisions

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ApplicationId, DecisionId, FounderId, Money};
use crate::error::GrantError;

/// Outcome of a funding decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionResult {
    /// Funding granted
    Approved,
    /// Funding refused
    Rejected,
}

impl DecisionResult {
    pub const fn label(self) -> &'static str {
        match self {
            DecisionResult::Approved => "Approved",
            DecisionResult::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for DecisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DecisionResult {
    type Err = GrantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approved" => Ok(DecisionResult::Approved),
            "rejected" => Ok(DecisionResult::Rejected),
            _ => Err(GrantError::validation(format!("unknown decision result '{s}'"))),
        }
    }
}

/// Final funding decision attached to exactly one application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub id: DecisionId,
    pub application_id: ApplicationId,
    pub decided_by: FounderId,
    pub result: DecisionResult,
    pub granted_amount: Money,
    pub report: String,
    pub decided_at: DateTime<Utc>,
}

impl Decision {
    /// Creates a new decision
    pub fn new(
        application_id: ApplicationId,
        decided_by: FounderId,
        result: DecisionResult,
        granted_amount: Money,
        report: impl Into<String>,
    ) -> Self {
        Self {
            id: DecisionId::new_v7(),
            application_id,
            decided_by,
            result,
            granted_amount,
            report: report.into(),
            decided_at: Utc::now(),
        }
    }
}
