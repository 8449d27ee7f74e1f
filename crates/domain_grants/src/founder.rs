//! Founders, who make the final funding decision

use serde::{Deserialize, Serialize};

use core_kernel::{FounderId, Money};
use crate::application::Application;
use crate::decision::{Decision, DecisionResult};
use crate::error::GrantError;

/// Authority that finalizes applications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Founder {
    pub id: FounderId,
    pub name: String,
}

impl Founder {
    pub fn new(name: impl Into<String>) -> Result<Self, GrantError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GrantError::validation("founder name must not be empty"));
        }
        Ok(Self {
            id: FounderId::new_v7(),
            name,
        })
    }

    /// Records a decision on an application that is under review
    ///
    /// The granted amount must be non-negative and in the currency of the
    /// requested amount.
    pub fn make_decision(
        &self,
        application: &mut Application,
        result: DecisionResult,
        granted_amount: Money,
    ) -> Result<Decision, GrantError> {
        let granted_amount = granted_amount.require_non_negative()?;
        let requested = application.data().requested_amount();
        if granted_amount.currency() != requested.currency() {
            return Err(GrantError::validation(format!(
                "granted amount is in {}, application requested {}",
                granted_amount.currency(),
                requested.currency()
            )));
        }

        let decision = Decision::new(
            application.id(),
            self.id,
            result,
            granted_amount,
            format!("Decision by {}", self.name),
        );
        application.attach_decision(decision.clone())?;
        Ok(decision)
    }
}
