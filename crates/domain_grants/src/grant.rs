//! Funding programmes applications can be filed under

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{GrantId, Money};
use crate::error::GrantError;

/// A funding programme with a ceiling on any single award
///
/// Programmes sit beside the application lifecycle: linking one never moves
/// an application through its status graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    pub id: GrantId,
    pub title: String,
    pub description: String,
    pub max_amount: Money,
    pub created_at: DateTime<Utc>,
}

impl Grant {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        max_amount: Money,
    ) -> Result<Self, GrantError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(GrantError::validation("grant title must not be empty"));
        }

        Ok(Self {
            id: GrantId::new_v7(),
            title,
            description: description.into(),
            max_amount: max_amount.require_non_negative()?,
            created_at: Utc::now(),
        })
    }

    /// Fails if `amount` is above the programme ceiling
    pub fn check_within_ceiling(&self, amount: &Money, what: &str) -> Result<(), GrantError> {
        if amount.exceeds(&self.max_amount)? {
            return Err(GrantError::validation(format!(
                "{what} {amount} exceeds the ceiling {} of grant '{}'",
                self.max_amount, self.title
            )));
        }
        Ok(())
    }
}
