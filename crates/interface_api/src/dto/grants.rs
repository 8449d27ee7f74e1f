//! Funding programme DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_grants::Grant;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGrantRequest {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub max_amount: Decimal,
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LinkGrantRequest {
    pub grant_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct GrantResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub max_amount: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Grant> for GrantResponse {
    fn from(grant: &Grant) -> Self {
        Self {
            id: *grant.id.as_uuid(),
            title: grant.title.clone(),
            description: grant.description.clone(),
            max_amount: grant.max_amount.amount(),
            currency: grant.max_amount.currency().code().to_string(),
            created_at: grant.created_at,
        }
    }
}
