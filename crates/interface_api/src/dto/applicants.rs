//! Applicant DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_grants::Applicant;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateApplicantRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateContactRequest {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApplicantResponse {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Applicant> for ApplicantResponse {
    fn from(applicant: &Applicant) -> Self {
        Self {
            id: *applicant.id().as_uuid(),
            name: applicant.name().to_string(),
            email: applicant.email().map(str::to_string),
            phone: applicant.phone().map(str::to_string),
            created_at: applicant.created_at(),
        }
    }
}
