//! Expert and founder DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_grants::{Expert, Founder, Qualification, ScoringPolicy};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterExpertRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub specialization: String,
    #[validate(length(min = 1, max = 50))]
    pub degree: String,
}

#[derive(Debug, Serialize)]
pub struct ExpertResponse {
    pub id: Uuid,
    pub name: String,
    pub specialization: String,
    pub degree: String,
    pub qualification: Qualification,
    pub scoring: ScoringPolicy,
}

impl From<&Expert> for ExpertResponse {
    fn from(expert: &Expert) -> Self {
        Self {
            id: *expert.id.as_uuid(),
            name: expert.name.clone(),
            specialization: expert.specialization.clone(),
            degree: expert.degree.clone(),
            qualification: expert.qualification,
            scoring: expert.scoring,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterFounderRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct FounderResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<&Founder> for FounderResponse {
    fn from(founder: &Founder) -> Self {
        Self {
            id: *founder.id.as_uuid(),
            name: founder.name.clone(),
        }
    }
}
