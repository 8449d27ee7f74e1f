//! Application, evaluation and decision DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_grants::{Application, ApplicationStatus, Decision, Evaluation, StatusChange};

use crate::dto::workers::ExpertResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateApplicationRequest {
    pub applicant_id: Uuid,
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub requested_amount: Decimal,
    /// Defaults to the configured workflow currency
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
    /// Keep the application in draft instead of submitting it
    #[serde(default)]
    pub draft: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateApplicationRequest {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub requested_amount: Decimal,
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluationRequest {
    pub expert_id: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DecisionRequest {
    pub founder_id: Uuid,
    #[validate(length(min = 1))]
    pub result: String,
    pub amount: Decimal,
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub id: Uuid,
    pub expert_id: Uuid,
    pub score: u8,
    pub comment: String,
    pub evaluated_at: DateTime<Utc>,
}

impl From<&Evaluation> for EvaluationResponse {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            id: *evaluation.id.as_uuid(),
            expert_id: *evaluation.expert_id.as_uuid(),
            score: evaluation.score,
            comment: evaluation.comment.clone(),
            evaluated_at: evaluation.evaluated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DecisionResponse {
    pub id: Uuid,
    pub application_id: Uuid,
    pub founder_id: Uuid,
    pub result: String,
    pub granted_amount: Decimal,
    pub currency: String,
    pub report: String,
    pub decided_at: DateTime<Utc>,
}

impl From<&Decision> for DecisionResponse {
    fn from(decision: &Decision) -> Self {
        Self {
            id: *decision.id.as_uuid(),
            application_id: *decision.application_id.as_uuid(),
            founder_id: *decision.decided_by.as_uuid(),
            result: decision.result.to_string(),
            granted_amount: decision.granted_amount.amount(),
            currency: decision.granted_amount.currency().code().to_string(),
            report: decision.report.clone(),
            decided_at: decision.decided_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub applicant_id: Uuid,
    pub title: String,
    pub description: String,
    pub requested_amount: Decimal,
    pub currency: String,
    pub status: ApplicationStatus,
    pub grant_id: Option<Uuid>,
    pub evaluations: Vec<EvaluationResponse>,
    pub average_score: Option<Decimal>,
    pub decision: Option<DecisionResponse>,
    pub status_history: Vec<StatusChange>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Application> for ApplicationResponse {
    fn from(application: &Application) -> Self {
        let data = application.data();
        Self {
            id: *application.id().as_uuid(),
            applicant_id: *application.applicant_id().as_uuid(),
            title: data.title().to_string(),
            description: data.description().to_string(),
            requested_amount: data.requested_amount().amount(),
            currency: data.requested_amount().currency().code().to_string(),
            status: application.status(),
            grant_id: application.grant_id().map(|id| *id.as_uuid()),
            evaluations: application.evaluations().iter().map(EvaluationResponse::from).collect(),
            average_score: application.average_score(),
            decision: application.decision().map(DecisionResponse::from),
            status_history: application.status_history().to_vec(),
            created_at: application.created_at(),
            updated_at: application.updated_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub application_id: Uuid,
    pub strategy: String,
    pub experts: Vec<ExpertResponse>,
}

#[derive(Debug, Serialize)]
pub struct EvaluationRunResponse {
    pub application_id: Uuid,
    pub status: ApplicationStatus,
    pub evaluations: Vec<EvaluationResponse>,
}
