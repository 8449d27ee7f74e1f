//! Application lifecycle handlers

use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use core_kernel::{ApplicantId, ApplicationId, Currency, ExpertId, FounderId, Money};
use domain_grants::{ApplicationData, ApplicationStatus, DecisionResult};

use crate::{AppState, error::ApiError};
use crate::dto::applications::*;
use crate::dto::workers::ExpertResponse;

pub(crate) fn money(state: &AppState, amount: Decimal, currency: Option<&str>) -> Result<Money, ApiError> {
    let currency = match currency {
        Some(code) => Currency::from_str(code).map_err(|e| ApiError::Validation(e.to_string()))?,
        None => state.service.config().currency,
    };
    Ok(Money::new(amount, currency))
}

/// Creates an application, submitted unless `draft` is set
pub async fn create_application(
    State(state): State<AppState>,
    Json(request): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<ApplicationResponse>), ApiError> {
    request.validate()?;

    let requested = money(&state, request.requested_amount, request.currency.as_deref())?;
    let data = ApplicationData::new(request.title, request.description, requested)?;
    let applicant_id = ApplicantId::from_uuid(request.applicant_id);

    let application = if request.draft {
        state.service.draft_application(applicant_id, data).await?
    } else {
        state.service.submit_application(applicant_id, data).await?
    };
    Ok((StatusCode::CREATED, Json(ApplicationResponse::from(&application))))
}

/// Lists applications, optionally filtered by status
pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ApplicationListQuery>,
) -> Result<Json<Vec<ApplicationResponse>>, ApiError> {
    let statuses = match query.status.as_deref() {
        Some(raw) => vec![ApplicationStatus::from_str(raw)?],
        None => ApplicationStatus::ALL.to_vec(),
    };

    let mut applications = Vec::new();
    for status in statuses {
        applications.extend(state.service.applications_by_status(status).await?);
    }
    Ok(Json(applications.iter().map(ApplicationResponse::from).collect()))
}

/// Gets an application by ID
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicationResponse>, ApiError> {
    let application = state.service.get_application(ApplicationId::from_uuid(id)).await?;
    Ok(Json(ApplicationResponse::from(&application)))
}

/// Replaces the data of a draft application
pub async fn update_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateApplicationRequest>,
) -> Result<Json<ApplicationResponse>, ApiError> {
    request.validate()?;

    let requested = money(&state, request.requested_amount, request.currency.as_deref())?;
    let data = ApplicationData::new(request.title, request.description, requested)?;
    let application = state
        .service
        .edit_application(ApplicationId::from_uuid(id), data)
        .await?;
    Ok(Json(ApplicationResponse::from(&application)))
}

/// Submits a draft application
pub async fn submit_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicationResponse>, ApiError> {
    let application = state.service.submit_draft(ApplicationId::from_uuid(id)).await?;
    Ok(Json(ApplicationResponse::from(&application)))
}

/// Withdraws an application
pub async fn withdraw_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicationResponse>, ApiError> {
    let application = state
        .service
        .withdraw_application(ApplicationId::from_uuid(id))
        .await?;
    Ok(Json(ApplicationResponse::from(&application)))
}

/// Selects experts and wires the evaluation chain
pub async fn assign_experts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssignmentResponse>, ApiError> {
    let experts = state.service.assign_experts(ApplicationId::from_uuid(id)).await?;
    Ok(Json(AssignmentResponse {
        application_id: id,
        strategy: state.service.strategy_name().to_string(),
        experts: experts.iter().map(ExpertResponse::from).collect(),
    }))
}

/// Runs the evaluation chain starting at the given expert
pub async fn start_evaluation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EvaluationRequest>,
) -> Result<Json<EvaluationRunResponse>, ApiError> {
    let application_id = ApplicationId::from_uuid(id);
    let evaluations = state
        .service
        .start_evaluation(application_id, ExpertId::from_uuid(request.expert_id))
        .await?;
    let application = state.service.get_application(application_id).await?;

    Ok(Json(EvaluationRunResponse {
        application_id: id,
        status: application.status(),
        evaluations: evaluations.iter().map(EvaluationResponse::from).collect(),
    }))
}

/// Records the founder's decision
pub async fn make_decision(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<DecisionRequest>,
) -> Result<(StatusCode, Json<DecisionResponse>), ApiError> {
    request.validate()?;

    let result = DecisionResult::from_str(&request.result)?;
    let amount = money(&state, request.amount, request.currency.as_deref())?;
    let decision = state
        .service
        .make_decision(
            ApplicationId::from_uuid(id),
            FounderId::from_uuid(request.founder_id),
            result,
            amount,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(DecisionResponse::from(&decision))))
}
