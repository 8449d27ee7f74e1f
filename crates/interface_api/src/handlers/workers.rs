//! Expert and founder handlers

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{AppState, error::ApiError};
use crate::dto::workers::*;

/// Registers an expert
pub async fn register_expert(
    State(state): State<AppState>,
    Json(request): Json<RegisterExpertRequest>,
) -> Result<(StatusCode, Json<ExpertResponse>), ApiError> {
    request.validate()?;

    let expert = state
        .service
        .register_expert(&request.name, &request.specialization, &request.degree)
        .await?;
    Ok((StatusCode::CREATED, Json(ExpertResponse::from(&expert))))
}

/// Lists experts in registration order
pub async fn list_experts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpertResponse>>, ApiError> {
    let experts = state.service.experts().await?;
    Ok(Json(experts.iter().map(ExpertResponse::from).collect()))
}

/// Registers a founder
pub async fn register_founder(
    State(state): State<AppState>,
    Json(request): Json<RegisterFounderRequest>,
) -> Result<(StatusCode, Json<FounderResponse>), ApiError> {
    request.validate()?;

    let founder = state.service.register_founder(&request.name).await?;
    Ok((StatusCode::CREATED, Json(FounderResponse::from(&founder))))
}
