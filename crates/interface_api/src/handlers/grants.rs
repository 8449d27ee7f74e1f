//! Funding programme handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{ApplicationId, GrantId};

use crate::{AppState, error::ApiError};
use crate::dto::applications::ApplicationResponse;
use crate::dto::grants::*;
use crate::handlers::applications::money;

/// Opens a funding programme
pub async fn create_grant(
    State(state): State<AppState>,
    Json(request): Json<CreateGrantRequest>,
) -> Result<(StatusCode, Json<GrantResponse>), ApiError> {
    request.validate()?;

    let ceiling = money(&state, request.max_amount, request.currency.as_deref())?;
    let grant = state
        .service
        .register_grant(request.title, request.description, ceiling)
        .await?;
    Ok((StatusCode::CREATED, Json(GrantResponse::from(&grant))))
}

pub async fn list_grants(State(state): State<AppState>) -> Result<Json<Vec<GrantResponse>>, ApiError> {
    let grants = state.service.grants().await?;
    Ok(Json(grants.iter().map(GrantResponse::from).collect()))
}

pub async fn get_grant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GrantResponse>, ApiError> {
    let grant = state.service.get_grant(GrantId::from_uuid(id)).await?;
    Ok(Json(GrantResponse::from(&grant)))
}

/// Files an application under a programme
pub async fn link_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<LinkGrantRequest>,
) -> Result<Json<ApplicationResponse>, ApiError> {
    let application = state
        .service
        .link_grant(ApplicationId::from_uuid(id), GrantId::from_uuid(request.grant_id))
        .await?;
    Ok(Json(ApplicationResponse::from(&application)))
}
