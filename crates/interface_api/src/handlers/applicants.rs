//! Applicant handlers

use axum::{extract::{Path, State}, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use core_kernel::ApplicantId;

use crate::{AppState, error::ApiError};
use crate::dto::applicants::*;

/// Registers an applicant
pub async fn create_applicant(
    State(state): State<AppState>,
    Json(request): Json<CreateApplicantRequest>,
) -> Result<(StatusCode, Json<ApplicantResponse>), ApiError> {
    request.validate()?;

    let applicant = state
        .service
        .register_applicant(request.name, request.email, request.phone)
        .await?;
    Ok((StatusCode::CREATED, Json(ApplicantResponse::from(&applicant))))
}

/// Gets an applicant by ID
pub async fn get_applicant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicantResponse>, ApiError> {
    let applicant = state.service.get_applicant(ApplicantId::from_uuid(id)).await?;
    Ok(Json(ApplicantResponse::from(&applicant)))
}

/// Replaces an applicant's contact fields
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateContactRequest>,
) -> Result<Json<ApplicantResponse>, ApiError> {
    request.validate()?;

    let applicant = state
        .service
        .update_applicant_contact(ApplicantId::from_uuid(id), request.email, request.phone)
        .await?;
    Ok(Json(ApplicantResponse::from(&applicant)))
}
