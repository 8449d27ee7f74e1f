//! HTTP API Layer
//!
//! This crate exposes the grant review workflow over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for applicants, workers, grants and applications
//! - **Middleware**: Request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Bootstrap**: Service wiring over the in-memory stores
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{bootstrap::build_service, create_router};
//!
//! let service = build_service(&config)?;
//! let app = create_router(Arc::new(service), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_grants::GrantWorkflowService;

use crate::config::ApiConfig;
use crate::middleware::request_log_middleware;
use crate::handlers::{applicants, applications, grants, health, workers};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GrantWorkflowService>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Workflow service backing every route
/// * `config` - API configuration
pub fn create_router(service: Arc<GrantWorkflowService>, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    let public_routes = Router::new().route("/health", get(health::health_check));

    let applicant_routes = Router::new()
        .route("/", post(applicants::create_applicant))
        .route("/:id", get(applicants::get_applicant).put(applicants::update_contact));

    let expert_routes = Router::new()
        .route("/", post(workers::register_expert).get(workers::list_experts));

    let founder_routes = Router::new()
        .route("/", post(workers::register_founder));

    let application_routes = Router::new()
        .route("/", post(applications::create_application))
        .route("/", get(applications::list_applications))
        .route("/:id", get(applications::get_application))
        .route("/:id", put(applications::update_application))
        .route("/:id/submit", post(applications::submit_application))
        .route("/:id/withdraw", post(applications::withdraw_application))
        .route("/:id/assignments", post(applications::assign_experts))
        .route("/:id/evaluations", post(applications::start_evaluation))
        .route("/:id/decision", post(applications::make_decision))
        .route("/:id/grant", post(grants::link_application));

    let grant_routes = Router::new()
        .route("/", post(grants::create_grant).get(grants::list_grants))
        .route("/:id", get(grants::get_grant));

    let api_routes = Router::new()
        .nest("/applicants", applicant_routes)
        .nest("/experts", expert_routes)
        .nest("/founders", founder_routes)
        .nest("/applications", application_routes)
        .nest("/grants", grant_routes)
        .layer(axum_middleware::from_fn(request_log_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
