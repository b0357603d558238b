//! Top-level API router.

use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::adapters::memory::InMemoryStore;

use super::catalog::{catalog_routes, CatalogAppState};
use super::error::ApiError;
use super::learner::{learner_routes, LearnerAppState};
use super::outreach::{outreach_routes, OutreachAppState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "no route");
    ApiError::not_found("Not found")
}

async fn method_not_allowed() -> impl IntoResponse {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Builds the full `/api` router over the given store.
///
/// Middleware (tracing, CORS, timeouts, body limits) is added by the binary.
pub fn api_router(store: &InMemoryStore) -> Router {
    let catalog = CatalogAppState {
        courses: store.courses.clone(),
        packages: store.packages.clone(),
        instructors: store.instructors.clone(),
    };
    let learner = LearnerAppState {
        users: store.users.clone(),
        enrollments: store.enrollments.clone(),
    };
    let outreach = OutreachAppState {
        newsletters: store.newsletters.clone(),
    };

    let api = Router::new()
        .route("/health", get(health))
        .merge(catalog_routes().with_state(catalog))
        .merge(learner_routes().with_state(learner))
        .merge(outreach_routes().with_state(outreach));

    Router::new()
        .nest("/api", api)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}
