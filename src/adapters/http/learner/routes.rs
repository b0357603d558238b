//! Axum router configuration for learner endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_enrollment, list_user_enrollments, register_user, LearnerAppState};

/// Create the learner router, mounted under `/api`.
///
/// # Routes
/// - `POST /users` - Register a user
/// - `POST /enrollments` - Enroll a user in a package or course
/// - `GET /users/:userId/enrollments` - A user's enrollments
pub fn learner_routes() -> Router<LearnerAppState> {
    Router::new()
        .route("/users", post(register_user))
        .route("/enrollments", post(create_enrollment))
        .route("/users/:user_id/enrollments", get(list_user_enrollments))
}
