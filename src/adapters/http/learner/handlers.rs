//! HTTP handlers for learner endpoints: registration and enrollments.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::{ApiError, ApiResultExt, IntoApiError};
use crate::adapters::http::extract::ApiJson;
use crate::application::handlers::learner::{
    CreateEnrollmentCommand, CreateEnrollmentHandler, ListUserEnrollmentsHandler, ListUserEnrollmentsQuery,
    RegisterUserCommand, RegisterUserHandler,
};
use crate::domain::foundation::EntityId;
use crate::domain::learner::{EnrollmentError, UserError};
use crate::ports::{EnrollmentRepository, UserRepository};

use super::dto::{
    CreateEnrollmentRequest, EnrollmentCreatedResponse, EnrollmentResponse, RegisterUserRequest,
    UserCreatedResponse, UserResponse,
};

#[derive(Clone)]
pub struct LearnerAppState {
    pub users: Arc<dyn UserRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
}

impl LearnerAppState {
    pub fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(self.users.clone())
    }

    pub fn create_enrollment_handler(&self) -> CreateEnrollmentHandler {
        CreateEnrollmentHandler::new(self.enrollments.clone())
    }

    pub fn list_user_enrollments_handler(&self) -> ListUserEnrollmentsHandler {
        ListUserEnrollmentsHandler::new(self.enrollments.clone())
    }
}

impl IntoApiError for UserError {
    fn into_api_error(self, failure: &'static str) -> ApiError {
        match self {
            UserError::ValidationFailed { message, .. } => ApiError::bad_request(message),
            UserError::UsernameTaken(_) | UserError::EmailTaken(_) => ApiError::conflict(self.message()),
            UserError::Infrastructure(cause) => ApiError::internal(failure, cause),
        }
    }
}

impl IntoApiError for EnrollmentError {
    fn into_api_error(self, failure: &'static str) -> ApiError {
        match self {
            EnrollmentError::ValidationFailed { message, .. } => ApiError::bad_request(message),
            EnrollmentError::Infrastructure(cause) => ApiError::internal(failure, cause),
        }
    }
}

/// POST /api/users - Register a learner
pub async fn register_user(
    State(state): State<LearnerAppState>,
    ApiJson(request): ApiJson<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserCreatedResponse>), ApiError> {
    let cmd = RegisterUserCommand {
        username: request.username.unwrap_or_default(),
        email: request.email.unwrap_or_default(),
        password: request.password.unwrap_or_default(),
        first_name: request.first_name,
        last_name: request.last_name,
    };

    let user = state
        .register_user_handler()
        .handle(cmd)
        .await
        .or_fail("Failed to register user")?;

    let response = UserCreatedResponse {
        message: "User registered successfully".to_string(),
        user: UserResponse::from(user),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/enrollments - Enroll a user in a package or course
pub async fn create_enrollment(
    State(state): State<LearnerAppState>,
    ApiJson(request): ApiJson<CreateEnrollmentRequest>,
) -> Result<Json<EnrollmentCreatedResponse>, ApiError> {
    let cmd = CreateEnrollmentCommand {
        user_id: request.user_id,
        package_id: request.package_id,
        course_id: request.course_id,
    };

    let enrollment = state
        .create_enrollment_handler()
        .handle(cmd)
        .await
        .or_fail("Failed to create enrollment")?;

    Ok(Json(EnrollmentCreatedResponse {
        message: "Successfully enrolled".to_string(),
        enrollment: EnrollmentResponse::from(enrollment),
    }))
}

/// GET /api/users/:userId/enrollments
pub async fn list_user_enrollments(
    State(state): State<LearnerAppState>,
    Path(user_id): Path<EntityId>,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    let enrollments = state
        .list_user_enrollments_handler()
        .handle(ListUserEnrollmentsQuery { user_id })
        .await
        .or_fail("Failed to fetch enrollments")?;
    Ok(Json(enrollments.into_iter().map(EnrollmentResponse::from).collect()))
}
