//! HTTP handlers for outreach endpoints: newsletter and contact form.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::{ApiError, ApiResultExt, IntoApiError};
use crate::adapters::http::extract::ApiJson;
use crate::application::handlers::outreach::{
    SubmitContactCommand, SubmitContactHandler, SubscribeNewsletterCommand, SubscribeNewsletterHandler,
};
use crate::domain::outreach::{ContactError, NewsletterError};
use crate::ports::NewsletterRepository;

use super::dto::{ContactRequest, MessageResponse, NewsletterResponse, SubscribeRequest, SubscribedResponse};

#[derive(Clone)]
pub struct OutreachAppState {
    pub newsletters: Arc<dyn NewsletterRepository>,
}

impl OutreachAppState {
    pub fn subscribe_handler(&self) -> SubscribeNewsletterHandler {
        SubscribeNewsletterHandler::new(self.newsletters.clone())
    }

    pub fn contact_handler(&self) -> SubmitContactHandler {
        SubmitContactHandler::new()
    }
}

impl IntoApiError for NewsletterError {
    fn into_api_error(self, failure: &'static str) -> ApiError {
        match self {
            NewsletterError::InvalidEmail(_) => ApiError::bad_request(self.message()),
            NewsletterError::Infrastructure(cause) => ApiError::internal(failure, cause),
        }
    }
}

impl IntoApiError for ContactError {
    fn into_api_error(self, _failure: &'static str) -> ApiError {
        ApiError::bad_request(self.message())
    }
}

/// POST /api/newsletter - Subscribe an email address
pub async fn subscribe(
    State(state): State<OutreachAppState>,
    ApiJson(request): ApiJson<SubscribeRequest>,
) -> Result<Json<SubscribedResponse>, ApiError> {
    let cmd = SubscribeNewsletterCommand {
        email: request.email.unwrap_or_default(),
    };

    let subscription = state
        .subscribe_handler()
        .handle(cmd)
        .await
        .or_fail("Failed to subscribe to newsletter")?;

    Ok(Json(SubscribedResponse {
        message: "Successfully subscribed to newsletter".to_string(),
        newsletter: NewsletterResponse::from(subscription),
    }))
}

/// POST /api/contact - Submit the contact form
pub async fn submit_contact(
    State(state): State<OutreachAppState>,
    ApiJson(request): ApiJson<ContactRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cmd = SubmitContactCommand {
        name: request.name,
        email: request.email,
        message: request.message,
        subject: request.subject,
    };

    state
        .contact_handler()
        .handle(cmd)
        .await
        .or_fail("Failed to submit contact form")?;

    Ok(Json(MessageResponse {
        message: "Contact form submitted successfully".to_string(),
    }))
}
