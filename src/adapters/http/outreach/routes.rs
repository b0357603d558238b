//! Axum router configuration for outreach endpoints.

use axum::{routing::post, Router};

use super::handlers::{submit_contact, subscribe, OutreachAppState};

/// Create the outreach router, mounted under `/api`.
///
/// # Routes
/// - `POST /newsletter` - Subscribe to the newsletter
/// - `POST /contact` - Submit the contact form
pub fn outreach_routes() -> Router<OutreachAppState> {
    Router::new()
        .route("/newsletter", post(subscribe))
        .route("/contact", post(submit_contact))
}
