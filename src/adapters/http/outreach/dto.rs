//! Data Transfer Objects for outreach endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::outreach::Newsletter;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscribeRequest {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterResponse {
    pub id: String,
    pub email: String,
    pub subscribed_at: String,
}

impl From<Newsletter> for NewsletterResponse {
    fn from(subscription: Newsletter) -> Self {
        Self {
            id: subscription.id.into_inner(),
            email: subscription.email.as_str().to_string(),
            subscribed_at: subscription.subscribed_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribedResponse {
    pub message: String,
    pub newsletter: NewsletterResponse,
}

/// Body for endpoints that only acknowledge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
