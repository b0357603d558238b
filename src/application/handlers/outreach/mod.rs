//! Outreach command handlers: newsletter and contact form.

mod submit_contact;
mod subscribe_newsletter;

pub use submit_contact::{SubmitContactCommand, SubmitContactHandler};
pub use subscribe_newsletter::{SubscribeNewsletterCommand, SubscribeNewsletterHandler};
