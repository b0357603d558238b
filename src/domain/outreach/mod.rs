//! Outreach domain: newsletter signups and contact form submissions.

mod contact;
mod errors;
mod newsletter;

pub use contact::ContactMessage;
pub use errors::{ContactError, NewsletterError};
pub use newsletter::Newsletter;
