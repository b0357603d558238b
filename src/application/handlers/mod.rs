//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Each
//! handler owns the port handles it needs and translates absence into a typed
//! area error.

pub mod catalog;
pub mod learner;
pub mod outreach;
