//! HTTP adapter for outreach endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::OutreachAppState;
pub use routes::outreach_routes;
