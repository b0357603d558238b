//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter (DTOs, handlers, routes); `router`
//! mounts them all under `/api`.

pub mod catalog;
pub mod error;
pub mod extract;
pub mod learner;
pub mod outreach;
pub mod router;
pub mod server;

pub use error::{ApiError, ErrorResponse};
pub use router::api_router;
pub use server::{build_app, serve};
