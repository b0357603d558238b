//! HTTP adapter for catalog endpoints.
//!
//! Read-only views of courses, packages, and instructors.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CatalogAppState;
pub use routes::catalog_routes;
