//! HTTP adapter for learner endpoints.
//!
//! - `POST /api/users` - Register a user
//! - `POST /api/enrollments` - Create an enrollment
//! - `GET /api/users/:userId/enrollments` - List a user's enrollments

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::LearnerAppState;
pub use routes::learner_routes;
