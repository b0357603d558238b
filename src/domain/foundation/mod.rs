//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier, timestamp, error, and repository vocabulary
//! shared by the catalog and learner domains.

mod email;
mod errors;
mod ids;
mod repository;
mod timestamp;

pub use email::EmailAddress;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::EntityId;
pub use repository::{Entity, EntityRepository};
pub use timestamp::Timestamp;
