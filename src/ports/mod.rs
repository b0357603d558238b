//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the storage behind it. Adapters implement these ports.
//!
//! Catalog collections (courses, packages, instructors) use the base
//! [`EntityRepository`](crate::domain::foundation::EntityRepository) trait
//! directly. Collections with extra lookups get their own port:
//!
//! - `UserRepository` - Username/email lookups with uniqueness on create
//! - `EnrollmentRepository` - Enrollments per user
//! - `NewsletterRepository` - Idempotent subscribe

mod enrollment_repository;
mod newsletter_repository;
mod user_repository;

pub use enrollment_repository::EnrollmentRepository;
pub use newsletter_repository::NewsletterRepository;
pub use user_repository::UserRepository;
