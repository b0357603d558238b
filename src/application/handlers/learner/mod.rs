//! Learner command and query handlers.

mod create_enrollment;
mod list_user_enrollments;
mod register_user;

pub use create_enrollment::{CreateEnrollmentCommand, CreateEnrollmentHandler};
pub use list_user_enrollments::{ListUserEnrollmentsHandler, ListUserEnrollmentsQuery};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
