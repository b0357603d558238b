//! Learner domain: registered users and their enrollments.

mod enrollment;
mod errors;
mod user;

pub use enrollment::{Enrollment, EnrollmentTarget, NewEnrollment};
pub use errors::{EnrollmentError, UserError};
pub use user::{NewUser, User};
