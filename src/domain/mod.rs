//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors, repository trait)
//! - `catalog` - Courses, packages, instructors, and the query layer over them
//! - `learner` - Registered users and enrollments
//! - `outreach` - Newsletter subscriptions and contact form submissions

pub mod catalog;
pub mod foundation;
pub mod learner;
pub mod outreach;
