//! Catalog domain: courses, packages, instructors, and the queries over them.

mod course;
mod errors;
mod instructor;
mod package;
pub mod query;

pub use course::{Course, NewCourse};
pub use errors::CatalogError;
pub use instructor::{Instructor, NewInstructor};
pub use package::{NewPackage, Package};
pub use query::CatalogFilter;

/// Rating given to catalog entries created without one.
pub const DEFAULT_RATING: &str = "4.8";

/// Category given to courses and packages created without one.
pub const DEFAULT_CATEGORY: &str = "Development";

/// Fields the query layer filters on.
pub trait CatalogItem {
    fn title(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn category(&self) -> &str;
}
