//! Catalog query handlers.

mod get_course;
mod get_instructor;
mod get_package;
mod get_package_courses;
mod list_courses;
mod list_instructors;
mod list_packages;

pub use get_course::{GetCourseHandler, GetCourseQuery};
pub use get_instructor::{GetInstructorHandler, GetInstructorQuery};
pub use get_package::{GetPackageHandler, GetPackageQuery};
pub use get_package_courses::{GetPackageCoursesHandler, GetPackageCoursesQuery};
pub use list_courses::{ListCoursesHandler, ListCoursesQuery};
pub use list_instructors::ListInstructorsHandler;
pub use list_packages::{ListPackagesHandler, ListPackagesQuery};
