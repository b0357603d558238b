//! Axum router configuration for catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    get_course, get_instructor, get_package, get_package_courses, list_courses, list_instructors,
    list_packages, CatalogAppState,
};

/// Create the catalog router, mounted under `/api`.
///
/// # Routes
/// - `GET /courses` - List courses (`?category=`, `?search=`)
/// - `GET /courses/:id` - Get one course
/// - `GET /packages` - List packages (`?category=`, `?search=`)
/// - `GET /packages/:id` - Get one package
/// - `GET /packages/:id/courses` - Courses bundled in a package
/// - `GET /instructors` - List instructors
/// - `GET /instructors/:id` - Get one instructor
pub fn catalog_routes() -> Router<CatalogAppState> {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/courses/:id", get(get_course))
        .route("/packages", get(list_packages))
        .route("/packages/:id", get(get_package))
        .route("/packages/:id/courses", get(get_package_courses))
        .route("/instructors", get(list_instructors))
        .route("/instructors/:id", get(get_instructor))
}
