//! HTTP handlers for catalog endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::adapters::http::error::{ApiError, ApiResultExt, IntoApiError};
use crate::application::handlers::catalog::{
    GetCourseHandler, GetCourseQuery, GetInstructorHandler, GetInstructorQuery, GetPackageCoursesHandler,
    GetPackageCoursesQuery, GetPackageHandler, GetPackageQuery, ListCoursesHandler, ListCoursesQuery,
    ListInstructorsHandler, ListPackagesHandler, ListPackagesQuery,
};
use crate::domain::catalog::{CatalogError, Course, Instructor, Package};
use crate::domain::foundation::{EntityId, EntityRepository};

use super::dto::{CatalogParams, CourseResponse, InstructorResponse, PackageResponse};

/// Read-only catalog collections.
#[derive(Clone)]
pub struct CatalogAppState {
    pub courses: Arc<dyn EntityRepository<Course>>,
    pub packages: Arc<dyn EntityRepository<Package>>,
    pub instructors: Arc<dyn EntityRepository<Instructor>>,
}

impl CatalogAppState {
    pub fn list_courses_handler(&self) -> ListCoursesHandler {
        ListCoursesHandler::new(self.courses.clone())
    }

    pub fn get_course_handler(&self) -> GetCourseHandler {
        GetCourseHandler::new(self.courses.clone())
    }

    pub fn list_packages_handler(&self) -> ListPackagesHandler {
        ListPackagesHandler::new(self.packages.clone())
    }

    pub fn get_package_handler(&self) -> GetPackageHandler {
        GetPackageHandler::new(self.packages.clone())
    }

    pub fn get_package_courses_handler(&self) -> GetPackageCoursesHandler {
        GetPackageCoursesHandler::new(self.packages.clone(), self.courses.clone())
    }

    pub fn list_instructors_handler(&self) -> ListInstructorsHandler {
        ListInstructorsHandler::new(self.instructors.clone())
    }

    pub fn get_instructor_handler(&self) -> GetInstructorHandler {
        GetInstructorHandler::new(self.instructors.clone())
    }
}

impl IntoApiError for CatalogError {
    fn into_api_error(self, failure: &'static str) -> ApiError {
        match self {
            CatalogError::CourseNotFound(_)
            | CatalogError::PackageNotFound(_)
            | CatalogError::InstructorNotFound(_) => ApiError::not_found(self.message()),
            CatalogError::Infrastructure(cause) => ApiError::internal(failure, cause),
        }
    }
}

/// GET /api/courses - List courses, filtered by `search` or `category`
pub async fn list_courses(
    State(state): State<CatalogAppState>,
    Query(params): Query<CatalogParams>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let query = ListCoursesQuery {
        filter: params.filter(),
    };
    let courses = state
        .list_courses_handler()
        .handle(query)
        .await
        .or_fail("Failed to fetch courses")?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// GET /api/courses/:id
pub async fn get_course(
    State(state): State<CatalogAppState>,
    Path(course_id): Path<EntityId>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = state
        .get_course_handler()
        .handle(GetCourseQuery { course_id })
        .await
        .or_fail("Failed to fetch course")?;
    Ok(Json(course.into()))
}

/// GET /api/packages - List packages, filtered by `search` or `category`
pub async fn list_packages(
    State(state): State<CatalogAppState>,
    Query(params): Query<CatalogParams>,
) -> Result<Json<Vec<PackageResponse>>, ApiError> {
    let query = ListPackagesQuery {
        filter: params.filter(),
    };
    let packages = state
        .list_packages_handler()
        .handle(query)
        .await
        .or_fail("Failed to fetch packages")?;
    Ok(Json(packages.into_iter().map(PackageResponse::from).collect()))
}

/// GET /api/packages/:id
pub async fn get_package(
    State(state): State<CatalogAppState>,
    Path(package_id): Path<EntityId>,
) -> Result<Json<PackageResponse>, ApiError> {
    let package = state
        .get_package_handler()
        .handle(GetPackageQuery { package_id })
        .await
        .or_fail("Failed to fetch package")?;
    Ok(Json(package.into()))
}

/// GET /api/packages/:id/courses - Courses bundled in a package
pub async fn get_package_courses(
    State(state): State<CatalogAppState>,
    Path(package_id): Path<EntityId>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = state
        .get_package_courses_handler()
        .handle(GetPackageCoursesQuery { package_id })
        .await
        .or_fail("Failed to fetch package courses")?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// GET /api/instructors
pub async fn list_instructors(
    State(state): State<CatalogAppState>,
) -> Result<Json<Vec<InstructorResponse>>, ApiError> {
    let instructors = state
        .list_instructors_handler()
        .handle()
        .await
        .or_fail("Failed to fetch instructors")?;
    Ok(Json(instructors.into_iter().map(InstructorResponse::from).collect()))
}

/// GET /api/instructors/:id
pub async fn get_instructor(
    State(state): State<CatalogAppState>,
    Path(instructor_id): Path<EntityId>,
) -> Result<Json<InstructorResponse>, ApiError> {
    let instructor = state
        .get_instructor_handler()
        .handle(GetInstructorQuery { instructor_id })
        .await
        .or_fail("Failed to fetch instructor")?;
    Ok(Json(instructor.into()))
}
