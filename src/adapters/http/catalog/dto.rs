//! Data Transfer Objects for catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{CatalogFilter, Course, Instructor, Package};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query string accepted by the course and package listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogParams {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl CatalogParams {
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter::from_params(self.search.as_deref(), self.category.as_deref())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub lessons: u32,
    pub rating: String,
    pub category: String,
    pub instructor_id: Option<String>,
    pub created_at: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.into_inner(),
            title: course.title,
            description: course.description,
            thumbnail: course.thumbnail,
            lessons: course.lessons,
            rating: course.rating,
            category: course.category,
            instructor_id: course.instructor_id.map(|id| id.into_inner()),
            created_at: course.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub original_price: Option<String>,
    pub discounted_price: Option<String>,
    pub category: String,
    pub rating: String,
    pub features: Vec<String>,
    pub course_ids: Vec<String>,
    pub created_at: String,
}

impl From<Package> for PackageResponse {
    fn from(package: Package) -> Self {
        Self {
            id: package.id.into_inner(),
            title: package.title,
            description: package.description,
            image: package.image,
            original_price: package.original_price,
            discounted_price: package.discounted_price,
            category: package.category,
            rating: package.rating,
            features: package.features,
            course_ids: package.course_ids.into_iter().map(|id| id.into_inner()).collect(),
            created_at: package.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorResponse {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub rating: String,
    pub expertise: Vec<String>,
    pub created_at: String,
}

impl From<Instructor> for InstructorResponse {
    fn from(instructor: Instructor) -> Self {
        Self {
            id: instructor.id.into_inner(),
            name: instructor.name,
            title: instructor.title,
            bio: instructor.bio,
            avatar: instructor.avatar,
            rating: instructor.rating,
            expertise: instructor.expertise,
            created_at: instructor.created_at.to_rfc3339(),
        }
    }
}
