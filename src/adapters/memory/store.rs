//! The full set of in-memory collections backing the API.

use std::sync::Arc;

use crate::domain::catalog::{Course, Instructor, Package};
use crate::domain::foundation::Timestamp;
use crate::domain::learner::{Enrollment, User};
use crate::domain::outreach::Newsletter;

use super::collection::InMemoryCollection;
use super::seed;

/// One collection per entity kind, shared behind `Arc`s so the HTTP layer can
/// hand each to the port it needs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub courses: Arc<InMemoryCollection<Course>>,
    pub packages: Arc<InMemoryCollection<Package>>,
    pub instructors: Arc<InMemoryCollection<Instructor>>,
    pub users: Arc<InMemoryCollection<User>>,
    pub enrollments: Arc<InMemoryCollection<Enrollment>>,
    pub newsletters: Arc<InMemoryCollection<Newsletter>>,
}

impl InMemoryStore {
    /// Creates a store with every collection empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store loaded with the sample catalog.
    ///
    /// Users, enrollments, and newsletter subscriptions start empty.
    pub fn seeded() -> Self {
        let at = Timestamp::now();
        let store = Self {
            courses: Arc::new(InMemoryCollection::with_records(seed::courses(at))),
            packages: Arc::new(InMemoryCollection::with_records(seed::packages(at))),
            instructors: Arc::new(InMemoryCollection::with_records(seed::instructors(at))),
            ..Self::default()
        };
        tracing::info!("in-memory store seeded with sample catalog");
        store
    }
}
