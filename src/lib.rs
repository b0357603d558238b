//! SkillWave - Course catalog API for an online education platform
//!
//! Serves courses, packages, and instructors from an in-memory catalog and
//! records newsletter signups, enrollments, user registrations, and contact
//! form submissions over a JSON REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
