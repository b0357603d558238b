//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Query handlers read the catalog; command handlers record learner and
//! outreach writes.

pub mod handlers;
