//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum REST API
//! - `memory` - In-memory repositories and the sample catalog

pub mod http;
pub mod memory;

pub use memory::InMemoryStore;
