//! In-memory storage adapter.
//!
//! Process-lifetime collections; nothing survives a restart.

mod collection;
mod seed;
mod store;

pub use collection::{InMemoryCollection, UniqueConstraint};
pub use store::InMemoryStore;
