//! In-memory persistence.
//!
//! One [`MemoryRepository`] instance is constructed per resource type at
//! startup, seeded via [`seed`], and injected into the handlers through
//! [`crate::state::AppState`]. All state lives for the lifetime of the
//! process; there is no durable storage.

pub mod memory;
pub mod seed;

pub use memory::MemoryRepository;
