//! # Shop API
//!
//! A minimal REST API exposing users, cars, products and orders, backed by
//! process-local in-memory collections.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, the [`domain::Resource`]
//!   record shape and the generic repository trait
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository and
//!   seed data
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! All four resources share one generic CRUD component: the router
//! instantiates the same five handlers per resource type, so per-resource
//! code is limited to the entity definitions and seed data.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional - defaults to 0.0.0.0:3000
//! export LISTEN="0.0.0.0:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.
//!
//! ## State
//!
//! Collections are seeded with three records each at startup and live only
//! for the lifetime of the process. There is no persistence layer.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{Car, Order, OrderStatus, Product, User};
    pub use crate::domain::{Repository, Resource};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryRepository;
    pub use crate::state::AppState;
}
