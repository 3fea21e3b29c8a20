//! HTTP request handlers.
//!
//! The five CRUD handlers in [`resources`] are generic over
//! [`crate::state::Stored`] and are instantiated per resource type by the
//! router.

pub mod health;
pub mod resources;

pub use health::health_handler;
pub use resources::{
    DeletedResponse, create_handler, delete_handler, get_handler, list_handler, update_handler,
};
