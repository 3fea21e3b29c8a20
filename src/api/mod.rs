//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into repository operations and
//! formats responses according to the API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware
//! - [`routes`] - Per-resource route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
