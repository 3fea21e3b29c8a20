//! Data Transfer Objects for API responses.
//!
//! Request bodies deserialize directly into the entity companion types
//! (`New*` / `*Patch`) defined in [`crate::domain::entities`]; this module
//! only holds response-side DTOs.

pub mod health;
