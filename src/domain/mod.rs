//! Domain layer containing the data model and data-access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`resource`] - The uniform record shape shared by all four resources
//! - [`repository`] - Generic data access trait definition
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The [`Repository`] trait defines a contract implemented by the
//!   infrastructure layer
//! - All four resources expose the same capability set (list, find by id,
//!   create, update, delete), so the contract is written once and
//!   parametrized by the record type

pub mod entities;
pub mod repository;
pub mod resource;

pub use repository::Repository;
pub use resource::Resource;
