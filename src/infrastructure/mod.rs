//! Infrastructure layer implementing the domain data-access contracts.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository and startup seed data

pub mod persistence;
