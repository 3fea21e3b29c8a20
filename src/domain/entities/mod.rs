//! Core domain entities representing the business data model.
//!
//! This module contains the record types served by the API. Entities are
//! plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - An account holder
//! - [`Car`] - A car listing
//! - [`Product`] - A catalog product
//! - [`Order`] - A purchase order referencing a user and products
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation
//! and partial update:
//! - `NewUser`, `NewCar`, `NewProduct`, `NewOrder` - For creating new records
//! - `UserPatch`, `CarPatch`, `ProductPatch`, `OrderPatch` - For partial updates
//!
//! Each entity implements [`crate::domain::Resource`], which is what lets
//! the repository and the HTTP handlers stay generic over all four kinds.
//!
//! All entities include unit tests demonstrating their construction and
//! patch semantics.

pub mod car;
pub mod order;
pub mod product;
pub mod user;

pub use car::{Car, CarPatch, NewCar};
pub use order::{NewOrder, Order, OrderItem, OrderPatch, OrderStatus};
pub use product::{NewProduct, Product, ProductPatch};
pub use user::{NewUser, User, UserPatch};
