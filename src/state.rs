use std::sync::Arc;

use crate::domain::entities::{Car, Order, Product, User};
use crate::domain::repository::Repository;
use crate::domain::resource::Resource;

/// Shared application state: one repository handle per resource type.
///
/// Constructed once at startup and cloned into every handler. Repositories
/// are trait objects so tests and a future persistent backend can swap
/// implementations without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn Repository<User>>,
    pub cars: Arc<dyn Repository<Car>>,
    pub products: Arc<dyn Repository<Product>>,
    pub orders: Arc<dyn Repository<Order>>,
}

impl AppState {
    /// Returns the repository serving resource type `T`.
    pub fn repo<T: Stored>(&self) -> &dyn Repository<T> {
        T::repository(self)
    }
}

/// A resource with a slot in [`AppState`].
///
/// This is what lets a single set of generic handlers serve all four
/// resources: the router picks the type, the type picks its repository.
pub trait Stored: Resource {
    fn repository(state: &AppState) -> &dyn Repository<Self>;
}

impl Stored for User {
    fn repository(state: &AppState) -> &dyn Repository<Self> {
        state.users.as_ref()
    }
}

impl Stored for Car {
    fn repository(state: &AppState) -> &dyn Repository<Self> {
        state.cars.as_ref()
    }
}

impl Stored for Product {
    fn repository(state: &AppState) -> &dyn Repository<Self> {
        state.products.as_ref()
    }
}

impl Stored for Order {
    fn repository(state: &AppState) -> &dyn Repository<Self> {
        state.orders.as_ref()
    }
}
