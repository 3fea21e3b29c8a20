#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use shop_api::infrastructure::persistence::{MemoryRepository, seed};
use shop_api::routes::router;
use shop_api::state::AppState;

/// Builds application state with freshly seeded collections.
///
/// Every test gets its own state, so tests never observe each other's
/// mutations.
pub fn create_test_state() -> AppState {
    AppState {
        users: Arc::new(MemoryRepository::with_seed(seed::users())),
        cars: Arc::new(MemoryRepository::with_seed(seed::cars())),
        products: Arc::new(MemoryRepository::with_seed(seed::products())),
        orders: Arc::new(MemoryRepository::with_seed(seed::orders())),
    }
}

/// Builds a test server running the full application router.
pub fn create_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}
