mod common;

use serde_json::json;

#[tokio::test]
async fn test_list_products_returns_seed() {
    let server = common::create_server();

    let response = server.get("/api/products").await;

    response.assert_status_ok();

    let products = response.json::<serde_json::Value>();
    assert_eq!(products.as_array().unwrap().len(), 3);
    assert_eq!(products[1]["name"], "Mouse");
    assert_eq!(products[1]["stock"], 50);
}

#[tokio::test]
async fn test_get_product_not_found() {
    let server = common::create_server();

    let response = server.get("/api/products/999").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Product not found" })
    );
}

#[tokio::test]
async fn test_create_product() {
    let server = common::create_server();

    let response = server
        .post("/api/products")
        .json(&json!({
            "name": "Monitor",
            "description": "Monitor LG 27\"",
            "price": 1200.0,
            "stock": 8,
            "category": "Electronics",
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let product = response.json::<serde_json::Value>();
    assert_eq!(product["id"], "4");
    assert_eq!(product["name"], "Monitor");
    assert_eq!(product["stock"], 8);
}

#[tokio::test]
async fn test_update_product_stock() {
    let server = common::create_server();

    let response = server
        .put("/api/products/1")
        .json(&json!({ "stock": 9 }))
        .await;

    response.assert_status_ok();

    let product = response.json::<serde_json::Value>();
    assert_eq!(product["id"], "1");
    assert_eq!(product["stock"], 9);
    assert_eq!(product["price"], 3500.0);
    assert_eq!(product["description"], "Notebook Dell Inspiron");
}

#[tokio::test]
async fn test_delete_product_then_list_shrinks() {
    let server = common::create_server();

    let before = server.get("/api/products").await.json::<serde_json::Value>();
    let before = before.as_array().unwrap().len();

    server.delete("/api/products/3").await.assert_status_ok();

    let after = server.get("/api/products").await.json::<serde_json::Value>();
    assert_eq!(after.as_array().unwrap().len(), before - 1);
}
