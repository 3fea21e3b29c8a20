mod common;

#[tokio::test]
async fn test_health_endpoint() {
    let server = common::create_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "OK");
    assert_eq!(json["message"], "API is running");
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let server = common::create_server();

    let response = server.get("/api/unknown").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Route not found");
    assert_eq!(json["error"]["status"], 404);
}

#[tokio::test]
async fn test_root_is_not_a_route() {
    let server = common::create_server();

    let response = server.get("/").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["status"], 404);
}
