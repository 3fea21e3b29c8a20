//! Repository-level tests for order-specific behavior: creation defaults
//! and the server-owned `created_at` field.

use chrono::Utc;
use shop_api::domain::entities::{NewOrder, Order, OrderItem, OrderPatch, OrderStatus};
use shop_api::domain::repository::Repository;
use shop_api::infrastructure::persistence::{MemoryRepository, seed};

fn seeded() -> MemoryRepository<Order> {
    MemoryRepository::with_seed(seed::orders())
}

#[tokio::test]
async fn test_create_assigns_created_at() {
    let repo = seeded();
    let before = Utc::now();

    let order = repo
        .create(NewOrder {
            user_id: "1".to_string(),
            items: vec![OrderItem {
                product_id: "3".to_string(),
                quantity: 1,
                price: 450.0,
            }],
            total: 450.0,
            status: OrderStatus::Pending,
        })
        .await
        .unwrap();

    assert_eq!(order.id, "4");
    assert!(order.created_at >= before);
    assert!(order.created_at <= Utc::now());
}

#[tokio::test]
async fn test_update_status_preserves_created_at() {
    let repo = seeded();
    let original = repo.find_by_id("1").await.unwrap().unwrap();

    let updated = repo
        .update(
            "1",
            OrderPatch {
                status: Some(OrderStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Completed);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.items, original.items);
    assert_eq!(updated.user_id, original.user_id);
}

#[tokio::test]
async fn test_update_items_and_total_together() {
    let repo = seeded();

    let items = vec![
        OrderItem {
            product_id: "1".to_string(),
            quantity: 1,
            price: 3500.0,
        },
        OrderItem {
            product_id: "2".to_string(),
            quantity: 2,
            price: 150.0,
        },
    ];

    let updated = repo
        .update(
            "3",
            OrderPatch {
                items: Some(items.clone()),
                total: Some(3800.0),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.items, items);
    assert_eq!(updated.total, 3800.0);
    assert_eq!(updated.status, OrderStatus::Processing);
}

#[tokio::test]
async fn test_user_reference_is_not_validated() {
    let repo = seeded();

    // There is no user "42"; orders store the reference verbatim.
    let order = repo
        .create(NewOrder {
            user_id: "42".to_string(),
            items: Vec::new(),
            total: 0.0,
            status: OrderStatus::Pending,
        })
        .await
        .unwrap();

    assert_eq!(order.user_id, "42");
}
