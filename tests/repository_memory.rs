//! Repository-level tests for the generic in-memory implementation,
//! exercised through the `Car` resource.

use shop_api::domain::entities::{Car, CarPatch, NewCar};
use shop_api::domain::repository::Repository;
use shop_api::infrastructure::persistence::{MemoryRepository, seed};

fn seeded() -> MemoryRepository<Car> {
    MemoryRepository::with_seed(seed::cars())
}

fn altima() -> NewCar {
    NewCar {
        brand: "Nissan".to_string(),
        model: "Altima".to_string(),
        year: 2022,
        color: "Blue".to_string(),
        price: 95000.0,
    }
}

#[tokio::test]
async fn test_create_then_find_by_id_round_trips() {
    let repo = seeded();

    let created = repo.create(altima()).await.unwrap();
    assert_eq!(created.id, "4");

    let fetched = repo.find_by_id("4").await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let repo = seeded();
    repo.create(altima()).await.unwrap();

    let cars = repo.list().await.unwrap();
    let ids: Vec<&str> = cars.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
}

#[tokio::test]
async fn test_delete_removes_exactly_one_record() {
    let repo = seeded();

    assert!(repo.delete("1").await.unwrap());

    assert!(repo.find_by_id("1").await.unwrap().is_none());
    assert_eq!(repo.list().await.unwrap().len(), 2);

    // Deleting again is a sentinel, not an error.
    assert!(!repo.delete("1").await.unwrap());
}

#[tokio::test]
async fn test_ids_stay_unique_after_delete() {
    let repo = seeded();

    repo.delete("1").await.unwrap();
    let created = repo.create(altima()).await.unwrap();

    // The counter keeps advancing; a length-derived id would collide with
    // the surviving record "3" here.
    assert_eq!(created.id, "4");

    let cars = repo.list().await.unwrap();
    let mut ids: Vec<&str> = cars.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), cars.len());
}

#[tokio::test]
async fn test_update_merges_and_preserves_id() {
    let repo = seeded();

    let updated = repo
        .update(
            "2",
            CarPatch {
                price: Some(90000.0),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, "2");
    assert_eq!(updated.brand, "Honda");
    assert_eq!(updated.price, 90000.0);

    // The write is visible to subsequent reads.
    let fetched = repo.find_by_id("2").await.unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_id_leaves_collection_unchanged() {
    let repo = seeded();
    let before = repo.list().await.unwrap();

    let result = repo.update("999", CarPatch::default()).await.unwrap();

    assert!(result.is_none());
    assert_eq!(repo.list().await.unwrap(), before);
}
