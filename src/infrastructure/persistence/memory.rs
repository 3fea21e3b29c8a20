//! In-memory implementation of the generic repository.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repository::Repository;
use crate::domain::resource::Resource;
use crate::error::AppError;

/// In-memory repository backed by an ordered collection.
///
/// Owns one collection per instance; the collection is only ever mutated
/// through this repository, and each operation holds the lock for the full
/// scan-and-mutate, so readers never observe a half-applied update.
///
/// # Id assignment
///
/// Ids come from a monotonic per-repository counter, seeded one past the
/// largest numeric id present in the seed data. The counter never reuses a
/// number, so deleting a record and creating a new one cannot produce an id
/// collision.
pub struct MemoryRepository<T> {
    records: RwLock<Vec<T>>,
    next_id: AtomicU64,
}

impl<T: Resource> MemoryRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a repository pre-populated with `records`, in order.
    ///
    /// The id counter starts one past the largest numeric id among the seed
    /// records, so a fresh seed of ids "1".."3" hands out "4" next.
    pub fn with_seed(records: Vec<T>) -> Self {
        let max_id = records
            .iter()
            .filter_map(|r| r.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            records: RwLock::new(records),
            next_id: AtomicU64::new(max_id + 1),
        }
    }
}

impl<T: Resource> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> Repository<T> for MemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, AppError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn create(&self, input: T::Create) -> Result<T, AppError> {
        let mut records = self.records.write().await;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        let record = T::from_create(id, input);

        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, patch: T::Patch) -> Result<Option<T>, AppError> {
        let mut records = self.records.write().await;

        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };

        record.apply_patch(patch);
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut records = self.records.write().await;

        let Some(index) = records.iter().position(|r| r.id() == id) else {
            return Ok(false);
        };

        records.remove(index);
        Ok(true)
    }
}
