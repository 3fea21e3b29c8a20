//! Generic repository trait for resource data access.

use crate::domain::resource::Resource;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for one resource collection.
///
/// Provides the five CRUD operations shared by every resource. "Not found"
/// is signalled with a sentinel (`Ok(None)` / `Ok(false)`), never an error;
/// the `Result` wrapper exists so a persistent implementation can surface
/// I/O failures without changing the contract.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryRepository`] - in-memory
///   implementation, one instance per resource type
///
/// # Examples
///
/// See integration tests: `tests/repository_memory.rs`
#[async_trait]
pub trait Repository<T: Resource>: Send + Sync {
    /// Returns the full collection in insertion order. Always succeeds.
    async fn list(&self) -> Result<Vec<T>, AppError>;

    /// Finds the first record whose id equals `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, AppError>;

    /// Creates a new record with a server-assigned id and appends it to the
    /// collection. Returns the stored record.
    async fn create(&self, input: T::Create) -> Result<T, AppError>;

    /// Shallow-merges `patch` over the record with the given id and writes
    /// it back in place. The id (and any other server-owned field) is
    /// preserved regardless of the payload.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` with the updated record if found
    /// - `Ok(None)` if no record matches `id`
    async fn update(&self, id: &str, patch: T::Patch) -> Result<Option<T>, AppError>;

    /// Removes the record with the given id from the collection.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if not found.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
