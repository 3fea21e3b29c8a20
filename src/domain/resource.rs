//! The uniform record shape shared by all four resources.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record kind with an isolated collection and a stable string identifier.
///
/// Users, cars, products and orders all follow the same lifecycle: a record
/// is built from a creation payload plus a server-assigned id, partially
/// updated by shallow-merging a patch, and addressed by its id. Implementing
/// this trait is all a type needs to be served by the generic repository and
/// HTTP handlers.
///
/// # Server-owned fields
///
/// [`apply_patch`](Resource::apply_patch) must never overwrite the id.
/// Resources with other server-owned fields (orders preserve `created_at`)
/// simply leave them out of their patch type.
pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    /// Payload accepted when creating a record. All client-settable fields.
    type Create: DeserializeOwned + Send + 'static;

    /// Payload accepted when updating a record. Every field optional;
    /// absent fields leave the stored value unchanged.
    type Patch: DeserializeOwned + Send + 'static;

    /// Singular display name used in API messages ("Car not found").
    const NAME: &'static str;

    fn id(&self) -> &str;

    /// Builds a full record from a creation payload and a server-assigned id.
    fn from_create(id: String, input: Self::Create) -> Self;

    /// Shallow-merges the patch over this record.
    fn apply_patch(&mut self, patch: Self::Patch);
}
