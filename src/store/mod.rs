//! Persistence gateway for saved names and collections

mod memory;
mod supabase;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Collection, NewCollection, NewSavedName, SavedName};

pub use memory::InMemoryStore;
pub use supabase::SupabaseStore;

pub const NAMES_TABLE: &str = "name_generations";
pub const COLLECTIONS_TABLE: &str = "collections";

/// Operations the application performs against the hosted table store.
///
/// Implementations never retry; a failed call is reported once.
#[async_trait]
pub trait NameStore: Send + Sync {
    /// Insert one saved name and return the stored row
    async fn insert_saved_name(&self, row: &NewSavedName) -> Result<SavedName>;

    /// Names owned by `user_id`, newest first, optionally only one collection's
    async fn list_saved_names(
        &self,
        user_id: &str,
        collection_id: Option<&str>,
    ) -> Result<Vec<SavedName>>;

    async fn set_favorite(&self, id: &str, is_favorite: bool) -> Result<()>;

    async fn delete_saved_name(&self, id: &str) -> Result<()>;

    /// Insert one collection and return the stored row
    async fn insert_collection(&self, row: &NewCollection) -> Result<Collection>;

    /// Collections owned by `user_id`, newest first
    async fn list_collections(&self, user_id: &str) -> Result<Vec<Collection>>;

    /// Detach member names (`collection_id` set to null), then delete the
    /// collection. Names are never deleted along with their collection.
    async fn delete_collection(&self, id: &str) -> Result<()>;

    /// Read at most one row of `name_generations`; returns how many came back
    async fn ping(&self) -> Result<usize>;
}
