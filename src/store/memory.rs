use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::NameStore;
use crate::error::{Error, Result};
use crate::models::{Collection, NewCollection, NewSavedName, SavedName};

#[derive(Debug, Default)]
struct Tables {
    names: Vec<SavedName>,
    collections: Vec<Collection>,
}

/// Process-local [`NameStore`], used offline and in tests.
///
/// Counts every call it receives and can be switched into a failing mode
/// that answers like an unreachable backend.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    calls: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, failed ones included
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every following call fail with a 503
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn begin(&self) -> Result<MutexGuard<'_, Tables>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(Error::Api {
                status: 503,
                message: "store unavailable".to_string(),
            });
        }
        self.tables
            .lock()
            .map_err(|_| Error::database("in-memory store lock poisoned"))
    }
}

/// Newest first; rows created in the same instant keep reverse insertion order
fn newest_first<T>(mut rows: Vec<T>, key: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    rows.reverse();
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    rows
}

#[async_trait]
impl NameStore for InMemoryStore {
    async fn insert_saved_name(&self, row: &NewSavedName) -> Result<SavedName> {
        let mut tables = self.begin()?;
        let saved = SavedName {
            id: Uuid::new_v4().to_string(),
            user_id: row.user_id.clone(),
            name: row.name.clone(),
            description: row.description.clone(),
            created_at: Utc::now(),
            is_favorite: row.is_favorite,
            collection_id: row.collection_id.clone(),
        };
        tables.names.push(saved.clone());
        Ok(saved)
    }

    async fn list_saved_names(
        &self,
        user_id: &str,
        collection_id: Option<&str>,
    ) -> Result<Vec<SavedName>> {
        let tables = self.begin()?;
        let rows: Vec<SavedName> = tables
            .names
            .iter()
            .filter(|n| n.user_id == user_id)
            .filter(|n| collection_id.map_or(true, |c| n.collection_id.as_deref() == Some(c)))
            .cloned()
            .collect();
        Ok(newest_first(rows, |n| n.created_at))
    }

    async fn set_favorite(&self, id: &str, is_favorite: bool) -> Result<()> {
        let mut tables = self.begin()?;
        for name in tables.names.iter_mut().filter(|n| n.id == id) {
            name.is_favorite = is_favorite;
        }
        Ok(())
    }

    async fn delete_saved_name(&self, id: &str) -> Result<()> {
        let mut tables = self.begin()?;
        tables.names.retain(|n| n.id != id);
        Ok(())
    }

    async fn insert_collection(&self, row: &NewCollection) -> Result<Collection> {
        let mut tables = self.begin()?;
        let collection = Collection {
            id: Uuid::new_v4().to_string(),
            user_id: row.user_id.clone(),
            name: row.name.clone(),
            description: Some(row.description.clone()),
            created_at: Utc::now(),
            color: row.color.clone(),
        };
        tables.collections.push(collection.clone());
        Ok(collection)
    }

    async fn list_collections(&self, user_id: &str) -> Result<Vec<Collection>> {
        let tables = self.begin()?;
        let rows: Vec<Collection> = tables
            .collections
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |c| c.created_at))
    }

    async fn delete_collection(&self, id: &str) -> Result<()> {
        let mut tables = self.begin()?;
        for name in tables.names.iter_mut() {
            if name.collection_id.as_deref() == Some(id) {
                name.collection_id = None;
            }
        }
        tables.collections.retain(|c| c.id != id);
        Ok(())
    }

    async fn ping(&self) -> Result<usize> {
        let tables = self.begin()?;
        Ok(tables.names.len().min(1))
    }
}
