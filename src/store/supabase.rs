use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use super::{NameStore, COLLECTIONS_TABLE, NAMES_TABLE};
use crate::config::{http_client, StoreConfig};
use crate::error::{Error, Result};
use crate::models::{Collection, NewCollection, NewSavedName, SavedName};
use crate::postgrest::PostgrestClient;

/// [`NameStore`] backed by a Supabase project's REST endpoint
pub struct SupabaseStore {
    names: PostgrestClient,
    collections: PostgrestClient,
}

impl SupabaseStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let http = http_client(config.request_timeout)?;
        let base = config.base_url();
        let token = config.access_token.as_deref().unwrap_or(&config.anon_key);

        info!(url = %base, "connecting to table store");

        Ok(Self {
            names: PostgrestClient::new(
                &base,
                &config.anon_key,
                token,
                NAMES_TABLE,
                http.clone(),
            ),
            collections: PostgrestClient::new(
                &base,
                &config.anon_key,
                token,
                COLLECTIONS_TABLE,
                http,
            ),
        })
    }
}

fn single<T>(mut rows: Vec<T>, table: &str) -> Result<T> {
    if rows.is_empty() {
        return Err(Error::database(format!("insert into {} returned no row", table)));
    }
    Ok(rows.swap_remove(0))
}

#[async_trait]
impl NameStore for SupabaseStore {
    async fn insert_saved_name(&self, row: &NewSavedName) -> Result<SavedName> {
        let rows = self.names.insert([row]).execute::<SavedName>().await?;
        let saved = single(rows, NAMES_TABLE)?;
        debug!(id = %saved.id, name = %saved.name, "saved name stored");
        Ok(saved)
    }

    async fn list_saved_names(
        &self,
        user_id: &str,
        collection_id: Option<&str>,
    ) -> Result<Vec<SavedName>> {
        let mut query = self.names.select("*");
        query.eq("user_id", user_id).order("created_at", false);
        if let Some(collection_id) = collection_id {
            query.eq("collection_id", collection_id);
        }
        query.execute().await
    }

    async fn set_favorite(&self, id: &str, is_favorite: bool) -> Result<()> {
        self.names
            .update(json!({ "is_favorite": is_favorite }))
            .eq("id", id)
            .execute_no_return()
            .await
    }

    async fn delete_saved_name(&self, id: &str) -> Result<()> {
        self.names.delete().eq("id", id).execute_no_return().await
    }

    async fn insert_collection(&self, row: &NewCollection) -> Result<Collection> {
        let rows = self.collections.insert([row]).execute::<Collection>().await?;
        single(rows, COLLECTIONS_TABLE)
    }

    async fn list_collections(&self, user_id: &str) -> Result<Vec<Collection>> {
        self.collections
            .select("*")
            .eq("user_id", user_id)
            .order("created_at", false)
            .execute()
            .await
    }

    async fn delete_collection(&self, id: &str) -> Result<()> {
        self.names
            .update(json!({ "collection_id": null }))
            .eq("collection_id", id)
            .execute_no_return()
            .await?;
        self.collections.delete().eq("id", id).execute_no_return().await
    }

    async fn ping(&self) -> Result<usize> {
        let rows = self
            .names
            .select("*")
            .limit(1)
            .execute::<serde_json::Value>()
            .await?;
        Ok(rows.len())
    }
}
