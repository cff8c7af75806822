//! Table operations through the PostgREST API

mod query;

use reqwest::Client;
use serde::Serialize;

pub use query::*;

/// Client for one table of the hosted store
pub struct PostgrestClient {
    target: RestTarget,
}

impl PostgrestClient {
    /// Create a client for `table`.
    ///
    /// `token` is sent as the bearer token; pass the anon key when there is no
    /// user session.
    pub fn new(url: &str, key: &str, token: &str, table: &str, client: Client) -> Self {
        Self {
            target: RestTarget {
                url: format!("{}/rest/v1/{}", url.trim_end_matches('/'), table),
                key: key.to_string(),
                token: token.to_string(),
                client,
            },
        }
    }

    /// Select specific columns from the table
    pub fn select(&self, columns: &str) -> SelectBuilder {
        SelectBuilder::new(self.target.clone(), columns)
    }

    /// Insert rows into the table
    pub fn insert<T: Serialize>(&self, values: T) -> InsertBuilder<T> {
        InsertBuilder::new(self.target.clone(), values)
    }

    /// Update rows matching the builder's filters
    pub fn update<T: Serialize>(&self, values: T) -> UpdateBuilder<T> {
        UpdateBuilder::new(self.target.clone(), values)
    }

    /// Delete rows matching the builder's filters
    pub fn delete(&self) -> DeleteBuilder {
        DeleteBuilder::new(self.target.clone())
    }
}
