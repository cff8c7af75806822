//! Query builders for PostgrestClient

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::Error;
use crate::fetch::{Fetch, FetchBuilder};

const CLIENT_INFO: &str = concat!("brandsmith/", env!("CARGO_PKG_VERSION"));

/// Endpoint and credentials shared by every builder
#[derive(Clone)]
pub struct RestTarget {
    pub(crate) url: String,
    pub(crate) key: String,
    pub(crate) token: String,
    pub(crate) client: Client,
}

impl RestTarget {
    fn authorize<'a>(&self, fetch: FetchBuilder<'a>) -> FetchBuilder<'a> {
        fetch
            .header("apikey", &self.key)
            .header("X-Client-Info", CLIENT_INFO)
            .bearer_auth(&self.token)
    }
}

/// What PostgREST should send back after a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOption {
    /// Return the affected rows
    Representation,

    /// Return no body
    Minimal,
}

impl ReturnOption {
    fn prefer_header(&self) -> &'static str {
        match self {
            ReturnOption::Representation => "return=representation",
            ReturnOption::Minimal => "return=minimal",
        }
    }
}

/// Ordered query parameters: filters, `order`, `limit`
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    params: Vec<(String, String)>,
}

impl QueryBuilder {
    /// Create a new QueryBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing an earlier one with the same key
    pub fn set_param(&mut self, key: &str, value: &str) {
        self.params.retain(|(k, _)| k != key);
        self.params.push((key.to_string(), value.to_string()));
    }

    /// Get the query parameters
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    fn eq<T: ToString>(&mut self, column: &str, value: T) {
        self.set_param(column, &format!("eq.{}", value.to_string()));
    }
}

/// Builder for SELECT queries
pub struct SelectBuilder {
    target: RestTarget,
    query: QueryBuilder,
}

impl SelectBuilder {
    /// Create a new SelectBuilder
    pub fn new(target: RestTarget, columns: &str) -> Self {
        let mut query = QueryBuilder::new();
        query.set_param("select", columns);

        Self { target, query }
    }

    /// Filter rows where column equals a value
    pub fn eq<T: ToString>(&mut self, column: &str, value: T) -> &mut Self {
        self.query.eq(column, value);
        self
    }

    /// Limit the number of rows returned
    pub fn limit(&mut self, count: u32) -> &mut Self {
        self.query.set_param("limit", &count.to_string());
        self
    }

    /// Order the results by a column
    pub fn order(&mut self, column: &str, ascending: bool) -> &mut Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.query.set_param("order", &format!("{}.{}", column, direction));
        self
    }

    /// Query parameters collected so far
    pub fn params(&self) -> &[(String, String)] {
        self.query.params()
    }

    /// Execute the query and return the results
    pub async fn execute<T: DeserializeOwned>(&self) -> Result<Vec<T>, Error> {
        let fetch = Fetch::get(&self.target.client, &self.target.url)
            .query(self.query.params().iter().cloned());

        self.target.authorize(fetch).execute::<Vec<T>>().await
    }
}

/// Builder for INSERT queries
pub struct InsertBuilder<T: Serialize> {
    target: RestTarget,
    values: T,
}

impl<T: Serialize> InsertBuilder<T> {
    /// Create a new InsertBuilder
    pub fn new(target: RestTarget, values: T) -> Self {
        Self { target, values }
    }

    /// Execute the insert and return the inserted rows
    pub async fn execute<R: DeserializeOwned>(&self) -> Result<Vec<R>, Error> {
        let fetch = Fetch::post(&self.target.client, &self.target.url)
            .header("Prefer", ReturnOption::Representation.prefer_header())
            .json(&self.values)?;

        self.target.authorize(fetch).execute::<Vec<R>>().await
    }
}

/// Builder for UPDATE queries
pub struct UpdateBuilder<T: Serialize> {
    target: RestTarget,
    values: T,
    query: QueryBuilder,
}

impl<T: Serialize> UpdateBuilder<T> {
    /// Create a new UpdateBuilder
    pub fn new(target: RestTarget, values: T) -> Self {
        Self {
            target,
            values,
            query: QueryBuilder::new(),
        }
    }

    /// Filter rows where column equals a value
    pub fn eq<V: ToString>(&mut self, column: &str, value: V) -> &mut Self {
        self.query.eq(column, value);
        self
    }

    /// Execute the update without returning the updated rows
    pub async fn execute_no_return(&self) -> Result<(), Error> {
        if self.query.params().is_empty() {
            return Err(Error::invalid_input("refusing to update without a filter"));
        }

        let fetch = Fetch::patch(&self.target.client, &self.target.url)
            .header("Prefer", ReturnOption::Minimal.prefer_header())
            .query(self.query.params().iter().cloned())
            .json(&self.values)?;

        self.target.authorize(fetch).execute_empty().await
    }
}

/// Builder for DELETE queries
pub struct DeleteBuilder {
    target: RestTarget,
    query: QueryBuilder,
}

impl DeleteBuilder {
    /// Create a new DeleteBuilder
    pub fn new(target: RestTarget) -> Self {
        Self {
            target,
            query: QueryBuilder::new(),
        }
    }

    /// Filter rows where column equals a value
    pub fn eq<V: ToString>(&mut self, column: &str, value: V) -> &mut Self {
        self.query.eq(column, value);
        self
    }

    /// Execute the delete without returning the deleted rows
    pub async fn execute_no_return(&self) -> Result<(), Error> {
        if self.query.params().is_empty() {
            return Err(Error::invalid_input("refusing to delete without a filter"));
        }

        let fetch = Fetch::delete(&self.target.client, &self.target.url)
            .header("Prefer", ReturnOption::Minimal.prefer_header())
            .query(self.query.params().iter().cloned());

        self.target.authorize(fetch).execute_empty().await
    }
}
