//! Application controller.
//!
//! Every user-facing operation lives here. Persistence failures are turned
//! into a [`Notice`] at this layer and never retried; generation failures of
//! the narrative step never reach the caller at all.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{load_dotenv, AppOptions, NarrativeConfig, StoreConfig};
use crate::error::{Error, Result};
use crate::generator::KitAssembler;
use crate::history::GenerationHistory;
use crate::identity::{CurrentUser, Session};
use crate::listing::NameQuery;
use crate::models::{BrandingKit, Collection, Generation, NewCollection, NewSavedName, SavedName};
use crate::narrative::OpenAiNarrator;
use crate::random::RandomSource;
use crate::share::ShareLinks;
use crate::store::{NameStore, SupabaseStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Short message shown to the user after an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of a generation request
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Completed(Vec<BrandingKit>),
    /// A newer request was issued while this one ran; its kits were dropped
    /// and history was left alone.
    Superseded { ticket: u64 },
}

/// Connection check results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectionReport {
    pub rows_read: usize,
    /// `None` when signed out and no write was attempted, `Some(false)` when
    /// the read worked but the test row was rejected
    pub test_row_inserted: Option<bool>,
}

/// Numbers shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_generations: usize,
    pub saved_names: usize,
    pub favorites: usize,
}

pub struct BrandStudio {
    assembler: KitAssembler,
    store: Option<Arc<dyn NameStore>>,
    history: GenerationHistory,
    session: Session,
    share_origin: String,
    generation_delay: Duration,
    latest_ticket: AtomicU64,
}

impl BrandStudio {
    pub fn new(options: &AppOptions) -> Self {
        Self {
            assembler: KitAssembler::new(),
            store: None,
            history: GenerationHistory::new(options.history_path.clone()),
            session: Session::SignedOut,
            share_origin: options.share_origin.clone(),
            generation_delay: options.generation_delay,
            latest_ticket: AtomicU64::new(0),
        }
    }

    /// Wire everything from the environment (and `.env`).
    ///
    /// The table store is attached only when `SUPABASE_URL` and
    /// `SUPABASE_ANON_KEY` are both set; narratives only with `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        let options = AppOptions::from_env()?;
        let mut studio = Self::new(&options).with_session(Session::from_env());

        if let Some(config) = NarrativeConfig::from_env() {
            let narrator = OpenAiNarrator::new(&config)?;
            info!(model = narrator.model(), "narratives enabled");
            studio = studio.with_assembler(KitAssembler::new().with_narrator(Arc::new(narrator)));
        }

        match StoreConfig::from_env() {
            Ok(config) => Ok(studio.with_store(Arc::new(SupabaseStore::new(&config)?))),
            Err(Error::Config(reason)) => {
                debug!(%reason, "running without table store");
                Ok(studio)
            }
            Err(e) => Err(e),
        }
    }

    pub fn with_assembler(mut self, assembler: KitAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    pub fn with_store(mut self, store: Arc<dyn NameStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_generation_delay(mut self, delay: Duration) -> Self {
        self.generation_delay = delay;
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn history(&self) -> &GenerationHistory {
        &self.history
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> Result<&Arc<dyn NameStore>> {
        self.store
            .as_ref()
            .ok_or_else(|| Error::config("SUPABASE_URL and SUPABASE_ANON_KEY must be set"))
    }

    fn signed_in(&self) -> Result<(&CurrentUser, &Arc<dyn NameStore>)> {
        let user = self.session.require_user()?;
        Ok((user, self.store()?))
    }

    /// Produce five kits for `description` and record them in history.
    ///
    /// Each call takes a fresh ticket. When it finishes behind a newer call,
    /// the outcome is [`GenerationOutcome::Superseded`].
    pub async fn generate<R: RandomSource + ?Sized>(
        &self,
        description: &str,
        rng: &mut R,
    ) -> Result<GenerationOutcome> {
        let description = description.trim();
        if description.is_empty() {
            return Err(Error::invalid_input("Please describe your product or business"));
        }

        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        info!(ticket, %description, narrative = self.assembler.narrates(), "generating names");

        if !self.generation_delay.is_zero() {
            tokio::time::sleep(self.generation_delay).await;
        }

        let kits = self.assembler.assemble(description, rng).await;

        if self.latest_ticket.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "discarding superseded generation");
            return Ok(GenerationOutcome::Superseded { ticket });
        }

        if let Err(e) = self.history.record(Generation::new(description, kits.clone())) {
            warn!(error = %e, "could not record generation");
        }

        Ok(GenerationOutcome::Completed(kits))
    }

    pub fn recent_generations(&self) -> Result<Vec<Generation>> {
        self.history.load()
    }

    pub fn clear_history(&self) -> Result<()> {
        info!("clearing generation history");
        self.history.clear()
    }

    pub async fn save_name(&self, name: &str, description: &str) -> Notice {
        let (user, store) = match self.signed_in() {
            Ok(ok) => ok,
            Err(Error::NotSignedIn) => return Notice::error("Please sign in to save names"),
            Err(e) => return Notice::error(format!("Failed to save name: {}", e)),
        };

        match store.insert_saved_name(&NewSavedName::new(&user.id, name, description)).await {
            Ok(saved) => {
                info!(id = %saved.id, %name, "name saved");
                Notice::success("Name saved successfully!")
            }
            Err(e) => {
                warn!(%name, error = %e, "save failed");
                Notice::error(format!("Failed to save name: {}", e))
            }
        }
    }

    /// The user's saved names, optionally one collection's, shaped by `query`
    pub async fn saved_names(
        &self,
        query: &NameQuery,
        collection_id: Option<&str>,
    ) -> std::result::Result<Vec<SavedName>, Notice> {
        let (user, store) = self.signed_in().map_err(|e| fetch_notice("saved names", e))?;

        let rows = store
            .list_saved_names(&user.id, collection_id)
            .await
            .map_err(|e| fetch_notice("saved names", e))?;
        debug!(rows = rows.len(), "saved names fetched");
        Ok(query.apply(&rows))
    }

    /// Flip the stored favorite flag; `currently_favorite` is the flag as displayed
    pub async fn toggle_favorite(&self, id: &str, currently_favorite: bool) -> Notice {
        let store = match self.store() {
            Ok(store) => store,
            Err(_) => return Notice::error("Failed to update favorite status"),
        };

        match store.set_favorite(id, !currently_favorite).await {
            Ok(()) if currently_favorite => Notice::success("Removed from favorites"),
            Ok(()) => Notice::success("Added to favorites"),
            Err(e) => {
                warn!(%id, error = %e, "favorite update failed");
                Notice::error("Failed to update favorite status")
            }
        }
    }

    pub async fn delete_name(&self, id: &str) -> Notice {
        let store = match self.store() {
            Ok(store) => store,
            Err(_) => return Notice::error("Failed to delete name"),
        };

        match store.delete_saved_name(id).await {
            Ok(()) => Notice::success("Name deleted successfully"),
            Err(e) => {
                warn!(%id, error = %e, "delete failed");
                Notice::error("Failed to delete name")
            }
        }
    }

    pub async fn create_collection(
        &self,
        name: &str,
        description: &str,
        color: Option<&str>,
    ) -> Notice {
        let name = name.trim();
        if name.is_empty() {
            return Notice::error("Collection name is required");
        }

        let (user, store) = match self.signed_in() {
            Ok(ok) => ok,
            Err(Error::NotSignedIn) => return Notice::error("Please sign in to create collections"),
            Err(_) => return Notice::error("Failed to create collection"),
        };

        let row = NewCollection {
            user_id: user.id.clone(),
            name: name.to_string(),
            description: description.trim().to_string(),
            color: color.map(str::to_string),
        };

        match store.insert_collection(&row).await {
            Ok(collection) => {
                info!(id = %collection.id, %name, "collection created");
                Notice::success("Collection created successfully")
            }
            Err(e) => {
                warn!(%name, error = %e, "collection insert failed");
                Notice::error("Failed to create collection")
            }
        }
    }

    /// The user's collections, newest first
    pub async fn collections(&self) -> std::result::Result<Vec<Collection>, Notice> {
        let (user, store) = self.signed_in().map_err(|e| fetch_notice("collections", e))?;
        store
            .list_collections(&user.id)
            .await
            .map_err(|e| fetch_notice("collections", e))
    }

    /// Remove a collection; its names stay saved with no collection
    pub async fn delete_collection(&self, id: &str) -> Notice {
        let store = match self.store() {
            Ok(store) => store,
            Err(_) => return Notice::error("Failed to delete collection"),
        };

        match store.delete_collection(id).await {
            Ok(()) => Notice::success("Collection deleted successfully"),
            Err(e) => {
                warn!(%id, error = %e, "collection delete failed");
                Notice::error("Failed to delete collection")
            }
        }
    }

    pub fn share_name(&self, id: &str) -> std::result::Result<String, Notice> {
        self.share(|links| links.name_link(id))
    }

    pub fn share_collection(&self, id: &str) -> std::result::Result<String, Notice> {
        self.share(|links| links.collection_link(id))
    }

    fn share(
        &self,
        build: impl FnOnce(&ShareLinks) -> Result<String>,
    ) -> std::result::Result<String, Notice> {
        ShareLinks::new(&self.share_origin)
            .and_then(|links| build(&links))
            .map_err(|e| {
                warn!(origin = %self.share_origin, error = %e, "share link failed");
                Notice::error("Failed to create share link")
            })
    }

    /// Generation count from local history; saved and favorite counts when
    /// signed in (zero otherwise)
    pub async fn dashboard(&self) -> std::result::Result<DashboardStats, Notice> {
        let total_generations = self.history.load().map(|h| h.len()).unwrap_or_else(|e| {
            warn!(error = %e, "history unavailable");
            0
        });

        let mut stats = DashboardStats {
            total_generations,
            ..DashboardStats::default()
        };

        if self.session.is_signed_in() {
            let names = self.saved_names(&NameQuery::new(), None).await?;
            stats.saved_names = names.len();
            stats.favorites = names.iter().filter(|n| n.is_favorite).count();
        }

        Ok(stats)
    }

    /// Read one row, and when signed in write a test row as well.
    ///
    /// A failed read is an error. A failed write is reported in the result.
    pub async fn check_connection(&self) -> Result<ConnectionReport> {
        let store = self.store()?;
        let rows_read = store.ping().await?;

        let test_row_inserted = match self.session.user() {
            Some(user) => {
                let row = NewSavedName::new(&user.id, "Test Name", "Test Description");
                match store.insert_saved_name(&row).await {
                    Ok(_) => Some(true),
                    Err(error) => {
                        warn!(%error, "test row insert failed");
                        Some(false)
                    }
                }
            }
            None => None,
        };

        info!(rows_read, ?test_row_inserted, "table store reachable");
        Ok(ConnectionReport {
            rows_read,
            test_row_inserted,
        })
    }
}

fn fetch_notice(what: &str, error: Error) -> Notice {
    match error {
        Error::NotSignedIn => Notice::error(format!("Please sign in to view {}", what)),
        e => {
            warn!(error = %e, "fetch of {} failed", what);
            Notice::error(format!("Failed to fetch {}", what))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use crate::store::InMemoryStore;

    fn studio(dir: &tempfile::TempDir) -> BrandStudio {
        let options = AppOptions::default()
            .with_history_path(dir.path().join("history.json"))
            .with_generation_delay(Duration::ZERO);
        BrandStudio::new(&options)
    }

    #[tokio::test]
    async fn blank_description_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = studio(&dir).generate("   ", &mut ScriptedRandom::new()).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn generation_is_recorded_with_trimmed_description() {
        let dir = tempfile::tempdir().unwrap();
        let studio = studio(&dir);

        let outcome = studio
            .generate("  habit tracker  ", &mut ScriptedRandom::new())
            .await
            .unwrap();
        assert!(matches!(outcome, GenerationOutcome::Completed(ref kits) if kits.len() == 5));

        let history = studio.recent_generations().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].description, "habit tracker");
    }

    #[test]
    fn share_failure_becomes_notice() {
        let dir = tempfile::tempdir().unwrap();
        let options = AppOptions::default()
            .with_history_path(dir.path().join("history.json"))
            .with_share_origin("not an origin");
        let studio = BrandStudio::new(&options);

        let notice = studio.share_name("1").unwrap_err();
        assert_eq!(notice.message, "Failed to create share link");
    }

    #[tokio::test]
    async fn collection_name_must_not_be_blank() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(InMemoryStore::new());
        let studio = studio(&dir)
            .with_store(store.clone())
            .with_session(Session::SignedIn(CurrentUser::new("u1")));

        let notice = studio.create_collection("  ", "x", None).await;
        assert!(!notice.is_success());
        assert_eq!(store.calls(), 0);
    }
}
