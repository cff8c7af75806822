//! brandsmith
//!
//! Generates candidate brand names for a product description, each bundled
//! with a `.com` guess, a placeholder logo, a slogan and a color palette, and
//! optionally a story written by a chat-completion API. Saved names and
//! collections live in a Supabase project; recent generations stay on disk.
//!
//! ```
//! use brandsmith::prelude::*;
//!
//! let mut rng = StdRandom::seeded(7);
//! let kits = KitAssembler::new().draft("AI tool for daily habit tracking", &mut rng);
//! assert_eq!(kits.len(), 5);
//! assert!(kits.iter().all(|kit| kit.domain.ends_with(".com")));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod generator;
pub mod history;
pub mod identity;
pub mod listing;
pub mod models;
pub mod narrative;
pub mod postgrest;
pub mod random;
pub mod share;
pub mod store;
pub mod studio;

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::{AppOptions, NarrativeConfig, StoreConfig};
    pub use crate::error::Error;
    pub use crate::generator::KitAssembler;
    pub use crate::identity::{CurrentUser, Session};
    pub use crate::listing::{NameQuery, ResultFavorites};
    pub use crate::models::{BrandingKit, NameFilter, NameSort, SavedName};
    pub use crate::random::{RandomSource, ScriptedRandom, StdRandom};
    pub use crate::store::{InMemoryStore, NameStore, SupabaseStore};
    pub use crate::studio::{BrandStudio, GenerationOutcome, Notice};
}
