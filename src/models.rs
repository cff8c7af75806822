//! Records produced by the generator and stored in the hosted table store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Visual treatment of a placeholder logo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoStyle {
    Minimal,
    Geometric,
    Abstract,
    LetterBased,
    SymbolBased,
}

impl LogoStyle {
    /// Every style, in catalog order
    pub const ALL: [LogoStyle; 5] = [
        LogoStyle::Minimal,
        LogoStyle::Geometric,
        LogoStyle::Abstract,
        LogoStyle::LetterBased,
        LogoStyle::SymbolBased,
    ];

    /// Convert the style to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LogoStyle::Minimal => "minimal",
            LogoStyle::Geometric => "geometric",
            LogoStyle::Abstract => "abstract",
            LogoStyle::LetterBased => "letter-based",
            LogoStyle::SymbolBased => "symbol-based",
        }
    }
}

impl fmt::Display for LogoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placeholder logo derived from a generated name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    /// One or two uppercase characters
    pub text: String,
    pub style: LogoStyle,
    pub icon: String,
}

/// Colors of one kit. Always copied whole from a single catalog palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// Story part of a generated narrative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandStory {
    pub story: String,
    pub meaning: String,
    #[serde(default)]
    pub cultural_significance: Vec<String>,
    /// Pronunciation keyed by language name
    #[serde(default)]
    pub pronunciation: BTreeMap<String, String>,
}

/// Personality part of a generated narrative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPersonality {
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub marketing_angles: Vec<String>,
    #[serde(default)]
    pub visual_identity: Vec<String>,
}

/// Story and personality from one narrative response.
///
/// Kept as one value so a kit carries both or neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub brand_story: BrandStory,
    pub brand_personality: BrandPersonality,
}

/// One generated candidate: name, domain guess, logo, slogan, colors and an
/// optional narrative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingKit {
    pub name: String,
    pub domain: String,
    pub domain_available: bool,
    pub logo: Logo,
    pub slogan: String,
    pub colors: ColorPalette,
    #[serde(flatten)]
    pub narrative: Option<Narrative>,
}

impl BrandingKit {
    pub fn brand_story(&self) -> Option<&BrandStory> {
        self.narrative.as_ref().map(|n| &n.brand_story)
    }

    pub fn brand_personality(&self) -> Option<&BrandPersonality> {
        self.narrative.as_ref().map(|n| &n.brand_personality)
    }
}

/// Entry of the local generation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    /// Milliseconds since the Unix epoch at creation
    pub id: i64,
    pub description: String,
    pub results: Vec<BrandingKit>,
    pub timestamp: DateTime<Utc>,
}

impl Generation {
    pub fn new(description: &str, results: Vec<BrandingKit>) -> Self {
        let timestamp = Utc::now();
        Self {
            id: timestamp.timestamp_millis(),
            description: description.to_string(),
            results,
            timestamp,
        }
    }
}

/// Row of the `name_generations` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedName {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub collection_id: Option<String>,
}

/// Insert payload for `name_generations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSavedName {
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub is_favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
}

impl NewSavedName {
    pub fn new(user_id: &str, name: &str, description: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            is_favorite: false,
            collection_id: None,
        }
    }

    pub fn in_collection(mut self, collection_id: &str) -> Self {
        self.collection_id = Some(collection_id.to_string());
        self
    }
}

/// Row of the `collections` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Insert payload for `collections`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCollection {
    pub user_id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Filter applied to the saved-name list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameFilter {
    #[default]
    All,
    Favorites,
    /// Has no time window of its own and keeps everything, like `All`
    Recent,
}

/// Ordering of the saved-name list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameSort {
    #[default]
    Newest,
    Oldest,
    Name,
}

impl FromStr for NameFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(NameFilter::All),
            "favorites" => Ok(NameFilter::Favorites),
            "recent" => Ok(NameFilter::Recent),
            other => Err(Error::invalid_input(format!("unknown filter '{}'", other))),
        }
    }
}

impl FromStr for NameSort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(NameSort::Newest),
            "oldest" => Ok(NameSort::Oldest),
            "name" => Ok(NameSort::Name),
            other => Err(Error::invalid_input(format!("unknown sort '{}'", other))),
        }
    }
}
