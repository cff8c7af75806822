//! Search, filter and sort over saved names

use std::collections::HashSet;

use crate::models::{NameFilter, NameSort, SavedName};

/// View settings for the saved-name list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameQuery {
    pub search: String,
    pub filter: NameFilter,
    pub sort: NameSort,
}

impl NameQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: &str) -> Self {
        self.search = text.to_string();
        self
    }

    pub fn filter(mut self, filter: NameFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn sort(mut self, sort: NameSort) -> Self {
        self.sort = sort;
        self
    }

    /// Visible rows for `names`. The input is left untouched.
    pub fn apply(&self, names: &[SavedName]) -> Vec<SavedName> {
        let needle = self.search.to_lowercase();

        let mut visible: Vec<SavedName> = names
            .iter()
            .filter(|n| matches_search(n, &needle))
            .filter(|n| matches_filter(n, self.filter))
            .cloned()
            .collect();

        // Stable, so equal keys keep their input order
        match self.sort {
            NameSort::Newest => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            NameSort::Oldest => visible.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            // Case-folded first, raw name breaks ties between "Beta" and "beta"
            NameSort::Name => {
                visible.sort_by_cached_key(|n| (n.name.to_lowercase(), n.name.clone()))
            }
        }

        visible
    }
}

fn matches_search(name: &SavedName, needle: &str) -> bool {
    needle.is_empty()
        || name.name.to_lowercase().contains(needle)
        || name.description.to_lowercase().contains(needle)
}

fn matches_filter(name: &SavedName, filter: NameFilter) -> bool {
    match filter {
        NameFilter::All | NameFilter::Recent => true,
        NameFilter::Favorites => name.is_favorite,
    }
}

/// Names starred in the current result view. Lives only as long as the
/// session and is separate from the stored favorite flag.
#[derive(Debug, Clone, Default)]
pub struct ResultFavorites {
    names: HashSet<String>,
}

impl ResultFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership; returns whether the name is now starred
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn saved(id: &str, name: &str, description: &str, day: u32, favorite: bool) -> SavedName {
        SavedName {
            id: id.to_string(),
            user_id: "user_1".to_string(),
            name: name.to_string(),
            description: description.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
            is_favorite: favorite,
            collection_id: None,
        }
    }

    fn sample() -> Vec<SavedName> {
        vec![
            saved("1", "HabitFlow", "habit tracker", 3, true),
            saved("2", "NexaAI", "AI assistant for teams", 1, false),
            saved("3", "CloudHive", "storage for bees", 5, false),
            saved("4", "AiSync", "calendar sync", 2, true),
        ]
    }

    fn ids(rows: &[SavedName]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn default_query_sorts_newest_first() {
        let rows = NameQuery::new().apply(&sample());
        assert_eq!(ids(&rows), vec!["3", "1", "4", "2"]);
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let rows = NameQuery::new().search("ai").sort(NameSort::Name).apply(&sample());
        // "AiSync" by name, "NexaAI" by name, "AI assistant" by description
        assert_eq!(ids(&rows), vec!["4", "2"]);

        let rows = NameQuery::new().search("BEES").apply(&sample());
        assert_eq!(ids(&rows), vec!["3"]);
    }

    #[test]
    fn favorites_filter_keeps_only_starred() {
        let rows = NameQuery::new()
            .filter(NameFilter::Favorites)
            .sort(NameSort::Oldest)
            .apply(&sample());
        assert_eq!(ids(&rows), vec!["4", "1"]);
    }

    #[test]
    fn recent_filter_keeps_everything() {
        let all = NameQuery::new().apply(&sample());
        let recent = NameQuery::new().filter(NameFilter::Recent).apply(&sample());
        assert_eq!(all, recent);
    }

    #[test]
    fn name_sort_is_stable_for_equal_names() {
        let rows = vec![
            saved("a", "Same", "first", 1, false),
            saved("b", "Same", "second", 9, false),
            saved("c", "Alpha", "third", 5, false),
        ];
        let sorted = NameQuery::new().sort(NameSort::Name).apply(&rows);
        assert_eq!(ids(&sorted), vec!["c", "a", "b"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let rows = vec![
            saved("z", "Zeta", "", 1, false),
            saved("a", "alpha", "", 2, false),
            saved("B", "Beta", "", 3, false),
            saved("b", "beta", "", 4, false),
        ];
        let sorted = NameQuery::new().sort(NameSort::Name).apply(&rows);
        assert_eq!(ids(&sorted), vec!["a", "B", "b", "z"]);
    }

    #[test]
    fn search_and_filter_commute() {
        let source = sample();
        let query = NameQuery::new().search("a").filter(NameFilter::Favorites);

        let combined = query.apply(&source);
        let search_first = NameQuery::new()
            .filter(NameFilter::Favorites)
            .apply(&NameQuery::new().search("a").apply(&source));
        let filter_first = NameQuery::new()
            .search("a")
            .apply(&NameQuery::new().filter(NameFilter::Favorites).apply(&source));

        assert_eq!(combined, search_first);
        assert_eq!(combined, filter_first);
    }

    #[test]
    fn source_is_not_reordered() {
        let source = sample();
        let before = source.clone();
        let _ = NameQuery::new().sort(NameSort::Name).apply(&source);
        assert_eq!(source, before);
    }

    #[test]
    fn result_favorites_toggle() {
        let mut starred = ResultFavorites::new();
        assert!(starred.toggle("HabitFlow"));
        assert!(starred.contains("HabitFlow"));
        assert!(!starred.toggle("HabitFlow"));
        assert!(starred.is_empty());
    }
}
