//! Shareable links for saved names and collections

use url::Url;

use crate::error::{Error, Result};

/// Builds links under one public origin
#[derive(Debug, Clone)]
pub struct ShareLinks {
    origin: Url,
}

impl ShareLinks {
    /// Fails with [`Error::Url`] when `origin` is not an absolute URL, or
    /// [`Error::InvalidInput`] when it cannot carry a path (e.g. `mailto:`).
    pub fn new(origin: &str) -> Result<Self> {
        let origin = Url::parse(origin.trim())?;
        if origin.cannot_be_a_base() {
            return Err(Error::invalid_input(format!(
                "'{}' cannot be used as a share origin",
                origin
            )));
        }
        Ok(Self { origin })
    }

    /// `<origin>/shared-name/<id>`
    pub fn name_link(&self, id: &str) -> Result<String> {
        self.link("shared-name", id)
    }

    /// `<origin>/shared-collection/<id>`
    pub fn collection_link(&self, id: &str) -> Result<String> {
        self.link("shared-collection", id)
    }

    fn link(&self, kind: &str, id: &str) -> Result<String> {
        if id.trim().is_empty() {
            return Err(Error::invalid_input("cannot share a record without an id"));
        }
        let mut url = self.origin.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| Error::invalid_input("share origin cannot carry a path"))?
            .pop_if_empty()
            .push(kind)
            .push(id);
        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_use_origin_and_kind() {
        let links = ShareLinks::new("https://names.example").unwrap();
        assert_eq!(links.name_link("42").unwrap(), "https://names.example/shared-name/42");
        assert_eq!(
            links.collection_link("c-7").unwrap(),
            "https://names.example/shared-collection/c-7"
        );
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let links = ShareLinks::new("http://localhost:8080/").unwrap();
        assert_eq!(links.name_link("1").unwrap(), "http://localhost:8080/shared-name/1");
    }

    #[test]
    fn unusable_origins_are_rejected() {
        assert!(ShareLinks::new("not a url").is_err());
        assert!(ShareLinks::new("mailto:team@example.com").is_err());
    }

    #[test]
    fn empty_id_is_rejected() {
        let links = ShareLinks::new("https://names.example").unwrap();
        assert!(matches!(links.name_link(" "), Err(Error::InvalidInput(_))));
    }
}
