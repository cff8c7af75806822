//! Downloadable branding-kit document

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{BrandingKit, ColorPalette, Logo};

/// Exported subset of a kit. Narrative fields are not part of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitExport {
    pub name: String,
    pub domain: String,
    pub slogan: String,
    pub colors: ColorPalette,
    pub logo: Logo,
}

impl From<&BrandingKit> for KitExport {
    fn from(kit: &BrandingKit) -> Self {
        Self {
            name: kit.name.clone(),
            domain: kit.domain.clone(),
            slogan: kit.slogan.clone(),
            colors: kit.colors.clone(),
            logo: kit.logo.clone(),
        }
    }
}

impl KitExport {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `<slug>-branding-kit.json`. The slug keeps lowercase ASCII letters and
    /// digits; every run of anything else becomes a single '-'.
    pub fn file_name(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.to_lowercase().chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c);
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        let slug = slug.trim_end_matches('-');
        let slug = if slug.is_empty() { "brand" } else { slug };
        format!("{}-branding-kit.json", slug)
    }

    /// Write the document into `dir` and return the file's path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let file_name = self.file_name();
        let path = dir.join(&file_name);
        if path.parent() != Some(dir) {
            return Err(Error::invalid_input(format!(
                "export file '{}' would land outside {}",
                file_name,
                dir.display()
            )));
        }
        fs::create_dir_all(dir)?;
        fs::write(&path, self.to_json_pretty()?)?;
        info!(path = %path.display(), "branding kit exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BrandPersonality, BrandStory, LogoStyle, Narrative};

    fn kit(name: &str) -> BrandingKit {
        BrandingKit {
            name: name.to_string(),
            domain: "habitflow.com".to_string(),
            domain_available: false,
            logo: Logo {
                text: "HF".to_string(),
                style: LogoStyle::Minimal,
                icon: "●".to_string(),
            },
            slogan: "Innovation at its finest".to_string(),
            colors: ColorPalette {
                primary: "#10B981".to_string(),
                secondary: "#047857".to_string(),
                accent: "#34D399".to_string(),
            },
            narrative: Some(Narrative {
                brand_story: BrandStory {
                    story: "s".to_string(),
                    meaning: "m".to_string(),
                    cultural_significance: vec![],
                    pronunciation: Default::default(),
                },
                brand_personality: BrandPersonality {
                    traits: vec![],
                    marketing_angles: vec![],
                    visual_identity: vec![],
                },
            }),
        }
    }

    #[test]
    fn export_drops_narrative_and_availability() {
        let doc = KitExport::from(&kit("HabitFlow")).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();

        assert_eq!(keys.len(), 5);
        for key in ["name", "domain", "slogan", "colors", "logo"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }

    #[test]
    fn file_name_collapses_whitespace() {
        assert_eq!(KitExport::from(&kit("HabitFlow")).file_name(), "habitflow-branding-kit.json");
        assert_eq!(
            KitExport::from(&kit("Cloud  Hive Pro")).file_name(),
            "cloud-hive-pro-branding-kit.json"
        );
    }

    #[test]
    fn file_name_has_no_path_separators() {
        assert_eq!(
            KitExport::from(&kit("Ai/MlTech")).file_name(),
            "ai-mltech-branding-kit.json"
        );
        assert_eq!(
            KitExport::from(&kit("/tmp/x Tech")).file_name(),
            "tmp-x-tech-branding-kit.json"
        );
        assert_eq!(
            KitExport::from(&kit("..\\Up.io")).file_name(),
            "up-io-branding-kit.json"
        );
        assert_eq!(KitExport::from(&kit("//")).file_name(), "brand-branding-kit.json");
    }

    #[test]
    fn slashed_names_are_written_inside_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Ai/MlTech", "/tmp/x Tech"] {
            let path = KitExport::from(&kit(name)).write_to(dir.path()).unwrap();
            assert_eq!(path.parent(), Some(dir.path()));
            assert!(path.is_file());
        }
    }

    #[test]
    fn write_to_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = KitExport::from(&kit("HabitFlow")).write_to(dir.path()).unwrap();
        assert!(path.ends_with("habitflow-branding-kit.json"));
        assert!(fs::read_to_string(path).unwrap().contains("\"slogan\""));
    }
}
