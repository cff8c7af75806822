//! Branding kit assembly

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::{COLOR_PALETTES, SLOGANS};
use crate::generator::domain::{domain_for, simulate_availability};
use crate::generator::logo::generate_logo;
use crate::generator::name::generate_name;
use crate::models::{BrandingKit, ColorPalette};
use crate::narrative::NarrativeProvider;
use crate::random::{choose, RandomSource};

/// Kits produced per request
pub const BATCH_SIZE: usize = 5;

/// Fresh candidates tried for one slot before a numeric suffix is appended
pub const MAX_NAME_ATTEMPTS: usize = 64;

/// Builds batches of distinct branding kits for a description
#[derive(Clone)]
pub struct KitAssembler {
    narrator: Option<Arc<dyn NarrativeProvider>>,
    batch_size: usize,
    max_attempts: usize,
}

impl Default for KitAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl KitAssembler {
    /// Assembler without a narrative step
    pub fn new() -> Self {
        Self {
            narrator: None,
            batch_size: BATCH_SIZE,
            max_attempts: MAX_NAME_ATTEMPTS,
        }
    }

    /// Attach a narrative provider
    pub fn with_narrator(mut self, narrator: Arc<dyn NarrativeProvider>) -> Self {
        self.narrator = Some(narrator);
        self
    }

    /// Set the fresh-candidate budget per slot (at least one)
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Whether a narrative step will run
    pub fn narrates(&self) -> bool {
        self.narrator.is_some()
    }

    /// Produce the batch without narratives, in acceptance order.
    pub fn draft<R: RandomSource + ?Sized>(
        &self,
        description: &str,
        rng: &mut R,
    ) -> Vec<BrandingKit> {
        let mut used = HashSet::new();
        let mut kits = Vec::with_capacity(self.batch_size);

        while kits.len() < self.batch_size {
            let name = self.unique_name(description, &used, rng);
            used.insert(name.clone());
            kits.push(synthesize_kit(name, rng));
        }

        kits
    }

    /// Produce the batch and decorate each kit with a narrative, one request at
    /// a time. A failed narrative leaves that kit undecorated.
    pub async fn assemble<R: RandomSource + ?Sized>(
        &self,
        description: &str,
        rng: &mut R,
    ) -> Vec<BrandingKit> {
        let mut kits = self.draft(description, rng);

        if let Some(narrator) = &self.narrator {
            for kit in kits.iter_mut() {
                match narrator.narrate(&kit.name, description).await {
                    Ok(narrative) => kit.narrative = Some(narrative),
                    Err(e) => warn!(kit = %kit.name, error = %e, "narrative unavailable"),
                }
            }
        }

        kits
    }

    fn unique_name<R: RandomSource + ?Sized>(
        &self,
        description: &str,
        used: &HashSet<String>,
        rng: &mut R,
    ) -> String {
        let mut candidate = String::new();
        for _ in 0..self.max_attempts {
            candidate = generate_name(description, rng);
            if !used.contains(&candidate) {
                return candidate;
            }
        }

        debug!(%candidate, attempts = self.max_attempts, "name space exhausted, adding a suffix");
        disambiguate(&candidate, used)
    }
}

/// Smallest `name2`, `name3`, ... not yet in `used`
fn disambiguate(name: &str, used: &HashSet<String>) -> String {
    let mut n = 2u32;
    loop {
        let candidate = format!("{}{}", name, n);
        if !used.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Everything but the narrative for an accepted name.
///
/// Draw order: logo, palette, slogan, availability.
pub fn synthesize_kit<R: RandomSource + ?Sized>(name: String, rng: &mut R) -> BrandingKit {
    let domain = domain_for(&name);
    let logo = generate_logo(&name, rng);
    let colors = ColorPalette::from(choose(rng, &COLOR_PALETTES));
    let slogan = choose(rng, &SLOGANS).to_string();
    let domain_available = simulate_availability(rng);

    BrandingKit {
        name,
        domain,
        domain_available,
        logo,
        slogan,
        colors,
        narrative: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn disambiguate_skips_taken_suffixes() {
        let used: HashSet<String> = ["SmartIo", "SmartIo2"].iter().map(|s| s.to_string()).collect();
        assert_eq!(disambiguate("SmartIo", &used), "SmartIo3");
    }

    #[test]
    fn constant_source_still_yields_distinct_names() {
        // Every draw answers 0, so every fresh candidate is "SmartTech"
        let assembler = KitAssembler::new().with_max_attempts(3);
        let kits = assembler.draft("the tool", &mut ScriptedRandom::new());

        let names: Vec<&str> = kits.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["SmartTech", "SmartTech2", "SmartTech3", "SmartTech4", "SmartTech5"]
        );
        assert!(kits.iter().all(|k| k.domain.starts_with("smarttech")));
    }

    #[test]
    fn synthesize_uses_one_palette() {
        // logo style 0, icon 0, palette 6, slogan 9
        let mut rng = ScriptedRandom::new().with_picks([0, 0, 6, 9]).with_flips([true]);
        let kit = synthesize_kit("HabitFlow".to_string(), &mut rng);

        assert_eq!(kit.colors, ColorPalette::from(&COLOR_PALETTES[6]));
        assert_eq!(kit.slogan, SLOGANS[9]);
        assert!(kit.domain_available);
        assert_eq!(kit.logo.text, "HF");
        assert!(kit.narrative.is_none());
    }
}
