//! Candidate name synthesis

use crate::catalog::{self, FALLBACK_BASE_WORD, NAME_PATTERNS, SUFFIXES};
use crate::random::{choose, RandomSource};

/// Lowercased description tokens that survive stop-word removal
pub fn keywords(description: &str) -> Vec<String> {
    description
        .to_lowercase()
        .split_whitespace()
        .filter(|token| !catalog::is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Random keyword of the description, or `"smart"` when none survive.
///
/// Draws from `rng` only when there is a keyword to pick.
pub fn pick_base_word<R: RandomSource + ?Sized>(description: &str, rng: &mut R) -> String {
    let words = keywords(description);
    if words.is_empty() {
        return FALLBACK_BASE_WORD.to_string();
    }
    words[rng.pick(words.len())].clone()
}

/// Generate one candidate name.
///
/// Random draws happen in a fixed order: base word, pattern, suffix, layout.
pub fn generate_name<R: RandomSource + ?Sized>(description: &str, rng: &mut R) -> String {
    let base = pick_base_word(description, rng);
    let pattern = *choose(rng, &NAME_PATTERNS);
    let suffix = *choose(rng, &SUFFIXES);

    let layouts = [
        format!("{}{}", base, pattern),
        format!("{}{}", pattern, base),
        format!("{}.{}", base, suffix),
        format!("{}.{}", pattern, suffix),
        format!("{}{}.{}", base, pattern, suffix),
    ];

    let picked = choose(rng, &layouts);
    title_case(picked).replace('.', "")
}

/// Uppercase every letter that starts the string or follows a non-letter
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut after_letter = false;
    for c in value.chars() {
        if c.is_alphabetic() && !after_letter {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        after_letter = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, StdRandom};

    #[test]
    fn keywords_drop_stop_words_and_lowercase() {
        assert_eq!(
            keywords("AI tool for daily habit tracking"),
            vec!["ai", "daily", "habit", "tracking"]
        );
        assert!(keywords("  the  App for   a platform ").is_empty());
    }

    #[test]
    fn base_word_falls_back_without_drawing() {
        let mut rng = ScriptedRandom::new().with_picks([4]);
        assert_eq!(pick_base_word("a tool for the platform", &mut rng), "smart");
        // The queued pick is still available
        assert_eq!(rng.pick(10), 4);
    }

    #[test]
    fn base_word_comes_from_keywords_when_any_survive() {
        let mut rng = StdRandom::seeded(11);
        let words = keywords("Social media scheduling platform");
        for _ in 0..200 {
            let base = pick_base_word("Social media scheduling platform", &mut rng);
            assert!(words.contains(&base));
            assert_ne!(base, FALLBACK_BASE_WORD);
        }
    }

    #[test]
    fn pattern_first_layout() {
        // base "habit", pattern "Flow", suffix "io", layout base+pattern
        let mut rng = ScriptedRandom::new().with_picks([2, 4, 1, 0]);
        assert_eq!(generate_name("AI tool for daily habit tracking", &mut rng), "HabitFlow");

        let mut rng = ScriptedRandom::new().with_picks([2, 4, 1, 1]);
        assert_eq!(generate_name("AI tool for daily habit tracking", &mut rng), "Flowhabit");
    }

    #[test]
    fn suffix_layouts_drop_the_separator() {
        let mut rng = ScriptedRandom::new().with_picks([2, 4, 1, 2]);
        assert_eq!(generate_name("AI tool for daily habit tracking", &mut rng), "HabitIo");

        let mut rng = ScriptedRandom::new().with_picks([2, 4, 1, 3]);
        assert_eq!(generate_name("AI tool for daily habit tracking", &mut rng), "FlowIo");

        let mut rng = ScriptedRandom::new().with_picks([2, 4, 1, 4]);
        assert_eq!(generate_name("AI tool for daily habit tracking", &mut rng), "HabitFlowIo");
    }

    #[test]
    fn title_case_capitalizes_after_non_letters() {
        assert_eq!(title_case("x.io"), "X.Io");
        assert_eq!(title_case("ai-powered"), "Ai-Powered");
        assert_eq!(title_case("web3tool"), "Web3Tool");
        assert_eq!(title_case("habitFlow"), "HabitFlow");
    }

    #[test]
    fn names_never_contain_dots() {
        let mut rng = StdRandom::seeded(3);
        for _ in 0..500 {
            assert!(!generate_name("customer feedback analysis", &mut rng).contains('.'));
        }
    }
}
