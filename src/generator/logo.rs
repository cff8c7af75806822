//! Placeholder logo synthesis

use crate::catalog::logo_icons;
use crate::models::{Logo, LogoStyle};
use crate::random::{choose, RandomSource};

/// Split a name before each internal uppercase letter.
///
/// `"HabitFlowIo"` becomes `["Habit", "Flow", "Io"]`.
pub fn fragments(name: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (idx, c) in name.char_indices() {
        if idx > start && c.is_uppercase() {
            parts.push(&name[start..idx]);
            start = idx;
        }
    }
    if start < name.len() {
        parts.push(&name[start..]);
    }
    parts
}

/// Logo text for a style, uppercased.
///
/// Minimal takes the initials of the first two fragments, or the first two
/// characters of a lone fragment. Letter-based takes the first initial only.
/// The remaining styles take the first two characters of the name. Short
/// names yield shorter text.
pub fn logo_text(name: &str, style: LogoStyle) -> String {
    let parts = fragments(name);
    let text: String = match style {
        LogoStyle::Minimal => match parts.as_slice() {
            [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
            [only] => only.chars().take(2).collect(),
            [] => String::new(),
        },
        LogoStyle::LetterBased => parts
            .first()
            .map(|first| first.chars().take(1).collect())
            .unwrap_or_default(),
        LogoStyle::Geometric | LogoStyle::Abstract | LogoStyle::SymbolBased => {
            name.chars().take(2).collect()
        }
    };
    text.to_uppercase()
}

/// Generate a logo for `name`. Draws the style, then the icon.
pub fn generate_logo<R: RandomSource + ?Sized>(name: &str, rng: &mut R) -> Logo {
    let style = *choose(rng, &LogoStyle::ALL);
    let icon = *choose(rng, logo_icons(style));

    Logo {
        text: logo_text(name, style),
        style,
        icon: icon.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn fragments_split_on_capitals() {
        assert_eq!(fragments("HabitFlowIo"), vec!["Habit", "Flow", "Io"]);
        assert_eq!(fragments("Flowhabit"), vec!["Flowhabit"]);
        assert_eq!(fragments("XIo"), vec!["X", "Io"]);
        assert!(fragments("").is_empty());
    }

    #[test]
    fn minimal_uses_two_initials() {
        assert_eq!(logo_text("HabitFlow", LogoStyle::Minimal), "HF");
    }

    #[test]
    fn minimal_single_fragment_uses_second_character() {
        assert_eq!(logo_text("Flowhabit", LogoStyle::Minimal), "FL");
        assert_eq!(logo_text("X", LogoStyle::Minimal), "X");
    }

    #[test]
    fn letter_based_uses_first_initial() {
        assert_eq!(logo_text("HabitFlow", LogoStyle::LetterBased), "H");
    }

    #[test]
    fn other_styles_use_leading_characters() {
        assert_eq!(logo_text("HabitFlow", LogoStyle::Geometric), "HA");
        assert_eq!(logo_text("Q", LogoStyle::SymbolBased), "Q");
    }

    #[test]
    fn icon_comes_from_the_style_set() {
        let mut rng = ScriptedRandom::new().with_picks([4, 1]);
        let logo = generate_logo("HabitFlow", &mut rng);
        assert_eq!(logo.style, LogoStyle::SymbolBased);
        assert_eq!(logo.icon, logo_icons(LogoStyle::SymbolBased)[1]);
        assert_eq!(logo.text, "HA");
    }
}
