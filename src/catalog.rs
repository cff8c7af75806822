//! Fixed choice catalogs used as the randomization universe.

use crate::models::{ColorPalette, LogoStyle};

/// A coherent primary/secondary/accent triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

impl Palette {
    const fn new(primary: &'static str, secondary: &'static str, accent: &'static str) -> Self {
        Self { primary, secondary, accent }
    }
}

impl From<&Palette> for ColorPalette {
    fn from(palette: &Palette) -> Self {
        Self {
            primary: palette.primary.to_string(),
            secondary: palette.secondary.to_string(),
            accent: palette.accent.to_string(),
        }
    }
}

/// Name fragments combined with a description keyword.
pub static NAME_PATTERNS: [&str; 20] = [
    "Tech", "Pro", "Smart", "Quick", "Flow", "Sync", "Hub", "Lab", "Works", "Base",
    "Cloud", "Stream", "Wave", "Core", "Link", "Shift", "Boost", "Spark", "Forge", "Mind",
];

/// Suffixes appended after the cosmetic `.` separator.
pub static SUFFIXES: [&str; 10] = ["ly", "io", "app", "hub", "lab", "pro", "ai", "go", "co", "net"];

/// Tokens dropped from a description before a base word is picked.
pub static STOP_WORDS: [&str; 15] = [
    "for", "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "from",
    "tool", "platform", "app",
];

/// Base word used when a description has no usable keyword.
pub const FALLBACK_BASE_WORD: &str = "smart";

/// Blue, purple, green, orange, red, cyan, brown, indigo.
pub static COLOR_PALETTES: [Palette; 8] = [
    Palette::new("#3B82F6", "#1E40AF", "#60A5FA"),
    Palette::new("#8B5CF6", "#7C3AED", "#A78BFA"),
    Palette::new("#10B981", "#059669", "#34D399"),
    Palette::new("#F59E0B", "#D97706", "#FBBF24"),
    Palette::new("#EF4444", "#DC2626", "#F87171"),
    Palette::new("#06B6D4", "#0891B2", "#67E8F9"),
    Palette::new("#8B5A2B", "#92400E", "#D97706"),
    Palette::new("#6366F1", "#4F46E5", "#818CF8"),
];

pub static SLOGANS: [&str; 10] = [
    "Simplify. Amplify. Succeed.",
    "Where productivity meets innovation",
    "Transform the way you work",
    "Your success, automated",
    "Building the future, today",
    "Efficiency redefined",
    "Smart solutions for modern teams",
    "Empowering your potential",
    "Innovation at your fingertips",
    "Streamline. Scale. Succeed.",
];

/// Sample descriptions offered to users who do not know where to start.
pub static EXAMPLE_DESCRIPTIONS: [&str; 4] = [
    "AI tool for daily habit tracking",
    "Project management for creative teams",
    "Social media scheduling platform",
    "Customer feedback analysis tool",
];

/// Glyph set for a logo style. Every set holds five glyphs.
pub fn logo_icons(style: LogoStyle) -> &'static [&'static str; 5] {
    match style {
        LogoStyle::Minimal => &["●", "○", "◆", "◇", "■"],
        LogoStyle::Geometric => &["▲", "■", "◆", "⬢", "⬟"],
        LogoStyle::Abstract => &["✦", "✧", "❖", "✺", "❂"],
        LogoStyle::LetterBased => &["◉", "◎", "⊙", "⊚", "⦿"],
        LogoStyle::SymbolBased => &["★", "⚡", "♦", "✚", "☀"],
    }
}

/// Catalog palette whose three colors equal `colors`, if any.
pub fn palette_of(colors: &ColorPalette) -> Option<&'static Palette> {
    COLOR_PALETTES.iter().find(|p| {
        p.primary == colors.primary && p.secondary == colors.secondary && p.accent == colors.accent
    })
}

/// Whether a lowercased token is in the stop-word set.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}
