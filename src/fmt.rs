//! Shared console output helpers

use console::{Emoji, Term};

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Microscope emoji for analysis/inspection
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Package emoji for written output
pub const PACKAGE: Emoji = Emoji("📦", "->");

/// Line printed under every action block
pub const DIVIDER: &str = "-----------------------------------";

/// Section banner, e.g. `========== Actions Taken ==========`
///
/// # Examples
///
/// ```
/// use dockershrink::fmt::banner;
///
/// assert_eq!(banner("Recommendations"), "========== Recommendations ==========");
/// ```
pub fn banner(title: &str) -> String {
    format!("========== {} ==========", title)
}

/// Decides between an emoji and its plain-text fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    emoji: bool,
}

impl Glyphs {
    /// Emoji allowed when `emoji` is set and stdout supports them
    pub fn new(emoji: bool) -> Self {
        Self {
            emoji: emoji && Term::stdout().features().wants_emoji(),
        }
    }

    /// Plain-text glyphs only
    pub fn plain() -> Self {
        Self { emoji: false }
    }

    /// Pick the variant of `emoji` to print
    pub fn pick(&self, emoji: Emoji<'static, 'static>) -> &'static str {
        if self.emoji {
            emoji.0
        } else {
            emoji.1
        }
    }
}
