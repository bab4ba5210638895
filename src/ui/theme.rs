//! Theme management and ANSI escape sequence generation.
//!
//! Themes are either built in (embedded TOML) or loaded from a user TOML file.
//! Colors are hex strings converted to 24-bit ANSI sequences at render time.
//!
//! # Built-in Themes
//!
//! - `midnight`: indigo accents on a dark zinc background (default)
//! - `daylight`: indigo accents on a light background
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e4e4e7"
//! accent = "#818cf8"
//! selection_fg = "#18181b"
//! selection_bg = "#818cf8"
//! text_normal = "#e4e4e7"
//! text_dim = "#71717a"
//! border = "#3f3f46"
//! search_bar_border = "#6366f1"
//! match_highlight_fg = "#18181b"
//! match_highlight_bg = "#facc15"
//! empty_state_fg = "#a5b4fc"
//! viewer_border = "#6366f1"
//! error_fg = "#f87171"
//! ```
//!
//! # Example
//!
//! ```rust
//! use gamedeck::Theme;
//!
//! let theme = Theme::from_name("daylight").unwrap();
//! assert_eq!(theme.name, "daylight");
//! assert!(Theme::fg(&theme.colors.accent).starts_with("\u{1b}[38;2;"));
//! ```

use crate::domain::error::{GamedeckError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected category tab and viewer title.
    pub accent: String,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, descriptions, unselected tabs.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    pub viewer_border: String,

    /// Load failures and launch errors.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name; `None` if unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "midnight" => include_str!("../../themes/midnight.toml"),
            "daylight" => include_str!("../../themes/daylight.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GamedeckError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            GamedeckError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| GamedeckError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parses `#rrggbb`; anything malformed renders white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground color sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `midnight` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse.
    fn default() -> Self {
        Self::from_name("midnight").expect("Built-in midnight theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::default().name, "midnight");
        assert!(Theme::from_name("daylight").is_some());
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#818cf8"), "\u{1b}[38;2;129;140;248m");
        assert_eq!(Theme::bg("18181b"), "\u{1b}[48;2;24;24;27m");
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let builtin = include_str!("../../themes/daylight.toml").replace("daylight", "custom");
        file.write_all(builtin.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"half\"\n").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, GamedeckError::Theme(_)));
    }
}
