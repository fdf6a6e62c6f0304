//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting both
//! built-in themes and custom themes loaded from TOML files. It provides
//! utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `dunia`: Slate background tones with pink and teal accents (default)
//! - `catppuccin-mocha`: Dark theme with warm tones
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#f472b6"
//! tagline_fg = "#94a3b8"
//! selection_fg = "#0f172a"
//! selection_bg = "#f472b6"
//! text_normal = "#e2e8f0"
//! text_dim = "#64748b"
//! border = "#334155"
//! search_bar_border = "#475569"
//! search_bar_focus = "#2dd4bf"
//! match_highlight_fg = "#0f172a"
//! match_highlight_bg = "#fde68a"
//! empty_state_fg = "#2dd4bf"
//! error_fg = "#f87171"
//! restaurant_fg = "#f472b6"
//! park_fg = "#2dd4bf"
//! rating_fg = "#facc15"
//! chip_fg = "#cbd5e1"
//! chip_active_fg = "#0f172a"
//! chip_active_bg = "#2dd4bf"
//! button_fg = "#0f172a"
//! button_bg = "#f472b6"
//! link_fg = "#38bdf8"
//! ```
//!
//! # Example
//!
//! ```rust
//! use dunia::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{DuniaError, Result};
use crate::domain::VenueKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// themes or custom TOML files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#f472b6"). Optional fields
/// default to `None`, allowing themes to opt out of certain styling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Site title color.
    pub header_fg: String,
    /// Optional title background color.
    #[serde(default)]
    pub header_bg: Option<String>,
    /// Tagline under the title.
    pub tagline_fg: String,

    /// Selected card and active category foreground.
    pub selection_fg: String,
    /// Selected card and active category background.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, placeholders, image links).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search box border while idle.
    pub search_bar_border: String,
    /// Search box border while typing.
    pub search_bar_focus: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// No-results message color.
    pub empty_state_fg: String,
    /// Load failure message color.
    pub error_fg: String,

    /// Restaurant badge color.
    pub restaurant_fg: String,
    /// Park badge color.
    pub park_fg: String,
    /// Star rating color.
    pub rating_fg: String,

    /// Inactive amenity chip text.
    pub chip_fg: String,
    /// Active amenity chip text.
    pub chip_active_fg: String,
    /// Active amenity chip background.
    pub chip_active_bg: String,

    /// Button text (back, submit).
    pub button_fg: String,
    /// Button background.
    pub button_bg: String,
    /// Contact links and URLs.
    pub link_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `dunia`, `catppuccin-mocha`, `catppuccin-latte`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use dunia::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "dunia" => include_str!("../../themes/dunia.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DuniaError::Theme`] if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields, type mismatches)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DuniaError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| DuniaError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Badge color for a venue kind.
    #[must_use]
    pub fn kind_color(&self, kind: VenueKind) -> &str {
        match kind {
            VenueKind::Restaurant => &self.colors.restaurant_fg,
            VenueKind::Park => &self.colors.park_fg,
        }
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Strips `#` prefix if present, validates length, and parses hex digits.
    /// Returns `(255, 255, 255)` (white) on parse errors.
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

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dunia::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#f472b6"), "\u{1b}[38;2;244;114;182m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI italic escape sequence (`\x1b[3m`).
    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    /// Returns the ANSI underline escape sequence (`\x1b[4m`).
    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default `dunia` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("dunia").expect("Built-in dunia theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in ["dunia", "catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_is_dunia() {
        assert_eq!(Theme::default().name, "dunia");
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("zzzzzz"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn from_file_round_trips_builtin() {
        let builtin = Theme::from_name("catppuccin-latte").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&builtin).unwrap().as_bytes()).unwrap();

        assert_eq!(Theme::from_file(file.path()).unwrap(), builtin);
    }

    #[test]
    fn from_file_reports_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"partial\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, DuniaError::Theme(msg) if msg.contains("parse")));
    }

    #[test]
    fn kind_colors_follow_palette() {
        let theme = Theme::default();
        assert_eq!(theme.kind_color(VenueKind::Park), theme.colors.park_fg);
        assert_eq!(theme.kind_color(VenueKind::Restaurant), theme.colors.restaurant_fg);
    }
}
