//! Terminal palette and ANSI escape sequence generation.
//!
//! Colors are stored as hex strings and converted to 24-bit ANSI sequences on
//! demand. The favorites accent follows the user's [`FavoriteColor`]; status
//! badges follow the character's life status.
//!
//! # Example
//!
//! ```rust
//! use rickdex::domain::FavoriteColor;
//! use rickdex::ui::theme::Theme;
//!
//! let theme = Theme::default();
//! let accent = Theme::fg(theme.accent(FavoriteColor::Green));
//! println!("{accent}Favorites{}", Theme::reset());
//! ```

use crate::domain::{CharacterStatus, FavoriteColor};

/// Color palette for text rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub header: String,
    pub text_dim: String,
    pub error: String,
    pub alive: String,
    pub dead: String,
    pub unknown: String,
    pub favorite_red: String,
    pub favorite_green: String,
    pub favorite_blue: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: "#97ce4c".to_string(),
            text_dim: "#6c7086".to_string(),
            error: "#f38ba8".to_string(),
            alive: "#55cc44".to_string(),
            dead: "#d63d2e".to_string(),
            unknown: "#9e9e9e".to_string(),
            favorite_red: "#e74c3c".to_string(),
            favorite_green: "#2ecc71".to_string(),
            favorite_blue: "#3498db".to_string(),
        }
    }
}

impl Theme {
    /// Hex color of the favorites panel for `color`.
    #[must_use]
    pub fn accent(&self, color: FavoriteColor) -> &str {
        match color {
            FavoriteColor::Red => &self.favorite_red,
            FavoriteColor::Green => &self.favorite_green,
            FavoriteColor::Blue => &self.favorite_blue,
        }
    }

    /// Hex color of a status badge.
    #[must_use]
    pub fn status(&self, status: CharacterStatus) -> &str {
        match status {
            CharacterStatus::Alive => &self.alive,
            CharacterStatus::Dead => &self.dead,
            CharacterStatus::Unknown => &self.unknown,
        }
    }

    /// Parses `#rrggbb`, falling back to white on malformed input.
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

    /// 24-bit foreground color sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn accent_follows_favorite_color() {
        let theme = Theme::default();
        assert_eq!(theme.accent(FavoriteColor::Blue), theme.favorite_blue);
        assert_eq!(theme.status(CharacterStatus::Dead), theme.dead);
    }
}
