//! UI chrome colors for dark and light appearance.
//!
//! Accent colors are taken from the active [`KeyPalette`] so borders,
//! selection and status text match the key caps around them.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::{Appearance, KeyPalette, RgbColor};

/// Semantic colors for everything drawn around the keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    appearance: Appearance,

    /// Borders, titles and labels (bracket color)
    pub primary: Color,
    /// Selection and key hints (digit color)
    pub accent: Color,
    /// Active toggles such as shift (shift-active color)
    pub active: Color,
    /// Errors (operator color)
    pub error: Color,
    /// Disabled borders and toggles that are off
    pub inactive: Color,

    /// Primary text
    pub text: Color,
    /// Less important text
    pub text_secondary: Color,
    /// Help text and separators
    pub text_muted: Color,
    /// Main background
    pub background: Color,
}

impl Theme {
    /// Asks the OS for its appearance, falling back to dark.
    #[must_use]
    pub fn detect_appearance() -> Appearance {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Appearance::Light,
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => {
                Appearance::Dark
            }
        }
    }

    /// Resolves the user's theme preference to an appearance.
    #[must_use]
    pub fn resolve_appearance(mode: ThemeMode) -> Appearance {
        mode.fixed_appearance()
            .unwrap_or_else(Self::detect_appearance)
    }

    /// Builds the chrome for an appearance from its key palette.
    #[must_use]
    pub fn from_palette(appearance: Appearance, palette: &KeyPalette) -> Self {
        let color = RgbColor::to_ratatui_color;
        let (text, text_secondary, text_muted, inactive, background) = match appearance {
            Appearance::Dark => (
                Color::White,
                Color::Gray,
                Color::DarkGray,
                Color::Gray,
                Color::Black,
            ),
            Appearance::Light => (
                Color::Black,
                Color::Rgb(60, 60, 60),
                Color::Gray,
                Color::Rgb(180, 180, 180),
                Color::White,
            ),
        };

        Self {
            appearance,
            primary: color(&palette.bracket),
            accent: color(&palette.digit),
            active: color(&palette.shift_active),
            error: color(&palette.operator),
            inactive,
            text,
            text_secondary,
            text_muted,
            background,
        }
    }

    /// Chrome for an appearance with the built-in key colors.
    #[must_use]
    pub fn from_appearance(appearance: Appearance) -> Self {
        Self::from_palette(appearance, &KeyPalette::for_appearance(appearance))
    }

    /// Appearance this theme was built for.
    #[must_use]
    pub const fn appearance(&self) -> Appearance {
        self.appearance
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_appearance(Self::detect_appearance())
    }
}
