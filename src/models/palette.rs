//! Category color palettes for dark and light appearance.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::key::{Key, KeyAction, KeyCategory};
use super::rgb::RgbColor;

/// Brightness used for keys while the keyboard cannot commit input.
pub const DISABLED_BRIGHTNESS: u8 = 60;

/// Light or dark system appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Dark backgrounds
    #[default]
    Dark,
    /// Light backgrounds
    Light,
}

impl Appearance {
    /// Returns the opposite appearance.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Key background colors, one slot per category.
///
/// Action keys share the `special` slot; the shift key switches to
/// `shift_active` while shift is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPalette {
    /// Letter keys
    pub letter: RgbColor,
    /// Digit keys
    pub digit: RgbColor,
    /// Operator keys
    pub operator: RgbColor,
    /// Bracket keys
    pub bracket: RgbColor,
    /// Punctuation keys
    pub punctuation: RgbColor,
    /// Quote keys
    pub quote: RgbColor,
    /// The underscore key
    pub underscore: RgbColor,
    /// Action keys (space, return, backspace, ...)
    pub special: RgbColor,
    /// Shift key while shift is active
    pub shift_active: RgbColor,
}

impl KeyPalette {
    /// Palette tuned for dark backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            letter: RgbColor::new(0x1C, 0x1C, 0x1E),
            digit: RgbColor::new(0xFF, 0x9F, 0x0A),
            operator: RgbColor::new(0xFF, 0x45, 0x3A),
            bracket: RgbColor::new(0x0A, 0x84, 0xFF),
            punctuation: RgbColor::new(0xBF, 0x5A, 0xF2),
            quote: RgbColor::new(0xFF, 0xD6, 0x0A),
            underscore: RgbColor::new(0x30, 0xD1, 0x58),
            special: RgbColor::new(0x2C, 0x2C, 0x2E),
            shift_active: RgbColor::new(0x0A, 0x84, 0xFF),
        }
    }

    /// Palette tuned for light backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            letter: RgbColor::new(0xD1, 0xD1, 0xD6),
            digit: RgbColor::new(0xFF, 0x95, 0x00),
            operator: RgbColor::new(0xFF, 0x3B, 0x30),
            bracket: RgbColor::new(0x00, 0x7A, 0xFF),
            punctuation: RgbColor::new(0xAF, 0x52, 0xDE),
            quote: RgbColor::new(0xFF, 0xCC, 0x00),
            underscore: RgbColor::new(0x34, 0xC7, 0x59),
            special: RgbColor::new(0xC7, 0xC7, 0xCC),
            shift_active: RgbColor::new(0x00, 0x7A, 0xFF),
        }
    }

    /// Palette for an appearance.
    #[must_use]
    pub const fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }

    /// Applies per-category overrides on top of the built-in colors.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<KeyCategory, RgbColor>) -> Self {
        for (category, color) in overrides {
            *self.slot_mut(*category) = *color;
        }
        self
    }

    /// Color of a category.
    #[must_use]
    pub const fn color(&self, category: KeyCategory) -> RgbColor {
        match category {
            KeyCategory::Letter => self.letter,
            KeyCategory::Digit => self.digit,
            KeyCategory::Operator => self.operator,
            KeyCategory::Bracket => self.bracket,
            KeyCategory::Quote => self.quote,
            KeyCategory::Punctuation => self.punctuation,
            KeyCategory::Underscore => self.underscore,
            KeyCategory::Action => self.special,
        }
    }

    /// Background color of a key for the current shift state.
    #[must_use]
    pub fn key_color(&self, key: &Key, shift_active: bool) -> RgbColor {
        match key {
            Key::Action(KeyAction::Shift) if shift_active => self.shift_active,
            _ => self.color(key.category()),
        }
    }

    fn slot_mut(&mut self, category: KeyCategory) -> &mut RgbColor {
        match category {
            KeyCategory::Letter => &mut self.letter,
            KeyCategory::Digit => &mut self.digit,
            KeyCategory::Operator => &mut self.operator,
            KeyCategory::Bracket => &mut self.bracket,
            KeyCategory::Quote => &mut self.quote,
            KeyCategory::Punctuation => &mut self.punctuation,
            KeyCategory::Underscore => &mut self.underscore,
            KeyCategory::Action => &mut self.special,
        }
    }
}

impl Default for KeyPalette {
    fn default() -> Self {
        Self::dark()
    }
}
