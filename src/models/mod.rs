//! Data models for keys, layouts and color palettes.
//!
//! Models are independent of the UI and of the host text field.

pub mod key;
pub mod layout;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use key::{Key, KeyAction, KeyCategory};
pub use layout::{KeyLayout, LayoutPreset, Mode, Row};
pub use palette::{Appearance, KeyPalette, DISABLED_BRIGHTNESS};
pub use rgb::RgbColor;
