//! Shift/mode state machine.

use serde::Serialize;

use super::KeyboardOptions;
use crate::models::key::cased;
use crate::models::{Key, KeyAction, Mode};

/// What a committed key asks the host (or the surface) to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum KeyOutput {
    /// Insert literal text
    Text(String),
    /// Insert a line break
    Newline,
    /// Delete the character before the cursor
    DeleteBackward,
    /// Switch to the next input source
    NextInputSource,
    /// Shift changed; carries the new value
    Shift(bool),
    /// Page changed (or stayed, when the toggle is disabled); carries the visible mode
    Mode(Mode),
}

impl KeyOutput {
    /// Returns true if the output needs a host call.
    #[must_use]
    pub const fn reaches_host(&self) -> bool {
        !matches!(self, Self::Shift(_) | Self::Mode(_))
    }
}

/// Transient input state of the keyboard surface.
///
/// Created when the surface is shown and reset whenever it is hidden or
/// shown again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InputState {
    shift_active: bool,
    mode: Mode,
}

impl InputState {
    /// Fresh state: shift off, alphabetic page.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shift_active: false,
            mode: Mode::Alphabetic,
        }
    }

    /// Whether the next letter will be uppercase.
    #[must_use]
    pub const fn shift_active(&self) -> bool {
        self.shift_active
    }

    /// Visible page.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Toggles shift. Nothing else changes.
    pub fn press_shift(&mut self) -> bool {
        self.shift_active = !self.shift_active;
        self.shift_active
    }

    /// Toggles the page when the layout has a mode toggle.
    ///
    /// Shift is preserved across page changes.
    pub fn press_mode(&mut self, options: &KeyboardOptions) -> Mode {
        if options.mode_toggle {
            self.mode = self.mode.toggled();
        }
        self.mode
    }

    /// Back to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Resolves a key press into an output, applying state transitions.
    ///
    /// Letters take their casing from shift and, with auto-reset enabled,
    /// clear it afterwards. Every other character ignores shift.
    pub fn resolve(&mut self, key: Key, options: &KeyboardOptions) -> KeyOutput {
        match key {
            Key::Char(ch) if key.is_letter() => {
                let text = cased(ch, self.shift_active);
                if options.shift_auto_reset {
                    self.shift_active = false;
                }
                KeyOutput::Text(text)
            }
            Key::Char(ch) => KeyOutput::Text(ch.to_string()),
            Key::Action(KeyAction::Space) => KeyOutput::Text(" ".to_string()),
            Key::Action(KeyAction::Return) => KeyOutput::Newline,
            Key::Action(KeyAction::Backspace) => KeyOutput::DeleteBackward,
            Key::Action(KeyAction::NextKeyboard) => KeyOutput::NextInputSource,
            Key::Action(KeyAction::Shift) => KeyOutput::Shift(self.press_shift()),
            Key::Action(KeyAction::ModeToggle) => KeyOutput::Mode(self.press_mode(options)),
        }
    }
}
