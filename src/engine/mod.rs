//! Keyboard controller: turns key presses into host text operations.
//!
//! The controller owns the layout, the input state and the attached host.
//! Readiness (host attached and surface visible) is checked once, at the
//! [`Keyboard::commit_key`] boundary; a press that fails the check is dropped
//! without touching any state.

pub mod host;
pub mod state;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::models::{Key, KeyAction, KeyLayout, LayoutPreset, Mode, Row};

pub use host::{HostCall, RecordingHost, TextHost};
pub use state::{InputState, KeyOutput};

/// Behavior switches that replace the old per-revision keyboard variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardOptions {
    /// Key arrangement
    pub preset: LayoutPreset,
    /// Split the preset into alphabetic and symbolic pages
    pub mode_toggle: bool,
    /// Clear shift after one letter
    pub shift_auto_reset: bool,
}

impl Default for KeyboardOptions {
    fn default() -> Self {
        Self {
            preset: LayoutPreset::default(),
            mode_toggle: false,
            shift_auto_reset: true,
        }
    }
}

/// On-screen keyboard bound to a host text field.
#[derive(Debug)]
pub struct Keyboard<H: TextHost> {
    layout: KeyLayout,
    options: KeyboardOptions,
    state: InputState,
    host: Option<H>,
    visible: bool,
}

impl<H: TextHost> Keyboard<H> {
    /// Creates a visible keyboard with no host attached yet.
    #[must_use]
    pub fn new(options: KeyboardOptions) -> Self {
        Self {
            layout: KeyLayout::new(options.preset, options.mode_toggle),
            options,
            state: InputState::new(),
            host: None,
            visible: true,
        }
    }

    /// Creates a visible keyboard already attached to a host.
    #[must_use]
    pub fn with_host(options: KeyboardOptions, host: H) -> Self {
        let mut keyboard = Self::new(options);
        keyboard.host = Some(host);
        keyboard
    }

    /// Attaches a host, replacing (and returning) any previous one.
    pub fn attach(&mut self, host: H) -> Option<H> {
        info!("text host attached");
        self.host.replace(host)
    }

    /// Detaches the host. Presses are dropped until a host is attached again.
    pub fn detach(&mut self) -> Option<H> {
        let host = self.host.take();
        if host.is_some() {
            info!("text host detached");
        }
        host
    }

    /// Attached host, if any.
    #[must_use]
    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    /// Attached host (mutable), if any.
    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    /// Shows the surface with a fresh input state.
    pub fn show(&mut self) {
        self.visible = true;
        self.state.reset();
        debug!("keyboard shown");
    }

    /// Hides the surface and resets the input state.
    pub fn hide(&mut self) {
        self.visible = false;
        self.state.reset();
        debug!("keyboard hidden");
    }

    /// Whether the surface is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a press would currently be committed.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.visible && self.host.is_some()
    }

    /// Commits a key press.
    ///
    /// Returns `None` when the keyboard is not ready; the press is then
    /// dropped and neither the state nor the host is touched. Otherwise the
    /// output is applied with at most one host call and returned.
    pub fn commit_key(&mut self, key: Key) -> Option<KeyOutput> {
        if !self.visible {
            trace!(key = %key, "press dropped: keyboard hidden");
            return None;
        }
        let Some(host) = self.host.as_mut() else {
            trace!(key = %key, "press dropped: no text host");
            return None;
        };

        let output = self.state.resolve(key, &self.options);
        match &output {
            KeyOutput::Text(text) => host.insert_text(text),
            KeyOutput::Newline => host.insert_newline(),
            KeyOutput::DeleteBackward => host.delete_backward(),
            KeyOutput::NextInputSource => host.advance_to_next_input_source(),
            KeyOutput::Shift(_) | KeyOutput::Mode(_) => {}
        }

        debug!(
            key = %key,
            output = ?output,
            shift = self.state.shift_active(),
            mode = %self.state.mode(),
            "key committed"
        );
        Some(output)
    }

    /// Parses an identifier and commits it.
    ///
    /// Returns `None` for unknown identifiers as well as for dropped presses.
    pub fn commit_id(&mut self, id: &str) -> Option<KeyOutput> {
        let key = Key::parse(id)?;
        self.commit_key(key)
    }

    /// Presses the shift key.
    pub fn press_shift(&mut self) -> Option<KeyOutput> {
        self.commit_key(Key::Action(KeyAction::Shift))
    }

    /// Presses the mode key.
    pub fn press_mode(&mut self) -> Option<KeyOutput> {
        self.commit_key(Key::Action(KeyAction::ModeToggle))
    }

    /// Rows of the visible page.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        self.layout.rows_for(self.state.mode())
    }

    /// Label of a key for the current shift state.
    #[must_use]
    pub fn label_for(&self, key: &Key) -> String {
        key.label(self.state.shift_active())
    }

    /// Current input state.
    #[must_use]
    pub const fn state(&self) -> &InputState {
        &self.state
    }

    /// Visible page.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Options the keyboard was built with.
    #[must_use]
    pub const fn options(&self) -> &KeyboardOptions {
        &self.options
    }

    /// Static layout.
    #[must_use]
    pub const fn layout(&self) -> &KeyLayout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> Keyboard<RecordingHost> {
        Keyboard::with_host(KeyboardOptions::default(), RecordingHost::new())
    }

    fn calls(keyboard: &Keyboard<RecordingHost>) -> Vec<HostCall> {
        keyboard.host().map(|h| h.calls().to_vec()).unwrap_or_default()
    }

    #[test]
    fn test_typing_scenario() {
        let mut keyboard = ready();

        keyboard.commit_id("a");
        assert!(!keyboard.state().shift_active());
        keyboard.press_shift();
        assert!(keyboard.state().shift_active());
        keyboard.commit_id("b");
        assert!(!keyboard.state().shift_active());
        keyboard.commit_id("c");

        assert_eq!(keyboard.host().unwrap().text(), "aBc");
        assert_eq!(keyboard.host().unwrap().call_count(), 3);
    }

    #[test]
    fn test_backspace_calls_delete_once() {
        let mut keyboard = ready();
        keyboard.commit_key(Key::Action(KeyAction::Backspace));
        assert_eq!(calls(&keyboard), vec![HostCall::DeleteBackward]);
    }

    #[test]
    fn test_space_inserts_single_space() {
        let mut keyboard = ready();
        keyboard.commit_key(Key::Action(KeyAction::Space));
        assert_eq!(calls(&keyboard), vec![HostCall::InsertText(" ".into())]);
    }

    #[test]
    fn test_return_and_globe_use_their_host_calls() {
        let mut keyboard = ready();
        keyboard.commit_id("return");
        keyboard.commit_id("globe");
        assert_eq!(
            calls(&keyboard),
            vec![HostCall::InsertNewline, HostCall::AdvanceInputSource]
        );
    }

    #[test]
    fn test_state_keys_never_reach_host() {
        let mut keyboard = Keyboard::with_host(
            KeyboardOptions {
                mode_toggle: true,
                ..KeyboardOptions::default()
            },
            RecordingHost::new(),
        );
        keyboard.press_shift();
        keyboard.press_mode();
        assert!(calls(&keyboard).is_empty());
    }

    #[test]
    fn test_at_most_one_host_call_per_key() {
        let mut keyboard = ready();
        let keys: Vec<Key> = keyboard.rows().iter().flatten().copied().collect();
        for key in keys {
            let before = keyboard.host().unwrap().call_count();
            let output = keyboard.commit_key(key).unwrap();
            let after = keyboard.host().unwrap().call_count();
            let expected = usize::from(output.reaches_host());
            assert_eq!(after - before, expected, "{key}");
        }
    }

    #[test]
    fn test_dropped_without_host() {
        let mut keyboard: Keyboard<RecordingHost> = Keyboard::new(KeyboardOptions::default());
        assert!(!keyboard.is_ready());
        assert_eq!(keyboard.press_shift(), None);
        assert!(!keyboard.state().shift_active(), "dropped press leaves state alone");
        assert_eq!(keyboard.commit_id("a"), None);
    }

    #[test]
    fn test_dropped_while_hidden() {
        let mut keyboard = ready();
        keyboard.hide();
        assert!(!keyboard.is_ready());
        assert_eq!(keyboard.commit_id("a"), None);
        assert!(calls(&keyboard).is_empty());

        keyboard.show();
        assert_eq!(keyboard.commit_id("a"), Some(KeyOutput::Text("a".into())));
    }

    #[test]
    fn test_hide_and_show_reset_state() {
        let mut keyboard = Keyboard::with_host(
            KeyboardOptions {
                mode_toggle: true,
                ..KeyboardOptions::default()
            },
            RecordingHost::new(),
        );
        keyboard.press_shift();
        keyboard.press_mode();
        keyboard.hide();
        assert_eq!(*keyboard.state(), InputState::new());

        keyboard.show();
        keyboard.press_shift();
        keyboard.show();
        assert!(!keyboard.state().shift_active());
    }

    #[test]
    fn test_detach_keeps_shift() {
        let mut keyboard = ready();
        keyboard.press_shift();
        let host = keyboard.detach();
        assert!(host.is_some());
        assert!(keyboard.state().shift_active());

        keyboard.attach(RecordingHost::new());
        keyboard.commit_id("q");
        assert_eq!(keyboard.host().unwrap().text(), "Q");
    }

    #[test]
    fn test_mode_variant_digit_in_both_modes() {
        let mut keyboard = Keyboard::with_host(
            KeyboardOptions {
                mode_toggle: true,
                ..KeyboardOptions::default()
            },
            RecordingHost::new(),
        );
        assert_eq!(keyboard.mode(), Mode::Alphabetic);
        assert_eq!(keyboard.commit_id("5"), Some(KeyOutput::Text("5".into())));
        assert_eq!(keyboard.press_mode(), Some(KeyOutput::Mode(Mode::Symbolic)));
        assert_eq!(keyboard.commit_id("5"), Some(KeyOutput::Text("5".into())));
        assert!(keyboard.rows().iter().flatten().any(|k| *k == Key::char('5')));
    }

    #[test]
    fn test_labels_follow_shift() {
        let mut keyboard = ready();
        let key = Key::char('k');
        assert_eq!(keyboard.label_for(&key), "k");
        keyboard.press_shift();
        assert_eq!(keyboard.label_for(&key), "K");
        // Refreshing twice gives the same labels
        assert_eq!(keyboard.label_for(&key), keyboard.label_for(&key));
    }

    #[test]
    fn test_unknown_identifier_is_ignored() {
        let mut keyboard = ready();
        assert_eq!(keyboard.commit_id("hyperdrive"), None);
        assert!(calls(&keyboard).is_empty());
    }
}
