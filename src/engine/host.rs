//! Host text-input capability.

/// Operations the keyboard needs from whatever owns the focused text field.
///
/// The keyboard only ever calls through this trait; it never implements the
/// text field itself. Every committed key results in at most one call.
pub trait TextHost {
    /// Inserts literal text at the cursor.
    fn insert_text(&mut self, text: &str);

    /// Removes one character before the cursor.
    fn delete_backward(&mut self);

    /// Inserts a line break at the cursor.
    fn insert_newline(&mut self) {
        self.insert_text("\n");
    }

    /// Asks the host to switch to the next input source.
    fn advance_to_next_input_source(&mut self);
}

impl<H: TextHost + ?Sized> TextHost for &mut H {
    fn insert_text(&mut self, text: &str) {
        (**self).insert_text(text);
    }

    fn delete_backward(&mut self) {
        (**self).delete_backward();
    }

    fn insert_newline(&mut self) {
        (**self).insert_newline();
    }

    fn advance_to_next_input_source(&mut self) {
        (**self).advance_to_next_input_source();
    }
}

/// A single call received by a [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// `insert_text` with its argument
    InsertText(String),
    /// `delete_backward`
    DeleteBackward,
    /// `insert_newline`
    InsertNewline,
    /// `advance_to_next_input_source`
    AdvanceInputSource,
}

impl HostCall {
    /// Short name for CLI output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InsertText(_) => "insert_text",
            Self::DeleteBackward => "delete_backward",
            Self::InsertNewline => "insert_newline",
            Self::AdvanceInputSource => "advance_to_next_input_source",
        }
    }
}

/// Host double that records every call and replays the resulting text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
}

impl RecordingHost {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Calls received so far, in order.
    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Number of calls received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Text a plain text field would hold after replaying the calls.
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = String::new();
        for call in &self.calls {
            match call {
                HostCall::InsertText(s) => text.push_str(s),
                HostCall::InsertNewline => text.push('\n'),
                HostCall::DeleteBackward => {
                    text.pop();
                }
                HostCall::AdvanceInputSource => {}
            }
        }
        text
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl TextHost for RecordingHost {
    fn insert_text(&mut self, text: &str) {
        self.calls.push(HostCall::InsertText(text.to_string()));
    }

    fn delete_backward(&mut self) {
        self.calls.push(HostCall::DeleteBackward);
    }

    fn insert_newline(&mut self) {
        self.calls.push(HostCall::InsertNewline);
    }

    fn advance_to_next_input_source(&mut self) {
        self.calls.push(HostCall::AdvanceInputSource);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainHost(String);

    impl TextHost for PlainHost {
        fn insert_text(&mut self, text: &str) {
            self.0.push_str(text);
        }

        fn delete_backward(&mut self) {
            self.0.pop();
        }

        fn advance_to_next_input_source(&mut self) {}
    }

    #[test]
    fn test_default_newline_goes_through_insert_text() {
        let mut host = PlainHost(String::new());
        host.insert_text("a");
        host.insert_newline();
        assert_eq!(host.0, "a\n");
    }

    #[test]
    fn test_recording_host_replays_text() {
        let mut host = RecordingHost::new();
        host.insert_text("ab");
        host.delete_backward();
        host.insert_newline();
        host.advance_to_next_input_source();
        host.insert_text("c");

        assert_eq!(host.call_count(), 5);
        assert_eq!(host.text(), "a\nc");
        assert_eq!(host.calls()[1], HostCall::DeleteBackward);

        host.clear();
        assert_eq!(host.call_count(), 0);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn drive<H: TextHost>(mut host: H) {
            host.insert_text("x");
            host.insert_newline();
        }

        let mut host = RecordingHost::new();
        drive(&mut host);
        assert_eq!(
            host.calls(),
            &[HostCall::InsertText("x".into()), HostCall::InsertNewline]
        );
    }
}
