//! Keys, key categories and key identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color category a key belongs to.
///
/// Categories group symbols by their role in source code so each group gets
/// its own color on the keyboard surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyCategory {
    /// Alphabetic characters
    Letter,
    /// `0`-`9`
    Digit,
    /// Arithmetic, comparison and bitwise operators
    Operator,
    /// Parentheses, square and curly brackets
    Bracket,
    /// String delimiters
    Quote,
    /// Separators and everything without a dedicated category
    Punctuation,
    /// `_`
    Underscore,
    /// Keys that trigger an action instead of producing a character
    Action,
}

impl KeyCategory {
    /// All categories in legend order.
    pub const ALL: [Self; 8] = [
        Self::Letter,
        Self::Digit,
        Self::Operator,
        Self::Bracket,
        Self::Quote,
        Self::Punctuation,
        Self::Underscore,
        Self::Action,
    ];

    /// Classifies a character into its color category.
    ///
    /// Characters without a dedicated group fall back to `Punctuation`.
    #[must_use]
    pub fn classify(ch: char) -> Self {
        match ch {
            '0'..='9' => Self::Digit,
            '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!' | '%' | '^' | '~' => Self::Operator,
            '(' | ')' | '[' | ']' | '{' | '}' => Self::Bracket,
            '"' | '\'' | '`' => Self::Quote,
            '_' => Self::Underscore,
            c if c.is_alphabetic() => Self::Letter,
            _ => Self::Punctuation,
        }
    }

    /// Lowercase name used in config files and CLI output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::Digit => "digit",
            Self::Operator => "operator",
            Self::Bracket => "bracket",
            Self::Quote => "quote",
            Self::Punctuation => "punctuation",
            Self::Underscore => "underscore",
            Self::Action => "action",
        }
    }

    /// Parses a category from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl TryFrom<String> for KeyCategory {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name).ok_or_else(|| format!("unknown key category '{name}'"))
    }
}

impl From<KeyCategory> for String {
    fn from(category: KeyCategory) -> Self {
        category.name().to_string()
    }
}

impl fmt::Display for KeyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Action keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Toggles shift for the next letter
    Shift,
    /// Deletes the character before the cursor
    Backspace,
    /// Inserts a single space
    Space,
    /// Inserts a newline
    Return,
    /// Asks the host to switch to the next input source
    NextKeyboard,
    /// Toggles between the alphabetic and symbolic pages
    ModeToggle,
}

impl KeyAction {
    /// Canonical identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Backspace => "backspace",
            Self::Space => "space",
            Self::Return => "return",
            Self::NextKeyboard => "globe",
            Self::ModeToggle => "mode",
        }
    }

    /// Parses an action identifier, accepting common aliases.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_ascii_lowercase().as_str() {
            "shift" => Some(Self::Shift),
            "backspace" | "delete" | "bksp" => Some(Self::Backspace),
            "space" => Some(Self::Space),
            "return" | "enter" | "newline" => Some(Self::Return),
            "globe" | "next" => Some(Self::NextKeyboard),
            "mode" | "123" | "abc" => Some(Self::ModeToggle),
            _ => None,
        }
    }
}

/// A single tappable unit on the keyboard surface.
///
/// Letters always carry their lowercase base glyph; the shift state decides
/// the casing when the key is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character producer
    Char(char),
    /// Action trigger
    Action(KeyAction),
}

impl Key {
    /// Creates a character key. Letters are normalized to lowercase.
    ///
    /// A letter whose lowercase form spans several chars keeps its own
    /// glyph; casing is applied again when the key is committed.
    #[must_use]
    pub fn char(ch: char) -> Self {
        if !ch.is_alphabetic() {
            return Self::Char(ch);
        }
        let mut lower = ch.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(single), None) => Self::Char(single),
            _ => Self::Char(ch),
        }
    }

    /// Parses a key identifier.
    ///
    /// Single characters become character keys (uppercase letters map to the
    /// same key as their lowercase form); action names and their aliases map
    /// to action keys. Anything else is not a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use coderkeys::models::{Key, KeyAction};
    ///
    /// assert_eq!(Key::parse("A"), Some(Key::Char('a')));
    /// assert_eq!(Key::parse("enter"), Some(Key::Action(KeyAction::Return)));
    /// assert_eq!(Key::parse("nope"), None);
    /// ```
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        let mut chars = id.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(Self::char(ch)),
            (Some(_), Some(_)) => KeyAction::from_id(id).map(Self::Action),
            (None, _) => None,
        }
    }

    /// Identifier of the key (the base glyph or the action name).
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::Char(ch) => ch.to_string(),
            Self::Action(action) => action.id().to_string(),
        }
    }

    /// Color category of the key.
    #[must_use]
    pub fn category(&self) -> KeyCategory {
        match self {
            Self::Char(ch) => KeyCategory::classify(*ch),
            Self::Action(_) => KeyCategory::Action,
        }
    }

    /// Base glyph of a character key.
    #[must_use]
    pub const fn base_glyph(&self) -> Option<char> {
        match self {
            Self::Char(ch) => Some(*ch),
            Self::Action(_) => None,
        }
    }

    /// Returns true for letter keys.
    #[must_use]
    pub fn is_letter(&self) -> bool {
        self.category() == KeyCategory::Letter
    }

    /// Label drawn on the key face.
    ///
    /// Letters follow the shift state; every other key ignores it.
    #[must_use]
    pub fn label(&self, shift_active: bool) -> String {
        match self {
            Self::Char(ch) if self.is_letter() => cased(*ch, shift_active),
            Self::Char(ch) => ch.to_string(),
            Self::Action(KeyAction::Shift) => "⇧".to_string(),
            Self::Action(KeyAction::Backspace) => "⌫".to_string(),
            Self::Action(KeyAction::Space) => "space".to_string(),
            Self::Action(KeyAction::Return) => "↵".to_string(),
            Self::Action(KeyAction::NextKeyboard) => "🌐".to_string(),
            Self::Action(KeyAction::ModeToggle) => "123".to_string(),
        }
    }
}

/// Text a letter produces for a shift state.
pub(crate) fn cased(ch: char, upper: bool) -> String {
    if upper {
        ch.to_uppercase().collect()
    } else {
        ch.to_lowercase().collect()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
