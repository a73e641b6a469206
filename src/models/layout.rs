//! Static key layouts.
//!
//! A [`KeyLayout`] is built once from the static row tables of a
//! [`LayoutPreset`] and never mutated afterwards. With the mode toggle
//! enabled the preset is split into an alphabetic and a symbolic page that
//! occupy the same screen region.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::key::{Key, KeyAction, KeyCategory};

/// Which page of the keyboard is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Letters page
    #[default]
    Alphabetic,
    /// Digits, operators and punctuation page
    Symbolic,
}

impl Mode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Alphabetic => Self::Symbolic,
            Self::Symbolic => Self::Alphabetic,
        }
    }

    /// Lowercase name used in CLI output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Alphabetic => "alphabetic",
            Self::Symbolic => "symbolic",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabetic" | "alpha" | "abc" => Ok(Self::Alphabetic),
            "symbolic" | "symbol" | "123" => Ok(Self::Symbolic),
            other => anyhow::bail!("Unknown mode '{other}' (expected 'alphabetic' or 'symbolic')"),
        }
    }
}

/// Named key arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutPreset {
    /// Programmer section above the alphabet section
    #[default]
    Sectioned,
    /// Alphabet first, then digits, operators and punctuation rows
    Classic,
}

impl LayoutPreset {
    /// All presets.
    pub const ALL: [Self; 2] = [Self::Sectioned, Self::Classic];

    /// Kebab-case name used in config files and CLI arguments.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sectioned => "sectioned",
            Self::Classic => "classic",
        }
    }
}

impl fmt::Display for LayoutPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| anyhow::anyhow!("Unknown preset '{name}' (expected 'sectioned' or 'classic')"))
    }
}

/// One row of keys, left to right.
pub type Row = Vec<Key>;

const DIGITS: &str = "1234567890";
const DIGITS_ZERO_FIRST: &str = "0123456789";
const LETTERS_TOP: &str = "qwertyuiop";
const LETTERS_HOME: &str = "asdfghjkl";
const LETTERS_BOTTOM: &str = "zxcvbnm";

const SECTIONED_OPERATORS: &str = "+-*/=<>!&|";
const SECTIONED_BRACKETS: &str = "()[]{}'\";:";

const CLASSIC_OPERATORS: &str = "+-*/=()[]{}";
const CLASSIC_PUNCTUATION: &str = "<>.,;:_\"'";

/// Extra symbols that only fit on the symbolic page.
const SYMBOLIC_EXTRAS: &str = "`~%^?@#$\\.,";

fn chars(row: &str) -> Row {
    row.chars().map(Key::char).collect()
}

fn action(action: KeyAction) -> Key {
    Key::Action(action)
}

fn shift_row() -> Row {
    let mut row = vec![action(KeyAction::Shift)];
    row.extend(chars(LETTERS_BOTTOM));
    row.push(action(KeyAction::Backspace));
    row
}

fn alphabet_rows() -> Vec<Row> {
    vec![chars(LETTERS_TOP), chars(LETTERS_HOME), shift_row()]
}

/// Rows of the programmer section for a preset (without the alphabet).
fn symbol_rows(preset: LayoutPreset) -> Vec<Row> {
    match preset {
        LayoutPreset::Sectioned => vec![
            chars(DIGITS),
            chars(SECTIONED_OPERATORS),
            chars(SECTIONED_BRACKETS),
        ],
        LayoutPreset::Classic => vec![
            chars(DIGITS_ZERO_FIRST),
            chars(CLASSIC_OPERATORS),
            chars(CLASSIC_PUNCTUATION),
        ],
    }
}

/// Bottom action row of the single-page layouts.
fn single_page_bottom(preset: LayoutPreset) -> Row {
    match preset {
        LayoutPreset::Sectioned => vec![
            action(KeyAction::NextKeyboard),
            action(KeyAction::Space),
            Key::char('_'),
            action(KeyAction::Return),
        ],
        LayoutPreset::Classic => vec![
            action(KeyAction::NextKeyboard),
            action(KeyAction::Space),
            action(KeyAction::Return),
        ],
    }
}

fn single_page(preset: LayoutPreset) -> Vec<Row> {
    let mut rows = Vec::new();
    match preset {
        LayoutPreset::Sectioned => {
            rows.extend(symbol_rows(preset));
            rows.extend(alphabet_rows());
        }
        LayoutPreset::Classic => {
            rows.extend(alphabet_rows());
            rows.extend(symbol_rows(preset));
        }
    }
    rows.push(single_page_bottom(preset));
    rows
}

fn alphabetic_page() -> Vec<Row> {
    let mut rows = alphabet_rows();
    rows.push(vec![
        action(KeyAction::ModeToggle),
        action(KeyAction::NextKeyboard),
        action(KeyAction::Space),
        action(KeyAction::Return),
    ]);
    rows
}

fn symbolic_page(preset: LayoutPreset) -> Vec<Row> {
    let mut rows = symbol_rows(preset);
    let mut extras = chars(SYMBOLIC_EXTRAS);
    // Classic already carries '.' and ',' on its punctuation row
    if preset == LayoutPreset::Classic {
        extras.retain(|k| !matches!(k, Key::Char('.' | ',')));
    }
    extras.push(action(KeyAction::Backspace));
    rows.push(extras);

    let mut bottom = vec![
        action(KeyAction::ModeToggle),
        action(KeyAction::NextKeyboard),
        action(KeyAction::Space),
    ];
    if preset == LayoutPreset::Sectioned {
        bottom.push(Key::char('_'));
    }
    bottom.push(action(KeyAction::Return));
    rows.push(bottom);
    rows
}

/// Static description of the keys on the keyboard surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLayout {
    preset: LayoutPreset,
    mode_toggle: bool,
    alphabetic: Vec<Row>,
    symbolic: Vec<Row>,
}

impl KeyLayout {
    /// Builds the layout for a preset.
    ///
    /// With `mode_toggle` the preset is split into two pages; without it both
    /// modes resolve to the same single page.
    #[must_use]
    pub fn new(preset: LayoutPreset, mode_toggle: bool) -> Self {
        let (alphabetic, symbolic) = if mode_toggle {
            (alphabetic_page(), symbolic_page(preset))
        } else {
            let page = single_page(preset);
            (page.clone(), page)
        };

        Self {
            preset,
            mode_toggle,
            alphabetic,
            symbolic,
        }
    }

    /// Preset this layout was built from.
    #[must_use]
    pub const fn preset(&self) -> LayoutPreset {
        self.preset
    }

    /// Whether the layout has separate alphabetic and symbolic pages.
    #[must_use]
    pub const fn has_mode_toggle(&self) -> bool {
        self.mode_toggle
    }

    /// Ordered rows to render for a mode.
    #[must_use]
    pub fn rows_for(&self, mode: Mode) -> &[Row] {
        match mode {
            Mode::Alphabetic => &self.alphabetic,
            Mode::Symbolic => &self.symbolic,
        }
    }

    /// Iterates over every key of a mode's page in row order.
    pub fn keys(&self, mode: Mode) -> impl Iterator<Item = &Key> {
        self.rows_for(mode).iter().flatten()
    }

    /// Key at a row/column position, if any.
    #[must_use]
    pub fn key_at(&self, mode: Mode, row: usize, col: usize) -> Option<Key> {
        self.rows_for(mode).get(row)?.get(col).copied()
    }

    /// Position (row, column) of the first occurrence of a key.
    #[must_use]
    pub fn position_of(&self, mode: Mode, key: Key) -> Option<(usize, usize)> {
        self.rows_for(mode).iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|k| *k == key).map(|c| (r, c))
        })
    }

    /// Returns true if the key is on the given page.
    #[must_use]
    pub fn contains(&self, mode: Mode, key: Key) -> bool {
        self.position_of(mode, key).is_some()
    }

    /// Color category for a key identifier.
    ///
    /// Unknown identifiers fall back to `Punctuation` instead of failing.
    #[must_use]
    pub fn category_of(id: &str) -> KeyCategory {
        Key::parse(id).map_or(KeyCategory::Punctuation, |key| key.category())
    }
}

impl Default for KeyLayout {
    fn default() -> Self {
        Self::new(LayoutPreset::default(), false)
    }
}
