//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the widgets that draw the on-screen keyboard using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod handlers;
pub mod keyboard;
pub mod status_bar;
pub mod text_field;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::engine::{KeyOutput, Keyboard};
use crate::models::{Appearance, Key, KeyAction, KeyPalette};

pub use keyboard::KeyboardWidget;
pub use status_bar::StatusBar;
pub use text_field::TextField;
pub use theme::Theme;

/// Selected key on the visible page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Row index
    pub row: usize,
    /// Column index within the row
    pub col: usize,
}

/// Application state - single source of truth
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Keyboard controller, bound to the text field while attached
    pub keyboard: Keyboard<TextField>,
    /// Text field kept aside while detached from the keyboard
    pub parked_field: Option<TextField>,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Key colors for the current appearance
    pub palette: KeyPalette,
    /// Appearance forced with F2, overriding the configured theme mode
    pub appearance_override: Option<Appearance>,
    /// Currently selected key
    pub selected: Selection,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Whether the key binding help line is shown
    pub show_help: bool,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new application state with a fresh, attached text field.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let keyboard = Keyboard::with_host(config.keyboard, TextField::new());
        let appearance = Theme::resolve_appearance(config.ui.theme_mode);
        let palette = config.palette(appearance);
        let theme = Theme::from_palette(appearance, &palette);
        let show_help = config.ui.show_help_on_startup;

        Self {
            config,
            keyboard,
            parked_field: None,
            theme,
            palette,
            appearance_override: None,
            selected: Selection::default(),
            status_message: String::from("Ready"),
            error_message: None,
            show_help,
            should_quit: false,
        }
    }

    /// Re-derives the theme and key colors.
    ///
    /// Called every tick so an OS appearance change is picked up in `Auto` mode.
    pub fn refresh_theme(&mut self) {
        let appearance = self
            .appearance_override
            .unwrap_or_else(|| Theme::resolve_appearance(self.config.ui.theme_mode));
        self.palette = self.config.palette(appearance);
        self.theme = Theme::from_palette(appearance, &self.palette);
    }

    /// Current appearance.
    #[must_use]
    pub const fn appearance(&self) -> Appearance {
        self.theme.appearance()
    }

    /// Switches between dark and light key colors.
    pub fn toggle_appearance(&mut self) {
        let appearance = self.appearance().toggled();
        self.appearance_override = Some(appearance);
        self.refresh_theme();
        info!(?appearance, "appearance changed");
        self.set_status(format!("Appearance: {appearance:?}"));
    }

    /// Text field, attached or parked.
    #[must_use]
    pub fn field(&self) -> Option<&TextField> {
        self.keyboard.host().or(self.parked_field.as_ref())
    }

    /// Detaches the text field, or attaches it again.
    pub fn toggle_host(&mut self) {
        if let Some(field) = self.keyboard.detach() {
            self.parked_field = Some(field);
            self.set_status("Text field detached: key presses are dropped");
        } else {
            let field = self.parked_field.take().unwrap_or_default();
            self.keyboard.attach(field);
            self.set_status("Text field attached");
        }
    }

    /// Hides the keyboard surface, or shows it again.
    pub fn toggle_surface(&mut self) {
        if self.keyboard.is_visible() {
            self.keyboard.hide();
            self.set_status("Keyboard hidden");
        } else {
            self.keyboard.show();
            self.clamp_selection();
            self.set_status("Keyboard shown");
        }
    }

    /// Key under the selection on the visible page.
    #[must_use]
    pub fn selected_key(&self) -> Option<Key> {
        self.keyboard
            .layout()
            .key_at(self.keyboard.mode(), self.selected.row, self.selected.col)
    }

    /// Moves the selection by whole rows, keeping the column when possible.
    pub fn move_selection_vertical(&mut self, down: bool) {
        let rows = self.keyboard.rows().len();
        if rows == 0 {
            return;
        }
        self.selected.row = if down {
            (self.selected.row + 1) % rows
        } else {
            (self.selected.row + rows - 1) % rows
        };
        self.clamp_selection();
    }

    /// Moves the selection within the current row, wrapping at the ends.
    pub fn move_selection_horizontal(&mut self, right: bool) {
        let len = self
            .keyboard
            .rows()
            .get(self.selected.row)
            .map_or(0, Vec::len);
        if len == 0 {
            return;
        }
        self.selected.col = if right {
            (self.selected.col + 1) % len
        } else {
            (self.selected.col + len - 1) % len
        };
    }

    /// Keeps the selection on an existing key after the page changed.
    pub fn clamp_selection(&mut self) {
        let rows = self.keyboard.rows();
        let last_row = rows.len().saturating_sub(1);
        self.selected.row = self.selected.row.min(last_row);
        let len = rows.get(self.selected.row).map_or(0, Vec::len);
        self.selected.col = self.selected.col.min(len.saturating_sub(1));
    }

    /// Taps a key through the keyboard controller.
    pub fn tap(&mut self, key: Key) {
        match self.keyboard.commit_key(key) {
            Some(output) => {
                if matches!(output, KeyOutput::Mode(_)) {
                    self.clamp_selection();
                }
                self.set_status(describe_output(&output));
            }
            None => self.set_status(format!("Dropped '{}': keyboard is not ready", key.label(false))),
        }
    }

    /// Taps the selected key.
    pub fn tap_selected(&mut self) {
        if let Some(key) = self.selected_key() {
            self.tap(key);
        }
    }

    /// Taps the on-screen key matching a typed character.
    ///
    /// Letters match case-insensitively, so casing always comes from shift.
    pub fn tap_char(&mut self, ch: char) {
        let key = if ch == ' ' {
            Key::Action(KeyAction::Space)
        } else {
            Key::char(ch)
        };
        let mode = self.keyboard.mode();
        match self.keyboard.layout().position_of(mode, key) {
            Some((row, col)) => {
                self.selected = Selection { row, col };
                self.tap(key);
            }
            None => self.set_status(format!("'{ch}' is not on the {mode} page")),
        }
    }

    /// Copies the text field contents to the system clipboard.
    pub fn copy_to_clipboard(&mut self) {
        let text = self.field().map(|f| f.text().to_string()).unwrap_or_default();
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => self.set_status("Text copied to clipboard"),
            Err(e) => {
                warn!("clipboard copy failed: {e}");
                self.set_error(format!("Failed to copy to clipboard: {e}"));
            }
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

fn describe_output(output: &KeyOutput) -> String {
    match output {
        KeyOutput::Text(text) if text == " " => "Inserted space".to_string(),
        KeyOutput::Text(text) => format!("Inserted '{text}'"),
        KeyOutput::Newline => "Inserted newline".to_string(),
        KeyOutput::DeleteBackward => "Deleted one character".to_string(),
        KeyOutput::NextInputSource => "Requested next input source".to_string(),
        KeyOutput::Shift(true) => "Shift on".to_string(),
        KeyOutput::Shift(false) => "Shift off".to_string(),
        KeyOutput::Mode(mode) => format!("Showing {mode} page"),
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    info!("terminal keyboard started");
    loop {
        // Auto detects the OS appearance; Dark/Light and F2 are explicit
        state.refresh_theme();

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handlers::handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }
    info!("terminal keyboard stopped");

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let keyboard_height = if state.keyboard.is_visible() {
        state.keyboard.rows().len() as u16 + 2
    } else {
        3
    };

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Title bar
            Constraint::Min(4),                  // Text field
            Constraint::Length(keyboard_height), // Keyboard
            Constraint::Length(5),               // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_text_field(f, chunks[1], state);
    KeyboardWidget::render(f, chunks[2], state);
    StatusBar::render(f, chunks[3], state, &state.theme);

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with preset and page
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let options = state.keyboard.options();
    let page = if options.mode_toggle {
        format!(" [{}]", state.keyboard.mode())
    } else {
        String::new()
    };
    let title = format!(" {} - {}{}", crate::constants::APP_NAME, options.preset, page);

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render the text field with its cursor
fn render_text_field(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let attached = state.keyboard.host().is_some();
    let (before, after, switches) = state.field().map_or(("", "", 0), |field| {
        let (before, after) = field.split_at_cursor();
        (before, after, field.input_source_requests())
    });

    let cursor_style = if attached {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.inactive)
    };

    // Split on newlines so the cursor lands on the right line
    let mut lines: Vec<Line> = Vec::new();
    let mut current: Vec<Span> = Vec::new();
    for (i, part) in before.split('\n').enumerate() {
        if i > 0 {
            lines.push(Line::from(std::mem::take(&mut current)));
        }
        current.push(Span::raw(part));
    }
    current.push(Span::styled("▏", cursor_style));
    for (i, part) in after.split('\n').enumerate() {
        if i > 0 {
            lines.push(Line::from(std::mem::take(&mut current)));
        }
        current.push(Span::raw(part));
    }
    lines.push(Line::from(current));

    let detached = if attached { "" } else { "(detached) " };
    let title = if switches > 0 {
        format!(" Text field {detached}- input source switches: {switches} ")
    } else {
        format!(" Text field {detached}")
    };

    let border = if attached { theme.primary } else { theme.inactive };
    let widget = Paragraph::new(lines)
        .style(Style::default().fg(theme.text).bg(theme.background))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(widget, area);
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());

    f.render_widget(Clear, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ERROR ")
                .border_style(Style::default().fg(theme.error)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[0]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
