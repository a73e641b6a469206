//! Status bar widget for displaying keyboard state, messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Key binding help shown on the last status line.
const HELP: &[(&str, &str)] = &[
    ("←↑↓→", "Select"),
    ("Enter", "Tap"),
    ("Tab", "Shift"),
    ("Ctrl+←/→", "Cursor"),
    ("F2", "Appearance"),
    ("F3", "Attach"),
    ("F4", "Show/Hide"),
    ("Ctrl+Y", "Copy"),
    ("F1", "Help"),
    ("Esc", "Quit"),
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut content_lines: Vec<Line> = vec![Self::state_line(state, theme)];

        if let Some(error) = &state.error_message {
            content_lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ]));
        } else {
            content_lines.push(Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            )));
        }

        if state.show_help {
            content_lines.push(Self::help_line(theme));
        }

        let status = Paragraph::new(content_lines)
            .style(Style::default().bg(theme.background))
            .block(Block::default().borders(Borders::ALL).title(" Status "));

        f.render_widget(status, area);
    }

    /// Shift, mode, host and appearance indicators
    fn state_line<'a>(state: &AppState, theme: &Theme) -> Line<'a> {
        let keyboard = &state.keyboard;
        let flag = |on: bool| {
            if on {
                Style::default().fg(theme.active).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.inactive)
            }
        };
        let label = Style::default().fg(theme.primary);
        let shift = keyboard.state().shift_active();
        let attached = keyboard.host().is_some();
        let visible = keyboard.is_visible();

        Line::from(vec![
            Span::styled("Shift: ", label),
            Span::styled(if shift { "ON" } else { "off" }, flag(shift)),
            Span::raw("  "),
            Span::styled("Mode: ", label),
            Span::styled(keyboard.mode().to_string(), Style::default().fg(theme.text)),
            Span::raw("  "),
            Span::styled("Host: ", label),
            Span::styled(if attached { "attached" } else { "detached" }, flag(attached)),
            Span::raw("  "),
            Span::styled("Surface: ", label),
            Span::styled(if visible { "visible" } else { "hidden" }, flag(visible)),
            Span::raw("  "),
            Span::styled("Appearance: ", label),
            Span::styled(
                format!("{:?}", state.appearance()).to_lowercase(),
                Style::default().fg(theme.text_secondary),
            ),
        ])
    }

    fn help_line<'a>(theme: &Theme) -> Line<'a> {
        let mut spans = Vec::new();
        for (i, (keys, action)) in HELP.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            }
            spans.push(Span::styled(*keys, Style::default().fg(theme.accent)));
            spans.push(Span::styled(
                format!(" {action}"),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
