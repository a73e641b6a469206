//! Keyboard widget for rendering the on-screen key rows

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::AppState;
use crate::models::{RgbColor, DISABLED_BRIGHTNESS};

/// Width of one key cell in terminal columns.
const KEY_WIDTH: u16 = 5;

/// Keyboard widget renders the visible keyboard page
pub struct KeyboardWidget;

impl KeyboardWidget {
    /// Render the keyboard widget
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let keyboard = &state.keyboard;

        if !keyboard.is_visible() {
            let hidden = Paragraph::new("Keyboard hidden (F4 to show)")
                .style(Style::default().fg(theme.text_muted))
                .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
            f.render_widget(hidden, area);
            return;
        }

        let ready = keyboard.is_ready();
        let shift_active = keyboard.state().shift_active();
        let rows = keyboard.rows();
        let max_cols = rows.iter().map(Vec::len).max().unwrap_or(0);

        let table_rows: Vec<Row> = rows
            .iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let cells: Vec<Cell> = row
                    .iter()
                    .enumerate()
                    .map(|(col_idx, key)| {
                        let is_selected =
                            row_idx == state.selected.row && col_idx == state.selected.col;

                        let mut rgb = state.palette.key_color(key, shift_active);
                        if !ready {
                            rgb = rgb.dim(DISABLED_BRIGHTNESS);
                        }

                        let style = if is_selected {
                            Style::default()
                                .fg(theme.background)
                                .bg(theme.accent)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(label_color(rgb)).bg(rgb.to_ratatui_color())
                        };

                        let label = Self::format_label(&keyboard.label_for(key));
                        Cell::from(label).style(style)
                    })
                    .collect();
                Row::new(cells)
            })
            .collect();

        let constraints = vec![Constraint::Length(KEY_WIDTH); max_cols];

        let title = if ready {
            format!(" Keyboard - {} ", keyboard.mode())
        } else {
            format!(" Keyboard - {} (not ready) ", keyboard.mode())
        };
        let border = if ready { theme.primary } else { theme.inactive };

        let table = Table::new(table_rows, constraints)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .column_spacing(1);

        f.render_widget(table, area);
    }

    /// Centers a key label in its cell, truncating long labels
    fn format_label(label: &str) -> String {
        let width = usize::from(KEY_WIDTH);
        let shown: String = label.chars().take(width).collect();
        format!("{shown:^width$}")
    }
}

fn label_color(background: RgbColor) -> Color {
    if background.prefers_dark_text() {
        Color::Black
    } else {
        Color::White
    }
}
