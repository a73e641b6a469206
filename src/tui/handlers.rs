//! Input handling for the terminal keyboard.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::AppState;
use crate::models::{Key, KeyAction};

/// Handle a key press. Returns `Ok(true)` when the user quits.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Error overlay swallows everything until dismissed
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        return Ok(false);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Char('q' | 'Q') if ctrl => return Ok(true),
        KeyCode::Char('y' | 'Y') if ctrl => state.copy_to_clipboard(),
        KeyCode::Left if ctrl => move_cursor(state, false),
        KeyCode::Right if ctrl => move_cursor(state, true),
        KeyCode::Left => state.move_selection_horizontal(false),
        KeyCode::Right => state.move_selection_horizontal(true),
        KeyCode::Up => state.move_selection_vertical(false),
        KeyCode::Down => state.move_selection_vertical(true),
        KeyCode::Enter => state.tap_selected(),
        KeyCode::Backspace => state.tap(Key::Action(KeyAction::Backspace)),
        KeyCode::Tab => state.tap(Key::Action(KeyAction::Shift)),
        KeyCode::F(1) => state.show_help = !state.show_help,
        KeyCode::F(2) => state.toggle_appearance(),
        KeyCode::F(3) => state.toggle_host(),
        KeyCode::F(4) => state.toggle_surface(),
        KeyCode::Char(ch) if !ctrl => state.tap_char(ch),
        _ => {}
    }
    Ok(false)
}

fn move_cursor(state: &mut AppState, right: bool) {
    if let Some(field) = state.keyboard.host_mut() {
        if right {
            field.move_right();
        } else {
            field.move_left();
        }
    }
}
