use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Instant;

use crate::catalog::FilterCategory;
use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_plain_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.detail().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.close_detail();
        }
        return;
    }

    match key.code {
        KeyCode::Tab => app.cycle_filter(1, now),
        KeyCode::BackTab => app.cycle_filter(-1, now),
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch as usize - '1' as usize;
            app.select_filter(FilterCategory::ALL[index], now);
        }
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Left => app.move_focus(-1),
        KeyCode::Right => app.move_focus(1),
        KeyCode::Up => app.move_focus_rows(-1),
        KeyCode::Down => app.move_focus_rows(1),
        KeyCode::Enter => app.activate_focused(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        app.on_click(mouse.column, mouse.row, now);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_plain_char(key: KeyEvent, needle: char) -> bool {
    key.code == KeyCode::Char(needle)
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
