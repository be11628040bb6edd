// Tab navigation: keyboard and tab-bar mouse handling

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::ui::state::{AppState, Tab};
use crate::ui::tabs::tab_at_position;

pub(super) fn handle_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Tab | KeyCode::Right => {
            let next = state.active_tab.next();
            state.select_tab(next);
        }
        KeyCode::BackTab | KeyCode::Left => {
            let prev = state.active_tab.prev();
            state.select_tab(prev);
        }
        KeyCode::Char('1') => state.select_tab(Tab::Overview),
        KeyCode::Char('2') => state.select_tab(Tab::Time),
        KeyCode::Char('3') => state.select_tab(Tab::Skills),
        KeyCode::Char('4') => state.select_tab(Tab::Digital),
        KeyCode::Char('5') => state.select_tab(Tab::Analytics),
        _ => {}
    }
}

pub(super) fn handle_mouse(mouse: MouseEvent, state: &mut AppState) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let Some(bar) = state.tab_bar_area else {
            return;
        };
        let in_bar = mouse.row >= bar.y && mouse.row < bar.y + bar.height;
        if !in_bar {
            return;
        }
        if let Some(tab) = tab_at_position(mouse.column, bar) {
            state.select_tab(tab);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_digit_keys_jump_to_tabs() {
        let mut state = AppState::default();
        handle_key(key(KeyCode::Char('3')), &mut state);
        assert_eq!(state.active_tab, Tab::Skills);
        handle_key(key(KeyCode::Char('5')), &mut state);
        assert_eq!(state.active_tab, Tab::Analytics);
        handle_key(key(KeyCode::Char('1')), &mut state);
        assert_eq!(state.active_tab, Tab::Overview);
    }

    #[test]
    fn test_tab_key_cycles_forward() {
        let mut state = AppState::default();
        handle_key(key(KeyCode::Tab), &mut state);
        assert_eq!(state.active_tab, Tab::Time);
        handle_key(key(KeyCode::BackTab), &mut state);
        assert_eq!(state.active_tab, Tab::Overview);
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut state = AppState::default();
        handle_key(key(KeyCode::Char('z')), &mut state);
        assert_eq!(state.active_tab, Tab::Overview);
    }

    #[test]
    fn test_click_on_tab_bar_selects_tab() {
        let mut state = AppState::default();
        state.tab_bar_area = Some(Rect::new(0, 3, 120, 3));

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 17, // Inside "Time Management"
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(click, &mut state);
        assert_eq!(state.active_tab, Tab::Time);
    }

    #[test]
    fn test_click_outside_bar_does_nothing() {
        let mut state = AppState::default();
        state.tab_bar_area = Some(Rect::new(0, 3, 120, 3));

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 17,
            row: 20, // Below the bar
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(click, &mut state);
        assert_eq!(state.active_tab, Tab::Overview);
    }
}
