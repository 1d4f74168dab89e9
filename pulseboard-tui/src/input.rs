//! Input dispatch — overlays consume events first, then global keys, then
//! the active panel.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{AppState, HitTarget, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.show_welcome {
        app.show_welcome = false;
        return;
    }
    if app.profile_open() {
        handle_profile_key(app, key);
        return;
    }
    if app.selection.is_open() {
        handle_detail_key(app, key);
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Metrics; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Workflows; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Insights; return; }
        KeyCode::Char('4') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('u') => {
            app.open_profile();
            return;
        }
        _ => {}
    }

    // 3. Panel keys. Background scrolling is suspended while the scroll
    // lock is held.
    if app.scroll_lock.is_locked() {
        return;
    }
    handle_panel_key(app, key);
}

/// Profile popover: the registered Escape listener closes it; so do the
/// explicit close affordances.
fn handle_profile_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc if app.escape_listeners.wants_escape() => app.close_profile(),
        KeyCode::Char('q') | KeyCode::Enter => app.close_profile(),
        KeyCode::Char('e') => app.set_warning("Profile editing is not available"),
        KeyCode::Char('x') => app.set_warning("Logout is not available"),
        _ => {}
    }
}

fn handle_detail_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.dismiss_detail();
        }
        _ => {}
    }
}

fn handle_panel_key(app: &mut AppState, key: KeyEvent) {
    let count = app.card_count();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.cursor() + 1 < count {
                app.set_cursor(app.cursor() + 1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.set_cursor(app.cursor().saturating_sub(1));
        }
        KeyCode::Char('g') => {
            app.set_cursor(0);
        }
        KeyCode::Char('G') => {
            if count > 0 {
                app.set_cursor(count - 1);
            }
        }
        KeyCode::Enter => {
            if let Some(card) = app.cursor_card() {
                app.select_card(card);
            }
        }
        _ => {}
    }
}

/// Handle a mouse event. Click on a card selects it; a click outside an open
/// popup is the backdrop click and dismisses it.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let (col, row) = (mouse.column, mouse.row);

    if app.show_welcome {
        app.show_welcome = false;
        return;
    }

    // Popups swallow interior clicks; backdrop clicks dismiss.
    if app.profile_open() {
        if !inside(app.popup_rect, col, row) {
            app.close_profile();
        }
        return;
    }
    if app.selection.is_open() {
        if !inside(app.popup_rect, col, row) {
            app.dismiss_detail();
        }
        return;
    }

    // Hit-test the last rendered frame.
    let target = app
        .hits
        .iter()
        .find(|h| contains(h.rect, col, row))
        .map(|h| h.target);
    match target {
        Some(HitTarget::Card(key)) => app.select_card(key),
        Some(HitTarget::Avatar) => app.open_profile(),
        None => {}
    }
}

fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn inside(rect: Option<Rect>, col: u16, row: u16) -> bool {
    rect.is_some_and(|r| contains(r, col, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{CardKey, StatusLevel};
    use pulseboard_core::Catalog;

    fn app() -> AppState {
        AppState::new(Catalog::builtin())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn enter_selects_cursor_card() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.selection.selected(), Some(&CardKey::Metric(1)));
    }

    #[test]
    fn escape_dismisses_detail() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.selection.is_open());
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.selection.is_open());
    }

    #[test]
    fn scroll_keys_ignored_while_locked() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('u')));
        assert!(app.scroll_lock.is_locked());

        // j would normally move the metrics cursor.
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.metrics_cursor, 0);

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.scroll_lock.is_locked());
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.metrics_cursor, 1);
    }

    #[test]
    fn backdrop_click_dismisses_detail() {
        let mut app = app();
        app.select_card(CardKey::Insight(0));
        app.popup_rect = Some(Rect::new(10, 5, 40, 10));

        // Interior click keeps the popup open.
        handle_mouse(&mut app, click(12, 6));
        assert!(app.selection.is_open());

        // Backdrop click dismisses.
        handle_mouse(&mut app, click(0, 0));
        assert!(!app.selection.is_open());
    }

    #[test]
    fn backdrop_click_dismisses_profile() {
        let mut app = app();
        app.open_profile();
        app.popup_rect = Some(Rect::new(30, 7, 40, 14));

        // Interior click keeps the popover open and the guards held.
        handle_mouse(&mut app, click(35, 10));
        assert!(app.profile_open());
        assert!(app.scroll_lock.is_locked());

        // Backdrop click closes it and releases both guards.
        handle_mouse(&mut app, click(0, 0));
        assert!(!app.profile_open());
        assert!(!app.scroll_lock.is_locked());
        assert_eq!(app.escape_listeners.listener_count(), 0);
    }

    #[test]
    fn profile_action_keys_warn_without_closing() {
        let mut app = app();
        app.open_profile();

        handle_key(&mut app, press(KeyCode::Char('e')));
        assert!(app.profile_open());
        assert_eq!(
            app.status_message,
            Some((
                "Profile editing is not available".to_string(),
                StatusLevel::Warning
            ))
        );

        handle_key(&mut app, press(KeyCode::Char('x')));
        assert!(app.profile_open());
        assert_eq!(
            app.status_message,
            Some(("Logout is not available".to_string(), StatusLevel::Warning))
        );
    }

    #[test]
    fn card_click_selects_only_that_card() {
        let mut app = app();
        app.hits.push(crate::app::HitRegion {
            rect: Rect::new(0, 0, 20, 5),
            target: HitTarget::Card(CardKey::Metric(2)),
        });
        app.hits.push(crate::app::HitRegion {
            rect: Rect::new(20, 0, 20, 5),
            target: HitTarget::Card(CardKey::Metric(3)),
        });

        handle_mouse(&mut app, click(5, 2));
        assert_eq!(app.selection.selected(), Some(&CardKey::Metric(2)));
    }

    #[test]
    fn avatar_click_opens_profile() {
        let mut app = app();
        app.hits.push(crate::app::HitRegion {
            rect: Rect::new(70, 23, 8, 1),
            target: HitTarget::Avatar,
        });
        handle_mouse(&mut app, click(71, 23));
        assert!(app.profile_open());
        assert_eq!(app.escape_listeners.listener_count(), 1);
    }

    #[test]
    fn welcome_consumes_first_key() {
        let mut app = app();
        app.show_welcome = true;
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert!(!app.show_welcome);
        assert_eq!(app.metrics_cursor, 0);
    }
}
