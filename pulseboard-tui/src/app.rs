//! Application state — single-owner, main-thread only.
//!
//! All state transitions run synchronously in response to input events.
//! Detail popups are a pure projection of the one open selection; the
//! profile popover additionally owns the scroll-lock and Escape guards.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

use pulseboard_core::{Catalog, EscapeRegistry, ScrollLock, Selection};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Metrics,
    Workflows,
    Insights,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Metrics => 0,
            Panel::Workflows => 1,
            Panel::Insights => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Metrics),
            1 => Some(Panel::Workflows),
            2 => Some(Panel::Insights),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Metrics => "Metrics",
            Panel::Workflows => "Workflows",
            Panel::Insights => "Insights",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 4).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 3) % 4).unwrap()
    }
}

/// Status message severity. The dashboard has no I/O, so there is no error
/// level; unavailable actions surface as warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Key of a selectable card, across all three grids. At most one card is
/// ever selected process-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKey {
    Metric(usize),
    Workflow(usize),
    Insight(usize),
}

/// What a mouse click at some position would hit. Rebuilt every frame by the
/// renderer.
#[derive(Debug, Clone, Copy)]
pub enum HitTarget {
    Card(CardKey),
    Avatar,
}

#[derive(Debug, Clone, Copy)]
pub struct HitRegion {
    pub rect: Rect,
    pub target: HitTarget,
}

/// Guards held while the profile popover is open. Dropping this on any exit
/// path releases the scroll lock and removes the Escape listener.
#[derive(Debug)]
pub struct ProfileSession {
    _scroll: pulseboard_core::ScrollLockGuard,
    _escape: pulseboard_core::EscapeGuard,
}

/// Top-level application state.
pub struct AppState {
    pub catalog: Catalog,

    // Navigation
    pub active_panel: Panel,
    pub running: bool,
    pub show_welcome: bool,

    // Per-panel cursors
    pub metrics_cursor: usize,
    pub workflows_cursor: usize,
    pub insights_cursor: usize,

    // Modal state
    pub selection: Selection<CardKey>,
    pub profile: Option<ProfileSession>,
    pub scroll_lock: ScrollLock,
    pub escape_listeners: EscapeRegistry,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,

    // Mouse hit map for the last rendered frame
    pub hits: Vec<HitRegion>,
    pub popup_rect: Option<Rect>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            active_panel: Panel::Metrics,
            running: true,
            show_welcome: false,
            metrics_cursor: 0,
            workflows_cursor: 0,
            insights_cursor: 0,
            selection: Selection::new(),
            profile: None,
            scroll_lock: ScrollLock::new(),
            escape_listeners: EscapeRegistry::new(),
            status_message: None,
            hits: Vec::new(),
            popup_rect: None,
        }
    }

    /// Number of cards in the active panel's grid.
    pub fn card_count(&self) -> usize {
        match self.active_panel {
            Panel::Metrics => self.catalog.metrics.len(),
            Panel::Workflows => self.catalog.workflows.len(),
            Panel::Insights => self.catalog.insights.len(),
            Panel::Help => 0,
        }
    }

    pub fn cursor(&self) -> usize {
        match self.active_panel {
            Panel::Metrics => self.metrics_cursor,
            Panel::Workflows => self.workflows_cursor,
            Panel::Insights => self.insights_cursor,
            Panel::Help => 0,
        }
    }

    pub fn set_cursor(&mut self, row: usize) {
        match self.active_panel {
            Panel::Metrics => self.metrics_cursor = row,
            Panel::Workflows => self.workflows_cursor = row,
            Panel::Insights => self.insights_cursor = row,
            Panel::Help => {}
        }
    }

    /// The card under the active panel's cursor, if the panel has cards.
    pub fn cursor_card(&self) -> Option<CardKey> {
        let row = self.cursor();
        match self.active_panel {
            Panel::Metrics if row < self.catalog.metrics.len() => Some(CardKey::Metric(row)),
            Panel::Workflows if row < self.catalog.workflows.len() => {
                Some(CardKey::Workflow(row))
            }
            Panel::Insights if row < self.catalog.insights.len() => Some(CardKey::Insight(row)),
            _ => None,
        }
    }

    /// Open the detail popup for a card, replacing any open detail.
    pub fn select_card(&mut self, key: CardKey) {
        self.selection.select(key);
        let title = match key {
            CardKey::Metric(i) => self.catalog.metrics.get(i).map(|m| m.label.clone()),
            CardKey::Workflow(i) => self.catalog.workflows.get(i).map(|w| w.title.clone()),
            CardKey::Insight(i) => self.catalog.insights.get(i).map(|x| x.title.clone()),
        };
        if let Some(title) = title {
            self.set_status(format!("{title} — Esc to close"));
        }
    }

    /// Close the detail popup. Idempotent.
    pub fn dismiss_detail(&mut self) {
        self.selection.dismiss();
    }

    /// Open the profile popover, acquiring the scroll lock and registering
    /// the Escape listener. No-op if already open.
    pub fn open_profile(&mut self) {
        if self.profile.is_none() {
            self.profile = Some(ProfileSession {
                _scroll: self.scroll_lock.acquire(),
                _escape: self.escape_listeners.register(),
            });
        }
    }

    /// Close the profile popover; the dropped session releases both guards.
    pub fn close_profile(&mut self) {
        self.profile = None;
    }

    pub fn profile_open(&self) -> bool {
        self.profile.is_some()
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(Catalog::builtin())
    }

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Metrics.next(), Panel::Workflows);
        assert_eq!(Panel::Help.next(), Panel::Metrics);
        assert_eq!(Panel::Metrics.prev(), Panel::Help);
        assert_eq!(Panel::Workflows.prev(), Panel::Metrics);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..4 {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(4).is_none());
    }

    #[test]
    fn select_replaces_open_detail() {
        let mut app = app();
        app.select_card(CardKey::Metric(0));
        app.select_card(CardKey::Workflow(2));
        assert_eq!(app.selection.selected(), Some(&CardKey::Workflow(2)));
    }

    #[test]
    fn profile_holds_guards_exactly_while_open() {
        let mut app = app();
        assert!(!app.scroll_lock.is_locked());

        app.open_profile();
        assert!(app.scroll_lock.is_locked());
        assert_eq!(app.escape_listeners.listener_count(), 1);

        // Re-opening must not stack a second listener.
        app.open_profile();
        assert_eq!(app.escape_listeners.listener_count(), 1);

        app.close_profile();
        assert!(!app.scroll_lock.is_locked());
        assert_eq!(app.escape_listeners.listener_count(), 0);
    }

    #[test]
    fn guards_release_on_teardown() {
        let mut app = app();
        app.open_profile();
        let lock = app.scroll_lock.clone();
        drop(app);
        assert!(!lock.is_locked());
    }

    #[test]
    fn cursor_card_maps_to_active_panel() {
        let mut app = app();
        app.active_panel = Panel::Workflows;
        app.set_cursor(2);
        assert_eq!(app.cursor_card(), Some(CardKey::Workflow(2)));

        app.active_panel = Panel::Help;
        assert_eq!(app.cursor_card(), None);
    }
}
