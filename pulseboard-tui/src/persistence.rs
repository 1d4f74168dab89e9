//! App state persistence — JSON save/load across restarts.
//!
//! Only ambient UI state is persisted (active panel, welcome dismissal);
//! dashboard data is static and never written anywhere.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::{AppState, Panel};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub active_panel: Panel,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            active_panel: Panel::Metrics,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        active_panel: app.active_panel,
        welcome_dismissed: !app.show_welcome,
    }
}

/// Apply persisted state to AppState.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.active_panel = state.active_panel;
    app.show_welcome = !state.welcome_dismissed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulseboard_core::Catalog;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("pulseboard_persist_test");
        let path = dir.join("state.json");

        let state = PersistedState {
            active_panel: Panel::Insights,
            welcome_dismissed: true,
        };

        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.active_panel, Panel::Insights);
        assert!(loaded.welcome_dismissed);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert_eq!(loaded.active_panel, Panel::Metrics);
        assert!(!loaded.welcome_dismissed);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("pulseboard_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.active_panel, Panel::Metrics);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn apply_restores_welcome_state() {
        let mut app = AppState::new(Catalog::builtin());
        apply(&mut app, PersistedState::default());
        assert!(app.show_welcome);

        apply(
            &mut app,
            PersistedState {
                active_panel: Panel::Workflows,
                welcome_dismissed: true,
            },
        );
        assert!(!app.show_welcome);
        assert_eq!(app.active_panel, Panel::Workflows);
    }
}
