//! Top-level UI layout — active panel frame, status bar, popups on top.
//!
//! `draw` takes `&mut AppState` because the renderer owns the mouse hit map:
//! each frame it records where cards and the avatar landed so clicks can be
//! resolved against the geometry that was actually shown.

pub mod help_panel;
pub mod insights_panel;
pub mod metrics_panel;
pub mod overlays;
pub mod status_bar;
pub mod workflows_panel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use crate::app::{AppState, CardKey, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    app.hits.clear();
    app.popup_rect = None;

    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app);
    status_bar::render(f, status_area, app);

    // Popups on top: detail, then profile, then first-run welcome.
    if let Some(card) = app.selection.selected().copied() {
        let popup = match card {
            CardKey::Metric(i) => overlays::render_metric_detail(f, main_area, app, i),
            CardKey::Workflow(i) => overlays::render_workflow_detail(f, main_area, app, i),
            CardKey::Insight(i) => overlays::render_insight_detail(f, main_area, app, i),
        };
        app.popup_rect = Some(popup);
    }
    if app.profile_open() {
        app.popup_rect = Some(overlays::render_profile(f, main_area, &app.catalog.user));
    }
    if app.show_welcome {
        overlays::render_welcome(f, main_area);
    }
}

/// Draw the active panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &mut AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Metrics => metrics_panel::render(f, inner, app),
        Panel::Workflows => workflows_panel::render(f, inner, app),
        Panel::Insights => insights_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner),
    }
}

/// Compute a centered rect for popups.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
