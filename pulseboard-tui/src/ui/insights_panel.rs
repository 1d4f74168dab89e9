//! Panel 3 — Insights: AI insight cards in a horizontal strip.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use pulseboard_core::model::Insight;

use crate::app::{AppState, CardKey, HitRegion, HitTarget};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let n = app.catalog.insights.len().max(1) as u32;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, n); n as usize])
        .split(area);

    for (i, insight) in app.catalog.insights.iter().enumerate() {
        let Some(cell) = cols.get(i) else { break };
        let is_cursor = i == app.insights_cursor;
        render_card(f, *cell, insight, is_cursor);
        app.hits.push(HitRegion {
            rect: *cell,
            target: HitTarget::Card(CardKey::Insight(i)),
        });
    }
}

fn render_card(f: &mut Frame, area: Rect, insight: &Insight, is_cursor: bool) {
    let border = if is_cursor {
        theme::accent()
    } else {
        theme::muted()
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let category = theme::category_descriptor(insight.category);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", category.glyph), category.style),
            Span::styled(insight.category.label(), category.style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            insight.title.clone(),
            theme::text().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(insight.description.clone(), theme::muted())),
    ];

    if let Some(value) = &insight.value {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            value.clone(),
            theme::impact_style(insight.impact).add_modifier(Modifier::BOLD),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
