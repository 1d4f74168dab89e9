//! Panel 1 — Metrics: headline metric cards in a 2x2 grid.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use pulseboard_core::model::Metric;

use crate::app::{AppState, CardKey, HitRegion, HitTarget};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut cells: Vec<Rect> = Vec::with_capacity(4);
    for row in rows.iter() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        cells.extend(cols.iter().copied());
    }

    for (i, metric) in app.catalog.metrics.iter().enumerate() {
        let Some(cell) = cells.get(i) else { break };
        let is_cursor = i == app.metrics_cursor;
        render_card(f, *cell, metric, is_cursor);
        app.hits.push(HitRegion {
            rect: *cell,
            target: HitTarget::Card(CardKey::Metric(i)),
        });
    }
}

fn render_card(f: &mut Frame, area: Rect, metric: &Metric, is_cursor: bool) {
    let border = if is_cursor {
        theme::accent()
    } else {
        theme::muted()
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let trend = theme::trend_descriptor(metric.trend);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", theme::metric_glyph(&metric.label)),
                theme::accent(),
            ),
            Span::styled(metric.label.clone(), theme::muted()),
            Span::raw("  "),
            Span::styled(trend.glyph, trend.style),
        ]),
        Line::from(""),
    ];

    let mut value_spans = vec![Span::styled(
        metric.value.to_string(),
        theme::text().add_modifier(Modifier::BOLD),
    )];
    // Zero change is not shown, matching the card contract.
    if metric.change != 0 {
        value_spans.push(Span::styled(
            format!("  {:+}%", metric.change),
            theme::change_style(metric.change),
        ));
    }
    lines.push(Line::from(value_spans));

    if is_cursor {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("[Enter] details", theme::muted())));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
