//! Panel 2 — Workflows: task rows with status glyph, priority badge, due
//! date, assignee.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, CardKey, HitRegion, HitTarget};
use crate::theme;

/// Rows per task in the list, including the spacer.
const ROW_HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Active Workflows",
        theme::accent_bold(),
    )));
    lines.push(Line::from(""));

    for (i, task) in app.catalog.workflows.iter().enumerate() {
        let is_cursor = i == app.workflows_cursor;
        let status = theme::status_descriptor(task.status);
        let priority = theme::priority_descriptor(task.priority);

        let title_style = if is_cursor {
            theme::text().add_modifier(Modifier::REVERSED)
        } else {
            theme::text()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{} ", status.glyph), status.style),
            Span::styled(format!("{:<36}", task.title), title_style),
            Span::styled(format!(" {} {:<7}", priority.glyph, task.priority.label()), priority.style),
            Span::styled(
                format!(" due {}", task.due_date.format("%b %d, %Y")),
                theme::muted(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("Assigned to {}", task.assignee), theme::muted()),
        ]));
        lines.push(Line::from(""));

        // The two content rows plus spacer form the clickable region.
        let y = area.y + 2 + (i as u16) * ROW_HEIGHT;
        if y < area.y + area.height {
            app.hits.push(HitRegion {
                rect: Rect {
                    x: area.x,
                    y,
                    width: area.width,
                    height: ROW_HEIGHT.min(area.y + area.height - y),
                },
                target: HitTarget::Card(CardKey::Workflow(i)),
            });
        }
    }

    lines.push(Line::from(Span::styled(
        "[j/k] move  [Enter] open details",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}
