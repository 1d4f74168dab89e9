//! Popup widgets — detail views, profile popover, first-run welcome.
//!
//! Each detail popup is a pure projection of the selected record's nested
//! fields; no popup keeps state of its own. Render functions return the
//! popup rect so clicks can be split into interior vs backdrop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use pulseboard_core::model::UserProfile;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome popup.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to Pulseboard ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Press 1-4 to switch panels",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Move the card cursor with j/k, open details with Enter",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Click any card with the mouse",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. Press u for your profile",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::muted())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Metric detail popup: description plus the breakdown rows.
pub fn render_metric_detail(f: &mut Frame, area: Rect, app: &AppState, idx: usize) -> Rect {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let Some(metric) = app.catalog.metrics.get(idx) else {
        return render_missing(f, popup, "Metric not found.");
    };

    let block = detail_block(format!(" {} Details ", metric.label));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        metric.details.description.clone(),
        theme::text(),
    )));
    lines.push(Line::from(""));

    for row in &metric.details.breakdown {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<24}", row.label), theme::muted()),
            Span::styled(row.value.to_string(), theme::accent()),
        ]));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    popup
}

/// Workflow detail popup: description, assignee/due/priority row, steps.
pub fn render_workflow_detail(f: &mut Frame, area: Rect, app: &AppState, idx: usize) -> Rect {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let Some(task) = app.catalog.workflows.get(idx) else {
        return render_missing(f, popup, "Workflow not found.");
    };

    let block = detail_block(format!(" {} ", task.title));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let priority = theme::priority_descriptor(task.priority);
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        task.description.clone(),
        theme::text(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Assignee: ", theme::muted()),
        Span::styled(task.assignee.clone(), theme::text()),
        Span::styled("   Due: ", theme::muted()),
        Span::styled(task.due_date.format("%b %d, %Y").to_string(), theme::text()),
        Span::styled("   ", theme::muted()),
        Span::styled(
            format!("{} {} priority", priority.glyph, task.priority.label()),
            priority.style,
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Workflow Steps",
        theme::accent_bold(),
    )));

    for step in &task.steps {
        let status = theme::status_descriptor(step.status);
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", status.glyph), status.style),
            Span::styled(step.name.clone(), theme::text()),
            Span::styled(format!("  ({})", step.status.label()), theme::muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    popup
}

/// Insight detail popup: key metrics and recommendations.
pub fn render_insight_detail(f: &mut Frame, area: Rect, app: &AppState, idx: usize) -> Rect {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let Some(insight) = app.catalog.insights.get(idx) else {
        return render_missing(f, popup, "Insight not found.");
    };

    let category = theme::category_descriptor(insight.category);
    let block = detail_block(format!(
        " {} {} ",
        category.glyph, insight.title
    ));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled("Key Metrics", theme::accent_bold())));
    for metric in &insight.details.metrics {
        let trend = theme::trend_descriptor(metric.trend);
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<24}", metric.label), theme::muted()),
            Span::styled(format!("{:>6} ", metric.value), trend.style),
            Span::styled(trend.glyph, trend.style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "AI Recommendations",
        theme::accent_bold(),
    )));
    for rec in &insight.details.recommendations {
        lines.push(Line::from(vec![
            Span::styled("  → ", theme::accent()),
            Span::styled(rec.clone(), theme::text()),
        ]));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    popup
}

/// Profile popover.
pub fn render_profile(f: &mut Frame, area: Rect, user: &UserProfile) -> Rect {
    let popup = centered_rect(40, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Profile [Esc]close ")
        .title_style(theme::accent_bold());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            user.name.clone(),
            theme::text().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(user.email.clone(), theme::muted())),
        Line::from(Span::styled(user.role.clone(), theme::accent())),
        Line::from(""),
        Line::from(Span::styled(user.avatar.clone(), theme::muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[e]", theme::accent()),
            Span::styled(" Edit Profile  ", theme::muted()),
            Span::styled("[x]", theme::accent()),
            Span::styled(" Logout", theme::muted()),
        ]),
    ];

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .centered();
    f.render_widget(para, inner);
    popup
}

fn detail_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(title)
        .title_style(theme::accent_bold())
}

fn render_missing(f: &mut Frame, popup: Rect, msg: &str) -> Rect {
    let block = detail_block(" Details ".to_string());
    let inner = block.inner(popup);
    f.render_widget(block, popup);
    f.render_widget(
        Paragraph::new(Span::styled(msg.to_string(), theme::muted())),
        inner,
    );
    popup
}
