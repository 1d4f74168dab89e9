//! Bottom status bar — panel hints, last status message, avatar affordance.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, HitRegion, HitTarget, StatusLevel};
use crate::theme;

/// Width of the avatar affordance at the right edge.
const AVATAR_WIDTH: u16 = 10;

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " 1:Metrics 2:Workflows 3:Insights 4:Help",
        theme::muted(),
    ));
    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);

    // Avatar pinned to the right edge; clicking it opens the profile.
    if area.width > AVATAR_WIDTH {
        let avatar_rect = Rect {
            x: area.x + area.width - AVATAR_WIDTH,
            y: area.y,
            width: AVATAR_WIDTH,
            height: 1,
        };
        let initials = initials(&app.catalog.user.name);
        let label = Paragraph::new(Line::from(Span::styled(
            format!("({initials}) u"),
            theme::accent_bold(),
        )));
        f.render_widget(label, avatar_rect);
        app.hits.push(HitRegion {
            rect: avatar_rect,
            target: HitTarget::Avatar,
        });
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_name() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("Plato"), "P");
        assert_eq!(initials(""), "");
    }
}
