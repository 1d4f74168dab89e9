//! Panel 4 — Help: keyboard shortcuts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-4", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "u", "Open profile popover");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Card Grids (Metrics / Workflows / Insights)");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "g / G", "Jump to first / last card");
    key(&mut lines, "Enter", "Open detail popup for the cursor card");
    key(&mut lines, "Mouse click", "Select the clicked card");
    lines.push(Line::from(""));

    section(&mut lines, "Detail Popups");
    key(&mut lines, "Esc / q / Enter", "Close");
    key(&mut lines, "Click outside", "Close (backdrop)");
    lines.push(Line::from(""));

    section(&mut lines, "Profile Popover");
    key(&mut lines, "Esc", "Close (global Escape listener)");
    key(&mut lines, "", "Background scrolling is suspended while open");

    f.render_widget(Paragraph::new(lines), area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
