//! Theme tokens and enum-keyed descriptors.
//!
//! Every closed enumeration maps to a fixed `Descriptor` (glyph + style),
//! including an explicit neutral default for `Unknown`, so an out-of-set
//! value renders as a visible placeholder instead of nothing.

use ratatui::style::{Color, Modifier, Style};

use pulseboard_core::model::{Category, Impact, Priority, TaskStatus, Trend};

// Palette
const BACKGROUND: Color = Color::Rgb(18, 18, 20);
const ACCENT: Color = Color::Rgb(99, 102, 241); // indigo
const POSITIVE: Color = Color::Rgb(34, 197, 94); // green
const NEGATIVE: Color = Color::Rgb(239, 68, 68); // red
const WARNING: Color = Color::Rgb(234, 179, 8); // yellow
const INFO: Color = Color::Rgb(59, 130, 246); // blue
const PURPLE: Color = Color::Rgb(147, 112, 219);
const ORANGE: Color = Color::Rgb(249, 115, 22);
const MUTED: Color = Color::Rgb(120, 120, 130);
const TEXT: Color = Color::Rgb(230, 230, 235);

pub fn background() -> Color {
    BACKGROUND
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// A fixed visual descriptor for an enum variant: the terminal stand-in for
/// icon + color class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub glyph: &'static str,
    pub style: Style,
}

/// Neutral placeholder for values outside the declared set.
pub fn unknown_descriptor() -> Descriptor {
    Descriptor {
        glyph: "?",
        style: muted(),
    }
}

pub fn trend_descriptor(trend: Trend) -> Descriptor {
    match trend {
        Trend::Up => Descriptor {
            glyph: "▲",
            style: positive(),
        },
        Trend::Down => Descriptor {
            glyph: "▼",
            style: negative(),
        },
        Trend::Neutral => Descriptor {
            glyph: "─",
            style: muted(),
        },
        Trend::Unknown => unknown_descriptor(),
    }
}

pub fn status_descriptor(status: TaskStatus) -> Descriptor {
    match status {
        TaskStatus::Pending => Descriptor {
            glyph: "◷",
            style: warning(),
        },
        TaskStatus::InProgress => Descriptor {
            glyph: "◉",
            style: Style::default().fg(INFO),
        },
        TaskStatus::Completed => Descriptor {
            glyph: "✓",
            style: positive(),
        },
        TaskStatus::Unknown => unknown_descriptor(),
    }
}

pub fn priority_descriptor(priority: Priority) -> Descriptor {
    match priority {
        Priority::High => Descriptor {
            glyph: "⚑",
            style: negative().add_modifier(Modifier::BOLD),
        },
        Priority::Medium => Descriptor {
            glyph: "⚑",
            style: warning(),
        },
        Priority::Low => Descriptor {
            glyph: "⚑",
            style: positive(),
        },
        Priority::Unknown => unknown_descriptor(),
    }
}

pub fn category_descriptor(category: Category) -> Descriptor {
    match category {
        Category::Marketing => Descriptor {
            glyph: "↗",
            style: Style::default().fg(PURPLE),
        },
        Category::Hr => Descriptor {
            glyph: "◫",
            style: Style::default().fg(INFO),
        },
        Category::Operations => Descriptor {
            glyph: "▦",
            style: Style::default().fg(ORANGE),
        },
        Category::Unknown => unknown_descriptor(),
    }
}

pub fn impact_style(impact: Impact) -> Style {
    match impact {
        Impact::Positive => positive(),
        Impact::Negative => negative(),
        Impact::Neutral => muted(),
        Impact::Unknown => muted(),
    }
}

/// Glyph for a metric card, keyed by the metric's label. Labels are open
/// strings rather than an enum, so the default case is load-bearing.
pub fn metric_glyph(label: &str) -> &'static str {
    match label {
        "Active Workflows" => "⚙",
        "AI Interactions" => "⚡",
        "Security Score" => "⛊",
        "Active Users" => "◫",
        _ => "•",
    }
}

/// Style for a signed percent change.
pub fn change_style(change: i32) -> Style {
    if change > 0 {
        positive()
    } else if change < 0 {
        negative()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_descriptors() {
        assert_eq!(trend_descriptor(Trend::Up).glyph, "▲");
        assert_eq!(trend_descriptor(Trend::Down).glyph, "▼");
        assert_eq!(trend_descriptor(Trend::Neutral).glyph, "─");
    }

    #[test]
    fn unknown_variants_render_neutral_placeholder() {
        assert_eq!(trend_descriptor(Trend::Unknown), unknown_descriptor());
        assert_eq!(
            status_descriptor(TaskStatus::Unknown),
            unknown_descriptor()
        );
        assert_eq!(
            priority_descriptor(Priority::Unknown),
            unknown_descriptor()
        );
        assert_eq!(
            category_descriptor(Category::Unknown),
            unknown_descriptor()
        );
        assert_eq!(impact_style(Impact::Unknown), muted());
    }

    #[test]
    fn priority_levels_differ_in_style_not_glyph() {
        let high = priority_descriptor(Priority::High);
        let low = priority_descriptor(Priority::Low);
        assert_eq!(high.glyph, low.glyph);
        assert_ne!(high.style, low.style);
    }

    #[test]
    fn metric_glyph_has_default() {
        assert_eq!(metric_glyph("Security Score"), "⛊");
        assert_eq!(metric_glyph("Something New"), "•");
    }

    #[test]
    fn change_style_sign() {
        assert_eq!(change_style(12), positive());
        assert_eq!(change_style(-2), negative());
        assert_eq!(change_style(0), muted());
    }
}
