//! Pulseboard TUI — card-grid terminal dashboard.
//!
//! Panels:
//! 1. Metrics — headline metric cards with trend glyphs
//! 2. Workflows — task rows with status, priority, due date
//! 3. Insights — AI insight cards with category and impact
//! 4. Help — keyboard shortcuts
//!
//! Selecting a card (Enter or mouse click) opens a detail popup; `u` or a
//! click on the avatar opens the profile popover, which holds the scroll
//! lock and the global Escape listener for exactly as long as it is open.

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;
