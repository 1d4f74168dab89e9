//! Pulseboard core — domain records, the built-in catalog, and the small
//! state machines the TUI is built on.
//!
//! Everything here is terminal-agnostic:
//! - Record types for metrics, workflow tasks, insights, and the user profile
//! - `Catalog` — the static, insertion-ordered dataset built once at startup
//! - `Selection` — the selectable-card-with-detail state machine
//! - `ScrollLock` / `EscapeRegistry` — scoped guards for page-wide effects

pub mod catalog;
pub mod error;
pub mod guard;
pub mod model;
pub mod selection;

pub use catalog::Catalog;
pub use error::Error;
pub use guard::{EscapeGuard, EscapeRegistry, ScrollLock, ScrollLockGuard};
pub use selection::Selection;
