//! Error types shared across the workspace.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A token outside a closed enumeration's declared set.
    #[error("unrecognized {field} value: {value:?}")]
    UnknownVariant { field: &'static str, value: String },
}
