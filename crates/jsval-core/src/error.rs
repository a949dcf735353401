//! Error types for variant conversions, indexing and rendering.

use thiserror::Error;

use crate::variant::Tag;

/// Errors that can occur while working with variant values.
#[derive(Error, Debug)]
pub enum JsError {
    /// An operation needed a specific shape and the variant held another.
    /// `expected` names the accepted shape(s), `actual` is the held tag.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: &'static str, actual: Tag },

    /// A write was attempted through an `ElementReference` that has no
    /// backing slot (the index was out of range).
    #[error("cannot write through an absent element reference")]
    AbsentElement,

    /// JSON input could not be parsed or a value could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing rendered output to a sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl JsError {
    pub(crate) fn type_mismatch(expected: &'static str, actual: Tag) -> Self {
        tracing::debug!(expected, %actual, "type mismatch");
        JsError::TypeMismatch { expected, actual }
    }
}

/// Convenience alias used throughout jsval-core.
pub type Result<T> = std::result::Result<T, JsError>;
