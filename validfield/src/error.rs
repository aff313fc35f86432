//! Error types for validation and field configuration.

use std::any::Any;

use thiserror::Error;

use crate::validation::TriggerKind;

/// Errors returned by [`ValidationEngine::validate`](crate::ValidationEngine::validate)
/// and the other operations that go through the owner thread.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A predicate panicked or its task was aborted.
    ///
    /// The in-flight validation is abandoned and nothing is committed.
    #[error("{kind} trigger #{index} failed: {message}")]
    PredicateFailed {
        /// Which trigger list the predicate belongs to.
        kind: TriggerKind,
        /// Position of the trigger within its list.
        index: usize,
        /// Panic message extracted from the payload.
        message: String,
    },

    /// The owner loop is gone, so the update could not be applied.
    #[error("owner thread is no longer accepting work")]
    OwnerGone,
}

/// Errors detected when building a field from a [`FieldConfig`](crate::FieldConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Border width is negative, NaN, or infinite.
    #[error("border width must be a finite, non-negative number (got {0})")]
    InvalidBorderWidth(f32),

    /// Message font has no usable line height.
    #[error("message font line height must be a finite, positive number (got {0})")]
    InvalidLineHeight(f32),

    /// Message gap is NaN or infinite.
    #[error("message gap must be a finite number (got {0})")]
    InvalidMessageGap(f32),
}

/// Extract a human-readable message from a panic payload.
///
/// Panics can contain either `&str` or `String` payloads. This function
/// attempts to extract either, falling back to a generic message.
pub fn extract_panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
