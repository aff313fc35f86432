//! Trigger-based validation for a single text field.
//!
//! A field's text is checked against two ordered trigger lists. Neutral
//! triggers run first, then error triggers; the first predicate that returns
//! `true` decides the outcome. If none match, the text is valid.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use validfield::validation::{ValidationEngine, rules};
//!
//! let engine = ValidationEngine::new(view, colors, Arc::new(owner_handle));
//! engine.add_neutral_trigger(rules::blank());
//! engine.add_error_trigger(rules::shorter_than(3), "Too short");
//!
//! let state = engine.validate("ab").await?;
//! assert!(state.is_error());
//! ```

mod engine;
pub mod rules;
mod state;
mod trigger;

pub use engine::{FieldView, ValidationEngine};
pub use state::{StateColors, ValidationState};
pub use trigger::{Predicate, Resolution, Trigger, TriggerKind, TriggerLists};
