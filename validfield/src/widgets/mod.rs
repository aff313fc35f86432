//! Widgets that make up a validated field.
//!
//! - [`BorderedInput`]: text input drawn on a bordered surface
//! - [`MessageLabel`]: status message shown under the input
//! - [`ValidationField`]: both of the above driven by a validation engine

mod field;
mod input;
mod label;

pub use field::{FieldEvent, FieldParts, ValidationField};
pub use input::BorderedInput;
pub use label::{Font, MessageLabel};
