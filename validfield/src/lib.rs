//! Single-field text validation with colored borders.
//!
//! A [`ValidationField`] pairs a bordered text input with a status label.
//! When editing ends, its [`ValidationEngine`] runs the registered triggers,
//! picks a [`ValidationState`], and recolors the border and label on the
//! owner thread.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use validfield::prelude::*;
//!
//! let (owner, owner_loop) = owner::channel();
//! tokio::spawn(owner_loop.run());
//!
//! let config = FieldConfig::new(Color::rgb(0, 0, 0), EdgeSet::BOTTOM, 4.0)
//!     .error_color(Color::rgb(210, 77, 87))
//!     .valid_color(Color::rgb(101, 198, 187));
//! let field = ValidationField::new(frame, config, Arc::new(owner))?;
//! field.add_neutral_trigger(rules::blank());
//! field.add_error_trigger(rules::contains_ignore_case("lannister"), "No Lannisters allowed!");
//!
//! field.set_text("Cersei Lannister");
//! assert_eq!(field.validate().await?, ValidationState::Error);
//! ```

pub mod config;
pub mod error;
pub mod owner;
pub mod validation;
pub mod widgets;

pub use config::FieldConfig;
pub use error::{ConfigError, ValidationError};
pub use owner::{InlineScheduler, OwnerHandle, OwnerLoop, OwnerScheduler};
pub use validation::{FieldView, StateColors, ValidationEngine, ValidationState};
pub use widgets::{FieldEvent, ValidationField};

pub mod prelude {
    pub use crate::config::FieldConfig;
    pub use crate::error::{ConfigError, ValidationError};
    pub use crate::owner::{self, InlineScheduler, OwnerScheduler};
    pub use crate::validation::{
        FieldView, StateColors, ValidationEngine, ValidationState, rules,
    };
    pub use crate::widgets::{FieldEvent, Font, ValidationField};

    pub use bordered::{Color, Edge, EdgeSet, Rect};
}
