use std::fmt;

use bordered::Color;

/// Outcome of validating a field's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValidationState {
    /// Nothing to report yet. The state before the first validation.
    #[default]
    Neutral,
    /// No trigger matched.
    Valid,
    /// An error trigger matched.
    Error,
}

impl ValidationState {
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }

    pub fn is_error(self) -> bool {
        self == Self::Error
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Neutral => "neutral",
            Self::Valid => "valid",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Accent colors for each validation state, plus the editing color.
#[derive(Debug, Clone, PartialEq)]
pub struct StateColors {
    pub neutral: Color,
    pub valid: Color,
    pub error: Color,
    /// Shown while the user is editing; not tied to a state.
    pub editing: Color,
}

impl StateColors {
    /// Use one color for everything.
    pub fn uniform(color: Color) -> Self {
        Self {
            neutral: color.clone(),
            valid: color.clone(),
            error: color.clone(),
            editing: color,
        }
    }

    pub fn for_state(&self, state: ValidationState) -> &Color {
        match state {
            ValidationState::Neutral => &self.neutral,
            ValidationState::Valid => &self.valid,
            ValidationState::Error => &self.error,
        }
    }
}
