//! Field configuration.

use bordered::{BorderSpec, Color, EdgeSet};

use crate::error::ConfigError;
use crate::validation::StateColors;
use crate::widgets::Font;

/// Default distance between the input and its message label.
pub const DEFAULT_MESSAGE_GAP: f32 = 5.0;

/// Configuration for a [`ValidationField`](crate::ValidationField).
///
/// State colors that are never set fall back to the initial border color.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Initial border: color, edges, and width.
    pub border: BorderSpec,

    pub neutral_color: Option<Color>,
    pub valid_color: Option<Color>,
    pub error_color: Option<Color>,
    pub editing_color: Option<Color>,

    /// Font used by the message label.
    pub message_font: Font,

    /// Vertical distance from the input's bottom to the message label.
    pub message_gap: f32,
}

impl FieldConfig {
    pub fn new(initial_color: Color, edges: EdgeSet, width: f32) -> Self {
        Self {
            border: BorderSpec::new(initial_color, edges, width),
            neutral_color: None,
            valid_color: None,
            error_color: None,
            editing_color: None,
            message_font: Font::default(),
            message_gap: DEFAULT_MESSAGE_GAP,
        }
    }

    pub fn neutral_color(mut self, color: Color) -> Self {
        self.neutral_color = Some(color);
        self
    }

    pub fn valid_color(mut self, color: Color) -> Self {
        self.valid_color = Some(color);
        self
    }

    pub fn error_color(mut self, color: Color) -> Self {
        self.error_color = Some(color);
        self
    }

    pub fn editing_color(mut self, color: Color) -> Self {
        self.editing_color = Some(color);
        self
    }

    pub fn message_font(mut self, font: Font) -> Self {
        self.message_font = font;
        self
    }

    pub fn message_gap(mut self, gap: f32) -> Self {
        self.message_gap = gap;
        self
    }

    /// Resolved state colors.
    pub fn colors(&self) -> StateColors {
        let initial = &self.border.color;
        let or_initial = |color: &Option<Color>| color.clone().unwrap_or_else(|| initial.clone());
        StateColors {
            neutral: or_initial(&self.neutral_color),
            valid: or_initial(&self.valid_color),
            error: or_initial(&self.error_color),
            editing: or_initial(&self.editing_color),
        }
    }

    /// Check that the numeric settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let width = self.border.width;
        if !width.is_finite() || width < 0.0 {
            return Err(ConfigError::InvalidBorderWidth(width));
        }
        let line_height = self.message_font.line_height;
        if !line_height.is_finite() || line_height <= 0.0 {
            return Err(ConfigError::InvalidLineHeight(line_height));
        }
        if !self.message_gap.is_finite() {
            return Err(ConfigError::InvalidMessageGap(self.message_gap));
        }
        Ok(())
    }
}
