//! A bordered text input with a validation engine and a message label.

use std::future::Future;
use std::sync::Arc;

use bordered::{Buffer, Color, Rect};
use log::debug;

use super::{BorderedInput, Font, MessageLabel};
use crate::config::FieldConfig;
use crate::error::{ConfigError, ValidationError};
use crate::owner::OwnerScheduler;
use crate::validation::{FieldView, ValidationEngine, ValidationState};

/// Events a host forwards from its text control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The control gained focus and editing started.
    EditingBegan,
    /// The control lost focus.
    EditingEnded,
    /// The text changed.
    Changed(String),
}

/// Everything a validated field draws: the bordered input and its label.
#[derive(Debug, Clone)]
pub struct FieldParts {
    pub input: BorderedInput,
    pub label: MessageLabel,
    message_gap: f32,
}

impl FieldParts {
    /// Place the label below the input's current frame.
    pub fn reframe(&mut self) {
        self.label.place_below(self.input.frame(), self.message_gap);
    }

    pub fn rasterize(&self, buf: &mut Buffer) {
        self.input.rasterize(buf);
        self.label.rasterize(buf);
    }
}

impl FieldView for FieldParts {
    fn paint_border(&mut self, color: &Color) {
        self.input.set_border_color(color.clone());
    }

    fn show_message(&mut self, message: Option<&str>, visible: bool, color: &Color) {
        self.label.set_text(message);
        self.label.set_hidden(!visible);
        self.label.set_color(color.clone());
    }
}

/// A text field that validates itself when editing ends.
///
/// The sync methods that read or change the input and label touch them
/// directly and must be called on the owner thread. The async methods and
/// [`on_editing_began`](Self::on_editing_began) go through the owner
/// scheduler and can be called from anywhere.
pub struct ValidationField {
    engine: ValidationEngine<FieldParts>,
}

impl ValidationField {
    /// Build a field at `frame` and paint its initial border.
    pub fn new(
        frame: Rect,
        config: FieldConfig,
        owner: Arc<dyn OwnerScheduler>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut parts = FieldParts {
            input: BorderedInput::new(frame, config.border.clone()),
            label: MessageLabel::new(config.message_font),
            message_gap: config.message_gap,
        };
        parts.reframe();

        debug!(
            "field created frame={:?} edges={:?} width={}",
            frame, config.border.edges, config.border.width
        );

        Ok(Self {
            engine: ValidationEngine::new(parts, config.colors(), owner),
        })
    }

    pub fn engine(&self) -> &ValidationEngine<FieldParts> {
        &self.engine
    }

    pub fn add_neutral_trigger<F>(&self, f: F)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.engine.add_neutral_trigger(f);
    }

    pub fn add_neutral_trigger_with_message<F>(&self, f: F, message: impl Into<String>)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.engine.add_neutral_trigger_with_message(f, message);
    }

    pub fn add_neutral_trigger_async<F, Fut>(&self, f: F)
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.engine.add_neutral_trigger_async(f);
    }

    pub fn add_error_trigger<F>(&self, f: F, message: impl Into<String>)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.engine.add_error_trigger(f, message);
    }

    pub fn add_error_trigger_async<F, Fut>(&self, f: F, message: impl Into<String>)
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.engine.add_error_trigger_async(f, message);
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Feed a host event into the field.
    ///
    /// Text changes are applied on the owner thread before this returns.
    /// Returns the new state when the event ran a validation.
    pub async fn handle_event(
        &self,
        event: FieldEvent,
    ) -> Result<Option<ValidationState>, ValidationError> {
        match event {
            FieldEvent::EditingBegan => {
                self.on_editing_began()?;
                Ok(None)
            }
            FieldEvent::EditingEnded => self.on_editing_ended().await.map(Some),
            FieldEvent::Changed(text) => {
                self.engine
                    .with_view_on_owner(move |parts| parts.input.set_text(text))
                    .await?;
                Ok(None)
            }
        }
    }

    pub fn on_editing_began(&self) -> Result<(), ValidationError> {
        self.engine.on_editing_began()
    }

    pub async fn on_editing_ended(&self) -> Result<ValidationState, ValidationError> {
        let text = self.owner_text().await?;
        self.engine.on_editing_ended(text).await
    }

    /// Validate the field's current text.
    pub async fn validate(&self) -> Result<ValidationState, ValidationError> {
        let text = self.owner_text().await?;
        self.engine.validate(text).await
    }

    async fn owner_text(&self) -> Result<String, ValidationError> {
        self.engine
            .with_view_on_owner(|parts| parts.input.text().to_string())
            .await
    }

    // -------------------------------------------------------------------------
    // Text and layout
    // -------------------------------------------------------------------------

    pub fn text(&self) -> String {
        self.engine.with_view(|parts| parts.input.text().to_string())
    }

    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.engine
            .with_view_mut(|parts| parts.input.set_text(text));
    }

    pub fn frame(&self) -> Rect {
        self.engine.with_view(|parts| parts.input.frame())
    }

    /// Resize the input after a layout pass. Call [`reframe`](Self::reframe)
    /// afterwards to move the label.
    pub fn set_frame(&self, frame: Rect) {
        self.engine
            .with_view_mut(|parts| parts.input.set_frame(frame));
    }

    /// Recompute the label frame from the input frame and the label font.
    pub fn reframe(&self) {
        self.engine.with_view_mut(FieldParts::reframe);
    }

    /// Change the message font and reframe the label to its line height.
    pub fn set_message_font(&self, font: Font) {
        self.engine.with_view_mut(|parts| {
            parts.label.set_font(font);
            parts.reframe();
        });
    }

    pub fn message_font(&self) -> Font {
        self.engine.with_view(|parts| parts.label.font())
    }

    pub fn message_frame(&self) -> Rect {
        self.engine.with_view(|parts| parts.label.frame())
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn state(&self) -> ValidationState {
        self.engine.current_state()
    }

    pub fn message(&self) -> Option<String> {
        self.engine.current_message()
    }

    /// Snapshot of what the field currently draws.
    pub fn parts(&self) -> FieldParts {
        self.engine.with_view(FieldParts::clone)
    }

    pub fn rasterize(&self, buf: &mut Buffer) {
        self.engine.with_view(|parts| parts.rasterize(buf));
    }
}
