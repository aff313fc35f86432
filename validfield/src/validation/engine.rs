//! The validation engine: triggers, current state, and the commit path.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use bordered::Color;
use log::debug;
use tokio::sync::oneshot;

use super::trigger::{Predicate, Resolution, Trigger, TriggerLists};
use super::{StateColors, ValidationState};
use crate::error::ValidationError;
use crate::owner::OwnerScheduler;

/// The visual side of a validated field.
///
/// The engine calls these on the owner thread only.
pub trait FieldView: Send + 'static {
    /// Repaint the border in `color`.
    fn paint_border(&mut self, color: &Color);

    /// Update the status message. `visible` is false when the message is
    /// missing or blank; `color` matches the border.
    fn show_message(&mut self, message: Option<&str>, visible: bool, color: &Color);
}

/// State that is only touched on the owner thread.
struct Committed<V> {
    state: ValidationState,
    message: Option<String>,
    colors: StateColors,
    view: V,
}

impl<V: FieldView> Committed<V> {
    fn apply(&mut self, resolution: Resolution) {
        self.state = resolution.state;
        self.message = resolution.message;

        let color = self.colors.for_state(self.state).clone();
        let visible = self
            .message
            .as_deref()
            .is_some_and(|message| !message.trim().is_empty());

        debug!(
            "commit state={} message={:?} color={}",
            self.state,
            self.message,
            color.to_hex()
        );

        self.view.paint_border(&color);
        self.view.show_message(self.message.as_deref(), visible, &color);
    }
}

/// Runs triggers against a field's text and applies the outcome to a view.
///
/// Overlapping calls to [`validate`](Self::validate) are not serialized:
/// each run commits whenever it finishes, so the last run to finish wins.
/// Callers that need strict ordering must await one run before starting the
/// next.
pub struct ValidationEngine<V> {
    triggers: RwLock<TriggerLists>,
    committed: Arc<Mutex<Committed<V>>>,
    owner: Arc<dyn OwnerScheduler>,
}

impl<V: FieldView> ValidationEngine<V> {
    /// Create an engine in the [`ValidationState::Neutral`] state.
    ///
    /// Nothing is painted until the first validation or editing event.
    pub fn new(view: V, colors: StateColors, owner: Arc<dyn OwnerScheduler>) -> Self {
        Self {
            triggers: RwLock::new(TriggerLists::new()),
            committed: Arc::new(Mutex::new(Committed {
                state: ValidationState::Neutral,
                message: None,
                colors,
                view,
            })),
            owner,
        }
    }

    // -------------------------------------------------------------------------
    // Triggers
    // -------------------------------------------------------------------------

    /// Add a trigger that resolves to [`ValidationState::Neutral`] with no message.
    pub fn add_neutral_trigger<F>(&self, f: F)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.push_neutral(Trigger::neutral(Predicate::sync(f)));
    }

    /// Add a neutral trigger that also shows a message.
    pub fn add_neutral_trigger_with_message<F>(&self, f: F, message: impl Into<String>)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.push_neutral(Trigger::neutral(Predicate::sync(f)).with_message(message));
    }

    /// Add a neutral trigger whose predicate is async.
    pub fn add_neutral_trigger_async<F, Fut>(&self, f: F)
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.push_neutral(Trigger::neutral(Predicate::from_async(f)));
    }

    /// Add a trigger that resolves to [`ValidationState::Error`] with `message`.
    pub fn add_error_trigger<F>(&self, f: F, message: impl Into<String>)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.push_error(Trigger::error(Predicate::sync(f), message));
    }

    /// Add an error trigger whose predicate is async.
    pub fn add_error_trigger_async<F, Fut>(&self, f: F, message: impl Into<String>)
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.push_error(Trigger::error(Predicate::from_async(f), message));
    }

    fn push_neutral(&self, trigger: Trigger) {
        self.triggers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push_neutral(trigger);
    }

    fn push_error(&self, trigger: Trigger) {
        self.triggers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push_error(trigger);
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Validate `text`, commit the outcome on the owner thread, and return
    /// the new state.
    ///
    /// Resolves once the commit has run. The owner loop must therefore be
    /// driven by something other than the task awaiting this future.
    pub async fn validate(&self, text: impl Into<String>) -> Result<ValidationState, ValidationError> {
        let text: Arc<str> = Arc::from(text.into());
        let triggers = self
            .triggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let resolution = triggers.resolve(text).await?;
        let state = resolution.state;

        let (done_tx, done_rx) = oneshot::channel();
        let committed = Arc::clone(&self.committed);
        self.owner.run_on_owner(Box::new(move || {
            lock(&committed).apply(resolution);
            let _ = done_tx.send(());
        }))?;

        done_rx.await.map_err(|_| ValidationError::OwnerGone)?;
        Ok(state)
    }

    /// The user started editing: paint the editing color.
    ///
    /// The current state and message are left alone.
    pub fn on_editing_began(&self) -> Result<(), ValidationError> {
        let committed = Arc::clone(&self.committed);
        self.owner.run_on_owner(Box::new(move || {
            let mut committed = lock(&committed);
            let color = committed.colors.editing.clone();
            debug!("editing began color={}", color.to_hex());
            committed.view.paint_border(&color);
        }))
    }

    /// The user stopped editing: validate the final text.
    pub async fn on_editing_ended(
        &self,
        text: impl Into<String>,
    ) -> Result<ValidationState, ValidationError> {
        self.validate(text).await
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn current_state(&self) -> ValidationState {
        lock(&self.committed).state
    }

    pub fn current_message(&self) -> Option<String> {
        lock(&self.committed).message.clone()
    }

    pub fn colors(&self) -> StateColors {
        lock(&self.committed).colors.clone()
    }

    /// Replace all colors. Takes effect on the next commit or editing event.
    pub fn set_colors(&self, colors: StateColors) {
        lock(&self.committed).colors = colors;
    }

    pub fn set_neutral_color(&self, color: Color) {
        lock(&self.committed).colors.neutral = color;
    }

    pub fn set_valid_color(&self, color: Color) {
        lock(&self.committed).colors.valid = color;
    }

    pub fn set_error_color(&self, color: Color) {
        lock(&self.committed).colors.error = color;
    }

    pub fn set_editing_color(&self, color: Color) {
        lock(&self.committed).colors.editing = color;
    }

    /// Read the view. Call from the owner thread.
    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&lock(&self.committed).view)
    }

    /// Mutate the view. Call from the owner thread.
    pub fn with_view_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut lock(&self.committed).view)
    }

    /// Run `f` against the view on the owner thread and wait for its result.
    ///
    /// Use this instead of [`with_view_mut`](Self::with_view_mut) when the
    /// caller may be on another thread.
    pub async fn with_view_on_owner<R, F>(&self, f: F) -> Result<R, ValidationError>
    where
        F: FnOnce(&mut V) -> R + Send + 'static,
        R: Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel();
        let committed = Arc::clone(&self.committed);
        self.owner.run_on_owner(Box::new(move || {
            let result = f(&mut lock(&committed).view);
            let _ = done_tx.send(result);
        }))?;

        done_rx.await.map_err(|_| ValidationError::OwnerGone)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
