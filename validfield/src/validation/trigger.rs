//! Triggers: predicates that map text to a validation state.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use log::{trace, warn};
use tokio::task::JoinError;

use super::ValidationState;
use crate::error::{ValidationError, extract_panic_message};

type SyncPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;
type AsyncPredicate = Arc<dyn Fn(String) -> BoxFuture<'static, bool> + Send + Sync>;

/// A test run against the field's text.
///
/// Sync predicates run on the blocking pool, async ones as their own task.
/// Either way the caller only sees a future to await.
#[derive(Clone)]
pub enum Predicate {
    Sync(SyncPredicate),
    Async(AsyncPredicate),
}

impl Predicate {
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Sync(Arc::new(f))
    }

    pub fn from_async<F, Fut>(f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        Self::Async(Arc::new(move |text| f(text).boxed()))
    }

    /// Submit the predicate for evaluation and wait for its answer.
    ///
    /// A panic inside the predicate comes back as `Err` with the panic
    /// message.
    pub fn evaluate(&self, text: Arc<str>) -> BoxFuture<'static, Result<bool, String>> {
        match self {
            Self::Sync(f) => {
                let f = Arc::clone(f);
                async move {
                    tokio::task::spawn_blocking(move || f(&*text))
                        .await
                        .map_err(join_failure)
                }
                .boxed()
            }
            Self::Async(f) => {
                let fut = f(text.to_string());
                async move { tokio::spawn(fut).await.map_err(join_failure) }.boxed()
            }
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync(_) => f.write_str("Predicate::Sync(..)"),
            Self::Async(_) => f.write_str("Predicate::Async(..)"),
        }
    }
}

fn join_failure(err: JoinError) -> String {
    if err.is_panic() {
        extract_panic_message(&*err.into_panic())
    } else {
        "predicate task was cancelled".to_string()
    }
}

/// Which list a trigger was registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    Neutral,
    Error,
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => f.write_str("neutral"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A predicate together with the state and message it produces on a match.
#[derive(Debug, Clone)]
pub struct Trigger {
    pub state: ValidationState,
    pub predicate: Predicate,
    pub message: Option<String>,
}

impl Trigger {
    pub fn neutral(predicate: Predicate) -> Self {
        Self {
            state: ValidationState::Neutral,
            predicate,
            message: None,
        }
    }

    pub fn error(predicate: Predicate, message: impl Into<String>) -> Self {
        Self {
            state: ValidationState::Error,
            predicate,
            message: Some(message.into()),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// The state and message a validation run settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub state: ValidationState,
    pub message: Option<String>,
}

impl Resolution {
    /// Result when no trigger matches.
    pub fn valid() -> Self {
        Self {
            state: ValidationState::Valid,
            message: None,
        }
    }

    fn from_trigger(trigger: &Trigger) -> Self {
        Self {
            state: trigger.state,
            message: trigger.message.clone(),
        }
    }
}

/// Neutral and error triggers, each kept in registration order.
#[derive(Debug, Clone, Default)]
pub struct TriggerLists {
    neutral: Vec<Trigger>,
    error: Vec<Trigger>,
}

impl TriggerLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_neutral(&mut self, trigger: Trigger) {
        self.neutral.push(trigger);
    }

    pub fn push_error(&mut self, trigger: Trigger) {
        self.error.push(trigger);
    }

    pub fn neutral(&self) -> &[Trigger] {
        &self.neutral
    }

    pub fn error(&self) -> &[Trigger] {
        &self.error
    }

    /// Run the triggers against `text` and return the first match.
    ///
    /// Neutral triggers are tried before error triggers, each list in
    /// registration order. Predicates run one at a time: the next one is not
    /// submitted until the previous one has answered. When nothing matches
    /// the result is [`Resolution::valid`].
    pub async fn resolve(&self, text: Arc<str>) -> Result<Resolution, ValidationError> {
        let lists = [
            (TriggerKind::Neutral, &self.neutral),
            (TriggerKind::Error, &self.error),
        ];

        for (kind, triggers) in lists {
            for (index, trigger) in triggers.iter().enumerate() {
                trace!("evaluating {kind} trigger #{index}");
                let matched = trigger
                    .predicate
                    .evaluate(Arc::clone(&text))
                    .await
                    .map_err(|message| {
                        warn!("{kind} trigger #{index} failed: {message}");
                        ValidationError::PredicateFailed {
                            kind,
                            index,
                            message,
                        }
                    })?;

                if matched {
                    trace!("{kind} trigger #{index} matched");
                    return Ok(Resolution::from_trigger(trigger));
                }
            }
        }

        Ok(Resolution::valid())
    }
}
