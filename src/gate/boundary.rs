//! Fault boundary around presentation work.
//!
//! A boundary starts `Healthy`. The first render fault is reported to the
//! observer and moves it to `Faulted`; from then on every render returns the
//! fallback view without running the wrapped work. Only [`FaultBoundary::reset`]
//! brings it back, and it does not check whether the cause is gone.

use serde::Serialize;
use std::fmt;
use tracing::error;

const DEFAULT_TITLE: &str = "Something went wrong";
const DEFAULT_MESSAGE: &str = "An unexpected error occurred";
const RESET_LABEL: &str = "Try again";

/// An unrecoverable failure while rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderFault {
    message: String,
}

impl RenderFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RenderFault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Render fault: {}", self.message)
    }
}

impl std::error::Error for RenderFault {}

impl From<serde_json::Error> for RenderFault {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Receives every fault before it is suppressed.
pub trait FaultObserver {
    fn report(&self, fault: &RenderFault);
}

/// Logs faults at error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl FaultObserver for TracingObserver {
    fn report(&self, fault: &RenderFault) {
        error!(fault = %fault.message(), "Uncaught render fault");
    }
}

impl<F> FaultObserver for F
where
    F: Fn(&RenderFault),
{
    fn report(&self, fault: &RenderFault) {
        self(fault);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundaryState {
    Healthy,
    Faulted(RenderFault),
}

impl BoundaryState {
    #[must_use]
    pub fn fault(self, fault: RenderFault) -> Self {
        match self {
            // Already terminal; keep the first fault.
            Self::Faulted(first) => Self::Faulted(first),
            Self::Healthy => Self::Faulted(fault),
        }
    }

    #[must_use]
    pub fn reset(self) -> Self {
        Self::Healthy
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryKind {
    Reset,
}

/// The single action offered by the fallback view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecoveryAction {
    pub kind: RecoveryKind,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FallbackView {
    pub title: String,
    pub message: String,
    pub action: RecoveryAction,
}

impl FallbackView {
    /// Default view for `fault`, falling back to a generic message.
    #[must_use]
    pub fn for_fault(fault: &RenderFault) -> Self {
        let message = if fault.message().trim().is_empty() {
            DEFAULT_MESSAGE.to_string()
        } else {
            fault.message().to_string()
        };

        Self {
            title: DEFAULT_TITLE.to_string(),
            message,
            action: RecoveryAction {
                kind: RecoveryKind::Reset,
                label: RESET_LABEL.to_string(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered<V> {
    Content(V),
    Fallback(FallbackView),
}

pub struct FaultBoundary<O = TracingObserver> {
    state: BoundaryState,
    observer: O,
    fallback: Option<FallbackView>,
}

impl Default for FaultBoundary<TracingObserver> {
    fn default() -> Self {
        Self::new(TracingObserver)
    }
}

impl<O: FaultObserver> FaultBoundary<O> {
    pub fn new(observer: O) -> Self {
        Self {
            state: BoundaryState::Healthy,
            observer,
            fallback: None,
        }
    }

    /// Replace the default fallback view.
    #[must_use]
    pub fn with_fallback(mut self, view: FallbackView) -> Self {
        self.fallback = Some(view);
        self
    }

    #[must_use]
    pub fn state(&self) -> &BoundaryState {
        &self.state
    }

    #[must_use]
    pub fn is_faulted(&self) -> bool {
        matches!(self.state, BoundaryState::Faulted(_))
    }

    /// Run `child` unless the boundary is already faulted.
    ///
    /// A fault from `child` is reported, stored, and turned into the fallback view.
    pub fn render<V, F>(&mut self, child: F) -> Rendered<V>
    where
        F: FnOnce() -> Result<V, RenderFault>,
    {
        if let BoundaryState::Faulted(fault) = &self.state {
            return Rendered::Fallback(self.fallback_for(fault));
        }

        match child() {
            Ok(view) => Rendered::Content(view),
            Err(fault) => {
                let view = self.fallback_for(&fault);
                self.fault(fault);
                Rendered::Fallback(view)
            }
        }
    }

    /// Signal a fault from outside a render call.
    pub fn fault(&mut self, fault: RenderFault) {
        if self.is_faulted() {
            return;
        }
        self.observer.report(&fault);
        self.state = std::mem::replace(&mut self.state, BoundaryState::Healthy).fault(fault);
    }

    /// The recovery action: always returns to `Healthy`.
    pub fn reset(&mut self) {
        self.state = std::mem::replace(&mut self.state, BoundaryState::Healthy).reset();
    }

    fn fallback_for(&self, fault: &RenderFault) -> FallbackView {
        self.fallback
            .clone()
            .unwrap_or_else(|| FallbackView::for_fault(fault))
    }
}
