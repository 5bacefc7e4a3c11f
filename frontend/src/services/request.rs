//! Abort handling for in-flight requests.
//!
//! A [`RequestGuard`] owns the `AbortController` passed to a fetch. It aborts
//! on timeout, or when the owning page cancels it on teardown, and records
//! which of the two happened so the caller can tell a timeout from a
//! cancellation once the fetch future resolves.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{AbortController, AbortSignal};

use crate::types::{AppError, AppResult};

/// Why a request was aborted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    TimedOut,
    Cancelled,
}

/// Abort controller plus an optional timeout, for one request.
pub struct RequestGuard {
    controller: AbortController,
    reason: Rc<Cell<Option<AbortReason>>>,
    _timeout: Option<Timeout>,
}

impl RequestGuard {
    /// Arm a guard. A `timeout_ms` of zero disables the timeout.
    pub fn start(timeout_ms: u32) -> AppResult<Self> {
        let controller = AbortController::new()
            .map_err(|e| AppError::Browser(format!("AbortController unavailable: {:?}", e)))?;
        let reason = Rc::new(Cell::new(None));

        let timeout = (timeout_ms > 0).then(|| {
            let controller = controller.clone();
            let reason = Rc::clone(&reason);
            Timeout::new(timeout_ms, move || {
                log::warn!("⏱️ Request timed out after {} ms", timeout_ms);
                mark(&reason, AbortReason::TimedOut);
                controller.abort();
            })
        });

        Ok(Self {
            controller,
            reason,
            _timeout: timeout,
        })
    }

    pub fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }

    /// Read-only view of the abort reason, for the task awaiting the fetch.
    pub fn watch(&self) -> AbortWatch {
        AbortWatch(Rc::clone(&self.reason))
    }

    /// Abort the request; its outcome will be discarded even if it had
    /// already timed out.
    pub fn cancel(self) {
        self.reason.set(Some(AbortReason::Cancelled));
        self.controller.abort();
    }
}

fn mark(reason: &Cell<Option<AbortReason>>, value: AbortReason) {
    if reason.get().is_none() {
        reason.set(Some(value));
    }
}

#[derive(Clone, Debug)]
pub struct AbortWatch(Rc<Cell<Option<AbortReason>>>);

impl AbortWatch {
    pub fn reason(&self) -> Option<AbortReason> {
        self.0.get()
    }
}

/// Reconcile a request outcome with the abort reason.
///
/// Cancelled requests yield `None`: nobody is left to show the result. A
/// failure after a timeout becomes [`AppError::Timeout`]; a response that
/// made it through before the abort is kept.
pub fn settle<T>(
    outcome: AppResult<T>,
    reason: Option<AbortReason>,
    timeout_ms: u32,
) -> Option<AppResult<T>> {
    match (reason, outcome) {
        (Some(AbortReason::Cancelled), _) => None,
        (Some(AbortReason::TimedOut), Err(_)) => Some(Err(AppError::Timeout(timeout_ms))),
        (_, outcome) => Some(outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_outcome_is_dropped() {
        assert!(settle(Ok(1), Some(AbortReason::Cancelled), 10).is_none());
        assert!(settle::<u8>(
            Err(AppError::Network("aborted".into())),
            Some(AbortReason::Cancelled),
            10
        )
        .is_none());
    }

    #[test]
    fn test_timeout_replaces_abort_error() {
        let settled = settle::<u8>(
            Err(AppError::Network("The user aborted a request.".into())),
            Some(AbortReason::TimedOut),
            30_000,
        );
        assert_eq!(settled, Some(Err(AppError::Timeout(30_000))));
    }

    #[test]
    fn test_success_survives_late_timeout() {
        assert_eq!(settle(Ok(7), Some(AbortReason::TimedOut), 5), Some(Ok(7)));
    }

    #[test]
    fn test_untouched_outcome_passes_through() {
        let err = AppError::Server {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(settle::<u8>(Err(err.clone()), None, 5), Some(Err(err)));
    }

    #[test]
    fn test_timeout_does_not_override_cancel() {
        let cell = Cell::new(Some(AbortReason::Cancelled));
        mark(&cell, AbortReason::TimedOut);
        assert_eq!(cell.get(), Some(AbortReason::Cancelled));
    }
}
