//! Runtime side of the submission workflow.
//!
//! [`WorkflowDriver`] wraps a [`Workflow`] signal with the two resources a
//! submission owns: the progress ticker and the in-flight request. Both are
//! released on every exit transition and when the page unmounts.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::*;
use web_sys::AbortSignal;

use crate::config::{request_timeout_ms, Cadence};
use crate::services::{settle, RequestGuard};
use crate::types::{AppError, AppResult};
use crate::workflow::{Ticket, Workflow};

pub struct WorkflowDriver<R: 'static> {
    state: RwSignal<Workflow<R>>,
    cadence: Cadence,
    timeout_ms: u32,
    ticker: Rc<RefCell<Option<Interval>>>,
    in_flight: Rc<RefCell<Option<RequestGuard>>>,
}

impl<R: 'static> Clone for WorkflowDriver<R> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            cadence: self.cadence,
            timeout_ms: self.timeout_ms,
            ticker: Rc::clone(&self.ticker),
            in_flight: Rc::clone(&self.in_flight),
        }
    }
}

/// Create a driver owned by the current component.
pub fn use_workflow<R: 'static>(cadence: Cadence) -> WorkflowDriver<R> {
    let driver = WorkflowDriver {
        state: create_rw_signal(Workflow::new()),
        cadence,
        timeout_ms: request_timeout_ms(),
        ticker: Rc::new(RefCell::new(None)),
        in_flight: Rc::new(RefCell::new(None)),
    };

    let teardown = driver.clone();
    on_cleanup(move || teardown.release());

    driver
}

impl<R: 'static> WorkflowDriver<R> {
    pub fn state(&self) -> RwSignal<Workflow<R>> {
        self.state
    }

    /// Refuse a submission and show why.
    pub fn reject(&self, error: AppError) {
        log::warn!("⚠️ {}", error);
        self.state.update(|w| w.reject(error));
    }

    /// Start a submission unless one is already running.
    ///
    /// `request` receives the abort signal to attach to its fetch.
    pub fn submit<Fut>(&self, request: impl FnOnce(AbortSignal) -> Fut)
    where
        Fut: Future<Output = AppResult<R>> + 'static,
    {
        let Some(ticket) = self.state.try_update(Workflow::begin).flatten() else {
            log::debug!("Submission ignored: already in progress");
            return;
        };

        let guard = match RequestGuard::start(self.timeout_ms) {
            Ok(guard) => guard,
            Err(e) => {
                self.finish(ticket, Err(e));
                return;
            }
        };
        let signal = guard.signal();
        let watch = guard.watch();
        if let Some(previous) = self.in_flight.replace(Some(guard)) {
            previous.cancel();
        }
        self.start_ticker();

        let future = request(signal);
        let driver = self.clone();
        spawn_local(async move {
            let outcome = future.await;
            match settle(outcome, watch.reason(), driver.timeout_ms) {
                Some(outcome) => driver.finish(ticket, outcome),
                None => log::debug!("Dropping response of a cancelled request"),
            }
        });
    }

    fn finish(&self, ticket: Ticket, outcome: AppResult<R>) {
        let current = self
            .state
            .try_with_untracked(|w| w.is_current(ticket))
            .unwrap_or(false);
        if !current {
            return;
        }

        self.stop_ticker();
        self.in_flight.borrow_mut().take();

        match &outcome {
            Ok(_) => log::info!("✅ Submission complete"),
            Err(e) => log::error!("❌ Submission failed: {}", e),
        }
        self.state.update(|w| {
            w.finish(ticket, outcome);
        });
    }

    fn start_ticker(&self) {
        let state = self.state;
        let max_step = self.cadence.max_step;
        let interval = Interval::new(self.cadence.tick_ms, move || {
            let step = rand::random::<f64>() * max_step;
            state.try_update(|w| w.tick(step));
        });
        self.ticker.replace(Some(interval));
    }

    fn stop_ticker(&self) {
        // Dropping the handle clears the interval.
        self.ticker.borrow_mut().take();
    }

    /// Stop the ticker and abort any pending request.
    fn release(&self) {
        self.stop_ticker();
        if let Some(guard) = self.in_flight.borrow_mut().take() {
            log::info!("🚫 Aborting pending request");
            guard.cancel();
        }
    }
}
