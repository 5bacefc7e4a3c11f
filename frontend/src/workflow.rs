//! Submission state machine shared by the embed and decode pages.
//!
//! ```text
//!            begin()                 finish(Ok)
//!   Upload ──────────▶ Processing ──────────────▶ Complete
//!     ▲                    │
//!     └────────────────────┘
//!          finish(Err)
//! ```
//!
//! The machine is plain data so it can be driven from Leptos signals in the
//! browser and from unit tests natively. Timers and requests live in
//! [`crate::pages::WorkflowDriver`].

use crate::config::PROGRESS_CAP;
use crate::types::AppError;

/// Phase of a workflow page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Upload,
    Processing,
    Complete,
}

/// Synthetic progress percentage in `[0, 100]`.
///
/// Grows while a request is pending but never reaches the cap on its own;
/// only [`SubmissionProgress::complete`] sets it to 100.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SubmissionProgress(f64);

impl SubmissionProgress {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Rounded percentage for display.
    pub fn percent(self) -> u8 {
        self.0.round().clamp(0.0, 100.0) as u8
    }

    pub fn advance(&mut self, step: f64) {
        if self.0 >= PROGRESS_CAP || !step.is_finite() {
            return;
        }
        self.0 = (self.0 + step.max(0.0)).min(PROGRESS_CAP);
    }

    pub fn complete(&mut self) {
        self.0 = 100.0;
    }

    pub fn reset(&mut self) {
        self.0 = 0.0;
    }
}

/// Identifies one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Local state of a workflow page.
#[derive(Clone, Debug, PartialEq)]
pub struct Workflow<R> {
    phase: Phase,
    progress: SubmissionProgress,
    result: Option<R>,
    error: Option<AppError>,
    attempt: u64,
}

impl<R> Default for Workflow<R> {
    fn default() -> Self {
        Self {
            phase: Phase::Upload,
            progress: SubmissionProgress::default(),
            result: None,
            error: None,
            attempt: 0,
        }
    }
}

impl<R> Workflow<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> SubmissionProgress {
        self.progress
    }

    /// Result of the last successful submission, only while complete.
    pub fn result(&self) -> Option<&R> {
        match self.phase {
            Phase::Complete => self.result.as_ref(),
            _ => None,
        }
    }

    /// Error of the last failed submission, only while on the upload screen.
    pub fn error(&self) -> Option<&AppError> {
        match self.phase {
            Phase::Upload => self.error.as_ref(),
            _ => None,
        }
    }

    /// Enter `Processing`.
    ///
    /// Returns `None` unless the page is on the upload screen, so repeated
    /// clicks cannot start a second request.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.phase != Phase::Upload {
            return None;
        }
        self.attempt += 1;
        self.phase = Phase::Processing;
        self.progress.reset();
        self.result = None;
        self.error = None;
        Some(Ticket(self.attempt))
    }

    /// Refuse a submission without leaving the upload screen.
    pub fn reject(&mut self, error: AppError) {
        if self.phase == Phase::Upload {
            self.error = Some(error);
        }
    }

    /// Advance the synthetic progress; ignored outside `Processing`.
    pub fn tick(&mut self, step: f64) {
        if self.phase == Phase::Processing {
            self.progress.advance(step);
        }
    }

    /// Whether `ticket` still identifies the pending attempt.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.phase == Phase::Processing && ticket.0 == self.attempt
    }

    /// Apply the outcome of an attempt.
    ///
    /// Returns `false` when the ticket is stale and nothing changed.
    pub fn finish(&mut self, ticket: Ticket, outcome: Result<R, AppError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match outcome {
            Ok(result) => {
                self.progress.complete();
                self.result = Some(result);
                self.phase = Phase::Complete;
            }
            Err(error) => {
                self.progress.reset();
                self.result = None;
                self.error = Some(error);
                self.phase = Phase::Upload;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_capped() {
        let mut p = SubmissionProgress::default();
        for _ in 0..50 {
            p.advance(12.0);
        }
        assert_eq!(p.value(), PROGRESS_CAP);
        p.advance(f64::NAN);
        p.advance(-5.0);
        assert_eq!(p.value(), PROGRESS_CAP);
        p.complete();
        assert_eq!(p.percent(), 100);
    }

    #[test]
    fn test_percent_rounds() {
        let mut p = SubmissionProgress::default();
        assert_eq!(p.percent(), 0);
        p.advance(41.6);
        assert_eq!(p.percent(), 42);
        p.advance(48.2);
        assert_eq!(p.percent(), 90);
        p.complete();
        assert_eq!(p.percent(), 100);
    }

    #[test]
    fn test_begin_only_once() {
        let mut wf: Workflow<String> = Workflow::new();
        assert!(wf.begin().is_some());
        assert_eq!(wf.phase(), Phase::Processing);
        assert!(wf.begin().is_none());
    }

    #[test]
    fn test_success_forces_full_progress() {
        let mut wf: Workflow<String> = Workflow::new();
        let ticket = wf.begin().unwrap();
        wf.tick(33.3);
        assert!(wf.finish(ticket, Ok("done".into())));
        assert_eq!(wf.phase(), Phase::Complete);
        assert_eq!(wf.progress().percent(), 100);
        assert_eq!(wf.result().map(String::as_str), Some("done"));
    }

    #[test]
    fn test_success_before_any_tick() {
        let mut wf: Workflow<u8> = Workflow::new();
        let ticket = wf.begin().unwrap();
        wf.finish(ticket, Ok(1));
        assert_eq!(wf.progress().value(), 100.0);
    }

    #[test]
    fn test_failure_returns_to_upload() {
        let mut wf: Workflow<String> = Workflow::new();
        let ticket = wf.begin().unwrap();
        wf.tick(50.0);
        wf.finish(ticket, Err(AppError::Network("connection refused".into())));

        assert_eq!(wf.phase(), Phase::Upload);
        assert_eq!(wf.progress().value(), 0.0);
        assert!(wf.result().is_none());
        assert!(matches!(wf.error(), Some(AppError::Network(_))));

        // Retriable, and the old error is cleared.
        assert!(wf.begin().is_some());
        assert!(wf.error().is_none());
    }

    #[test]
    fn test_ticks_ignored_when_idle() {
        let mut wf: Workflow<()> = Workflow::new();
        wf.tick(10.0);
        assert_eq!(wf.progress().value(), 0.0);
        let ticket = wf.begin().unwrap();
        wf.finish(ticket, Ok(()));
        wf.tick(10.0);
        assert_eq!(wf.progress().value(), 100.0);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut wf: Workflow<&str> = Workflow::new();
        let first = wf.begin().unwrap();
        wf.finish(first, Err(AppError::Timeout(1000)));
        let second = wf.begin().unwrap();

        assert!(!wf.finish(first, Ok("late")));
        assert_eq!(wf.phase(), Phase::Processing);
        assert!(wf.finish(second, Ok("fresh")));
        assert_eq!(wf.result(), Some(&"fresh"));
    }

    #[test]
    fn test_reject_keeps_upload_phase() {
        let mut wf: Workflow<()> = Workflow::new();
        wf.reject(AppError::Validation("Please enter a username".into()));
        assert_eq!(wf.phase(), Phase::Upload);
        assert_eq!(
            wf.error().map(ToString::to_string).as_deref(),
            Some("Please enter a username")
        );
    }
}
