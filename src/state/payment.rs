//! Payment-confirmation polling state machine.
//!
//! DESIGN
//! ======
//! After the external checkout redirects back, the payment record settles
//! asynchronously. The machine here is pure: the page drives it with one
//! network call per attempt and obeys the returned action. Status moves
//! one way only (`Checking` into exactly one terminal state) and the
//! attempt count is bounded, so a stuck payment cannot poll forever.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Attempt budget before the machine gives up with `Timeout`.
pub const MAX_POLL_ATTEMPTS: u32 = 5;

/// Fixed delay between consecutive status checks.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Observable polling status, rendered directly by the payment page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PollStatus {
    /// Still waiting for the payment record to settle.
    #[default]
    Checking,
    /// The backend reported the payment as paid.
    Success,
    /// Attempt budget exhausted without a paid status.
    Timeout,
    /// A status check failed outright (transport or non-2xx).
    Error,
}

impl PollStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Checking)
    }
}

/// Result of a single status check, as seen by the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// Backend reported `paid`.
    Paid,
    /// Backend answered but the payment is not settled yet.
    Pending,
    /// The check itself failed.
    Failed,
}

/// What the driving task should do after recording an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollAction {
    /// A terminal status was reached; stop polling.
    Settled,
    /// Schedule one more attempt after the given delay.
    RetryAfter(Duration),
}

/// State for one payment-return visit, keyed by the checkout session id.
#[derive(Clone, Debug)]
pub struct PaymentPoll {
    pub session_id: String,
    pub attempts: u32,
    pub status: PollStatus,
}

impl PaymentPoll {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            attempts: 0,
            status: PollStatus::Checking,
        }
    }

    /// Record one attempt's outcome and decide what happens next.
    ///
    /// Terminal states absorb further input: once settled, the machine
    /// never transitions again and `Settled` is returned unchanged.
    /// `Pending` retries until the attempt budget is spent, then times
    /// out; `Failed` settles into `Error` without consuming the budget.
    pub fn record(&mut self, outcome: PollOutcome) -> PollAction {
        if self.status.is_terminal() {
            return PollAction::Settled;
        }
        self.attempts += 1;
        match outcome {
            PollOutcome::Paid => {
                self.status = PollStatus::Success;
                PollAction::Settled
            }
            PollOutcome::Failed => {
                self.status = PollStatus::Error;
                PollAction::Settled
            }
            PollOutcome::Pending => {
                if self.attempts >= MAX_POLL_ATTEMPTS {
                    self.status = PollStatus::Timeout;
                    PollAction::Settled
                } else {
                    PollAction::RetryAfter(POLL_INTERVAL)
                }
            }
        }
    }
}

/// Cancellation handle for a polling task.
///
/// The page keeps one side and releases it on cleanup; the task checks
/// `is_cancelled` before every attempt and before every state write, so a
/// pending timer can never fire against a torn-down view.
#[derive(Clone, Debug, Default)]
pub struct PollHandle {
    cancelled: Arc<AtomicBool>,
}

impl PollHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
