use super::*;

#[test]
fn new_poll_starts_checking_with_zero_attempts() {
    let poll = PaymentPoll::new("cs_123");
    assert_eq!(poll.status, PollStatus::Checking);
    assert_eq!(poll.attempts, 0);
    assert_eq!(poll.session_id, "cs_123");
}

#[test]
fn paid_on_first_attempt_settles_success_after_one_call() {
    let mut poll = PaymentPoll::new("cs_123");
    assert_eq!(poll.record(PollOutcome::Paid), PollAction::Settled);
    assert_eq!(poll.status, PollStatus::Success);
    assert_eq!(poll.attempts, 1);
}

#[test]
fn pending_retries_with_fixed_delay_until_budget_spent() {
    let mut poll = PaymentPoll::new("cs_123");
    for attempt in 1..MAX_POLL_ATTEMPTS {
        assert_eq!(poll.record(PollOutcome::Pending), PollAction::RetryAfter(POLL_INTERVAL));
        assert_eq!(poll.attempts, attempt);
        assert_eq!(poll.status, PollStatus::Checking);
    }
    assert_eq!(poll.record(PollOutcome::Pending), PollAction::Settled);
    assert_eq!(poll.status, PollStatus::Timeout);
    assert_eq!(poll.attempts, MAX_POLL_ATTEMPTS);
}

#[test]
fn paid_after_some_pending_attempts_settles_success() {
    let mut poll = PaymentPoll::new("cs_123");
    assert_eq!(poll.record(PollOutcome::Pending), PollAction::RetryAfter(POLL_INTERVAL));
    assert_eq!(poll.record(PollOutcome::Pending), PollAction::RetryAfter(POLL_INTERVAL));
    assert_eq!(poll.record(PollOutcome::Paid), PollAction::Settled);
    assert_eq!(poll.status, PollStatus::Success);
    assert_eq!(poll.attempts, 3);
}

#[test]
fn transport_failure_settles_error_immediately() {
    let mut poll = PaymentPoll::new("cs_123");
    assert_eq!(poll.record(PollOutcome::Failed), PollAction::Settled);
    assert_eq!(poll.status, PollStatus::Error);
    assert_eq!(poll.attempts, 1);
}

#[test]
fn terminal_states_absorb_further_input() {
    let mut poll = PaymentPoll::new("cs_123");
    poll.record(PollOutcome::Paid);
    let attempts = poll.attempts;
    assert_eq!(poll.record(PollOutcome::Pending), PollAction::Settled);
    assert_eq!(poll.record(PollOutcome::Failed), PollAction::Settled);
    assert_eq!(poll.status, PollStatus::Success);
    assert_eq!(poll.attempts, attempts);
}

#[test]
fn attempts_are_monotonic() {
    let mut poll = PaymentPoll::new("cs_123");
    let mut last = 0;
    for _ in 0..MAX_POLL_ATTEMPTS {
        poll.record(PollOutcome::Pending);
        assert!(poll.attempts >= last);
        last = poll.attempts;
    }
}

#[test]
fn only_checking_is_non_terminal() {
    assert!(!PollStatus::Checking.is_terminal());
    assert!(PollStatus::Success.is_terminal());
    assert!(PollStatus::Timeout.is_terminal());
    assert!(PollStatus::Error.is_terminal());
}

#[test]
fn cancelled_handle_reports_cancelled() {
    let handle = PollHandle::new();
    assert!(!handle.is_cancelled());
    let task_side = handle.clone();
    handle.cancel();
    assert!(task_side.is_cancelled());
}
