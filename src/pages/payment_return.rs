//! Payment-return page: polls the checkout session until it settles.
//!
//! SYSTEM CONTEXT
//! ==============
//! The external checkout redirects back here with `?session_id=<id>`.
//! Settlement is eventually consistent, so the page polls the status
//! endpoint on a fixed budget (see `state::payment`) and renders whatever
//! terminal state the machine reaches. The polling task is cancellable:
//! leaving the page releases the handle and no further attempt can fire.

use leptos::prelude::*;

use crate::state::payment::PollStatus;

#[cfg(feature = "hydrate")]
use crate::state::payment::{PaymentPoll, PollAction, PollHandle, PollOutcome};

/// Drive one polling task to a terminal state, unless cancelled first.
///
/// Attempts are strictly sequential; the next check is only scheduled
/// once the previous result has been recorded. The handle is re-checked
/// after every await so a torn-down view is never written to.
#[cfg(feature = "hydrate")]
async fn run_payment_poll(session_id: String, handle: PollHandle, status: RwSignal<PollStatus>) {
    let mut poll = PaymentPoll::new(session_id);
    loop {
        if handle.is_cancelled() {
            return;
        }
        let outcome = match crate::net::api::fetch_payment_status(&poll.session_id).await {
            Ok(resp) if resp.is_paid() => PollOutcome::Paid,
            Ok(_) => PollOutcome::Pending,
            Err(e) => {
                log::warn!("payment status check failed: {e}");
                PollOutcome::Failed
            }
        };
        if handle.is_cancelled() {
            return;
        }
        match poll.record(outcome) {
            PollAction::Settled => {
                status.set(poll.status);
                return;
            }
            PollAction::RetryAfter(delay) => {
                gloo_timers::future::sleep(delay).await;
            }
        }
    }
}

#[component]
pub fn PaymentReturnPage() -> impl IntoView {
    let status = RwSignal::new(PollStatus::Checking);

    #[cfg(feature = "hydrate")]
    {
        let query = leptos_router::hooks::use_query_map();
        let session_id = query
            .read_untracked()
            .get("session_id")
            .filter(|id| !id.is_empty());
        if let Some(session_id) = session_id {
            let handle = PollHandle::new();
            let task_handle = handle.clone();
            leptos::task::spawn_local(run_payment_poll(session_id, task_handle, status));
            on_cleanup(move || handle.cancel());
        }
    }

    view! {
        <div class="payment-page">
            <div class="payment-card">
                {move || match status.get() {
                    PollStatus::Checking => {
                        view! {
                            <div class="payment-card__spinner" aria-hidden="true"></div>
                            <p>"Processing payment..."</p>
                        }
                            .into_any()
                    }
                    PollStatus::Success => {
                        view! {
                            <h2>"Payment Successful!"</h2>
                            <p>
                                "Your appointment has been confirmed. The vet will contact you soon."
                            </p>
                            <a class="payment-card__action" href="/appointments">
                                "View Appointments"
                            </a>
                        }
                            .into_any()
                    }
                    PollStatus::Timeout | PollStatus::Error => {
                        view! {
                            <p>
                                "Payment verification in progress. Please check your appointments."
                            </p>
                            <a class="payment-card__action" href="/appointments">
                                "View Appointments"
                            </a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
