//! Appointment list item with status badges and an optional pay action.

use leptos::prelude::*;

use crate::net::types::Appointment;

fn status_class(status: &str) -> &'static str {
    match status {
        "confirmed" => "badge badge--confirmed",
        "pending" => "badge badge--pending",
        _ => "badge",
    }
}

/// One appointment row. When `on_pay` is provided and the payment is
/// still pending, a pay button is rendered; the vet-facing list omits it.
#[component]
pub fn AppointmentCard(
    appointment: Appointment,
    #[prop(optional, into)] on_pay: Option<Callback<String>>,
) -> impl IntoView {
    let counterpart = appointment
        .vet_name
        .clone()
        .map(|n| format!("Dr. {n}"))
        .or_else(|| appointment.owner_name.clone())
        .unwrap_or_else(|| "Appointment".to_owned());
    let payment_pending = appointment.payment_status == "pending";
    let payment_class = if payment_pending { "badge badge--unpaid" } else { "badge badge--paid" };
    let appointment_id = appointment.appointment_id.clone();
    let amount = appointment.amount;

    view! {
        <div class="appointment-card">
            <div class="appointment-card__details">
                <h3 class="appointment-card__title">{counterpart}</h3>
                <p>{format!("{} ({})", appointment.pet_name, appointment.pet_type)}</p>
                <p>{format!("{} at {}", appointment.appointment_date, appointment.appointment_time)}</p>
                <p class="appointment-card__reason">{appointment.reason.clone()}</p>
                <div class="appointment-card__badges">
                    <span class=status_class(&appointment.status)>{appointment.status.clone()}</span>
                    <span class=payment_class>
                        {format!("Payment: {}", appointment.payment_status)}
                    </span>
                </div>
            </div>
            <Show when=move || payment_pending && on_pay.is_some()>
                <button
                    class="appointment-card__pay"
                    on:click={
                        let appointment_id = appointment_id.clone();
                        move |_| {
                            if let Some(cb) = on_pay {
                                cb.run(appointment_id.clone());
                            }
                        }
                    }
                >
                    {format!("Pay ${amount}")}
                </button>
            </Show>
        </div>
    }
}
