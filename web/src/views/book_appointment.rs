use leptos::{prelude::*, task::spawn_local};
use shared_types::{booking_fields_complete, is_past_date, SERVICE_TYPES};
use thaw::{Button, ButtonType};

use crate::components::{ErrorNotice, RequireUser, SuccessNotice, TimeSlotPicker};
use crate::server::{book_appointment, get_blocked_ranges, get_booked_times};
use crate::session::use_session;
use crate::utils::dates::today_iso;

#[component]
pub fn BookAppointmentPage() -> impl IntoView {
    view! {
        <RequireUser>
            <BookingForm/>
        </RequireUser>
    }
}

#[component]
fn BookingForm() -> impl IntoView {
    let session = use_session();

    let selected_date = RwSignal::new(String::new());
    let selected_time = RwSignal::new(String::new());
    let service_type = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let submitting = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);
    let success_message = RwSignal::new(Option::<String>::None);

    let min_date = today_iso();

    // Booked times and blocked ranges for the chosen day. Re-reads when the
    // date changes; a failed read is logged and leaves the day looking open.
    let availability = Resource::new(
        move || (session.token.get(), selected_date.get()),
        |(token, date)| async move {
            let Some(token) = token else {
                return (Vec::new(), Vec::new());
            };
            if date.is_empty() {
                return (Vec::new(), Vec::new());
            }
            let booked = match get_booked_times(token.clone(), date.clone()).await {
                Ok(times) => times,
                Err(e) => {
                    leptos::logging::error!("Failed to load booked times: {}", e);
                    Vec::new()
                }
            };
            let blocked = match get_blocked_ranges(token, date).await {
                Ok(ranges) => ranges,
                Err(e) => {
                    leptos::logging::error!("Failed to load blocked ranges: {}", e);
                    Vec::new()
                }
            };
            (booked, blocked)
        },
    );

    let booked_times =
        Signal::derive(move || availability.get().map(|(booked, _)| booked).unwrap_or_default());
    let blocked_ranges = Signal::derive(move || {
        availability.get().map(|(_, blocked)| blocked).unwrap_or_default()
    });
    let availability_loading = Signal::derive(move || availability.get().is_none());

    let submit_booking = move |_| {
        error_message.set(None);
        success_message.set(None);

        let date = selected_date.get();
        let time = selected_time.get();
        let service = service_type.get();

        if !booking_fields_complete(&date, &time, &service) {
            error_message.set(Some("Please fill in all required fields".to_string()));
            return;
        }
        if is_past_date(&date, &today_iso()) {
            error_message.set(Some("Appointments cannot be booked in the past".to_string()));
            return;
        }
        let Some(token) = session.token.get() else {
            error_message.set(Some(
                "Your session has expired. Please sign in again.".to_string(),
            ));
            return;
        };

        submitting.set(true);
        let note_text = notes.get();
        let note_field = (!note_text.trim().is_empty()).then_some(note_text);

        spawn_local(async move {
            match book_appointment(token, date, time, service, note_field).await {
                Ok(_) => {
                    selected_date.set(String::new());
                    selected_time.set(String::new());
                    service_type.set(String::new());
                    notes.set(String::new());
                    success_message.set(Some(
                        "Your appointment has been booked successfully!".to_string(),
                    ));
                }
                Err(e) => {
                    leptos::logging::error!("Failed to book appointment: {}", e);
                    error_message.set(Some(
                        "Could not book the appointment. Please try again.".to_string(),
                    ));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="booking-container">
            <div class="booking-header">
                <h1>"Book an Appointment"</h1>
                <p>"Choose a date, an open time, and the service you need"</p>
            </div>

            <div class="booking-card">
                {move || success_message.get().map(|msg| view! { <SuccessNotice message=msg/> })}
                {move || error_message.get().map(|msg| view! { <ErrorNotice message=msg/> })}

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit_booking(());
                }>
                    <div class="form-group">
                        <label>"Date *"</label>
                        <input
                            type="date"
                            class="form-input"
                            min=min_date
                            prop:value=move || selected_date.get()
                            on:input=move |ev| selected_date.set(event_target_value(&ev))
                        />
                    </div>

                    <TimeSlotPicker
                        selected_date=selected_date
                        selected_time=selected_time
                        booked_times=booked_times
                        blocked_ranges=blocked_ranges
                        loading=availability_loading
                    />

                    <div class="form-group">
                        <label>"Service *"</label>
                        <select
                            class="form-input"
                            prop:value=move || service_type.get()
                            on:change=move |ev| {
                                service_type.set(event_target_value(&ev));
                            }
                        >
                            <option value="">"Select a service..."</option>
                            {SERVICE_TYPES
                                .iter()
                                .map(|service| {
                                    view! { <option value=*service>{*service}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label>"Notes"</label>
                        <textarea
                            class="form-input"
                            rows="3"
                            placeholder="Anything we should know ahead of the visit..."
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <Button
                        class="booking-submit-btn"
                        button_type=ButtonType::Submit
                        loading=Signal::from(submitting)
                    >
                        "Book Appointment"
                    </Button>
                </form>
            </div>
        </div>
    }
}
