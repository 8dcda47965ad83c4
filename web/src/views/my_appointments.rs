use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{LoadingView, RequireUser, StatusBadge};
use crate::db::entities::Appointment;
use crate::server::get_my_appointments;
use crate::session::use_session;
use crate::utils::dates::{display_time, format_long_date};

#[component]
pub fn MyAppointmentsPage() -> impl IntoView {
    view! {
        <RequireUser>
            <AppointmentList/>
        </RequireUser>
    }
}

#[component]
fn AppointmentList() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    // One read on entry. A failed read is logged and leaves the list empty.
    let appointments_resource = Resource::new(
        move || session.token.get(),
        |token| async move {
            match token {
                Some(token) => match get_my_appointments(token).await {
                    Ok(list) => list,
                    Err(e) => {
                        leptos::logging::error!("Failed to load appointments: {}", e);
                        Vec::new()
                    }
                },
                None => Vec::new(),
            }
        },
    );

    view! {
        <div class="appointments-container">
            <div class="appointments-header">
                <h1>"My Appointments"</h1>
                <p class="appointments-subtitle">
                    "Your booked appointments and their current status"
                </p>
            </div>

            <Suspense fallback=move || {
                view! { <LoadingView message=Some("Loading your appointments...".to_string())/> }
            }>
                {move || {
                    let navigate = navigate.clone();
                    appointments_resource
                        .get()
                        .map(|appointments| {
                            if appointments.is_empty() {
                                view! {
                                    <div class="appointments-empty">
                                        <h2>"No appointments yet"</h2>
                                        <p>
                                            "You haven't booked anything so far. Reserve your first visit to see it here."
                                        </p>
                                        <button
                                            class="btn-primary"
                                            on:click=move |_| {
                                                navigate("/book", Default::default());
                                            }
                                        >
                                            "Book an Appointment"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="appointments-grid">
                                        {appointments
                                            .into_iter()
                                            .map(|appointment| {
                                                view! { <AppointmentCard appointment=appointment/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn AppointmentCard(appointment: Appointment) -> impl IntoView {
    let title = appointment
        .service_type
        .clone()
        .unwrap_or_else(|| "Appointment".to_string());

    view! {
        <div class="appointment-card">
            <div class="appointment-card-header">
                <h3>{title}</h3>
                <StatusBadge status=appointment.status/>
            </div>
            <div class="appointment-card-when">
                <p class="appointment-date">{format_long_date(&appointment.appointment_date)}</p>
                <p class="appointment-time">
                    {format!(
                        "{} ({} min)",
                        display_time(&appointment.appointment_time),
                        appointment.duration_minutes,
                    )}
                </p>
            </div>
            {appointment
                .notes
                .map(|notes| {
                    view! {
                        <div class="appointment-notes">
                            <p class="appointment-notes-label">"Notes:"</p>
                            <p>{notes}</p>
                        </div>
                    }
                })}
        </div>
    }
}
