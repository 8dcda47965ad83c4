use leptos::{prelude::*, task::spawn_local};
use shared_types::AppointmentStatus;
use thaw::{Button, ButtonType, Spinner};

use crate::components::{ErrorNotice, RequireAdmin, StatusBadge, SuccessNotice};
use crate::db::entities::{AppointmentWithClient, UnavailableSlot};
use crate::server::{
    add_unavailable_slot, delete_unavailable_slot, get_all_appointments, get_unavailable_slots,
    update_appointment_status,
};
use crate::session::use_session;
use crate::utils::dates::{display_time, format_short_date};

#[component]
pub fn AdminPanelPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminConsole/>
        </RequireAdmin>
    }
}

/// Two tab panels over the whole schedule: every appointment with its
/// requester, and the blocked-slot roster. Mutations re-fetch the affected
/// list on success; on failure the list is left as-is and a notice shows.
#[component]
fn AdminConsole() -> impl IntoView {
    let session = use_session();

    let active_tab = RwSignal::new("appointments");
    let appointments = RwSignal::new(Vec::<AppointmentWithClient>::new());
    let slots = RwSignal::new(Vec::<UnavailableSlot>::new());
    let loading = RwSignal::new(true);
    let error_message = RwSignal::new(Option::<String>::None);
    let success_message = RwSignal::new(Option::<String>::None);

    let block_date = RwSignal::new(String::new());
    let start_time = RwSignal::new(String::new());
    let end_time = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let saving_block = RwSignal::new(false);

    let fetch_appointments = move || {
        let Some(token) = session.token.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match get_all_appointments(token).await {
                Ok(list) => appointments.set(list),
                Err(e) => {
                    leptos::logging::error!("Failed to load appointments: {}", e);
                }
            }
            loading.set(false);
        });
    };

    let fetch_slots = move || {
        let Some(token) = session.token.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match get_unavailable_slots(token).await {
                Ok(list) => slots.set(list),
                Err(e) => {
                    leptos::logging::error!("Failed to load time blocks: {}", e);
                }
            }
        });
    };

    Effect::new(move |_| {
        fetch_appointments();
        fetch_slots();
    });

    let handle_status_change = move |appointment_id: i32, value: String| {
        let Ok(status) = value.parse::<AppointmentStatus>() else {
            return;
        };
        let Some(token) = session.token.get_untracked() else {
            return;
        };
        error_message.set(None);
        success_message.set(None);
        spawn_local(async move {
            match update_appointment_status(token, appointment_id, status).await {
                Ok(_) => {
                    success_message.set(Some("Appointment status updated".to_string()));
                    fetch_appointments();
                }
                Err(e) => {
                    leptos::logging::error!("Failed to update status: {}", e);
                    error_message.set(Some(
                        "Could not update the appointment status".to_string(),
                    ));
                }
            }
        });
    };

    let submit_block = move |_| {
        error_message.set(None);
        success_message.set(None);

        let date = block_date.get();
        let start = start_time.get();
        let end = end_time.get();
        if date.is_empty() || start.is_empty() || end.is_empty() {
            error_message.set(Some(
                "Please fill in the date and both times".to_string(),
            ));
            return;
        }
        let Some(token) = session.token.get_untracked() else {
            return;
        };

        saving_block.set(true);
        let reason_text = reason.get();
        let reason_field = (!reason_text.trim().is_empty()).then_some(reason_text);

        spawn_local(async move {
            match add_unavailable_slot(token, date, start, end, reason_field).await {
                Ok(_) => {
                    block_date.set(String::new());
                    start_time.set(String::new());
                    end_time.set(String::new());
                    reason.set(String::new());
                    success_message.set(Some("Time block added".to_string()));
                    fetch_slots();
                }
                Err(e) => {
                    leptos::logging::error!("Failed to add time block: {}", e);
                    error_message.set(Some("Could not add the time block".to_string()));
                }
            }
            saving_block.set(false);
        });
    };

    let handle_delete_slot = move |slot_id: i32| {
        let Some(token) = session.token.get_untracked() else {
            return;
        };
        error_message.set(None);
        success_message.set(None);
        spawn_local(async move {
            match delete_unavailable_slot(token, slot_id).await {
                Ok(_) => {
                    success_message.set(Some("Time block removed".to_string()));
                    fetch_slots();
                }
                Err(e) => {
                    leptos::logging::error!("Failed to remove time block: {}", e);
                    error_message.set(Some("Could not remove the time block".to_string()));
                }
            }
        });
    };

    view! {
        <div class="admin-container">
            <div class="admin-header">
                <h1>"Admin Console"</h1>
                <p class="admin-subtitle">"Manage appointments and availability"</p>
            </div>

            {move || error_message.get().map(|msg| view! { <ErrorNotice message=msg/> })}
            {move || success_message.get().map(|msg| view! { <SuccessNotice message=msg/> })}

            <div class="admin-tabs">
                <div class="tab-buttons">
                    <button
                        class="tab-button"
                        class:active=move || active_tab.get() == "appointments"
                        on:click=move |_| active_tab.set("appointments")
                    >
                        "Appointments"
                    </button>
                    <button
                        class="tab-button"
                        class:active=move || active_tab.get() == "availability"
                        on:click=move |_| active_tab.set("availability")
                    >
                        "Availability"
                    </button>
                </div>

                <div class="tab-content">
                    <Show when=move || active_tab.get() == "appointments">
                        <Show
                            when=move || !loading.get()
                            fallback=|| {
                                view! {
                                    <div class="admin-loading">
                                        <Spinner/>
                                        <p>"Loading appointments..."</p>
                                    </div>
                                }
                            }
                        >
                            <Show
                                when=move || !appointments.get().is_empty()
                                fallback=|| {
                                    view! {
                                        <div class="admin-empty-state">
                                            <p>"No appointments have been booked yet."</p>
                                        </div>
                                    }
                                }
                            >
                                <table class="admin-table">
                                    <thead>
                                        <tr>
                                            <th>"Client"</th>
                                            <th>"Date"</th>
                                            <th>"Time"</th>
                                            <th>"Service"</th>
                                            <th>"Status"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || {
                                            appointments
                                                .get()
                                                .into_iter()
                                                .map(|appointment| {
                                                    let appointment_id = appointment.id;
                                                    let current = appointment.status;
                                                    let client = appointment
                                                        .client_name
                                                        .unwrap_or_else(|| "N/A".to_string());
                                                    view! {
                                                        <tr>
                                                            <td>{client}</td>
                                                            <td>
                                                                {format_short_date(&appointment.appointment_date)}
                                                            </td>
                                                            <td>
                                                                {display_time(&appointment.appointment_time)
                                                                    .to_string()}
                                                            </td>
                                                            <td>
                                                                {appointment.service_type.unwrap_or_default()}
                                                            </td>
                                                            <td>
                                                                <StatusBadge status=current/>
                                                            </td>
                                                            <td>
                                                                <select
                                                                    class="admin-status-select"
                                                                    on:change=move |ev| {
                                                                        handle_status_change(
                                                                            appointment_id,
                                                                            event_target_value(&ev),
                                                                        );
                                                                    }
                                                                >
                                                                    {AppointmentStatus::ALL
                                                                        .iter()
                                                                        .map(|status| {
                                                                            view! {
                                                                                <option
                                                                                    value=status.as_str()
                                                                                    selected=*status == current
                                                                                >
                                                                                    {status.label()}
                                                                                </option>
                                                                            }
                                                                        })
                                                                        .collect::<Vec<_>>()}
                                                                </select>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        }}
                                    </tbody>
                                </table>
                            </Show>
                        </Show>
                    </Show>

                    <Show when=move || active_tab.get() == "availability">
                        <div class="admin-availability-grid">
                            <div class="admin-card">
                                <h3>"Add Time Block"</h3>
                                <p class="admin-card-subtitle">
                                    "Blocked times are withheld from booking"
                                </p>
                                <form on:submit=move |ev| {
                                    ev.prevent_default();
                                    submit_block(());
                                }>
                                    <div class="form-group">
                                        <label>"Date *"</label>
                                        <input
                                            type="date"
                                            class="form-input"
                                            prop:value=move || block_date.get()
                                            on:input=move |ev| block_date.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="form-row">
                                        <div class="form-group">
                                            <label>"Start time *"</label>
                                            <input
                                                type="time"
                                                class="form-input"
                                                prop:value=move || start_time.get()
                                                on:input=move |ev| start_time.set(event_target_value(&ev))
                                            />
                                        </div>
                                        <div class="form-group">
                                            <label>"End time *"</label>
                                            <input
                                                type="time"
                                                class="form-input"
                                                prop:value=move || end_time.get()
                                                on:input=move |ev| end_time.set(event_target_value(&ev))
                                            />
                                        </div>
                                    </div>
                                    <div class="form-group">
                                        <label>"Reason"</label>
                                        <input
                                            type="text"
                                            class="form-input"
                                            placeholder="e.g. Lunch break, holidays"
                                            prop:value=move || reason.get()
                                            on:input=move |ev| reason.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <Button
                                        class="admin-block-submit"
                                        button_type=ButtonType::Submit
                                        loading=Signal::from(saving_block)
                                    >
                                        "Add Block"
                                    </Button>
                                </form>
                            </div>

                            <div class="admin-card">
                                <h3>"Active Time Blocks"</h3>
                                <p class="admin-card-subtitle">
                                    "Times currently closed to booking"
                                </p>
                                <Show
                                    when=move || !slots.get().is_empty()
                                    fallback=|| {
                                        view! {
                                            <p class="admin-empty-state">"No active time blocks"</p>
                                        }
                                    }
                                >
                                    <div class="admin-block-list">
                                        {move || {
                                            slots
                                                .get()
                                                .into_iter()
                                                .map(|slot| {
                                                    let slot_id = slot.id;
                                                    view! {
                                                        <div class="admin-block-item">
                                                            <div class="admin-block-info">
                                                                <p class="admin-block-date">
                                                                    {format_short_date(&slot.date)}
                                                                </p>
                                                                <p class="admin-block-times">
                                                                    {format!(
                                                                        "{} - {}",
                                                                        display_time(&slot.start_time),
                                                                        display_time(&slot.end_time),
                                                                    )}
                                                                </p>
                                                                {slot
                                                                    .reason
                                                                    .map(|reason| {
                                                                        view! {
                                                                            <p class="admin-block-reason">{reason}</p>
                                                                        }
                                                                    })}
                                                            </div>
                                                            <button
                                                                class="admin-block-delete"
                                                                on:click=move |_| handle_delete_slot(slot_id)
                                                            >
                                                                "Remove"
                                                            </button>
                                                        </div>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        }}
                                    </div>
                                </Show>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
