use leptos::prelude::*;
use shared_types::{is_slot_available, BlockedRange, TIME_SLOTS};
use thaw::{Spinner, SpinnerSize};

/// The fixed half-hour roster for one day. Slots that are booked or fall
/// inside a blocked range render disabled rather than disappearing;
/// picking an open slot updates the shared selection. With no date chosen
/// the picker offers nothing.
#[component]
pub fn TimeSlotPicker(
    selected_date: RwSignal<String>,
    selected_time: RwSignal<String>,
    booked_times: Signal<Vec<String>>,
    blocked_ranges: Signal<Vec<BlockedRange>>,
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="time-slot-picker">
            <div class="time-slot-picker-header">
                <h4>"Time"</h4>
                <p class="time-slot-picker-subtitle">
                    {move || {
                        let date = selected_date.get();
                        if date.is_empty() {
                            "Select a date to see available times".to_string()
                        } else {
                            format!("Openings for {}", date)
                        }
                    }}
                </p>
            </div>

            {move || {
                if selected_date.get().is_empty() {
                    view! { <div class="time-slot-picker-empty"></div> }.into_any()
                } else if loading.get() {
                    view! {
                        <div class="time-slot-picker-loading">
                            <Spinner size=SpinnerSize::Small/>
                            <p>"Checking availability..."</p>
                        </div>
                    }
                    .into_any()
                } else {
                    let booked = booked_times.get();
                    let blocked = blocked_ranges.get();
                    view! {
                        <div class="time-slot-grid">
                            {TIME_SLOTS
                                .iter()
                                .map(|slot| {
                                    let slot = *slot;
                                    let available = is_slot_available(slot, &booked, &blocked);
                                    view! {
                                        <button
                                            type="button"
                                            class="time-slot-option"
                                            class:selected=move || selected_time.get() == slot
                                            class:unavailable=!available
                                            disabled=!available
                                            on:click=move |_| {
                                                if available {
                                                    selected_time.set(slot.to_string());
                                                }
                                            }
                                        >
                                            <span class="time-slot-time">{slot}</span>
                                            {(!available)
                                                .then(|| {
                                                    view! {
                                                        <span class="time-slot-note">"Unavailable"</span>
                                                    }
                                                })}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
