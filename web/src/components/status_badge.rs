use leptos::prelude::*;
use shared_types::AppointmentStatus;

/// Colored status chip. The class suffix is the stored status value, so
/// the stylesheet covers exactly the four known states.
#[component]
pub fn StatusBadge(status: AppointmentStatus) -> impl IntoView {
    view! {
        <span class=format!("status-badge status-{}", status.as_str())>{status.label()}</span>
    }
}
