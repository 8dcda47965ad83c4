use serde::{Deserialize, Serialize};
use shared_types::AppointmentStatus;

/// An appointment as the owning user sees it. Dates are `YYYY-MM-DD` and
/// times `HH:MM`; the repositories format them from the typed columns.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub appointment_date: String,
    pub appointment_time: String,
    pub service_type: Option<String>,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub duration_minutes: i32,
}

/// An appointment row in the admin console, joined with the requester's
/// display name. The name is None when the user row is gone.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppointmentWithClient {
    pub id: i32,
    pub client_name: Option<String>,
    pub appointment_date: String,
    pub appointment_time: String,
    pub service_type: Option<String>,
    pub status: AppointmentStatus,
}

/// A blocked interval on the admin availability roster.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UnavailableSlot {
    pub id: i32,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub reason: Option<String>,
}
