use leptos::prelude::*;
use shared_types::{AppointmentStatus, BlockedRange};

use crate::db::entities::{Appointment, AppointmentWithClient, UnavailableSlot};

/// Verifies the session token signature and expiry, returning the caller's
/// user id. Every operation below starts here; client-side gating is
/// never trusted.
#[cfg(feature = "ssr")]
fn authenticated_user_id(token: &str) -> Result<i32, ServerFnError> {
    use crate::utils::auth::SessionClaims;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(crate::server_auth::jwt_secret().as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| ServerFnError::new(format!("Invalid session: {}", e)))?;

    Ok(token_data.claims.user_id)
}

/// Admin operations re-check the flag against storage, not the claims, so
/// a revoked admin loses access as soon as their next call lands.
#[cfg(feature = "ssr")]
async fn require_admin(token: &str) -> Result<i32, ServerFnError> {
    use crate::db::users_repository;

    let user_id = authenticated_user_id(token)?;
    let user = users_repository::find_by_id(user_id)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to verify permissions: {}", e)))?;

    match user {
        Some(user) if user.is_admin => Ok(user_id),
        _ => Err(ServerFnError::new("Administrator access required")),
    }
}

#[cfg(feature = "ssr")]
fn parse_date(date: &str) -> Result<chrono::NaiveDate, ServerFnError> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| ServerFnError::new(format!("Invalid date {:?}: {}", date, e)))
}

#[cfg(feature = "ssr")]
fn parse_time(time: &str) -> Result<chrono::NaiveTime, ServerFnError> {
    chrono::NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|e| ServerFnError::new(format!("Invalid time {:?}: {}", time, e)))
}

/// Books a slot for the calling user. The owner comes from the token, the
/// status is always pending and the duration is left to the storage
/// default. No availability re-check happens here; two users racing for
/// the same slot both get a row.
#[server]
pub async fn book_appointment(
    token: String,
    date: String,
    time: String,
    service_type: String,
    notes: Option<String>,
) -> Result<i32, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::db::appointments_repository;

        let user_id = authenticated_user_id(&token)?;
        let date = parse_date(&date)?;
        let time = parse_time(&time)?;
        let notes = notes.as_deref().filter(|n| !n.trim().is_empty());

        appointments_repository::insert_appointment(user_id, date, time, &service_type, notes)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to book appointment: {}", e)))
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = (token, date, time, service_type, notes);
        Ok(0)
    }
}

/// The calling user's own appointments, earliest date first.
#[server]
pub async fn get_my_appointments(token: String) -> Result<Vec<Appointment>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::db::appointments_repository;

        let user_id = authenticated_user_id(&token)?;

        appointments_repository::appointments_for_user(user_id)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load appointments: {}", e)))
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = token;
        Ok(vec![])
    }
}

/// Times already taken on a date by appointments that still occupy their
/// slot. Any signed-in user may ask; the booking screen needs it.
#[server]
pub async fn get_booked_times(token: String, date: String) -> Result<Vec<String>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::db::appointments_repository;

        authenticated_user_id(&token)?;
        let date = parse_date(&date)?;

        appointments_repository::booked_times_for_date(date)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load booked times: {}", e)))
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = (token, date);
        Ok(vec![])
    }
}

/// Blocked intervals on a date, reduced to the range form the
/// availability check consumes.
#[server]
pub async fn get_blocked_ranges(
    token: String,
    date: String,
) -> Result<Vec<BlockedRange>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::db::slots_repository;

        authenticated_user_id(&token)?;
        let date = parse_date(&date)?;

        let slots = slots_repository::slots_for_date(date)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load blocked ranges: {}", e)))?;

        Ok(slots
            .into_iter()
            .map(|slot| BlockedRange::new(slot.start_time, slot.end_time))
            .collect())
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = (token, date);
        Ok(vec![])
    }
}

/// Every appointment with its requester's name, for the admin console.
#[server]
pub async fn get_all_appointments(
    token: String,
) -> Result<Vec<AppointmentWithClient>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::db::appointments_repository;

        require_admin(&token).await?;

        appointments_repository::all_appointments_with_clients()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load appointments: {}", e)))
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = token;
        Ok(vec![])
    }
}

/// Sets an appointment to any of the four statuses. Transitions are
/// deliberately unconstrained; cancelled back to confirmed is allowed.
#[server]
pub async fn update_appointment_status(
    token: String,
    appointment_id: i32,
    status: AppointmentStatus,
) -> Result<(), ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::db::appointments_repository;

        require_admin(&token).await?;

        appointments_repository::update_status(appointment_id, status)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to update status: {}", e)))
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = (token, appointment_id, status);
        Ok(())
    }
}

/// The full blocked-slot roster for the admin availability panel.
#[server]
pub async fn get_unavailable_slots(token: String) -> Result<Vec<UnavailableSlot>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::db::slots_repository;

        require_admin(&token).await?;

        slots_repository::all_slots()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load blocked slots: {}", e)))
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = token;
        Ok(vec![])
    }
}

/// Blocks `[start_time, end_time)` on a date. Overlapping ranges and
/// ranges that collide with existing bookings are accepted; an inverted
/// range is stored too and simply never matches a slot.
#[server]
pub async fn add_unavailable_slot(
    token: String,
    date: String,
    start_time: String,
    end_time: String,
    reason: Option<String>,
) -> Result<i32, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::db::slots_repository;

        require_admin(&token).await?;
        let date = parse_date(&date)?;
        let start_time = parse_time(&start_time)?;
        let end_time = parse_time(&end_time)?;
        let reason = reason.as_deref().filter(|r| !r.trim().is_empty());

        slots_repository::insert_slot(date, start_time, end_time, reason)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to block the slot: {}", e)))
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = (token, date, start_time, end_time, reason);
        Ok(0)
    }
}

/// Removes a blocked interval from the roster.
#[server]
pub async fn delete_unavailable_slot(token: String, slot_id: i32) -> Result<(), ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::db::slots_repository;

        require_admin(&token).await?;

        slots_repository::delete_slot(slot_id)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to remove the blocked slot: {}", e)))
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = (token, slot_id);
        Ok(())
    }
}
