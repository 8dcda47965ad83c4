use super::entities::{Appointment, AppointmentWithClient};
#[cfg(feature = "ssr")]
use chrono::{NaiveDate, NaiveTime};
#[cfg(feature = "ssr")]
use shared_types::AppointmentStatus;
#[cfg(feature = "ssr")]
use sqlx::Row;

#[cfg(feature = "ssr")]
type DbResult<T> = Result<T, sqlx::Error>;

#[cfg(feature = "ssr")]
fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(feature = "ssr")]
fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(feature = "ssr")]
fn decode_status(raw: String) -> DbResult<AppointmentStatus> {
    raw.parse::<AppointmentStatus>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

/// Insert a new appointment for a user. Status always starts out pending
/// and the duration comes from the column default.
#[cfg(feature = "ssr")]
pub async fn insert_appointment(
    user_id: i32,
    date: NaiveDate,
    time: NaiveTime,
    service_type: &str,
    notes: Option<&str>,
) -> DbResult<i32> {
    let pool = crate::db::pool::get_pool();

    let row = sqlx::query(
        "INSERT INTO appointments (user_id, appointment_date, appointment_time, service_type, notes, status)
         VALUES ($1, $2, $3, $4, $5, 'pending')
         RETURNING id",
    )
    .bind(user_id)
    .bind(date)
    .bind(time)
    .bind(service_type)
    .bind(notes)
    .fetch_one(pool)
    .await?;

    Ok(row.get::<i32, _>("id"))
}

/// All appointments belonging to one user, earliest date first.
#[cfg(feature = "ssr")]
pub async fn appointments_for_user(user_id: i32) -> DbResult<Vec<Appointment>> {
    let pool = crate::db::pool::get_pool();

    let rows = sqlx::query(
        "SELECT id, appointment_date, appointment_time, service_type, notes, status, duration_minutes
         FROM appointments
         WHERE user_id = $1
         ORDER BY appointment_date ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let mut appointments = Vec::with_capacity(rows.len());
    for row in rows {
        appointments.push(Appointment {
            id: row.get::<i32, _>("id"),
            appointment_date: format_date(row.get("appointment_date")),
            appointment_time: format_time(row.get("appointment_time")),
            service_type: row.get("service_type"),
            notes: row.get("notes"),
            status: decode_status(row.get("status"))?,
            duration_minutes: row.get::<i32, _>("duration_minutes"),
        });
    }

    Ok(appointments)
}

/// Every appointment in the system joined with the requester's display
/// name, earliest date first. The join is left so appointments survive
/// their user row.
#[cfg(feature = "ssr")]
pub async fn all_appointments_with_clients() -> DbResult<Vec<AppointmentWithClient>> {
    let pool = crate::db::pool::get_pool();

    let rows = sqlx::query(
        "SELECT a.id, u.full_name AS client_name, a.appointment_date, a.appointment_time,
                a.service_type, a.status
         FROM appointments a
         LEFT JOIN users u ON u.id = a.user_id
         ORDER BY a.appointment_date ASC",
    )
    .fetch_all(pool)
    .await?;

    let mut appointments = Vec::with_capacity(rows.len());
    for row in rows {
        appointments.push(AppointmentWithClient {
            id: row.get::<i32, _>("id"),
            client_name: row.get("client_name"),
            appointment_date: format_date(row.get("appointment_date")),
            appointment_time: format_time(row.get("appointment_time")),
            service_type: row.get("service_type"),
            status: decode_status(row.get("status"))?,
        });
    }

    Ok(appointments)
}

/// Set the status of one appointment. No transition rules apply; a missing
/// id simply updates nothing.
#[cfg(feature = "ssr")]
pub async fn update_status(appointment_id: i32, status: AppointmentStatus) -> DbResult<()> {
    let pool = crate::db::pool::get_pool();

    sqlx::query("UPDATE appointments SET status = $1 WHERE id = $2")
        .bind(status.as_str())
        .bind(appointment_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Times already taken on a date, considering only statuses that still
/// occupy their slot.
#[cfg(feature = "ssr")]
pub async fn booked_times_for_date(date: NaiveDate) -> DbResult<Vec<String>> {
    let pool = crate::db::pool::get_pool();

    let live_statuses: Vec<String> = AppointmentStatus::ALL
        .iter()
        .filter(|status| status.occupies_slot())
        .map(|status| status.to_string())
        .collect();

    let rows = sqlx::query(
        "SELECT appointment_time FROM appointments
         WHERE appointment_date = $1 AND status = ANY($2)",
    )
    .bind(date)
    .bind(&live_statuses)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| format_time(row.get("appointment_time")))
        .collect())
}
