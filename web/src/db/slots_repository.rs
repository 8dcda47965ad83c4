use super::entities::UnavailableSlot;
#[cfg(feature = "ssr")]
use chrono::{NaiveDate, NaiveTime};
#[cfg(feature = "ssr")]
use sqlx::Row;

#[cfg(feature = "ssr")]
type DbResult<T> = Result<T, sqlx::Error>;

#[cfg(feature = "ssr")]
fn slot_from_row(row: sqlx::postgres::PgRow) -> UnavailableSlot {
    let date: NaiveDate = row.get("date");
    let start_time: NaiveTime = row.get("start_time");
    let end_time: NaiveTime = row.get("end_time");
    UnavailableSlot {
        id: row.get::<i32, _>("id"),
        date: date.format("%Y-%m-%d").to_string(),
        start_time: start_time.format("%H:%M").to_string(),
        end_time: end_time.format("%H:%M").to_string(),
        reason: row.get("reason"),
    }
}

/// Every blocked interval on the roster, earliest date first.
#[cfg(feature = "ssr")]
pub async fn all_slots() -> DbResult<Vec<UnavailableSlot>> {
    let pool = crate::db::pool::get_pool();

    let rows = sqlx::query(
        "SELECT id, date, start_time, end_time, reason
         FROM unavailable_slots
         ORDER BY date ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(slot_from_row).collect())
}

/// Blocked intervals for a single day.
#[cfg(feature = "ssr")]
pub async fn slots_for_date(date: NaiveDate) -> DbResult<Vec<UnavailableSlot>> {
    let pool = crate::db::pool::get_pool();

    let rows = sqlx::query(
        "SELECT id, date, start_time, end_time, reason
         FROM unavailable_slots
         WHERE date = $1",
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(slot_from_row).collect())
}

/// Block an interval. Overlaps with other blocks or with existing
/// bookings are allowed.
#[cfg(feature = "ssr")]
pub async fn insert_slot(
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    reason: Option<&str>,
) -> DbResult<i32> {
    let pool = crate::db::pool::get_pool();

    let row = sqlx::query(
        "INSERT INTO unavailable_slots (date, start_time, end_time, reason)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .bind(reason)
    .fetch_one(pool)
    .await?;

    Ok(row.get::<i32, _>("id"))
}

/// Remove a blocked interval by id. Deleting an id that is already gone
/// is not an error.
#[cfg(feature = "ssr")]
pub async fn delete_slot(slot_id: i32) -> DbResult<()> {
    let pool = crate::db::pool::get_pool();

    sqlx::query("DELETE FROM unavailable_slots WHERE id = $1")
        .bind(slot_id)
        .execute(pool)
        .await?;

    Ok(())
}
