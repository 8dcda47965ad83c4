#[cfg(feature = "ssr")]
use sqlx::Row;

#[cfg(feature = "ssr")]
type DbResult<T> = Result<T, sqlx::Error>;

/// A user row as stored, password hash included. Stays server-side; the
/// client only ever sees the session claims.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub is_admin: bool,
}

#[cfg(feature = "ssr")]
fn user_from_row(row: sqlx::postgres::PgRow) -> UserRecord {
    UserRecord {
        id: row.get::<i32, _>("id"),
        email: row.get("email"),
        full_name: row.get("full_name"),
        password_hash: row.get("password_hash"),
        is_admin: row.get("is_admin"),
    }
}

/// Insert a new account. Admin rights are never granted here; the flag is
/// provisioned directly in storage.
#[cfg(feature = "ssr")]
pub async fn create_user(email: &str, full_name: &str, password_hash: &str) -> DbResult<i32> {
    let pool = crate::db::pool::get_pool();

    let row = sqlx::query(
        "INSERT INTO users (email, full_name, password_hash)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(email)
    .bind(full_name)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(row.get::<i32, _>("id"))
}

#[cfg(feature = "ssr")]
pub async fn find_by_email(email: &str) -> DbResult<Option<UserRecord>> {
    let pool = crate::db::pool::get_pool();

    let row = sqlx::query(
        "SELECT id, email, full_name, password_hash, is_admin
         FROM users
         WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(user_from_row))
}

#[cfg(feature = "ssr")]
pub async fn find_by_id(user_id: i32) -> DbResult<Option<UserRecord>> {
    let pool = crate::db::pool::get_pool();

    let row = sqlx::query(
        "SELECT id, email, full_name, password_hash, is_admin
         FROM users
         WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(user_from_row))
}
