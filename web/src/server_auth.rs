use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::views::auth::{LoginData, SignupData};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: Option<String>,
    pub error: Option<String>,
}

#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("An account with this email already exists")]
    EmailTaken,
    #[error("{0}")]
    Validation(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("token creation failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

#[cfg(feature = "ssr")]
impl AuthError {
    /// What the form shows. Internal failures stay out of the response.
    fn public_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials | AuthError::EmailTaken | AuthError::Validation(_) => {
                self.to_string()
            }
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }

    fn status(&self) -> http::StatusCode {
        match self {
            AuthError::InvalidCredentials => http::StatusCode::UNAUTHORIZED,
            AuthError::EmailTaken => http::StatusCode::CONFLICT,
            AuthError::Validation(_) => http::StatusCode::BAD_REQUEST,
            _ => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(feature = "ssr")]
pub(crate) fn jwt_secret() -> String {
    std::env::var("JWT_SECRET")
        .unwrap_or_else(|_| "prenota-jwt-secret-change-in-production".to_string())
}

#[cfg(feature = "ssr")]
fn issue_token(user: &crate::db::users_repository::UserRecord) -> Result<String, AuthError> {
    use crate::utils::auth::SessionClaims;
    use jsonwebtoken::{encode, EncodingKey, Header};

    let expiry = chrono::Utc::now() + chrono::Duration::days(7);
    let claims = SessionClaims {
        sub: user.id.to_string(),
        exp: expiry.timestamp() as usize,
        user_id: user.id,
        full_name: user.full_name.clone(),
        email: user.email.clone(),
        is_admin: user.is_admin,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )?;
    Ok(token)
}

#[cfg(feature = "ssr")]
async fn try_login(data: &LoginData) -> Result<String, AuthError> {
    use crate::db::users_repository;

    let user = users_repository::find_by_email(&data.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !bcrypt::verify(&data.password, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }

    issue_token(&user)
}

#[cfg(feature = "ssr")]
async fn try_signup(data: &SignupData) -> Result<i32, AuthError> {
    use crate::db::users_repository;

    if data.full_name.trim().is_empty() {
        return Err(AuthError::Validation("Please tell us your name"));
    }
    if data.email.trim().is_empty() || !data.email.contains('@') {
        return Err(AuthError::Validation("A valid email address is required"));
    }
    if data.password.len() < 8 {
        return Err(AuthError::Validation(
            "Password must be at least 8 characters",
        ));
    }

    let password_hash = bcrypt::hash(&data.password, bcrypt::DEFAULT_COST)?;

    match users_repository::create_user(&data.email, &data.full_name, &password_hash).await {
        Ok(id) => Ok(id),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(AuthError::EmailTaken),
        Err(err) => Err(err.into()),
    }
}

#[cfg(feature = "ssr")]
fn set_status(status: http::StatusCode) {
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(status);
    }
}

#[server]
pub async fn login_user(data: LoginData) -> Result<AuthResponse, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        match try_login(&data).await {
            Ok(token) => Ok(AuthResponse {
                success: true,
                token: Some(token),
                error: None,
            }),
            Err(err) => {
                tracing::warn!("login failed for {}: {}", data.email, err);
                set_status(err.status());
                Ok(AuthResponse {
                    success: false,
                    token: None,
                    error: Some(err.public_message()),
                })
            }
        }
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = data;
        Ok(AuthResponse {
            success: false,
            token: None,
            error: None,
        })
    }
}

#[server]
pub async fn signup_user(data: SignupData) -> Result<AuthResponse, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        match try_signup(&data).await {
            Ok(user_id) => {
                tracing::info!("created user {} ({})", user_id, data.email);
                Ok(AuthResponse {
                    success: true,
                    token: None,
                    error: None,
                })
            }
            Err(err) => {
                tracing::warn!("signup failed for {}: {}", data.email, err);
                set_status(err.status());
                Ok(AuthResponse {
                    success: false,
                    token: None,
                    error: Some(err.public_message()),
                })
            }
        }
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = data;
        Ok(AuthResponse {
            success: false,
            token: None,
            error: None,
        })
    }
}
