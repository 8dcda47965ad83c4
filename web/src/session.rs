use leptos::prelude::*;

use crate::utils::auth::{clear_token, decode_session_claims, read_token, store_token, SessionClaims};

/// The signed-in identity as the UI sees it, decoded from the session
/// token. Display and routing only; the server re-checks every call.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub user_id: i32,
    pub full_name: String,
    pub email: String,
    pub is_admin: bool,
}

impl SessionUser {
    fn from_claims(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.user_id,
            full_name: claims.full_name,
            email: claims.email,
            is_admin: claims.is_admin,
        }
    }
}

/// Outcome of the one capability check a guarded screen performs on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Checking,
    Granted,
    Denied,
}

/// Session state provided once at the application root and consumed via
/// context everywhere else. `loaded` flips after the first localStorage
/// read so guards can tell "still checking" from "signed out".
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<SessionUser>>,
    pub loaded: RwSignal<bool>,
}

impl SessionContext {
    /// Persists the token and updates the in-memory session in one step.
    pub fn sign_in(&self, token: String) {
        store_token(&token);
        self.user
            .set(decode_session_claims(&token).map(SessionUser::from_claims));
        self.token.set(Some(token));
    }

    /// Stateless sign-out: drop the stored token and reset the signals.
    pub fn sign_out(&self) {
        clear_token();
        self.token.set(None);
        self.user.set(None);
    }

    /// Capability check for screens that need any signed-in user.
    pub fn user_access(&self) -> AccessDecision {
        if !self.loaded.get() {
            AccessDecision::Checking
        } else if self.user.get().is_some() {
            AccessDecision::Granted
        } else {
            AccessDecision::Denied
        }
    }

    /// Capability check for admin-only screens.
    pub fn admin_access(&self) -> AccessDecision {
        if !self.loaded.get() {
            return AccessDecision::Checking;
        }
        match self.user.get() {
            Some(user) if user.is_admin => AccessDecision::Granted,
            _ => AccessDecision::Denied,
        }
    }
}

/// Creates the session context and loads the stored token once the client
/// is up. Effects never run during server rendering, so SSR output stays
/// in the checking state until hydration.
pub fn provide_session() {
    let session = SessionContext {
        token: RwSignal::new(None),
        user: RwSignal::new(None),
        loaded: RwSignal::new(false),
    };

    Effect::new(move |_| {
        let token = read_token();
        let user = token
            .as_deref()
            .and_then(decode_session_claims)
            .map(SessionUser::from_claims);
        session.user.set(user);
        session.token.set(token);
        session.loaded.set(true);
    });

    provide_context(session);
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
