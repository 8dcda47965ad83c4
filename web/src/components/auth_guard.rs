use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::{Spinner, SpinnerSize};

use crate::session::{use_session, AccessDecision};

#[component]
pub fn CheckingAccessState() -> impl IntoView {
    view! {
        <div class="auth-guard-container">
            <Spinner size=SpinnerSize::Large/>
            <p class="auth-guard-subtitle">"Checking your session..."</p>
        </div>
    }
}

#[component]
pub fn AccessDeniedState(redirect_to: &'static str) -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move |_| {
        navigate(redirect_to, Default::default());
    });

    view! {
        <div class="auth-guard-container">
            <p class="auth-guard-subtitle">"Redirecting..."</p>
        </div>
    }
}

/// Renders children only for signed-in users. The capability check runs
/// once per screen entry; anyone else lands on the login page after the
/// session finishes loading.
#[component]
pub fn RequireUser(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = Memo::new(move |_| session.user_access());

    view! {
        <Show
            when=move || decision.get() != AccessDecision::Checking
            fallback=move || view! { <CheckingAccessState/> }
        >
            <Show
                when=move || decision.get() == AccessDecision::Granted
                fallback=move || view! { <AccessDeniedState redirect_to="/login"/> }
                clone:children
            >
                {children()}
            </Show>
        </Show>
    }
}

/// Renders children only for administrators. Signed-out users and
/// ordinary users are both sent home, before any admin data is fetched.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = Memo::new(move |_| session.admin_access());

    view! {
        <Show
            when=move || decision.get() != AccessDecision::Checking
            fallback=move || view! { <CheckingAccessState/> }
        >
            <Show
                when=move || decision.get() == AccessDecision::Granted
                fallback=move || view! { <AccessDeniedState redirect_to="/"/> }
                clone:children
            >
                {children()}
            </Show>
        </Show>
    }
}
