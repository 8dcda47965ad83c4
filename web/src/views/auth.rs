use crate::server_auth::{login_user, signup_user};
use crate::session::use_session;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::{use_query_map, use_navigate}};
use serde::{Deserialize, Serialize};
use thaw::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupData {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let query_map = use_query_map();
    let navigate = use_navigate();
    let session = use_session();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_visible = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);
    let success_message = RwSignal::new(Option::<String>::None);

    // Arriving from a fresh signup shows a confirmation banner.
    Effect::new(move |_| {
        if query_map.get().get("success").as_deref() == Some("signup") {
            success_message.set(Some(
                "Account created successfully! Please sign in.".to_string(),
            ));
        }
    });

    let is_button_disabled =
        Memo::new(move |_| email.get().is_empty() || password.get().is_empty());

    let submit_login = {
        let navigate = navigate.clone();
        move |_| {
            loading.set(true);
            error_message.set(None);

            let login_data = LoginData {
                email: email.get(),
                password: password.get(),
            };

            let navigate = navigate.clone();
            spawn_local(async move {
                match login_user(login_data).await {
                    Ok(auth_response) => {
                        if auth_response.success {
                            if let Some(token) = auth_response.token {
                                session.sign_in(token);
                                navigate("/appointments", Default::default());
                            }
                        } else {
                            error_message.set(auth_response.error);
                        }
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Sign in failed: {}", e)));
                    }
                }
                loading.set(false);
            });
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Welcome Back"</h1>
                    <p>"Sign in to manage your appointments"</p>
                </div>

                {move || {
                    success_message
                        .get()
                        .map(|msg| {
                            view! {
                                <div class="auth-success-message">
                                    <span class="auth-success-icon">"✓"</span>
                                    <p>{msg}</p>
                                </div>
                            }
                        })
                }}

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit_login(());
                }>
                    <div class="auth-form-group">
                        <Input
                            class="auth-input"
                            placeholder="Email"
                            input_type=InputType::Email
                            value=email
                        />
                    </div>

                    <div class="auth-form-group">
                        <div class="auth-input-wrapper">
                            <Input
                                class="auth-input"
                                placeholder="Password"
                                input_type=Signal::derive(move || {
                                    if password_visible.get() {
                                        InputType::Text
                                    } else {
                                        InputType::Password
                                    }
                                })
                                value=password
                            />
                            <button
                                type="button"
                                class="auth-password-toggle"
                                on:click=move |_| password_visible.set(!password_visible.get())
                            >
                                {move || if password_visible.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    {move || {
                        error_message
                            .get()
                            .map(|msg| view! { <div class="auth-error-message">{msg}</div> })
                    }}

                    <Button
                        class="auth-submit-btn"
                        button_type=ButtonType::Submit
                        loading=Signal::from(loading)
                        disabled=Signal::from(is_button_disabled)
                    >
                        "Sign In"
                    </Button>
                </form>

                <div class="auth-footer">
                    <p>"Don't have an account? " <A href="/signup">"Sign up here"</A></p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_visible = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    let is_button_disabled = Memo::new(move |_| {
        full_name.get().is_empty()
            || email.get().is_empty()
            || password.get().is_empty()
            || confirm_password.get().is_empty()
    });

    let submit_signup = {
        let navigate = navigate.clone();
        move |_| {
            loading.set(true);
            error_message.set(None);

            if password.get() != confirm_password.get() {
                error_message.set(Some("Passwords do not match".to_string()));
                loading.set(false);
                return;
            }

            let signup_data = SignupData {
                full_name: full_name.get(),
                email: email.get(),
                password: password.get(),
            };

            let navigate = navigate.clone();
            spawn_local(async move {
                match signup_user(signup_data).await {
                    Ok(auth_response) => {
                        if auth_response.success {
                            navigate("/login?success=signup", Default::default());
                        } else {
                            error_message.set(auth_response.error);
                        }
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Signup failed: {}", e)));
                    }
                }
                loading.set(false);
            });
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Create Your Account"</h1>
                    <p>"Book and track appointments in minutes"</p>
                </div>

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit_signup(());
                }>
                    <div class="auth-form-group">
                        <Input class="auth-input" placeholder="Full Name" value=full_name/>
                    </div>

                    <div class="auth-form-group">
                        <Input
                            class="auth-input"
                            placeholder="Email"
                            input_type=InputType::Email
                            value=email
                        />
                    </div>

                    <div class="auth-form-group">
                        <div class="auth-input-wrapper">
                            <Input
                                class="auth-input"
                                placeholder="Password (at least 8 characters)"
                                input_type=Signal::derive(move || {
                                    if password_visible.get() {
                                        InputType::Text
                                    } else {
                                        InputType::Password
                                    }
                                })
                                value=password
                            />
                            <button
                                type="button"
                                class="auth-password-toggle"
                                on:click=move |_| password_visible.set(!password_visible.get())
                            >
                                {move || if password_visible.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    <div class="auth-form-group">
                        <Input
                            class="auth-input"
                            placeholder="Confirm Password"
                            input_type=InputType::Password
                            value=confirm_password
                        />
                    </div>

                    {move || {
                        error_message
                            .get()
                            .map(|msg| view! { <div class="auth-error-message">{msg}</div> })
                    }}

                    <Button
                        class="auth-submit-btn"
                        button_type=ButtonType::Submit
                        loading=Signal::from(loading)
                        disabled=Signal::from(is_button_disabled)
                    >
                        "Create Account"
                    </Button>
                </form>

                <div class="auth-footer">
                    <p>"Already have an account? " <A href="/login">"Sign in here"</A></p>
                </div>
            </div>
        </div>
    }
}
