use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::use_session;

/// Top navigation. Signed-out visitors get a single sign-in entry point;
/// signed-in clients see their booking links, and administrators get the
/// console link on top of those. The current route is highlighted.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let link_class = move |href: &str| {
        if pathname.get() == href {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        }
    };

    let is_admin = move || session.user.get().map(|u| u.is_admin).unwrap_or(false);

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <a href="/" class="navbar__logo">
                        "Prenota"
                    </a>
                </div>

                <Show
                    when=move || session.user.get().is_some()
                    fallback=|| {
                        view! {
                            <div class="navbar__links">
                                <a href="/login" class="navbar__link navbar__link--cta">
                                    "Sign In"
                                </a>
                            </div>
                        }
                    }
                >
                    <div class="navbar__links">
                        <a href="/appointments" class=move || link_class("/appointments")>
                            "My Appointments"
                        </a>
                        <a href="/book" class=move || link_class("/book")>
                            "Book"
                        </a>
                        <Show when=is_admin>
                            <a href="/admin" class=move || link_class("/admin")>
                                "Admin"
                            </a>
                        </Show>
                        <div class="navbar__identity">
                            <span class="navbar__name">
                                {move || {
                                    session.user.get().map(|u| u.full_name).unwrap_or_default()
                                }}
                            </span>
                            <span class="navbar__email">
                                {move || session.user.get().map(|u| u.email).unwrap_or_default()}
                            </span>
                            <Show when=is_admin>
                                <span class="navbar__role">"Administrator"</span>
                            </Show>
                        </div>
                        <button
                            class="navbar__signout"
                            on:click={
                                let navigate = navigate.clone();
                                move |_| {
                                    session.sign_out();
                                    navigate("/", Default::default());
                                }
                            }
                        >
                            "Sign Out"
                        </button>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
