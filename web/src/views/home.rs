use leptos::prelude::*;
use leptos_router::components::A;

use crate::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <Show when=move || session.user.get().is_some() fallback=|| view! { <VisitorLanding/> }>
            <MemberDashboard/>
        </Show>
    }
}

#[component]
fn VisitorLanding() -> impl IntoView {
    view! {
        <div class="home-hero">
            <h1>"Prenota"</h1>
            <p class="home-hero-lead">
                "The simple way to book and manage appointments. Reserve an open time, track the request, and keep everything in one place."
            </p>
            <A href="/login">
                <button class="btn-primary btn-large">"Get Started"</button>
            </A>
        </div>
    }
}

#[component]
fn MemberDashboard() -> impl IntoView {
    let session = use_session();
    let is_admin = move || session.user.get().map(|u| u.is_admin).unwrap_or(false);

    view! {
        <div class="home-container">
            <div class="home-welcome">
                <h1>"Welcome to your dashboard"</h1>
                <p>"Manage your appointments quickly and easily"</p>
            </div>

            <div class="home-card-grid">
                <div class="home-card">
                    <h3>"Book an Appointment"</h3>
                    <p>"Pick a date and an open time for a new visit"</p>
                    <A href="/book">
                        <button class="btn-primary">"Book Now"</button>
                    </A>
                </div>

                <div class="home-card">
                    <h3>"My Appointments"</h3>
                    <p>"Review your booked appointments and their status"</p>
                    <A href="/appointments">
                        <button class="btn-outlined">"View"</button>
                    </A>
                </div>

                <Show when=is_admin>
                    <div class="home-card">
                        <h3>"Admin Console"</h3>
                        <p>"Manage every appointment and block out unavailable times"</p>
                        <A href="/admin">
                            <button class="btn-outlined">"Manage"</button>
                        </A>
                    </div>
                </Show>
            </div>

            <div class="home-features">
                <h2>"Key features"</h2>
                <div class="home-feature-grid">
                    <div class="home-feature">
                        <h3>"Easy booking"</h3>
                        <p>"Reserve an appointment in a few clicks"</p>
                    </div>
                    <div class="home-feature">
                        <h3>"Live availability"</h3>
                        <p>"Only open times are offered for each day"</p>
                    </div>
                    <div class="home-feature">
                        <h3>"Personal history"</h3>
                        <p>"Keep track of upcoming and past appointments"</p>
                    </div>
                    <div class="home-feature">
                        <h3>"Full control"</h3>
                        <p>
                            {move || {
                                if is_admin() {
                                    "Manage every aspect of the schedule"
                                } else {
                                    "Follow each request through to confirmation"
                                }
                            }}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
