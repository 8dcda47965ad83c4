use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Inline feedback under a form. Screens keep these in Option signals and
/// render whichever is set.
#[component]
pub fn ErrorNotice(message: String) -> impl IntoView {
    view! {
        <div class="form-notice">
            <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
        </div>
    }
}

#[component]
pub fn SuccessNotice(message: String) -> impl IntoView {
    view! {
        <div class="form-notice">
            <MessageBar intent=MessageBarIntent::Success>{message}</MessageBar>
        </div>
    }
}
