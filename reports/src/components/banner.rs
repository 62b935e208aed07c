//! Introduction block and warning banner

use leptos::prelude::*;

use crate::components::icons::{ICON_LIGHTBULB, ICON_WARNING_CIRCLE, Icon};

/// Lead paragraph under the report title.
#[component]
pub fn Introduction(text: String) -> impl IntoView {
    if text.trim().is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <div class="introduction">
            <Icon path=ICON_LIGHTBULB class="icon-sm" />
            <div>{text}</div>
        </div>
    }
    .into_any()
}

/// Non-blocking banner for rate limits and partial results.
#[component]
pub fn WarningBanner(message: Option<String>) -> impl IntoView {
    message.map(|message| {
        view! {
            <div class="warning-banner" role="status">
                <div class="warning-head">
                    <Icon path=ICON_WARNING_CIRCLE class="icon-sm" />
                    <strong>"Warning"</strong>
                </div>
                <p>{message}</p>
            </div>
        }
    })
}
