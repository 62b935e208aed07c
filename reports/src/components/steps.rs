//! Numbered debug step cards

use leptos::prelude::*;

/// One card per step, numbered from 1.
#[component]
pub fn StepCards(steps: Vec<String>) -> impl IntoView {
    if steps.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <div class="step-cards">
            {steps.into_iter().enumerate().map(|(idx, step)| view! {
                <div class="step-card">
                    <span class="step-number">{(idx + 1).to_string()}</span>
                    <p>{step}</p>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
