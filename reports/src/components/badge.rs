//! Severity badge component

use leptos::prelude::*;

use crate::types::Severity;

/// Pill badge with the fixed color/icon mapping:
/// info → indigo 📝, warning → amber ⚠️, error → rose ❌, success → emerald ✅.
#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    let class = format!("badge badge-{}", severity.palette());

    view! {
        <span class=class data-severity=severity.as_str()>
            <span class="badge-icon">{severity.icon()}</span>
            {severity.label()}
        </span>
    }
}
