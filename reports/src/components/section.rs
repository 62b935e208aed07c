//! Section card - header with toggle and badge, collapsible body
//!
//! Each card is self-contained: its toggle addresses its own body through
//! `data-section-key`, so no card depends on another card's state.

use leptos::prelude::*;

use super::{
    Icon, ScoreChart, SectionBodyView, SeverityBadge, StepCards, WhyThisMatters, ICON_CARET_DOWN,
};
use crate::types::Section;

/// One normalized section.
#[component]
pub fn SectionCard(
    section: Section,
    /// Initial expand state (from `DisplayState`)
    expanded: bool,
    /// Position in the report, for anchors only
    index: usize,
) -> impl IntoView {
    let Section {
        key,
        title,
        body,
        severity,
        meta,
        steps,
        chart,
    } = section;

    let key = key.to_string();
    let kind = body.kind();
    let card_class = match (severity, body.is_degraded()) {
        (_, true) => "section-card degraded-card",
        (Some(crate::types::Severity::Error), _) => "section-card error-card",
        _ => "section-card",
    };
    let body_class = if expanded {
        "section-body"
    } else {
        "section-body collapsed"
    };
    let anchor = format!("section-{}", index + 1);

    view! {
        <section id=anchor class=card_class data-section-key=key.clone() data-kind=kind.as_str()>
            <header class="section-header">
                <button
                    class="section-toggle"
                    data-toggle=key.clone()
                    aria-expanded=expanded.to_string()
                    title="Expand or collapse"
                >
                    <span class="section-marker"></span>
                    <h2>{title}</h2>
                    <Icon path=ICON_CARET_DOWN size="16" class="caret" />
                </button>
                {severity.map(|severity| view! { <SeverityBadge severity=severity /> })}
            </header>
            <div class=body_class data-section-body=key.clone()>
                <SectionBodyView body=body />
                <ScoreChart bars=chart />
                <StepCards steps=steps />
                <WhyThisMatters meta=meta />
            </div>
        </section>
    }
}
