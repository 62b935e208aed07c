//! "Why this matters" panel - explanation, impact, confidence, references

use leptos::prelude::*;

use crate::components::icons::{
    ICON_ARROW_SQUARE_OUT, ICON_LIGHTBULB, ICON_TARGET, ICON_WARNING_CIRCLE, Icon,
};
use crate::types::SectionMeta;

/// Auxiliary panel rendered beneath a section body when any metadata is set.
#[component]
pub fn WhyThisMatters(meta: SectionMeta) -> impl IntoView {
    if meta.is_empty() {
        return view! { "" }.into_any();
    }

    let SectionMeta {
        explanation,
        impact,
        confidence,
        references,
    } = meta;

    view! {
        <div class="why-panel">
            <div class="why-head">
                <Icon path=ICON_LIGHTBULB class="icon-sm" />
                <h4>"Why this matters"</h4>
            </div>
            {explanation.map(|text| view! { <p class="why-text">{text}</p> })}

            {impact.map(|text| view! {
                <div class="why-block">
                    <div class="why-head">
                        <Icon path=ICON_WARNING_CIRCLE class="icon-sm icon-amber" />
                        <h4>"Impact"</h4>
                    </div>
                    <p class="why-text">{text}</p>
                </div>
            })}

            {confidence.map(|value| view! {
                <div class="why-block">
                    <div class="why-head">
                        <Icon path=ICON_TARGET class="icon-sm icon-emerald" />
                        <h4>"Confidence Level"</h4>
                    </div>
                    <ConfidenceBar confidence=value />
                </div>
            })}

            {(!references.is_empty()).then(|| view! {
                <div class="why-block">
                    <div class="why-head">
                        <Icon path=ICON_ARROW_SQUARE_OUT class="icon-sm" />
                        <h4>"References"</h4>
                    </div>
                    <ul class="reference-list">
                        {references.into_iter().map(|href| {
                            if is_web_link(&href) {
                                let label = href.clone();
                                view! {
                                    <li>
                                        <a href=href target="_blank" rel="noopener noreferrer">{label}</a>
                                    </li>
                                }
                                .into_any()
                            } else {
                                view! { <li class="reference-text">{href}</li> }.into_any()
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            })}
        </div>
    }
    .into_any()
}

/// Only `http://` and `https://` references become links; anything else
/// (`javascript:`, `data:`, relative paths) is shown as plain text.
pub fn is_web_link(href: &str) -> bool {
    let href = href.trim_start();
    ["http://", "https://"].iter().any(|scheme| {
        href.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Horizontal 0-100 bar, width proportional to `confidence`.
#[component]
pub fn ConfidenceBar(confidence: u8) -> impl IntoView {
    let value = confidence.min(100);

    view! {
        <div class="confidence">
            <div class="confidence-track">
                <div class="confidence-fill" style=format!("width:{}%", value)></div>
            </div>
            <span class="confidence-value">{format!("{}%", value)}</span>
        </div>
    }
}
