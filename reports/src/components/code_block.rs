//! Code block with copy-to-clipboard
//!
//! The copy button carries the code in `data-copy`; the document script
//! writes it to the clipboard and shows "Copied" for
//! [`COPY_FEEDBACK`](crate::copy_feedback::COPY_FEEDBACK), the same constant
//! the document script is built with.

use leptos::prelude::*;

use crate::components::icons::{ICON_COPY, Icon};

/// Monospace block with a language label and a copy action.
#[component]
pub fn CodeBlock(language: Option<String>, code: String) -> impl IntoView {
    let copy_payload = code.clone();

    view! {
        <div class="code-block">
            <div class="code-head">
                <span class="code-lang">{language.unwrap_or_default()}</span>
                <button class="copy-btn" data-copy=copy_payload title="Copy code">
                    <Icon path=ICON_COPY size="14" />
                    <span class="copy-label">"Copy"</span>
                </button>
            </div>
            <pre><code>{code}</code></pre>
        </div>
    }
}
