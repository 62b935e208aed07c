//! Section body views - one per content kind

use leptos::prelude::*;

use super::CodeBlock;
use crate::types::{ListKind, SectionBody, SectionKind};

/// Dispatch a body to its view.
///
/// Table shape is checked here as well as at normalization time: a row that
/// disagrees with the header renders as a placeholder for this section only.
#[component]
pub fn SectionBodyView(body: SectionBody) -> impl IntoView {
    if let Some(reason) = body.table_defect() {
        return view! { <DegradedNotice expected=SectionKind::Table reason=reason /> }.into_any();
    }

    match body {
        SectionBody::Text { content } => view! { <TextBlock content=content /> }.into_any(),
        SectionBody::List { kind, items } => {
            view! { <ContentList kind=kind items=items /> }.into_any()
        }
        SectionBody::Table { headers, rows } => {
            view! { <DataTable headers=headers rows=rows /> }.into_any()
        }
        SectionBody::Code { language, content } => {
            view! { <CodeBlock language=language code=content /> }.into_any()
        }
        SectionBody::Degraded { expected, reason } => {
            view! { <DegradedNotice expected=expected reason=reason /> }.into_any()
        }
    }
}

/// Paragraph text. Blank-line separated chunks become separate paragraphs.
#[component]
pub fn TextBlock(content: String) -> impl IntoView {
    let paragraphs: Vec<String> = content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    if paragraphs.is_empty() {
        return view! { <p class="muted">"Nothing reported."</p> }.into_any();
    }

    view! {
        <div class="text-block">
            {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

/// Bulleted or numbered list, input order preserved.
#[component]
pub fn ContentList(kind: ListKind, items: Vec<String>) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="muted">"Nothing reported."</p> }.into_any();
    }

    let rows = items
        .into_iter()
        .map(|item| view! { <li>{item}</li> })
        .collect::<Vec<_>>();

    match kind {
        ListKind::Bullet => view! { <ul class="content-list bullet">{rows}</ul> }.into_any(),
        ListKind::Numbered => view! { <ol class="content-list numbered">{rows}</ol> }.into_any(),
    }
}

/// Header row plus one row per entry.
#[component]
pub fn DataTable(headers: Vec<String>, rows: Vec<Vec<String>>) -> impl IntoView {
    let empty = rows.is_empty();
    let width = headers.len();

    view! {
        <div class="table-wrap">
            <table class="data-table">
                <thead>
                    <tr>
                        {headers.into_iter().map(|h| view! { <th>{h}</th> }).collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr>
                            {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
                        </tr>
                    }).collect::<Vec<_>>()}
                    {empty.then(|| view! {
                        <tr>
                            <td class="muted" colspan=width.to_string()>"No data."</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

/// Visible placeholder for a section that could not be shown as declared.
#[component]
pub fn DegradedNotice(expected: SectionKind, reason: String) -> impl IntoView {
    view! {
        <div class="degraded" data-expected=expected.as_str()>
            <strong>{format!("Could not display this {} section", expected)}</strong>
            <p class="muted">{reason}</p>
        </div>
    }
}
