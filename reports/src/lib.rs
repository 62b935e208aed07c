//! # bugscope-report
//!
//! Leptos SSR renderer for normalized code-analysis reports.
//!
//! The renderer takes an already-normalized [`types::Report`] (ordered,
//! typed sections) plus the per-section [`display::DisplayState`] and
//! produces a self-contained HTML page. Sections collapse and expand
//! individually, code blocks carry a copy button, and every section can
//! show a severity badge and a "why this matters" panel.
//!
//! ## Quick Start
//!
//! ```rust
//! use bugscope_report::display::DisplayState;
//! use bugscope_report::render_report;
//! use bugscope_report::types::{Report, Section, SectionBody, Severity};
//!
//! let report = Report {
//!     title: "Code Analysis Results".into(),
//!     sections: vec![
//!         Section::new("Solution", SectionBody::text("Guard the index."))
//!             .with_severity(Severity::Success),
//!     ],
//!     ..Default::default()
//! };
//!
//! let html = render_report(&report, &DisplayState::new());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Report, section and severity data model
//! - [`display`] - Expand/collapse flags keyed by section identity
//! - [`copy_feedback`] - The restartable "Copied" acknowledgement
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod copy_feedback;
pub mod display;
pub mod styles;
pub mod types;

use components::{ReportDocument, SectionCard};
use display::DisplayState;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{Report, Section};

/// Render a complete HTML document for `report`.
///
/// Sections appear in the order given; each starts expanded unless
/// `display` records it as collapsed.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
pub fn render_report(report: &Report, display: &DisplayState) -> String {
    let doc = view! {
        <ReportDocument report=report.clone() display=display.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the section cards, for embedding in another page.
pub fn render_sections(sections: &[Section], display: &DisplayState) -> String {
    let cards = sections
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, section)| {
            let expanded = display.is_expanded(&section.key);
            view! { <SectionCard section=section expanded=expanded index=index /> }
        })
        .collect::<Vec<_>>();

    view! { <div class="section-list">{cards}</div> }.to_html()
}
