//! Leptos UI components for rendering analysis reports.
//!
//! This module contains modular, reusable components for building
//! static HTML reports. Each component is a Leptos `#[component]`
//! function that can be composed to create custom report layouts.
//!
//! # Component Hierarchy
//!
//! ```text
//! ReportDocument
//! ├── Introduction
//! ├── WarningBanner (optional)
//! └── SectionCard (per section, in order)
//!     ├── SeverityBadge (optional)
//!     ├── SectionBodyView
//!     │   ├── TextBlock
//!     │   ├── ContentList
//!     │   ├── DataTable
//!     │   ├── CodeBlock
//!     │   └── DegradedNotice
//!     ├── ScoreChart (optional)
//!     ├── StepCards (optional)
//!     └── WhyThisMatters (optional)
//!         └── ConfidenceBar
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_report`], but
//! can be used directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use bugscope_report::components::{SectionCard, WarningBanner};
//!
//! view! {
//!     <WarningBanner message=Some("Rate limited".to_string()) />
//!     <SectionCard section=my_section expanded=true index=0 />
//! }
//! ```

mod badge;
mod banner;
mod body;
mod code_block;
mod document;
mod icons;
mod score_chart;
mod section;
mod steps;
mod why_panel;

pub use badge::SeverityBadge;
pub use banner::{Introduction, WarningBanner};
pub use body::{ContentList, DataTable, DegradedNotice, SectionBodyView, TextBlock};
pub use code_block::CodeBlock;
pub use document::ReportDocument;
pub use icons::*;
pub use score_chart::{ScoreChart, score_bar_width};
pub use section::SectionCard;
pub use steps::StepCards;
pub use why_panel::{ConfidenceBar, WhyThisMatters};
