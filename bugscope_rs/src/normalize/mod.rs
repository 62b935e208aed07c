//! Response normalizer: raw [`AnalysisPayload`] to ordered, typed sections.
//!
//! Decision order:
//!
//! 1. Upstream error ⇒ exactly one "Analysis Error" section.
//! 2. `sections` present ⇒ pass-through conversion ([`passthrough`]).
//! 3. Otherwise the mode's strategy ([`analysis`] or [`debug`]).
//! 4. A non-empty `correctedCode` appends a final "Corrected Code" section.
//!
//! Normalization is pure: the same payload always yields the same sections,
//! keys included, and never panics on malformed input.

pub mod analysis;
pub mod debug;
pub mod passthrough;

use std::collections::HashMap;

use bugscope_report::types::{
    Mode, Report, Section, SectionBody, SectionKey, SectionMeta, Severity,
};
use tracing::debug;

use crate::payload::{AnalysisPayload, PayloadError, UNKNOWN_ERROR};

/// Title of the single section produced for an upstream failure.
pub const ERROR_SECTION_TITLE: &str = "Analysis Error";

/// Title of the trailing corrected-code section.
pub const CORRECTED_CODE_TITLE: &str = "Corrected Code";

/// A mode's section template.
pub type Strategy = fn(&AnalysisPayload) -> Vec<Section>;

/// Per-mode presentation: strategy, report title, default introduction.
pub trait ModeStrategy {
    /// Section template used when the payload carries no `sections`.
    fn strategy(self) -> Strategy;
    /// Report heading.
    fn report_title(self) -> &'static str;
    /// Introduction used when the payload has no `analysis` text.
    fn default_introduction(self) -> &'static str;
}

impl ModeStrategy for Mode {
    fn strategy(self) -> Strategy {
        match self {
            Mode::Analysis => analysis::sections,
            Mode::Debug => debug::sections,
        }
    }

    fn report_title(self) -> &'static str {
        match self {
            Mode::Analysis => "Code Analysis Results",
            Mode::Debug => "Debug Results",
        }
    }

    fn default_introduction(self) -> &'static str {
        match self {
            Mode::Analysis => "Detailed analysis of code quality and potential improvements.",
            Mode::Debug => "Step-by-step analysis of code execution and issues.",
        }
    }
}

/// Normalize a payload into display-ordered sections.
pub fn normalize(payload: &AnalysisPayload, mode: Mode) -> Vec<Section> {
    if let Some(message) = upstream_error(payload, mode) {
        debug!(%mode, "payload carries an upstream error");
        return assign_keys(vec![error_section(message)]);
    }

    let mut sections = match &payload.sections {
        Some(entries) => {
            debug!(count = entries.len(), "using pre-built sections");
            passthrough::convert(entries)
        }
        None => (mode.strategy())(payload),
    };

    if let Some(code) = &payload.corrected_code {
        sections.push(
            Section::new(
                CORRECTED_CODE_TITLE,
                SectionBody::code(payload.language.clone(), code.as_str()),
            )
            .with_severity(Severity::Success),
        );
    }

    assign_keys(sections)
}

/// Wrap the normalized sections with title, introduction, banner and model.
pub fn build_report(payload: &AnalysisPayload, mode: Mode) -> Report {
    Report {
        title: mode.report_title().to_string(),
        introduction: payload
            .analysis
            .clone()
            .unwrap_or_else(|| mode.default_introduction().to_string()),
        mode,
        warning: payload.warning.clone(),
        model: payload.model.clone(),
        sections: normalize(payload, mode),
    }
}

/// Message of the upstream failure, if the payload describes one.
///
/// An `error` object means "error found in the code" only in debug mode;
/// analysis mode has no slot for it and treats it as a failure.
fn upstream_error(payload: &AnalysisPayload, mode: Mode) -> Option<String> {
    match (&payload.error, mode) {
        (Some(PayloadError::Upstream(message)), _) => return Some(message.clone()),
        (Some(PayloadError::Detected(message)), Mode::Analysis) => return Some(message.clone()),
        _ => {}
    }

    (payload.success == Some(false)).then(|| {
        payload
            .error
            .as_ref()
            .map(|err| err.message().to_string())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    })
}

fn error_section(message: String) -> Section {
    Section::new(ERROR_SECTION_TITLE, SectionBody::text(message)).with_severity(Severity::Error)
}

/// Re-derive every key and suffix repeats of the same title + kind.
fn assign_keys(sections: Vec<Section>) -> Vec<Section> {
    let mut seen: HashMap<SectionKey, usize> = HashMap::new();
    sections
        .into_iter()
        .map(|mut section| {
            let base = SectionKey::derive(&section.title, section.kind());
            let occurrence = seen.entry(base.clone()).or_insert(0);
            *occurrence += 1;
            section.key = base.with_occurrence(*occurrence);
            section
        })
        .collect()
}

/// "Why this matters" metadata for synthesized sections.
pub(crate) fn why(explanation: &str, impact: &str, confidence: u8) -> SectionMeta {
    SectionMeta {
        explanation: Some(explanation.to_string()),
        impact: Some(impact.to_string()),
        confidence: Some(confidence.min(100)),
        references: Vec::new(),
    }
}
