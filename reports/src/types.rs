//! Report data types for structuring normalized analysis findings.
//!
//! These types define the data model the renderer consumes. They're designed to be:
//!
//! - **Serializable** - Easy JSON import/export via serde
//! - **Clone-friendly** - Components can share data without borrowing issues
//! - **Tagged** - Each section body is one explicit variant, validated once
//!
//! # Example
//!
//! ```rust
//! use bugscope_report::types::{ListKind, Report, Section, SectionBody, Severity};
//!
//! let report = Report {
//!     title: "Code Analysis Results".into(),
//!     sections: vec![
//!         Section::new(
//!             "Identified Issues",
//!             SectionBody::List {
//!                 kind: ListKind::Bullet,
//!                 items: vec!["unused variable".into()],
//!             },
//!         )
//!         .with_severity(Severity::Warning),
//!     ],
//!     ..Default::default()
//! };
//! assert_eq!(report.sections.len(), 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Which template produced the report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Code quality analysis (metrics, issues, recommendations)
    #[default]
    Analysis,
    /// Step-by-step debugging (error, steps, variables, solution)
    Debug,
}

impl Mode {
    /// Lowercase wire name (`"analysis"` / `"debug"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Analysis => "analysis",
            Mode::Debug => "debug",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "analysis" | "analyze" => Ok(Mode::Analysis),
            "debug" => Ok(Mode::Debug),
            other => Err(format!("unknown mode '{other}' (expected analysis or debug)")),
        }
    }
}

/// Badge severity. Drives color and icon only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational (indigo)
    Info,
    /// Worth a look (amber)
    Warning,
    /// Broken (rose)
    Error,
    /// All good (emerald)
    Success,
}

impl Severity {
    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Success => "success",
        }
    }

    /// Capitalized badge label.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Success => "Success",
        }
    }

    /// Badge icon.
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Info => "📝",
            Severity::Warning => "⚠️",
            Severity::Error => "❌",
            Severity::Success => "✅",
        }
    }

    /// Palette name used by the CSS (`badge-indigo`, `badge-amber`, ...).
    pub fn palette(self) -> &'static str {
        match self {
            Severity::Info => "indigo",
            Severity::Warning => "amber",
            Severity::Error => "rose",
            Severity::Success => "emerald",
        }
    }

    /// Lenient parse used at the normalization boundary.
    pub fn parse_loose(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "info" | "information" | "note" | "hint" | "low" => Some(Severity::Info),
            "warning" | "warn" | "medium" => Some(Severity::Warning),
            "error" | "err" | "critical" | "high" | "fatal" => Some(Severity::Error),
            "success" | "ok" | "pass" | "passed" => Some(Severity::Success),
            _ => None,
        }
    }
}

/// Bullet or numbered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// `<ul>`
    #[default]
    Bullet,
    /// `<ol>`
    Numbered,
}

/// Discriminant of [`SectionBody`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Paragraph
    Text,
    /// Bulleted or numbered list
    List,
    /// Header row plus data rows
    Table,
    /// Monospace block with copy action
    Code,
}

impl SectionKind {
    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Text => "text",
            SectionKind::List => "list",
            SectionKind::Table => "table",
            SectionKind::Code => "code",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content of a section, one variant per kind.
///
/// `Degraded` replaces a body that failed validation (for example a table row
/// whose length disagrees with its header) so the renderer still has
/// something well-formed to draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum SectionBody {
    /// Free text paragraph
    Text {
        /// Paragraph text
        content: String,
    },
    /// Ordered sequence of items
    List {
        /// Bullet or numbered
        #[serde(rename = "listKind", default)]
        kind: ListKind,
        /// Items in display order
        items: Vec<String>,
    },
    /// Tabular data
    Table {
        /// Column headers
        headers: Vec<String>,
        /// Rows, each `headers.len()` cells long
        rows: Vec<Vec<String>>,
    },
    /// Source code block
    Code {
        /// Language label, if known
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        /// Code text
        content: String,
    },
    /// Placeholder for a body that could not be shown as declared
    Degraded {
        /// Kind the section declared
        expected: SectionKind,
        /// Human-readable defect
        reason: String,
    },
}

impl SectionBody {
    /// Declared kind; `Degraded` reports the kind it was meant to be.
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionBody::Text { .. } => SectionKind::Text,
            SectionBody::List { .. } => SectionKind::List,
            SectionBody::Table { .. } => SectionKind::Table,
            SectionBody::Code { .. } => SectionKind::Code,
            SectionBody::Degraded { expected, .. } => *expected,
        }
    }

    /// Shorthand for a text body.
    pub fn text(content: impl Into<String>) -> Self {
        SectionBody::Text {
            content: content.into(),
        }
    }

    /// Shorthand for a code body.
    pub fn code(language: Option<String>, content: impl Into<String>) -> Self {
        SectionBody::Code {
            language,
            content: content.into(),
        }
    }

    /// Describe the first table shape violation, if any.
    pub fn table_defect(&self) -> Option<String> {
        let SectionBody::Table { headers, rows } = self else {
            return None;
        };
        if headers.is_empty() {
            return Some("table has no headers".to_string());
        }
        rows.iter().enumerate().find_map(|(idx, row)| {
            (row.len() != headers.len()).then(|| {
                format!(
                    "row {} has {} cells, expected {}",
                    idx + 1,
                    row.len(),
                    headers.len()
                )
            })
        })
    }

    /// True for the `Degraded` variant.
    pub fn is_degraded(&self) -> bool {
        matches!(self, SectionBody::Degraded { .. })
    }
}

/// Stable identity of a section, derived from its title and kind.
///
/// Display state is keyed by this instead of the section index so that
/// inserting or reordering sections does not move expand/collapse flags.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionKey(String);

impl SectionKey {
    /// Hash `title` + `kind` into a short hex key.
    pub fn derive(title: &str, kind: SectionKind) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(title.as_bytes());
        hasher.update([0u8]);
        hasher.update(kind.as_str().as_bytes());
        let digest = hasher.finalize();
        let hex: String = digest.iter().take(6).map(|b| format!("{b:02x}")).collect();
        SectionKey(format!("s-{hex}"))
    }

    /// Key for the `occurrence`-th section sharing the same title and kind
    /// (1-based; the first occurrence keeps the bare key).
    pub fn with_occurrence(&self, occurrence: usize) -> Self {
        if occurrence <= 1 {
            self.clone()
        } else {
            SectionKey(format!("{}-{}", self.0, occurrence))
        }
    }

    /// Borrow the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionKey {
    fn from(raw: &str) -> Self {
        SectionKey(raw.to_string())
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional "why this matters" metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMeta {
    /// Why the section matters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Consequence of acting (or not)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    /// 0-100 confidence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    /// Links for further reading
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

impl SectionMeta {
    /// True when no field would show up in the panel.
    pub fn is_empty(&self) -> bool {
        self.explanation.is_none()
            && self.impact.is_none()
            && self.confidence.is_none()
            && self.references.is_empty()
    }
}

/// One bar of a score chart, on a 0-100 scale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBar {
    pub label: String,
    pub score: u8,
}

impl ScoreBar {
    /// Bar for a raw score; out-of-range values are clamped, `NaN` reads as 0.
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 100.0) };
        Self {
            label: label.into(),
            score: score.round() as u8,
        }
    }
}

/// One normalized block of analysis output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Stable identity for display state
    pub key: SectionKey,
    /// Heading
    pub title: String,
    /// Content, tagged by kind
    #[serde(flatten)]
    pub body: SectionBody,
    /// Badge severity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// "Why this matters" panel data
    #[serde(default, skip_serializing_if = "SectionMeta::is_empty")]
    pub meta: SectionMeta,
    /// Numbered step cards shown under the body
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    /// Optional score bars drawn beside the body
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chart: Vec<ScoreBar>,
}

impl Section {
    /// New section with a key derived from `title` and the body's kind.
    pub fn new(title: impl Into<String>, body: SectionBody) -> Self {
        let title = title.into();
        let key = SectionKey::derive(&title, body.kind());
        Self {
            key,
            title,
            body,
            severity: None,
            meta: SectionMeta::default(),
            steps: Vec::new(),
            chart: Vec::new(),
        }
    }

    /// Set the badge severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set the badge severity when present.
    pub fn with_optional_severity(mut self, severity: Option<Severity>) -> Self {
        self.severity = severity;
        self
    }

    /// Replace the metadata panel.
    pub fn with_meta(mut self, meta: SectionMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Attach numbered step cards.
    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    /// Attach a score chart.
    pub fn with_chart(mut self, chart: Vec<ScoreBar>) -> Self {
        self.chart = chart;
        self
    }

    /// Section kind (the declared kind for degraded bodies).
    pub fn kind(&self) -> SectionKind {
        self.body.kind()
    }
}

/// A complete normalized report ready to render.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Main heading
    pub title: String,
    /// Lead paragraph
    pub introduction: String,
    /// Template that produced the sections
    pub mode: Mode,
    /// Non-blocking banner (rate limit, partial result)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Model that produced the analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Sections in display order
    pub sections: Vec<Section>,
}

impl Report {
    /// Keys of every section, in display order.
    pub fn keys(&self) -> Vec<SectionKey> {
        self.sections.iter().map(|s| s.key.clone()).collect()
    }

    /// Find a section by its title.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn key_is_stable_for_same_title_and_kind() {
        let a = SectionKey::derive("Identified Issues", SectionKind::List);
        let b = SectionKey::derive("Identified Issues", SectionKind::List);
        let c = SectionKey::derive("Identified Issues", SectionKind::Text);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.as_str().starts_with("s-"));
        assert_eq!(a.as_str().len(), 2 + 12);
    }

    #[test]
    fn score_bar_clamps_and_rounds() {
        assert_eq!(ScoreBar::new("a", 72.6).score, 73);
        assert_eq!(ScoreBar::new("b", 140.0).score, 100);
        assert_eq!(ScoreBar::new("c", -3.0).score, 0);
        assert_eq!(ScoreBar::new("d", f64::NAN).score, 0);
    }

    #[test]
    fn occurrence_suffix_only_after_first() {
        let key = SectionKey::derive("Notes", SectionKind::Text);
        assert_eq!(key.with_occurrence(1), key);
        assert_eq!(key.with_occurrence(3).as_str(), format!("{}-3", key));
    }

    #[test]
    fn table_defect_reports_first_bad_row() {
        let body = SectionBody::Table {
            headers: vec!["Metric".into(), "Score".into()],
            rows: vec![
                vec!["readability".into(), "80%".into()],
                vec!["complexity".into()],
            ],
        };
        assert_eq!(
            body.table_defect().as_deref(),
            Some("row 2 has 1 cells, expected 2")
        );
    }

    #[test]
    fn table_without_headers_is_defective() {
        let body = SectionBody::Table {
            headers: vec![],
            rows: vec![],
        };
        assert!(body.table_defect().is_some());
        assert_eq!(SectionBody::text("x").table_defect(), None);
    }

    #[test]
    fn degraded_keeps_declared_kind() {
        let body = SectionBody::Degraded {
            expected: SectionKind::Table,
            reason: "bad".into(),
        };
        assert_eq!(body.kind(), SectionKind::Table);
        assert!(body.is_degraded());
    }

    #[test]
    fn section_serializes_with_type_tag() {
        let section = Section::new(
            "Recommendations",
            SectionBody::List {
                kind: ListKind::Numbered,
                items: vec!["split function".into()],
            },
        )
        .with_severity(Severity::Success);

        let json = serde_json::to_value(&section).expect("serialize");
        assert_eq!(json["type"], "list");
        assert_eq!(json["listKind"], "numbered");
        assert_eq!(json["severity"], "success");
        assert_eq!(json["items"][0], "split function");
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn severity_loose_parse() {
        assert_eq!(Severity::parse_loose("WARN"), Some(Severity::Warning));
        assert_eq!(Severity::parse_loose("critical"), Some(Severity::Error));
        assert_eq!(Severity::parse_loose("???"), None);
    }

    #[test]
    fn mode_round_trips_through_str() {
        assert_eq!("debug".parse::<Mode>(), Ok(Mode::Debug));
        assert_eq!(" Analysis ".parse::<Mode>(), Ok(Mode::Analysis));
        assert!("lint".parse::<Mode>().is_err());
        assert_eq!(Mode::Debug.to_string(), "debug");
    }
}
