//! Output formats for a normalized report.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use bugscope_report::display::DisplayState;
use bugscope_report::render_report;
use bugscope_report::types::Report;

use crate::console::render_text;

/// Where the report ends up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Standalone HTML document
    #[default]
    Html,
    /// Terminal text
    Text,
    /// `Report` as pretty JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "text" | "txt" | "console" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{other}' (expected html, text or json)")),
        }
    }
}

/// Render `report` in the requested format.
pub fn render(report: &Report, display: &DisplayState, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(render_report(report, display)),
        OutputFormat::Text => Ok(render_text(report, display)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(report).context("failed to serialize report")?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugscope_report::types::{Section, SectionBody};

    #[test]
    fn parses_aliases() {
        assert_eq!("HTML".parse::<OutputFormat>(), Ok(OutputFormat::Html));
        assert_eq!("txt".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn json_output_is_camel_case() {
        let report = Report {
            title: "Debug Results".into(),
            sections: vec![Section::new("Solution", SectionBody::text("ok"))],
            ..Default::default()
        };
        let out = render(&report, &DisplayState::new(), OutputFormat::Json).expect("json");
        let value: serde_json::Value = serde_json::from_str(&out).expect("parse back");
        assert_eq!(value["sections"][0]["type"], "text");
        assert_eq!(value["sections"][0]["content"], "ok");
        assert!(value["sections"][0]["key"].as_str().is_some());
    }
}
