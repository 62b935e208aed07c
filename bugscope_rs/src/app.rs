//! The two CLI flows, independent of argument parsing.
//!
//! `analyze` reads a source file, calls the service and renders the answer;
//! `render` normalizes a payload saved earlier. Both go through
//! [`AnalysisSession`] so the same ticket and display-state rules apply.

use std::fs;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use bugscope_report::types::{Mode, Report, SectionKey};
use tracing::{info, warn};

use crate::client::{AnalyzeClient, AnalyzeRequest};
use crate::config::Settings;
use crate::language::{DEFAULT_LANGUAGE, detect_language};
use crate::output::{self, OutputFormat};
use crate::payload::AnalysisPayload;
use crate::session::{AnalysisSession, Applied};

/// Where and how to write the report.
#[derive(Clone, Debug, Default)]
pub struct OutputTarget {
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
    /// Section keys or titles to start collapsed
    pub collapse: Vec<String>,
}

/// Read and parse a saved payload.
pub fn load_payload(path: &Path) -> Result<AnalysisPayload> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read payload {}", path.display()))?;
    AnalysisPayload::from_json(&text)
        .with_context(|| format!("payload {} is not valid JSON", path.display()))
}

/// `bugscope render`: normalize a saved payload and write the report.
pub fn render_saved(payload_path: &Path, mode: Mode, target: &OutputTarget) -> Result<()> {
    let payload = load_payload(payload_path)?;
    let mut session = AnalysisSession::new();
    let ticket = session.begin();
    session.apply(ticket, &payload, mode);
    emit(&mut session, target)
}

/// `bugscope analyze`: send a source file to the service and write the report.
pub async fn analyze_file(source: &Path, settings: &Settings, target: &OutputTarget) -> Result<()> {
    let code = fs::read_to_string(source)
        .with_context(|| format!("failed to read source file {}", source.display()))?;
    let language = settings
        .language
        .clone()
        .or_else(|| detect_language(source).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    let client = AnalyzeClient::new(&settings.endpoint, settings.timeout)?;
    let mut session = AnalysisSession::new();
    let ticket = session.begin();

    let request = AnalyzeRequest {
        code,
        language,
        mode: settings.mode,
    };
    let payload = client.analyze(&request).await;

    if session.apply(ticket, &payload, settings.mode) == Applied::Stale {
        warn!("analysis response superseded by a newer request");
    }
    emit(&mut session, target)
}

fn emit(session: &mut AnalysisSession, target: &OutputTarget) -> Result<()> {
    let keys = {
        let report = current(session)?;
        resolve_collapse(report, &target.collapse)
    };
    session.collapse(keys.iter());

    let report = current(session)?;
    info!(
        sections = report.sections.len(),
        collapsed = session.display().collapsed_count(),
        format = %target.format,
        "report ready"
    );

    if target.format == OutputFormat::Text
        && (target.out.is_some() || !std::io::stdout().is_terminal())
    {
        colored::control::set_override(false);
    }

    let text = output::render(report, session.display(), target.format)?;
    write_output(target.out.as_deref(), &text)
}

fn current(session: &AnalysisSession) -> Result<&Report> {
    session
        .report()
        .ok_or_else(|| anyhow!("no report was produced"))
}

/// Match each `--collapse` value against section keys, then titles.
fn resolve_collapse(report: &Report, wanted: &[String]) -> Vec<SectionKey> {
    let mut keys = Vec::new();
    for raw in wanted {
        let matched: Vec<SectionKey> = report
            .sections
            .iter()
            .filter(|s| s.key.as_str() == raw || s.title.eq_ignore_ascii_case(raw))
            .map(|s| s.key.clone())
            .collect();
        if matched.is_empty() {
            warn!(section = %raw, "--collapse matched no section");
        }
        keys.extend(matched);
    }
    keys
}

fn write_output(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("failed to write report {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("failed to write report to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::build_report;
    use tempfile::TempDir;

    #[test]
    fn collapse_matches_keys_and_titles() {
        let report = build_report(&AnalysisPayload::default(), Mode::Debug);
        let steps_key = report.sections[1].key.to_string();

        let keys = resolve_collapse(
            &report,
            &[steps_key.clone(), "variable state".into(), "nope".into()],
        );
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].as_str(), steps_key);
        assert_eq!(keys[1], report.sections[2].key);
    }

    #[test]
    fn render_saved_writes_html() {
        let dir = TempDir::new().expect("tempdir");
        let payload = dir.path().join("payload.json");
        fs::write(&payload, r#"{"error": "model unavailable"}"#).expect("write");
        let out = dir.path().join("report.html");

        let target = OutputTarget {
            format: OutputFormat::Html,
            out: Some(out.clone()),
            collapse: Vec::new(),
        };
        render_saved(&payload, Mode::Analysis, &target).expect("render");

        let html = fs::read_to_string(&out).expect("read");
        assert!(html.contains("Analysis Error"));
        assert!(html.contains("model unavailable"));
    }

    #[test]
    fn missing_payload_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let err = load_payload(&dir.path().join("absent.json")).expect_err("missing");
        assert!(format!("{err:#}").contains("absent.json"));
    }
}
