//! Terminal rendering of a report.
//!
//! Same structure as the HTML page: title, introduction, warning, then one
//! block per section. Collapsed sections print only their header line.
//! Colors go through `colored`, so `NO_COLOR` and
//! `colored::control::set_override` apply.

use bugscope_report::display::DisplayState;
use bugscope_report::types::{ListKind, Report, Section, SectionBody, SectionMeta, Severity};
use colored::{ColoredString, Colorize};

const INDENT: &str = "    ";
const BAR_WIDTH: usize = 20;

/// Render the whole report as text.
pub fn render_text(report: &Report, display: &DisplayState) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        report.title.bold(),
        format!("({})", report.mode).dimmed()
    ));
    if !report.introduction.trim().is_empty() {
        out.push_str(&format!("{}\n", report.introduction));
    }
    if let Some(warning) = &report.warning {
        out.push_str(&format!("{} {}\n", "Warning:".yellow().bold(), warning));
    }

    if report.sections.is_empty() {
        out.push_str(&format!("\n{}\n", "The analysis returned no sections.".dimmed()));
    }

    for section in &report.sections {
        out.push('\n');
        render_section(&mut out, section, display.is_expanded(&section.key));
    }

    if let Some(model) = &report.model {
        out.push_str(&format!("\n{}\n", format!("Analyzed using: {model}").dimmed()));
    }
    out
}

fn render_section(out: &mut String, section: &Section, expanded: bool) {
    let marker = if expanded { "[-]" } else { "[+]" };
    let badge_text = section
        .severity
        .map(|s| format!(" {}", badge(s)))
        .unwrap_or_default();
    out.push_str(&format!(
        "{} {}{} {}\n",
        marker.dimmed(),
        section.title.bold(),
        badge_text,
        section.key.as_str().dimmed()
    ));

    if !expanded {
        return;
    }

    render_body(out, &section.body);

    if !section.chart.is_empty() {
        let width = section.chart.iter().map(|bar| bar.label.chars().count()).max().unwrap_or(0);
        for bar in &section.chart {
            out.push_str(&format!(
                "{INDENT}{:<w$}  {}\n",
                bar.label,
                confidence_bar(bar.score),
                w = width
            ));
        }
    }

    if !section.steps.is_empty() {
        out.push_str(&format!("{INDENT}{}\n", "Steps:".bold()));
        for (idx, step) in section.steps.iter().enumerate() {
            out.push_str(&format!("{INDENT}  ({}) {}\n", idx + 1, step));
        }
    }

    render_meta(out, &section.meta);
}

fn badge(severity: Severity) -> ColoredString {
    let label = format!("[{} {}]", severity.icon(), severity.label());
    match severity {
        Severity::Info => label.blue(),
        Severity::Warning => label.yellow(),
        Severity::Error => label.red(),
        Severity::Success => label.green(),
    }
}

fn render_body(out: &mut String, body: &SectionBody) {
    if let Some(reason) = body.table_defect() {
        out.push_str(&format!(
            "{INDENT}{} {}\n",
            "Could not display this table section:".yellow(),
            reason
        ));
        return;
    }

    match body {
        SectionBody::Text { content } => {
            if content.trim().is_empty() {
                out.push_str(&format!("{INDENT}{}\n", "Nothing reported.".dimmed()));
            }
            for line in content.lines() {
                out.push_str(&format!("{INDENT}{line}\n"));
            }
        }
        SectionBody::List { kind, items } => {
            if items.is_empty() {
                out.push_str(&format!("{INDENT}{}\n", "Nothing reported.".dimmed()));
            }
            for (idx, item) in items.iter().enumerate() {
                match kind {
                    ListKind::Bullet => {
                        out.push_str(&format!("{INDENT}- {item}\n"));
                    }
                    ListKind::Numbered => {
                        out.push_str(&format!("{INDENT}{}. {item}\n", idx + 1));
                    }
                }
            }
        }
        SectionBody::Table { headers, rows } => render_table(out, headers, rows),
        SectionBody::Code { language, content } => {
            if let Some(lang) = language {
                out.push_str(&format!("{INDENT}{}\n", format!("```{lang}").dimmed()));
            }
            for line in content.lines() {
                out.push_str(&format!("{INDENT}{}\n", line.cyan()));
            }
        }
        SectionBody::Degraded { expected, reason } => {
            out.push_str(&format!(
                "{INDENT}{} {}\n",
                format!("Could not display this {expected} section:").yellow(),
                reason
            ));
        }
    }
}

fn render_table(out: &mut String, headers: &[String], rows: &[Vec<String>]) {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<w$}", w = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    out.push_str(&format!("{INDENT}{}\n", line(headers).bold()));
    if rows.is_empty() {
        out.push_str(&format!("{INDENT}{}\n", "No data.".dimmed()));
    }
    for row in rows {
        out.push_str(&format!("{INDENT}{}\n", line(row)));
    }
}

fn render_meta(out: &mut String, meta: &SectionMeta) {
    if meta.is_empty() {
        return;
    }
    if let Some(text) = &meta.explanation {
        out.push_str(&format!("{INDENT}{} {}\n", "Why this matters:".bold(), text.dimmed()));
    }
    if let Some(text) = &meta.impact {
        out.push_str(&format!("{INDENT}{} {}\n", "Impact:".bold(), text.dimmed()));
    }
    if let Some(confidence) = meta.confidence {
        out.push_str(&format!(
            "{INDENT}{} {}\n",
            "Confidence:".bold(),
            confidence_bar(confidence)
        ));
    }
    for href in &meta.references {
        out.push_str(&format!("{INDENT}{} {}\n", "See:".bold(), href.underline()));
    }
}

fn confidence_bar(confidence: u8) -> String {
    let value = usize::from(confidence.min(100));
    let filled = value * BAR_WIDTH / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled).green(),
        "-".repeat(BAR_WIDTH - filled).dimmed(),
        value
    )
}
