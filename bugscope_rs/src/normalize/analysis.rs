//! Analysis-mode template: metrics, issues, recommendations.

use bugscope_report::types::{ListKind, ScoreBar, Section, SectionBody, Severity};

use super::why;
use crate::payload::{AnalysisPayload, Metric};

/// Always three sections, in this order, even when the payload is empty.
pub fn sections(payload: &AnalysisPayload) -> Vec<Section> {
    vec![
        metrics_section(&payload.metrics),
        Section::new(
            "Identified Issues",
            SectionBody::List {
                kind: ListKind::Bullet,
                items: payload.issues.iter().map(|i| i.message.clone()).collect(),
            },
        )
        .with_severity(Severity::Warning)
        .with_meta(why(
            "These issues could affect code quality, performance, or security.",
            "Addressing these issues will improve code reliability and maintainability.",
            90,
        )),
        Section::new(
            "Recommendations",
            SectionBody::List {
                kind: ListKind::Numbered,
                items: payload.recommendations.clone(),
            },
        )
        .with_severity(Severity::Success)
        .with_meta(why(
            "These recommendations will help improve your code quality and maintainability.",
            "Implementing these recommendations will lead to better code quality and performance.",
            95,
        )),
    ]
}

fn metrics_section(metrics: &[Metric]) -> Section {
    let rows = metrics
        .iter()
        .map(|metric| vec![metric.name.clone(), score_cell(metric.score)])
        .collect();
    let chart = metrics
        .iter()
        .filter_map(|metric| metric.score.map(|score| ScoreBar::new(metric.name.as_str(), score)))
        .collect();

    Section::new(
        "Code Quality Metrics",
        SectionBody::Table {
            headers: vec!["Metric".into(), "Score".into()],
            rows,
        },
    )
    .with_severity(Severity::Info)
    .with_meta(why(
        "These metrics provide a quantitative assessment of your code quality.",
        "Higher scores indicate better code quality and maintainability.",
        85,
    ))
    .with_chart(chart)
}

fn score_cell(score: Option<f64>) -> String {
    match score {
        Some(value) if value.fract() == 0.0 => format!("{value:.0}%"),
        Some(value) => format!("{:.1}%", value),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scores_render_as_percentages() {
        assert_eq!(score_cell(Some(80.0)), "80%");
        assert_eq!(score_cell(Some(72.4)), "72.4%");
        assert_eq!(score_cell(None), "n/a");
        assert_eq!(score_cell(Some(1e20)), "100000000000000000000%");
    }

    #[test]
    fn scored_metrics_get_chart_bars() {
        let payload = AnalysisPayload::from_value(&json!({
            "metrics": {"readability": 80, "complexity": {"status": "unknown"}, "security": 95.4}
        }));
        let sections = sections(&payload);
        assert_eq!(
            sections[0].chart,
            vec![ScoreBar::new("readability", 80.0), ScoreBar::new("security", 95.0)]
        );
        assert_eq!(sections[1].chart, Vec::new());
    }

    #[test]
    fn missing_metrics_keep_headers() {
        let sections = sections(&AnalysisPayload::default());
        match &sections[0].body {
            SectionBody::Table { headers, rows } => {
                assert_eq!(headers, &vec!["Metric".to_string(), "Score".to_string()]);
                assert!(rows.is_empty());
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn recommendations_are_numbered_in_order() {
        let payload = AnalysisPayload::from_value(&json!({
            "recommendations": ["first", "second"]
        }));
        let sections = sections(&payload);
        assert_eq!(
            sections[2].body,
            SectionBody::List {
                kind: ListKind::Numbered,
                items: vec!["first".into(), "second".into()],
            }
        );
        assert_eq!(sections[2].meta.confidence, Some(95));
    }
}
