//! Debug-mode template: error detection, steps, variable state, solution.

use bugscope_report::types::{ListKind, Section, SectionBody, Severity};

use super::why;
use crate::payload::{AnalysisPayload, PayloadError};

/// Always four sections, in this order.
pub fn sections(payload: &AnalysisPayload) -> Vec<Section> {
    vec![
        error_detection(payload.error.as_ref()),
        Section::new(
            "Debug Steps",
            SectionBody::List {
                kind: ListKind::Numbered,
                items: payload.debug_steps.clone(),
            },
        )
        .with_steps(payload.debug_steps.clone())
        .with_meta(why(
            "These steps will help you understand and fix the issues in your code.",
            "Following these steps will help you resolve the debugging issues.",
            90,
        )),
        Section::new(
            "Variable State",
            SectionBody::Table {
                headers: vec!["Variable".into(), "Type".into(), "Value".into()],
                rows: payload
                    .variables
                    .iter()
                    .map(|var| vec![var.name.clone(), var.type_name.clone(), var.value.to_string()])
                    .collect(),
            },
        )
        .with_meta(why(
            "This shows the current state of variables in your code.",
            "Understanding variable states helps in debugging and fixing issues.",
            85,
        )),
        Section::new(
            "Solution",
            SectionBody::text(
                payload
                    .solution
                    .clone()
                    .unwrap_or_else(|| "No fixes required".to_string()),
            ),
        )
        .with_severity(Severity::Success)
        .with_meta(why(
            "This solution will help resolve the debugging issues.",
            "Implementing this solution will fix the identified issues.",
            95,
        )),
    ]
}

fn error_detection(error: Option<&PayloadError>) -> Section {
    match error {
        Some(PayloadError::Detected(message)) => {
            Section::new("Error Detection", SectionBody::text(message.as_str()))
                .with_severity(Severity::Error)
                .with_meta(why(
                    "This error needs to be addressed to make the code work properly.",
                    "The code cannot execute properly until this error is fixed.",
                    95,
                ))
        }
        _ => Section::new("Error Detection", SectionBody::text("No errors detected"))
            .with_severity(Severity::Success)
            .with_meta(why(
                "No errors were found in your code.",
                "Your code is ready to run.",
                95,
            )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clean_run_reports_success() {
        let sections = sections(&AnalysisPayload::default());
        assert_eq!(sections[0].body, SectionBody::text("No errors detected"));
        assert_eq!(sections[0].severity, Some(Severity::Success));
        assert_eq!(sections[3].body, SectionBody::text("No fixes required"));
    }

    #[test]
    fn steps_fill_list_and_cards() {
        let payload = AnalysisPayload::from_value(&json!({
            "debugSteps": ["Read the traceback", "Guard the division"]
        }));
        let sections = sections(&payload);
        let steps = &sections[1];
        assert_eq!(steps.steps.len(), 2);
        assert_eq!(
            steps.body,
            SectionBody::List {
                kind: ListKind::Numbered,
                items: vec!["Read the traceback".into(), "Guard the division".into()],
            }
        );
    }

    #[test]
    fn variable_values_are_json_stringified() {
        let payload = AnalysisPayload::from_value(&json!({
            "variables": {
                "name": { "type": "str", "value": "bob" },
                "items": { "type": "list", "value": [1, 2] },
            }
        }));
        let sections = sections(&payload);
        let SectionBody::Table { rows, .. } = &sections[2].body else {
            panic!("expected table");
        };
        assert_eq!(rows[0], vec!["name".to_string(), "str".into(), "\"bob\"".into()]);
        assert_eq!(rows[1], vec!["items".to_string(), "list".into(), "[1,2]".into()]);
    }
}
