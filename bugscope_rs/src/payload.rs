//! Lenient model of the analysis service's JSON answer.
//!
//! The service is not under our control and its answers drift between
//! versions, so every field is read from a [`serde_json::Value`] on its own:
//! a field with the wrong shape is treated as absent instead of failing the
//! whole payload.

use serde_json::{Map, Value};

use bugscope_report::types::Severity;

/// Message used when the service reports `success: false` without saying why.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// One issue reported against the submitted code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    /// 1-based line (missing or zero reads as 1)
    pub line_number: u32,
    /// Optional column
    pub column: Option<u32>,
    /// Human-readable message
    pub message: String,
    /// Info, warning or error (unknown reads as info)
    pub severity: Severity,
}

/// A named quality metric.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    /// Metric name as sent by the service
    pub name: String,
    /// Score, usually 0-100
    pub score: Option<f64>,
    /// Optional status label ("good", "needs work", ...)
    pub status: Option<String>,
}

/// One entry of the debug-mode variable table.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    /// Variable name
    pub name: String,
    /// Declared or inferred type
    pub type_name: String,
    /// Raw value, rendered as JSON
    pub value: Value,
}

/// The `error` field, which means two different things depending on shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PayloadError {
    /// Plain string: the analysis itself failed upstream
    Upstream(String),
    /// Object with `message`: an error found in the user's code
    Detected(String),
}

impl PayloadError {
    /// The message, whichever kind it is.
    pub fn message(&self) -> &str {
        match self {
            PayloadError::Upstream(message) | PayloadError::Detected(message) => message,
        }
    }
}

/// Everything we understand from one analysis response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisPayload {
    pub analysis: Option<String>,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    pub metrics: Vec<Metric>,
    pub corrected_code: Option<String>,
    pub language: Option<String>,
    pub error: Option<PayloadError>,
    pub warning: Option<String>,
    pub success: Option<bool>,
    pub model: Option<String>,
    pub debug_steps: Vec<String>,
    pub variables: Vec<Variable>,
    pub solution: Option<String>,
    /// Pre-built section objects, kept raw for the pass-through path
    pub sections: Option<Vec<Value>>,
}

impl AnalysisPayload {
    /// Parse JSON text. Fails only when the text is not JSON at all.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    /// Read every known field leniently. Non-object values yield an empty payload.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            analysis: string_field(obj, "analysis"),
            issues: obj.get("issues").map(read_issues).unwrap_or_default(),
            recommendations: ["recommendations", "solutions", "suggestions"]
                .iter()
                .filter_map(|key| obj.get(*key))
                .map(read_string_list)
                .find(|items| !items.is_empty())
                .unwrap_or_default(),
            metrics: obj.get("metrics").map(read_metrics).unwrap_or_default(),
            corrected_code: string_field(obj, "correctedCode"),
            language: string_field(obj, "language"),
            error: obj.get("error").and_then(read_error),
            warning: string_field(obj, "warning"),
            success: obj.get("success").and_then(Value::as_bool),
            model: string_field(obj, "model"),
            debug_steps: obj
                .get("debugSteps")
                .map(read_string_list)
                .unwrap_or_default(),
            variables: obj.get("variables").map(read_variables).unwrap_or_default(),
            solution: string_field(obj, "solution"),
            sections: obj.get("sections").and_then(Value::as_array).cloned(),
        }
    }

    /// Synthetic payload describing a failure that happened before or
    /// instead of a real answer (transport error, bad status).
    pub fn upstream_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(PayloadError::Upstream(message.into())),
            success: Some(false),
            ..Self::default()
        }
    }
}

pub(crate) fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Stringify a scalar the way a template would show it.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Accepts a scalar (one item), an array of scalars, or an array of
/// `{ description | message | text }` objects.
pub(crate) fn read_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => vec![s.clone()],
        Value::Number(_) | Value::Bool(_) => scalar_text(value).into_iter().collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(obj) => ["description", "message", "text"]
                    .iter()
                    .find_map(|key| string_field(obj, key)),
                other => scalar_text(other),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn read_issues(value: &Value) -> Vec<Issue> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(message) => Some(Issue {
                line_number: 1,
                column: None,
                message: message.clone(),
                severity: Severity::Info,
            }),
            Value::Object(obj) => {
                let message =
                    string_field(obj, "message").or_else(|| string_field(obj, "description"))?;
                Some(Issue {
                    line_number: obj
                        .get("lineNumber")
                        .or_else(|| obj.get("line"))
                        .and_then(Value::as_u64)
                        .map(|n| n.clamp(1, u64::from(u32::MAX)) as u32)
                        .unwrap_or(1),
                    column: obj
                        .get("column")
                        .and_then(Value::as_u64)
                        .and_then(|n| u32::try_from(n).ok()),
                    message,
                    severity: obj
                        .get("severity")
                        .and_then(Value::as_str)
                        .and_then(Severity::parse_loose)
                        .unwrap_or(Severity::Info),
                })
            }
            _ => None,
        })
        .collect()
}

fn read_metrics(value: &Value) -> Vec<Metric> {
    let Some(obj) = value.as_object() else {
        return Vec::new();
    };

    obj.iter()
        .map(|(name, raw)| match raw {
            Value::Object(fields) => Metric {
                name: name.clone(),
                score: fields.get("score").and_then(Value::as_f64),
                status: string_field(fields, "status"),
            },
            other => Metric {
                name: name.clone(),
                score: other.as_f64(),
                status: None,
            },
        })
        .collect()
}

fn read_variables(value: &Value) -> Vec<Variable> {
    let Some(obj) = value.as_object() else {
        return Vec::new();
    };

    obj.iter()
        .map(|(name, raw)| match raw {
            Value::Object(fields) if fields.contains_key("value") || fields.contains_key("type") => {
                Variable {
                    name: name.clone(),
                    type_name: string_field(fields, "type").unwrap_or_else(|| "unknown".into()),
                    value: fields.get("value").cloned().unwrap_or(Value::Null),
                }
            }
            other => Variable {
                name: name.clone(),
                type_name: json_type_name(other).to_string(),
                value: other.clone(),
            },
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn read_error(value: &Value) -> Option<PayloadError> {
    match value {
        Value::String(message) if !message.trim().is_empty() => {
            Some(PayloadError::Upstream(message.clone()))
        }
        Value::Object(obj) => Some(PayloadError::Detected(
            string_field(obj, "message")
                .or_else(|| string_field(obj, "description"))
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_object_is_empty_payload() {
        assert_eq!(AnalysisPayload::from_value(&json!([1, 2])), AnalysisPayload::default());
        assert_eq!(AnalysisPayload::from_value(&json!(null)), AnalysisPayload::default());
    }

    #[test]
    fn scalar_lists_become_one_item() {
        assert_eq!(read_string_list(&json!(42)), vec!["42".to_string()]);
        assert_eq!(read_string_list(&json!(false)), vec!["false".to_string()]);
        assert_eq!(read_string_list(&json!([1, "two", null])), vec!["1".to_string(), "two".to_string()]);
        assert!(read_string_list(&json!({"text": "x"})).is_empty());
        assert!(read_string_list(&json!(null)).is_empty());
    }

    #[test]
    fn wrong_shapes_read_as_absent() {
        let payload = AnalysisPayload::from_value(&json!({
            "analysis": 42,
            "issues": "not a list of issues",
            "metrics": [1, 2, 3],
            "success": "yes",
        }));
        assert_eq!(payload.analysis, None);
        assert!(payload.issues.is_empty());
        assert!(payload.metrics.is_empty());
        assert_eq!(payload.success, None);
    }

    #[test]
    fn issue_line_number_clamps_to_one() {
        let payload = AnalysisPayload::from_value(&json!({
            "issues": [
                { "lineNumber": 0, "message": "zero", "severity": "error" },
                { "description": "alias", "severity": "bogus" },
                "plain string issue",
                { "lineNumber": 12, "column": 4, "message": "real" },
            ]
        }));
        let lines: Vec<u32> = payload.issues.iter().map(|i| i.line_number).collect();
        assert_eq!(lines, vec![1, 1, 1, 12]);
        assert_eq!(payload.issues[0].severity, Severity::Error);
        assert_eq!(payload.issues[1].message, "alias");
        assert_eq!(payload.issues[1].severity, Severity::Info);
        assert_eq!(payload.issues[3].column, Some(4));
    }

    #[test]
    fn metrics_keep_insertion_order() {
        let payload = AnalysisPayload::from_json(
            r#"{"metrics": {"readability": 80, "complexity": {"score": 60, "status": "fair"}, "security": 95}}"#,
        )
        .expect("valid json");
        let names: Vec<&str> = payload.metrics.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["readability", "complexity", "security"]);
        assert_eq!(payload.metrics[1].score, Some(60.0));
        assert_eq!(payload.metrics[1].status.as_deref(), Some("fair"));
    }

    #[test]
    fn recommendations_fall_back_through_aliases() {
        let payload = AnalysisPayload::from_value(&json!({
            "recommendations": [],
            "solutions": [{ "type": "refactor", "description": "Extract a helper" }],
            "suggestions": ["ignored"],
        }));
        assert_eq!(payload.recommendations, vec!["Extract a helper".to_string()]);
    }

    #[test]
    fn error_shape_decides_meaning() {
        let upstream = AnalysisPayload::from_value(&json!({ "error": "quota exceeded" }));
        assert_eq!(upstream.error, Some(PayloadError::Upstream("quota exceeded".into())));

        let detected = AnalysisPayload::from_value(&json!({
            "error": { "message": "NameError: x is not defined", "line": 3 }
        }));
        assert_eq!(
            detected.error,
            Some(PayloadError::Detected("NameError: x is not defined".into()))
        );
    }

    #[test]
    fn variables_accept_typed_and_bare_values() {
        let payload = AnalysisPayload::from_value(&json!({
            "variables": {
                "count": { "type": "int", "value": 3 },
                "names": ["a", "b"],
            }
        }));
        assert_eq!(payload.variables[0].type_name, "int");
        assert_eq!(payload.variables[0].value, json!(3));
        assert_eq!(payload.variables[1].type_name, "array");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(AnalysisPayload::from_json("{not json").is_err());
    }
}
