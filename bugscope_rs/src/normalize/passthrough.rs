//! Conversion of pre-built `sections` entries.
//!
//! Entries come straight from the model, so each field is coerced to the
//! shape its declared `type` needs. Tables are validated here, once; a table
//! that cannot be drawn becomes [`SectionBody::Degraded`].

use bugscope_report::types::{
    ListKind, Section, SectionBody, SectionKind, SectionMeta, Severity,
};
use serde_json::{Map, Value};
use tracing::warn;

use crate::payload::{read_string_list, scalar_text, string_field};

/// Title used when an entry has none.
pub const UNTITLED: &str = "Untitled section";

/// Convert every object entry; anything else is skipped.
pub fn convert(entries: &[Value]) -> Vec<Section> {
    entries
        .iter()
        .filter_map(Value::as_object)
        .map(convert_entry)
        .collect()
}

fn convert_entry(obj: &Map<String, Value>) -> Section {
    let title = raw_text_field(obj, "title").unwrap_or_else(|| UNTITLED.to_string());
    let content = obj.get("content");

    let body = match (declared_kind(obj), content) {
        (kind @ (SectionKind::Text | SectionKind::Code | SectionKind::List), Some(Value::Object(_))) => {
            SectionBody::Degraded {
                expected: kind,
                reason: format!("{kind} content is an object"),
            }
        }
        (SectionKind::Text, _) => SectionBody::text(joined_text(content)),
        (SectionKind::Code, _) => {
            SectionBody::code(string_field(obj, "language"), joined_text(content))
        }
        (SectionKind::List, _) => SectionBody::List {
            kind: list_kind(obj),
            items: content.map(read_string_list).unwrap_or_default(),
        },
        (SectionKind::Table, _) => table_body(obj),
    };

    if let SectionBody::Degraded { reason, .. } = &body {
        warn!(title = %title, %reason, "degrading malformed section");
    }

    Section::new(title, body)
        .with_optional_severity(
            obj.get("severity")
                .and_then(Value::as_str)
                .and_then(Severity::parse_loose),
        )
        .with_meta(read_meta(obj))
        .with_steps(obj.get("steps").map(read_string_list).unwrap_or_default())
}

/// Model-authored text is kept verbatim; only blank strings count as absent.
fn raw_text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn declared_kind(obj: &Map<String, Value>) -> SectionKind {
    match obj
        .get("type")
        .and_then(Value::as_str)
        .map(|t| t.trim().to_ascii_lowercase())
        .as_deref()
    {
        Some("list") => SectionKind::List,
        Some("table") => SectionKind::Table,
        Some("code") => SectionKind::Code,
        _ => SectionKind::Text,
    }
}

fn list_kind(obj: &Map<String, Value>) -> ListKind {
    let raw = obj
        .get("listType")
        .or_else(|| obj.get("listKind"))
        .and_then(Value::as_str)
        .map(str::to_ascii_lowercase);
    match raw.as_deref() {
        Some("number" | "numbered" | "ordered") => ListKind::Numbered,
        _ => ListKind::Bullet,
    }
}

/// Text/code content: a string as-is, an array joined line by line.
fn joined_text(content: Option<&Value>) -> String {
    match content {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(scalar_text)
            .collect::<Vec<_>>()
            .join("\n"),
        Some(other) => scalar_text(other).unwrap_or_default(),
        None => String::new(),
    }
}

fn table_body(obj: &Map<String, Value>) -> SectionBody {
    let headers: Vec<String> = obj
        .get("tableHeaders")
        .and_then(Value::as_array)
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();

    let raw_rows = obj
        .get("tableData")
        .or_else(|| obj.get("tableRows"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut rows = Vec::with_capacity(raw_rows.len());
    for (idx, raw) in raw_rows.iter().enumerate() {
        match raw.as_array() {
            Some(cells) => rows.push(cells.iter().map(cell_text).collect()),
            None => {
                return SectionBody::Degraded {
                    expected: SectionKind::Table,
                    reason: format!("row {} is not a list of cells", idx + 1),
                };
            }
        }
    }

    let table = SectionBody::Table { headers, rows };
    match table.table_defect() {
        Some(reason) => SectionBody::Degraded {
            expected: SectionKind::Table,
            reason,
        },
        None => table,
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => scalar_text(other).unwrap_or_else(|| other.to_string()),
    }
}

fn read_meta(obj: &Map<String, Value>) -> SectionMeta {
    SectionMeta {
        explanation: raw_text_field(obj, "explanation"),
        impact: raw_text_field(obj, "impact"),
        confidence: obj.get("confidence").and_then(read_confidence),
        references: obj
            .get("references")
            .map(read_string_list)
            .unwrap_or_default(),
    }
}

/// A number or numeric string, clamped to 0-100.
fn read_confidence(value: &Value) -> Option<u8> {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim_end().parse::<f64>().ok(),
        _ => None,
    }?;
    raw.is_finite().then(|| raw.clamp(0.0, 100.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn one(entry: Value) -> Section {
        let mut sections = convert(&[entry]);
        assert_eq!(sections.len(), 1);
        sections.remove(0)
    }

    #[test]
    fn unknown_type_falls_back_to_text() {
        let section = one(json!({ "title": "Odd", "type": "chart", "content": "data" }));
        assert_eq!(section.body, SectionBody::text("data"));
    }

    #[test]
    fn scalar_list_content_becomes_one_item() {
        let section = one(json!({ "title": "L", "type": "list", "content": "only" }));
        assert_eq!(
            section.body,
            SectionBody::List {
                kind: ListKind::Bullet,
                items: vec!["only".into()],
            }
        );
    }

    #[test]
    fn list_type_aliases_select_numbered() {
        for alias in ["number", "numbered", "ordered"] {
            let section = one(json!({ "type": "list", "listType": alias, "content": ["a", "b"] }));
            assert!(matches!(
                section.body,
                SectionBody::List { kind: ListKind::Numbered, .. }
            ));
        }
        let section = one(json!({ "type": "list", "listKind": "bullet", "content": ["a"] }));
        assert!(matches!(
            section.body,
            SectionBody::List { kind: ListKind::Bullet, .. }
        ));
    }

    #[test]
    fn array_text_is_joined_by_lines() {
        let section = one(json!({ "type": "code", "language": "python", "content": ["a = 1", "print(a)"] }));
        assert_eq!(
            section.body,
            SectionBody::code(Some("python".into()), "a = 1\nprint(a)")
        );
    }

    #[test]
    fn ragged_table_is_degraded() {
        let section = one(json!({
            "title": "Grid",
            "type": "table",
            "tableHeaders": ["a", "b"],
            "tableData": [["1", "2"], ["3"]],
        }));
        assert_eq!(
            section.body,
            SectionBody::Degraded {
                expected: SectionKind::Table,
                reason: "row 2 has 1 cells, expected 2".into(),
            }
        );
    }

    #[test]
    fn table_rows_alias_and_numeric_cells() {
        let section = one(json!({
            "type": "table",
            "tableHeaders": ["name", "score"],
            "tableRows": [["x", 10], ["y", null]],
        }));
        assert_eq!(
            section.body,
            SectionBody::Table {
                headers: vec!["name".into(), "score".into()],
                rows: vec![vec!["x".into(), "10".into()], vec!["y".into(), "".into()]],
            }
        );
    }

    #[test]
    fn table_without_headers_is_degraded() {
        let section = one(json!({ "type": "table", "tableData": [["1"]] }));
        assert!(section.body.is_degraded());
        assert_eq!(section.kind(), SectionKind::Table);
    }

    #[test]
    fn metadata_passes_through_and_confidence_clamps() {
        let section = one(json!({
            "type": "text",
            "content": "x",
            "severity": "warning",
            "explanation": "why",
            "impact": "what",
            "confidence": 140,
            "references": ["https://example.com/a"],
            "steps": ["one", "two"],
        }));
        assert_eq!(section.title, UNTITLED);
        assert_eq!(section.severity, Some(Severity::Warning));
        assert_eq!(section.meta.confidence, Some(100));
        assert_eq!(section.meta.references, vec!["https://example.com/a".to_string()]);
        assert_eq!(section.steps.len(), 2);
    }

    #[test]
    fn numeric_list_content_becomes_one_item() {
        let section = one(json!({ "title": "Count", "type": "list", "content": 42 }));
        assert_eq!(
            section.body,
            SectionBody::List {
                kind: ListKind::Bullet,
                items: vec!["42".into()],
            }
        );
    }

    #[test]
    fn object_content_is_degraded() {
        let text = one(json!({ "title": "T", "type": "text", "content": { "detail": "x" } }));
        assert_eq!(
            text.body,
            SectionBody::Degraded {
                expected: SectionKind::Text,
                reason: "text content is an object".into(),
            }
        );

        let code = one(json!({ "type": "code", "content": { "src": "x" } }));
        assert!(matches!(
            code.body,
            SectionBody::Degraded { expected: SectionKind::Code, .. }
        ));

        let list = one(json!({ "type": "list", "content": { "a": 1 } }));
        assert!(matches!(
            list.body,
            SectionBody::Degraded { expected: SectionKind::List, .. }
        ));
    }

    #[test]
    fn titles_and_explanations_are_verbatim() {
        let section = one(json!({
            "title": "  Indented title ",
            "content": "x",
            "explanation": " spaced\n",
        }));
        assert_eq!(section.title, "  Indented title ");
        assert_eq!(section.meta.explanation.as_deref(), Some(" spaced\n"));

        let blank = one(json!({ "title": "   ", "content": "x" }));
        assert_eq!(blank.title, UNTITLED);
    }

    #[test]
    fn confidence_accepts_numeric_strings() {
        let section = one(json!({ "content": "x", "confidence": "85" }));
        assert_eq!(section.meta.confidence, Some(85));

        let section = one(json!({ "content": "x", "confidence": " 72.6% " }));
        assert_eq!(section.meta.confidence, Some(73));

        let section = one(json!({ "content": "x", "confidence": "high" }));
        assert_eq!(section.meta.confidence, None);
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let sections = convert(&[json!("stray"), json!({ "title": "Kept" }), json!(7)]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Kept");
    }
}
