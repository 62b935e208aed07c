//! Basic report generation example.
//!
//! Run with: `cargo run --example basic_report`

use bugscope_report::display::DisplayState;
use bugscope_report::render_report;
use bugscope_report::types::{ListKind, Mode, Report, Section, SectionBody, SectionMeta, Severity};

fn main() {
    let report = Report {
        title: "Debug Results".into(),
        introduction: "The loop reads one element past the end of the slice.".into(),
        mode: Mode::Debug,
        warning: None,
        model: Some("example-model".into()),
        sections: vec![
            Section::new(
                "Error Detection",
                SectionBody::text("index out of bounds: the len is 3 but the index is 3"),
            )
            .with_severity(Severity::Error),
            Section::new(
                "Debug Steps",
                SectionBody::List {
                    kind: ListKind::Numbered,
                    items: vec![
                        "Check the loop bound".into(),
                        "Use `<` instead of `<=`".into(),
                    ],
                },
            )
            .with_severity(Severity::Info),
            Section::new(
                "Corrected Code",
                SectionBody::code(
                    Some("rust".into()),
                    "for i in 0..items.len() {\n    println!(\"{}\", items[i]);\n}",
                ),
            )
            .with_severity(Severity::Success)
            .with_meta(SectionMeta {
                explanation: Some("Off-by-one reads panic at runtime.".into()),
                confidence: Some(95),
                ..Default::default()
            }),
        ],
    };

    // Collapse the steps to show the per-section state
    let mut display = DisplayState::new();
    display.toggle(&report.sections[1].key);

    let html = render_report(&report, &display);

    let output_path = "basic_report.html";
    std::fs::write(output_path, &html).expect("Failed to write report");

    println!("Report written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
