//! # bugscope
//!
//! Turns the loosely-typed JSON answer of an AI code analysis service into a
//! structured report: ordered sections of text, lists, tables and code, each
//! with an optional severity badge and a "why this matters" panel.
//!
//! ## Pipeline
//!
//! ```text
//! source ──► AnalyzeClient ──► AnalysisPayload ──► normalize ──► Report
//!                                                               │
//!                                   DisplayState ──► html | text | json
//! ```
//!
//! ## Library Usage
//!
//! ```rust
//! use bugscope::normalize::build_report;
//! use bugscope::payload::AnalysisPayload;
//! use bugscope_report::types::Mode;
//!
//! let payload = AnalysisPayload::from_json(
//!     r#"{"issues": [{"lineNumber": 5, "message": "unused variable", "severity": "warning"}],
//!         "metrics": {"readability": 80}}"#,
//! )
//! .unwrap();
//!
//! let report = build_report(&payload, Mode::Analysis);
//! assert_eq!(report.sections[0].title, "Code Quality Metrics");
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! bugscope analyze src/main.py --mode debug --out report.html
//! bugscope render saved-payload.json --format text
//! ```

pub mod app;
pub mod client;
pub mod config;
pub mod console;
pub mod language;
pub mod normalize;
pub mod output;
pub mod payload;
pub mod session;

pub use client::{AnalyzeClient, AnalyzeRequest, ClientError};
pub use normalize::{ModeStrategy, build_report, normalize};
pub use payload::AnalysisPayload;
pub use session::{AnalysisSession, Applied, Generations, RequestTicket};
