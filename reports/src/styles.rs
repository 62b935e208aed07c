//! CSS styles for the HTML report.
//!
//! This module contains the complete CSS for rendering reports,
//! including the section cards, severity palettes and the
//! "why this matters" panel.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use bugscope_report::styles::REPORT_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", REPORT_CSS, my_css);
//! ```

/// Complete CSS for the report - CRT-inspired dark theme.
///
/// This CSS provides:
/// - Base typography and spacing (monospace)
/// - Section cards with collapsible bodies
/// - Severity badge palettes (indigo, amber, rose, emerald)
/// - Table, list and code block styling
/// - Confidence bar and reference list
pub const REPORT_CSS: &str = r#"
:root {
    --bg-black: #000000;
    --bg-dark: #0a0a0a;
    --bg-mid: #141414;
    --text-bright: #a8a8a8;
    --text-dim: #707070;
    --text-muted: #404040;
    --border-subtle: rgba(168, 168, 168, 0.1);
    --border-visible: rgba(168, 168, 168, 0.2);
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 960px;
    --indigo: #6366f1;
    --indigo-bg: rgba(99, 102, 241, 0.15);
    --amber: #f59e0b;
    --amber-bg: rgba(245, 158, 11, 0.15);
    --rose: #f43f5e;
    --rose-bg: rgba(244, 63, 94, 0.15);
    --emerald: #10b981;
    --emerald-bg: rgba(16, 185, 129, 0.15);
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-mono);
    background: var(--bg-black);
    color: var(--text-bright);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
}

::selection {
    background: rgba(168, 168, 168, 0.3);
    color: var(--text-bright);
}

/* Layout */
.report-shell {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 32px 24px 80px;
}

.report-title-bar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 12px;
    margin-bottom: 16px;
}

.report-title-bar h1 {
    display: flex;
    align-items: center;
    gap: 10px;
    font-size: 20px;
    font-weight: 400;
    margin: 0;
}

.icon {
    vertical-align: middle;
    flex-shrink: 0;
}

.icon-title {
    color: var(--indigo);
}

.icon-sm {
    width: 16px;
    height: 16px;
    flex-shrink: 0;
}

.icon-amber { color: var(--amber); }
.icon-emerald { color: var(--emerald); }

/* Introduction + banner */
.introduction {
    display: flex;
    gap: 10px;
    align-items: flex-start;
    padding: 14px 16px;
    margin-bottom: 20px;
    background: var(--indigo-bg);
    border-left: 3px solid var(--indigo);
    border-radius: 6px;
    font-size: 13px;
}

.warning-banner {
    padding: 12px 16px;
    margin-bottom: 20px;
    background: var(--amber-bg);
    border-left: 3px solid var(--amber);
    border-radius: 6px;
    font-size: 12px;
}

.warning-head {
    display: flex;
    align-items: center;
    gap: 8px;
    color: var(--amber);
}

.warning-banner p {
    margin: 6px 0 0;
}

/* Section cards */
.section-list {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.section-card {
    background: var(--bg-dark);
    border: 1px solid var(--border-visible);
    border-radius: 8px;
    padding: 16px 20px;
}

.section-card:hover {
    border-color: rgba(168, 168, 168, 0.3);
}

.error-card {
    border-color: var(--rose);
    background: var(--rose-bg);
}

.degraded-card {
    border-style: dashed;
}

.section-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 12px;
}

.section-toggle {
    display: flex;
    align-items: center;
    gap: 10px;
    flex: 1;
    background: none;
    border: none;
    padding: 0;
    color: inherit;
    font: inherit;
    cursor: pointer;
    text-align: left;
}

.section-toggle h2 {
    font-size: 14px;
    font-weight: 600;
    margin: 0;
    flex: 1;
}

.section-marker {
    width: 4px;
    height: 20px;
    background: var(--indigo);
    border-radius: 2px;
}

.section-toggle .caret {
    transition: transform 0.15s;
}

.section-toggle[aria-expanded="false"] .caret {
    transform: rotate(-90deg);
}

.section-body {
    margin-top: 12px;
}

.section-body.collapsed {
    display: none;
}

/* Badges */
.badge {
    display: inline-flex;
    align-items: center;
    gap: 4px;
    padding: 2px 10px;
    border-radius: 999px;
    font-size: 11px;
    font-weight: 600;
    white-space: nowrap;
}

.badge-indigo { background: var(--indigo-bg); color: var(--indigo); }
.badge-amber { background: var(--amber-bg); color: var(--amber); }
.badge-rose { background: var(--rose-bg); color: var(--rose); }
.badge-emerald { background: var(--emerald-bg); color: var(--emerald); }

/* Text + lists */
.text-block p {
    margin: 0 0 8px;
    font-size: 13px;
    white-space: pre-wrap;
}

.content-list {
    margin: 0;
    padding-left: 22px;
    font-size: 13px;
}

.content-list li {
    margin-bottom: 6px;
}

.content-list.bullet li::marker {
    color: var(--indigo);
}

.content-list.numbered li::marker {
    color: var(--indigo);
    font-weight: 600;
}

/* Tables */
.table-wrap {
    overflow-x: auto;
}

table {
    border-collapse: collapse;
    width: 100%;
    margin: 4px 0;
    font-size: 12px;
}

th, td {
    border: 1px solid var(--border-visible);
    padding: 8px 10px;
    text-align: left;
}

th {
    background: var(--bg-mid);
    color: var(--text-dim);
    font-weight: 600;
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

td {
    background: var(--bg-dark);
}

/* Code */
.code-block {
    border: 1px solid var(--border-visible);
    border-radius: 6px;
    overflow: hidden;
}

.code-head {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 6px 12px;
    background: var(--bg-mid);
    font-size: 11px;
    color: var(--text-dim);
}

.code-block pre {
    margin: 0;
    padding: 14px;
    overflow-x: auto;
    background: var(--bg-black);
}

.code-block code {
    font-family: var(--font-mono);
    font-size: 12px;
    color: var(--text-bright);
}

.copy-btn {
    display: inline-flex;
    align-items: center;
    gap: 6px;
    background: none;
    border: 1px solid var(--border-visible);
    border-radius: 4px;
    padding: 2px 8px;
    color: var(--text-dim);
    font: inherit;
    font-size: 11px;
    cursor: pointer;
}

.copy-btn:hover {
    color: var(--text-bright);
}

.copy-btn.copied {
    color: var(--emerald);
    border-color: var(--emerald);
}

/* Step cards */
.score-chart {
    margin-top: 12px;
}

.score-chart summary {
    cursor: pointer;
    color: var(--indigo);
    font-size: 12px;
}

.score-chart svg {
    display: block;
    max-width: 100%;
    height: auto;
    margin-top: 8px;
}

.score-track { fill: var(--border-subtle); }
.score-label, .score-value {
    fill: var(--text-dim);
    font-family: var(--font-mono);
    font-size: 11px;
}

.step-cards {
    display: flex;
    flex-direction: column;
    gap: 8px;
    margin-top: 12px;
}

.step-card {
    display: flex;
    gap: 12px;
    align-items: flex-start;
    padding: 10px 12px;
    background: var(--indigo-bg);
    border-radius: 6px;
    font-size: 13px;
}

.step-card p {
    margin: 0;
}

.step-number {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 24px;
    height: 24px;
    border-radius: 50%;
    background: var(--bg-mid);
    color: var(--indigo);
    font-weight: 600;
    flex-shrink: 0;
}

/* Why this matters */
.why-panel {
    margin-top: 14px;
    padding: 12px 14px;
    background: var(--bg-mid);
    border-left: 3px solid var(--indigo);
    border-radius: 6px;
    font-size: 12px;
}

.why-head {
    display: flex;
    align-items: center;
    gap: 8px;
}

.why-head h4 {
    margin: 0;
    font-size: 12px;
    font-weight: 600;
}

.why-text {
    margin: 4px 0 0;
    color: var(--text-dim);
}

.why-block {
    margin-top: 10px;
}

.confidence {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-top: 4px;
}

.confidence-track {
    flex: 1;
    height: 6px;
    background: var(--bg-dark);
    border-radius: 3px;
    overflow: hidden;
}

.confidence-fill {
    height: 100%;
    background: var(--emerald);
    border-radius: 3px;
}

.confidence-value {
    font-size: 11px;
    color: var(--text-dim);
}

.reference-list {
    margin: 4px 0 0;
    padding-left: 18px;
}

.reference-list a {
    color: var(--indigo);
    text-decoration: none;
}

.reference-list a:hover {
    text-decoration: underline;
}

/* Degraded placeholder */
.degraded {
    padding: 10px 12px;
    border: 1px dashed var(--amber);
    border-radius: 6px;
    color: var(--amber);
    font-size: 12px;
}

.degraded p {
    margin: 4px 0 0;
}

/* Footer */
.report-footer {
    display: flex;
    justify-content: space-between;
    gap: 12px;
    margin-top: 32px;
    padding-top: 12px;
    border-top: 1px solid var(--border-visible);
    font-size: 11px;
    color: var(--text-muted);
}

.model-info {
    display: inline-flex;
    align-items: center;
    gap: 6px;
}

/* Utility */
.muted {
    color: var(--text-muted);
}

@media (max-width: 640px) {
    .report-shell {
        padding: 20px 12px 60px;
    }
    .report-title-bar {
        flex-direction: column;
        align-items: flex-start;
    }
}
"#;

/// Content Security Policy header value
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";
