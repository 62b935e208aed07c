//! Root document component - the complete HTML page
//!
//! Single-column layout: title bar, introduction, optional warning banner,
//! then one card per section in display order.

use super::{
    Icon, Introduction, SectionCard, SeverityBadge, WarningBanner, ICON_CODE, ICON_ROBOT,
};
use crate::copy_feedback::COPY_FEEDBACK;
use crate::display::DisplayState;
use crate::styles::{CSP, REPORT_CSS};
use crate::types::{Mode, Report, Severity};
use leptos::prelude::*;

/// The complete HTML document for a report
#[component]
pub fn ReportDocument(report: Report, display: DisplayState) -> impl IntoView {
    let Report {
        title,
        introduction,
        mode,
        warning,
        model,
        sections,
    } = report;

    let mode_badge = match mode {
        Mode::Analysis => Severity::Info,
        Mode::Debug => Severity::Warning,
    };
    let page_title = format!("{} - bugscope", title);
    let section_count = sections.len();

    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{page_title}</title>
                <style>{REPORT_CSS}</style>
            </head>
            <body>
                <main class="report-shell" data-mode=mode.as_str()>
                    <header class="report-title-bar">
                        <h1>
                            <Icon path=ICON_CODE size="22" class="icon-title" />
                            {title}
                        </h1>
                        <SeverityBadge severity=mode_badge />
                    </header>

                    <Introduction text=introduction />
                    <WarningBanner message=warning />

                    <div class="section-list">
                        {sections.into_iter().enumerate().map(|(index, section)| {
                            let expanded = display.is_expanded(&section.key);
                            view! { <SectionCard section=section expanded=expanded index=index /> }
                        }).collect::<Vec<_>>()}
                        {(section_count == 0).then(|| view! {
                            <p class="muted empty-report">"The analysis returned no sections."</p>
                        })}
                    </div>

                    <footer class="report-footer">
                        {model.map(|model| view! {
                            <span class="model-info">
                                <Icon path=ICON_ROBOT size="14" label="Model" />
                                {format!("Analyzed using: {}", model)}
                            </span>
                        })}
                        <span>{format!("bugscope v{}", env!("CARGO_PKG_VERSION"))}</span>
                    </footer>
                </main>
                <script>{app_script()}</script>
            </body>
        </html>
    }
}

/// Client-side interactivity with the copy delay taken from [`COPY_FEEDBACK`].
pub fn app_script() -> String {
    APP_SCRIPT.replace("{copy_feedback_ms}", &COPY_FEEDBACK.as_millis().to_string())
}

/// Section toggle and copy feedback
const APP_SCRIPT: &str = r#"
(() => {
  // 1. Section toggle - flips one card, never its siblings
  document.querySelectorAll('.section-toggle[data-toggle]').forEach(btn => {
      btn.addEventListener('click', () => {
          const key = btn.dataset.toggle;
          const body = document.querySelector(`[data-section-body="${key}"]`);
          if (!body) return;
          const collapsed = body.classList.toggle('collapsed');
          btn.setAttribute('aria-expanded', collapsed ? 'false' : 'true');
      });
  });

  // 2. Copy button - one restartable 2s timer per button
  const COPY_FEEDBACK_MS = {copy_feedback_ms};
  const timers = new WeakMap();
  document.querySelectorAll('.copy-btn[data-copy]').forEach(btn => {
      const label = btn.querySelector('.copy-label');
      btn.addEventListener('click', () => {
          const text = btn.dataset.copy;
          const done = () => {
              clearTimeout(timers.get(btn));
              btn.classList.add('copied');
              if (label) label.textContent = 'Copied';
              timers.set(btn, setTimeout(() => {
                  btn.classList.remove('copied');
                  if (label) label.textContent = 'Copy';
              }, COPY_FEEDBACK_MS));
          };
          if (navigator.clipboard) {
              navigator.clipboard.writeText(text).then(done, () => {});
          }
      });
  });
})();
"#;
