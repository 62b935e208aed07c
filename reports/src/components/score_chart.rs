//! Metric score chart - inline SVG bars behind a "Show Visualization" toggle
//!
//! Static markup only: `<details>` does the toggling, so the chart needs no
//! script and stays within the page CSP.

use leptos::prelude::*;

use crate::types::ScoreBar;

const LABEL_WIDTH: usize = 140;
const BAR_SPAN: usize = 200;
const ROW_HEIGHT: usize = 24;
const CHART_WIDTH: usize = LABEL_WIDTH + BAR_SPAN + 48;

/// Bar colors, cycled per metric.
const PALETTE: [&str; 4] = ["#FF5A5A", "#50C878", "#5B9BD5", "#FFD700"];

/// Width in chart units of a bar for `score` (0-100).
pub fn score_bar_width(score: u8) -> usize {
    usize::from(score.min(100)) * BAR_SPAN / 100
}

/// Collapsible horizontal bar chart, one row per metric.
#[component]
pub fn ScoreChart(bars: Vec<ScoreBar>) -> impl IntoView {
    if bars.is_empty() {
        return view! { "" }.into_any();
    }

    let height = bars.len() * ROW_HEIGHT;
    let rows = bars
        .into_iter()
        .enumerate()
        .map(|(idx, bar)| {
            let y = idx * ROW_HEIGHT;
            let color = PALETTE[idx % PALETTE.len()];
            view! {
                <g class="score-row">
                    <text x="0" y=(y + 16).to_string() class="score-label">{bar.label}</text>
                    <rect
                        class="score-track"
                        x=LABEL_WIDTH.to_string()
                        y=(y + 6).to_string()
                        width=BAR_SPAN.to_string()
                        height="12"
                    ></rect>
                    <rect
                        class="score-bar"
                        x=LABEL_WIDTH.to_string()
                        y=(y + 6).to_string()
                        width=score_bar_width(bar.score).to_string()
                        height="12"
                        fill=color
                    ></rect>
                    <text x=(LABEL_WIDTH + BAR_SPAN + 8).to_string() y=(y + 16).to_string() class="score-value">
                        {format!("{}%", bar.score)}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <details class="score-chart">
            <summary>"Show Visualization"</summary>
            <svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox=format!("0 0 {} {}", CHART_WIDTH, height)
                width=CHART_WIDTH.to_string()
                height=height.to_string()
                role="img"
                aria-label="Metric scores"
            >
                {rows}
            </svg>
        </details>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_is_proportional() {
        assert_eq!(score_bar_width(0), 0);
        assert_eq!(score_bar_width(50), BAR_SPAN / 2);
        assert_eq!(score_bar_width(100), BAR_SPAN);
        assert_eq!(score_bar_width(250), BAR_SPAN);
    }
}
