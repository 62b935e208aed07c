//! Request generations and the current report.
//!
//! Every analyze call takes a [`RequestTicket`] before it starts. When the
//! answer arrives, [`AnalysisSession::apply`] installs it only if no newer
//! ticket has been issued since; a late answer to an older call is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bugscope_report::display::DisplayState;
use bugscope_report::types::{Mode, Report, SectionKey};
use tracing::debug;

use crate::normalize::build_report;
use crate::payload::AnalysisPayload;

/// Identifier of one analyze call. Higher is newer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket counter, cheap to clone and share across tasks.
#[derive(Clone, Debug, Default)]
pub struct Generations {
    latest: Arc<AtomicU64>,
}

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket. It supersedes every earlier one.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// True when no ticket newer than `ticket` has been issued.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

/// Outcome of [`AnalysisSession::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    /// The report was replaced and display state reset.
    Installed,
    /// A newer request is in flight or done; nothing changed.
    Stale,
}

/// The report on screen plus its expand/collapse state.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    generations: Generations,
    report: Option<Report>,
    display: DisplayState,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session sharing an existing ticket counter.
    pub fn with_generations(generations: Generations) -> Self {
        Self {
            generations,
            ..Self::default()
        }
    }

    pub fn generations(&self) -> &Generations {
        &self.generations
    }

    /// Start a request.
    pub fn begin(&self) -> RequestTicket {
        self.generations.issue()
    }

    /// Normalize and install `payload` if `ticket` is still the latest.
    pub fn apply(&mut self, ticket: RequestTicket, payload: &AnalysisPayload, mode: Mode) -> Applied {
        if !self.generations.is_current(ticket) {
            debug!(ticket = ticket.id(), "discarding stale analysis response");
            return Applied::Stale;
        }

        self.report = Some(build_report(payload, mode));
        self.display.reset();
        Applied::Installed
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Flip one section; returns its new expanded state.
    pub fn toggle(&mut self, key: &SectionKey) -> bool {
        self.display.toggle(key)
    }

    /// Collapse the given keys (used for `--collapse`).
    pub fn collapse<'a>(&mut self, keys: impl IntoIterator<Item = &'a SectionKey>) {
        self.display.collapse_all(keys);
    }
}
