//! Transient "copied" acknowledgement for code blocks.
//!
//! Mirrors what the embedded script does in the browser: one flag, one
//! deadline. Triggering again while the flag is up restarts the same
//! deadline instead of stacking a second timer.

use std::time::{Duration, Instant};

/// How long the "Copied" indicator stays up.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Single restartable copy acknowledgement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    until: Option<Instant>,
}

impl CopyFeedback {
    /// Idle indicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a copy at `now`; replaces any pending deadline.
    pub fn trigger(&mut self, now: Instant) {
        self.until = Some(now + COPY_FEEDBACK);
    }

    /// Whether the indicator shows at `now`. Expired deadlines are cleared.
    pub fn is_copied(&mut self, now: Instant) -> bool {
        match self.until {
            Some(deadline) if now < deadline => true,
            Some(_) => {
                self.until = None;
                false
            }
            None => false,
        }
    }

    /// Time left before the indicator reverts.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.until
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverts_after_two_seconds() {
        let start = Instant::now();
        let mut fb = CopyFeedback::new();
        assert!(!fb.is_copied(start));

        fb.trigger(start);
        assert!(fb.is_copied(start + Duration::from_millis(1999)));
        assert!(!fb.is_copied(start + Duration::from_millis(2000)));
        assert_eq!(fb, CopyFeedback::new());
    }

    #[test]
    fn second_trigger_restarts_single_deadline() {
        let start = Instant::now();
        let mut fb = CopyFeedback::new();
        fb.trigger(start);
        fb.trigger(start + Duration::from_millis(1500));

        // The first deadline would have fired at 2000ms.
        assert!(fb.is_copied(start + Duration::from_millis(2500)));
        assert_eq!(
            fb.remaining(start + Duration::from_millis(2500)),
            Duration::from_millis(1000)
        );
        assert!(!fb.is_copied(start + Duration::from_millis(3500)));
        assert_eq!(fb.remaining(start + Duration::from_millis(3500)), Duration::ZERO);
    }
}
