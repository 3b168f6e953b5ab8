// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred work against a caller-supplied monotonic clock.

use core::time::Duration;

/// A one-shot deadline.
///
/// Times are durations since an arbitrary epoch chosen by the host (for example the start
/// of the event loop). Nothing here reads a clock.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Deadline {
    at: Option<Duration>,
}

impl Deadline {
    /// Arm (or re-arm) to fire `delay` after `now`.
    pub(crate) fn arm(&mut self, now: Duration, delay: Duration) {
        self.at = Some(now.saturating_add(delay));
    }

    pub(crate) fn cancel(&mut self) {
        self.at = None;
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    /// Disarm and return `true` if the deadline has passed.
    pub(crate) fn fire(&mut self, now: Duration) -> bool {
        match self.at {
            Some(at) if now >= at => {
                self.at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_once_after_delay() {
        let mut d = Deadline::default();
        assert!(!d.fire(Duration::ZERO));
        d.arm(Duration::ZERO, 300 * MS);
        assert!(!d.fire(299 * MS));
        assert!(d.fire(300 * MS));
        assert!(!d.fire(400 * MS));
        assert!(!d.is_armed());
    }

    #[test]
    fn rearming_extends_and_cancel_disarms() {
        let mut d = Deadline::default();
        d.arm(Duration::ZERO, 300 * MS);
        d.arm(200 * MS, 300 * MS);
        assert!(!d.fire(400 * MS));
        assert!(d.is_armed());
        d.cancel();
        assert!(!d.fire(600 * MS));
    }
}
