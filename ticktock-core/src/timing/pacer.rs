//! Fixed-interval step pacing

use ticktock_hal::{Ticks, TicksPerSecond};

/// Interval between two LED steps
pub const PACING_INTERVAL_MS: u64 = 50;

/// Busy-wait pacer
///
/// Tracks the tick at which the last step was taken and reports when the
/// configured threshold has elapsed since then. Tick arithmetic wraps so a
/// counter rollover (or a timer restart that rewinds the count) never
/// stalls the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pacer {
    /// Ticks that must elapse between steps
    threshold: Ticks,
    /// Tick of the last step (or of the last rebase)
    reference: Ticks,
}

impl Pacer {
    /// Create a pacer with an explicit tick threshold
    pub const fn new(threshold: Ticks, reference: Ticks) -> Self {
        Self {
            threshold,
            reference,
        }
    }

    /// Create a pacer for `interval_ms` at the given timer frequency
    ///
    /// The threshold is `interval_ms * (frequency / 1000)`, so sub-kHz
    /// frequencies truncate to a zero threshold and every poll is due.
    pub const fn from_frequency(
        frequency: TicksPerSecond,
        interval_ms: u64,
        reference: Ticks,
    ) -> Self {
        let ticks_per_ms = frequency / 1000;
        Self::new(interval_ms.saturating_mul(ticks_per_ms), reference)
    }

    /// Ticks between steps
    pub fn threshold(&self) -> Ticks {
        self.threshold
    }

    /// Tick of the last step
    pub fn reference(&self) -> Ticks {
        self.reference
    }

    /// Ticks elapsed since the reference
    pub fn elapsed(&self, now: Ticks) -> Ticks {
        now.wrapping_sub(self.reference)
    }

    /// Check whether a step is due at `now`
    pub fn is_due(&self, now: Ticks) -> bool {
        self.elapsed(now) >= self.threshold
    }

    /// Record that a step was taken at `now`
    pub fn mark(&mut self, now: Ticks) {
        self.reference = now;
    }
}
