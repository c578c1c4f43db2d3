//! Timestamp timer abstraction
//!
//! A free-running hardware counter that can be (re)started and sampled.

/// One unit of the hardware timestamp counter
pub type Ticks = u64;

/// Counter rate, fixed by the platform
pub type TicksPerSecond = u64;

/// Free-running timestamp counter
pub trait TimestampTimer {
    /// Error returned when no timer source can be acquired
    type Error;

    /// Start (or restart) the counter
    ///
    /// Platforms may reset the count on restart, so callers must not
    /// assume `now()` is monotonic across calls to `start`.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Current tick count
    fn now(&self) -> Ticks;

    /// Tick frequency in ticks per second
    fn frequency(&self) -> TicksPerSecond;
}
