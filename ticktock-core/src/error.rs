//! Error types

use core::fmt;

/// The timestamp timer could not be started
///
/// This is the only failure the exerciser knows about. It is fatal: the
/// program reports it and stops with [`TimerUnavailable::exit_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerUnavailable;

impl TimerUnavailable {
    /// Status the program terminates with
    pub const fn exit_status(&self) -> i32 {
        -1
    }
}

impl fmt::Display for TimerUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("No timer available")
    }
}
