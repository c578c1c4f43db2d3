//! Tick-based pacing
//!
//! The foreground loop never sleeps. It spins on the timestamp timer and
//! asks a [`Pacer`] whether the next step is due.

pub mod pacer;

pub use pacer::{Pacer, PACING_INTERVAL_MS};
