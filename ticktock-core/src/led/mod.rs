//! LED ramp animation
//!
//! One cycle shifts a single lit bit up the LED bank and back down again.
//! The animator is explicit, finite, and deterministic: it knows nothing
//! about time and emits the next pattern only when asked.

pub mod animator;

pub use animator::{LedAnimator, Phase, INITIAL_PATTERN, RAMP_DOWN_STEP, STEPS_PER_CYCLE};
