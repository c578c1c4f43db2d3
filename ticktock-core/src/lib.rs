//! Board-agnostic logic for the soft-core peripheral exerciser
//!
//! This crate contains everything that does not touch a real register:
//!
//! - Tick pacing against an injected timestamp timer
//! - LED ramp state machine
//! - Decimal-to-nibble encoding for the 7-segment display
//! - UART report line formatting
//! - Receive latch shared with the UART interrupt handler
//! - The [`Exerciser`] foreground loop tying them together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod error;
pub mod exerciser;
pub mod led;
pub mod report;
pub mod rx;
pub mod timing;

pub use error::TimerUnavailable;
pub use exerciser::{CycleReport, Exerciser};
pub use rx::RxLatch;
