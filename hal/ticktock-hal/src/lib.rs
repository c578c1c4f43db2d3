//! ticktock Hardware Abstraction Layer
//!
//! This crate defines the peripheral traits the exerciser logic is written
//! against. Board crates implement them on top of raw memory-mapped
//! registers; tests implement them with plain structs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (ticktock-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ticktock-core (exerciser logic)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ticktock-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ticktock-hal-softcore (MMIO)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`timer::TimestampTimer`] - Free-running tick counter
//! - [`register::OutputRegister`] - Word-wide output port (LEDs, 7-segment)
//! - [`uart::UartTx`], [`uart::UartRx`] - Byte-wise serial data port
//! - [`irq::InterruptLine`] - Interrupt handler registration

#![no_std]
#![deny(unsafe_code)]

pub mod irq;
pub mod register;
pub mod timer;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use irq::{Handler, InterruptLine};
pub use register::OutputRegister;
pub use timer::{Ticks, TicksPerSecond, TimestampTimer};
pub use uart::{UartRx, UartTx};
