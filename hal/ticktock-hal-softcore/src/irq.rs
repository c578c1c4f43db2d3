//! External interrupt controller
//!
//! The controller latches one pending bit per external line and ORs the
//! enabled ones into the hart's machine external interrupt. Software keeps
//! a table of handlers indexed by line; the trap entry calls
//! [`InterruptController::dispatch`], which runs the handler of every
//! pending, enabled line, lowest line first.
//!
//! Handlers run inside the machine trap with interrupts globally disabled,
//! so they never nest.

use core::cell::RefCell;

use critical_section::Mutex;
use ticktock_hal::{Handler, InterruptLine};

use crate::memory_map::IRQ_LINES;
use crate::mmio::RegisterBlock;

/// Pending register offset (read-only, one bit per line)
const PENDING: usize = 0x00;
/// Enable register offset (one bit per line)
const ENABLE: usize = 0x04;

/// Handlers indexed by interrupt line
pub struct HandlerTable {
    slots: Mutex<RefCell<[Option<Handler>; IRQ_LINES]>>,
}

impl Default for HandlerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerTable {
    /// Create an empty table
    pub const fn new() -> Self {
        Self {
            slots: Mutex::new(RefCell::new([None; IRQ_LINES])),
        }
    }

    /// Install or remove the handler of `line`
    pub fn set(&self, line: u8, handler: Option<Handler>) {
        critical_section::with(|cs| {
            if let Some(slot) = self.slots.borrow_ref_mut(cs).get_mut(line as usize) {
                *slot = handler;
            }
        });
    }

    /// Handler installed for `line`
    pub fn get(&self, line: u8) -> Option<Handler> {
        critical_section::with(|cs| {
            self.slots
                .borrow_ref(cs)
                .get(line as usize)
                .copied()
                .flatten()
        })
    }

    /// Run the handler of every line set in `pending`, lowest first
    ///
    /// Returns the number of handlers run.
    pub fn dispatch(&self, pending: u32) -> u32 {
        let mut ran = 0;
        let mut remaining = pending;

        while remaining != 0 {
            let line = remaining.trailing_zeros() as u8;
            remaining &= remaining - 1;

            match self.get(line) {
                Some(handler) => {
                    handler();
                    ran += 1;
                }
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("spurious interrupt on line {}", line);
                }
            }
        }

        ran
    }
}

/// External interrupt controller driver
pub struct InterruptController {
    regs: RegisterBlock,
    table: &'static HandlerTable,
}

impl InterruptController {
    /// Create a driver for the controller at `base`, dispatching through
    /// `table`
    ///
    /// # Safety
    ///
    /// `base` must be the address of the interrupt controller (or memory
    /// standing in for it) and stay valid for the driver's lifetime.
    pub unsafe fn new(base: usize, table: &'static HandlerTable) -> Self {
        Self {
            regs: RegisterBlock::new(base),
            table,
        }
    }

    /// Handle to a single line
    ///
    /// Returns `None` if `line` is out of range.
    pub fn line(&self, line: u8) -> Option<IrqLine> {
        ((line as usize) < IRQ_LINES).then(|| IrqLine {
            regs: self.regs,
            table: self.table,
            line,
        })
    }

    /// Lines currently pending and enabled
    pub fn pending(&self) -> u32 {
        self.regs.reg(PENDING).read() & self.regs.reg(ENABLE).read()
    }

    /// Service every pending line
    ///
    /// Called from the machine external interrupt trap.
    pub fn dispatch(&self) -> u32 {
        self.table.dispatch(self.pending())
    }

    /// Let external interrupts reach the hart
    ///
    /// Sets `mie.MEIE` and the global `mstatus.MIE`. Does nothing on the
    /// host.
    pub fn unmask_hart(&mut self) {
        #[cfg(target_arch = "riscv32")]
        // SAFETY: handlers are installed before lines are enabled, and the
        // handler table is only mutated inside critical sections.
        unsafe {
            riscv::register::mie::set_mext();
            riscv::interrupt::enable();
        }
    }
}

/// One external interrupt line
pub struct IrqLine {
    regs: RegisterBlock,
    table: &'static HandlerTable,
    line: u8,
}

impl IrqLine {
    /// Line number
    pub fn number(&self) -> u8 {
        self.line
    }

    /// Check if the line is enabled in the controller
    pub fn is_enabled(&self) -> bool {
        self.regs.reg(ENABLE).read() & self.mask() != 0
    }

    fn mask(&self) -> u32 {
        1 << self.line
    }
}

impl InterruptLine for IrqLine {
    fn register(&mut self, handler: Handler) {
        self.table.set(self.line, Some(handler));
    }

    fn enable(&mut self) {
        let mask = self.mask();
        self.regs.reg(ENABLE).set_bits(mask);
    }

    fn disable(&mut self) {
        let mask = self.mask();
        self.regs.reg(ENABLE).clear_bits(mask);
    }
}
