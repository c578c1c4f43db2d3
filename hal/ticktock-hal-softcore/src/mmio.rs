//! Volatile register access

use core::ptr;

/// One 32-bit memory-mapped register
#[derive(Debug)]
pub struct Register {
    addr: usize,
}

impl Register {
    /// Wrap the register at `addr`
    ///
    /// # Safety
    ///
    /// `addr` must be a valid, 4-byte aligned register (or memory) address
    /// for as long as the wrapper is used.
    pub const unsafe fn new(addr: usize) -> Self {
        Self { addr }
    }

    /// Address of the register
    pub fn addr(&self) -> usize {
        self.addr
    }

    /// Volatile load
    #[inline]
    pub fn read(&self) -> u32 {
        // SAFETY: validity guaranteed by the constructor contract.
        unsafe { ptr::read_volatile(self.addr as *const u32) }
    }

    /// Volatile store
    #[inline]
    pub fn write(&mut self, value: u32) {
        // SAFETY: validity guaranteed by the constructor contract.
        unsafe { ptr::write_volatile(self.addr as *mut u32, value) }
    }

    /// Read-modify-write
    #[inline]
    pub fn modify<F: FnOnce(u32) -> u32>(&mut self, f: F) {
        let value = self.read();
        self.write(f(value));
    }

    /// Set the bits of `mask`
    pub fn set_bits(&mut self, mask: u32) {
        self.modify(|v| v | mask);
    }

    /// Clear the bits of `mask`
    pub fn clear_bits(&mut self, mask: u32) {
        self.modify(|v| v & !mask);
    }
}

/// A peripheral's block of consecutive registers
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegisterBlock {
    base: usize,
}

impl RegisterBlock {
    /// # Safety
    ///
    /// Every register of the block must satisfy [`Register::new`].
    pub(crate) const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Register at byte `offset` from the base
    pub(crate) fn reg(&self, offset: usize) -> Register {
        // SAFETY: the block was created over valid registers.
        unsafe { Register::new(self.base + offset) }
    }
}
