//! Word-wide output register abstraction

/// Memory-mapped output port
///
/// Writes go straight to the peripheral and cannot fail.
pub trait OutputRegister {
    /// Write a full word to the port
    fn write(&mut self, value: u32);

    /// Drive every bit of the port low
    fn clear(&mut self) {
        self.write(0);
    }
}
