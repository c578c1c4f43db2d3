//! Interrupt line abstraction

/// Interrupt callback
///
/// Called with no context from the interrupt controller. Must return
/// promptly: no blocking, no allocation, no unbounded loops.
pub type Handler = fn();

/// A single interrupt line of the platform interrupt controller
pub trait InterruptLine {
    /// Install `handler` for this line, replacing any previous one
    fn register(&mut self, handler: Handler);

    /// Unmask the line so the handler can fire
    fn enable(&mut self);

    /// Mask the line
    fn disable(&mut self);
}
