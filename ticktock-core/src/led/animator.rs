//! LED ramp state machine

/// Pattern written at the first step of every cycle
pub const INITIAL_PATTERN: u32 = 1;

/// Number of LED writes in one cycle
pub const STEPS_PER_CYCLE: u8 = 19;

/// Step index at which the ramp turns around
pub const RAMP_DOWN_STEP: u8 = 9;

/// Animation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Pattern shifts left after each write
    RampUp,
    /// Pattern shifts right after each write
    RampDown,
    /// All steps of the cycle have been emitted
    Done,
}

impl Phase {
    /// Phase a given step index belongs to
    pub fn at_step(step: u8) -> Self {
        match step {
            s if s < RAMP_DOWN_STEP => Phase::RampUp,
            s if s < STEPS_PER_CYCLE => Phase::RampDown,
            _ => Phase::Done,
        }
    }
}

/// LED ramp animator
///
/// Yields the pattern to write at each step, then advances the pattern
/// according to the current phase. After [`STEPS_PER_CYCLE`] patterns the
/// iterator is exhausted until [`LedAnimator::reset`] is called.
///
/// ```
/// use ticktock_core::led::LedAnimator;
///
/// let patterns: Vec<u32> = LedAnimator::new().collect();
/// assert_eq!(patterns.first(), Some(&1));
/// assert_eq!(patterns[9], 512);
/// assert_eq!(patterns.last(), Some(&1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedAnimator {
    /// Index of the next step to emit
    step: u8,
    /// Pattern emitted at the next step
    pattern: u32,
}

impl Default for LedAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl LedAnimator {
    /// Create an animator at the start of a cycle
    pub const fn new() -> Self {
        Self {
            step: 0,
            pattern: INITIAL_PATTERN,
        }
    }

    /// Rewind to the start of a cycle
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Index of the next step to emit
    pub fn step(&self) -> u8 {
        self.step
    }

    /// Pattern emitted at the next step
    pub fn pattern(&self) -> u32 {
        self.pattern
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        Phase::at_step(self.step)
    }

    /// Check if every step of the cycle has been emitted
    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::Done
    }
}

impl Iterator for LedAnimator {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let out = self.pattern;

        match self.phase() {
            Phase::RampUp => self.pattern <<= 1,
            Phase::RampDown => self.pattern >>= 1,
            Phase::Done => return None,
        }

        self.step += 1;
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = STEPS_PER_CYCLE.saturating_sub(self.step) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for LedAnimator {}
