//! Foreground loop
//!
//! Every cycle restarts the timer, spins through the LED ramp one paced
//! step at a time, bumps the seconds counter, sends the report line over
//! the UART and refreshes the 7-segment display. The loop only ever stops
//! because the timer could not be started.

use core::convert::Infallible;

use ticktock_hal::{OutputRegister, TimestampTimer, UartTx};

use crate::display;
use crate::error::TimerUnavailable;
use crate::led::LedAnimator;
use crate::report::{self, ReportLine};
use crate::timing::{Pacer, PACING_INTERVAL_MS};

/// Outcome of one completed animation cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Seconds counter after the cycle
    pub seconds: u32,
    /// Word written to the 7-segment display
    pub display_word: u32,
    /// Line written to the UART
    pub line: ReportLine,
}

/// The peripheral exerciser
///
/// Owns the timer and the three output paths. Generic over the HAL traits
/// so the same loop runs against MMIO on the board and against mocks on
/// the host.
pub struct Exerciser<T, L, D, U> {
    timer: T,
    leds: L,
    display: D,
    uart: U,
    animator: LedAnimator,
    pacer: Pacer,
    seconds: u32,
}

impl<T, L, D, U> Exerciser<T, L, D, U>
where
    T: TimestampTimer,
    L: OutputRegister,
    D: OutputRegister,
    U: UartTx,
{
    /// Take ownership of the peripherals and clear the LED bank
    pub fn new(timer: T, mut leds: L, display: D, uart: U) -> Self {
        leds.clear();

        Self {
            timer,
            leds,
            display,
            uart,
            animator: LedAnimator::new(),
            pacer: Pacer::new(0, 0),
            seconds: 0,
        }
    }

    /// Seconds counted so far
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Current step pacer
    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    /// Release the peripherals
    pub fn free(self) -> (T, L, D, U) {
        (self.timer, self.leds, self.display, self.uart)
    }

    /// Start the timer for the first time and derive the step threshold
    ///
    /// Checks the timer is available before the loop is entered.
    pub fn boot(&mut self) -> Result<(), TimerUnavailable> {
        self.timer.start().map_err(|_| TimerUnavailable)?;

        self.pacer = Pacer::from_frequency(
            self.timer.frequency(),
            PACING_INTERVAL_MS,
            self.timer.now(),
        );
        Ok(())
    }

    /// Run one full animation cycle
    ///
    /// Busy-waits on the timer between LED steps; returns once the
    /// counter, UART line and display have been updated. Every cycle
    /// derives its own step threshold, so no prior [`Exerciser::boot`] is
    /// needed for correct pacing.
    pub fn run_cycle(&mut self) -> Result<CycleReport, TimerUnavailable> {
        self.timer.start().map_err(|_| TimerUnavailable)?;
        // A restart may rewind the count, so pace from the fresh value.
        self.pacer = Pacer::from_frequency(
            self.timer.frequency(),
            PACING_INTERVAL_MS,
            self.timer.now(),
        );

        self.animator.reset();
        while !self.animator.is_complete() {
            if !self.pacer.is_due(self.timer.now()) {
                continue;
            }
            if let Some(pattern) = self.animator.next() {
                self.leds.write(pattern);
            }
            self.pacer.mark(self.timer.now());
        }

        self.seconds = self.seconds.wrapping_add(1);

        let display_word = display::encode(self.seconds);
        let line = report::format_seconds(self.seconds);

        self.uart.write_all(line.as_bytes());
        self.display.write(display_word);

        Ok(CycleReport {
            seconds: self.seconds,
            display_word,
            line,
        })
    }

    /// Boot, then run cycles forever
    ///
    /// `on_cycle` sees every completed cycle. Only returns if the timer
    /// cannot be started, in which case no further cycle is entered.
    pub fn run<F>(&mut self, mut on_cycle: F) -> Result<Infallible, TimerUnavailable>
    where
        F: FnMut(&CycleReport),
    {
        self.boot()?;

        loop {
            let report = self.run_cycle()?;
            on_cycle(&report);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use std::rc::Rc;
    use std::vec::Vec;

    use crate::led::STEPS_PER_CYCLE;

    /// 50 kHz: 50 ticks per ms, 2500 ticks per step
    const FREQ: u64 = 50_000;
    const THRESHOLD: u64 = 2_500;

    #[derive(Debug)]
    struct NoTimer;

    /// Fake clock advancing a fixed amount on every poll
    struct FakeTimer {
        now: Cell<u64>,
        advance: u64,
        starts: u32,
        /// Start attempt number that fails, if any
        fail_on_start: Option<u32>,
    }

    impl FakeTimer {
        fn new(advance: u64) -> Self {
            Self {
                now: Cell::new(0),
                advance,
                starts: 0,
                fail_on_start: None,
            }
        }

        fn failing_on(advance: u64, start: u32) -> Self {
            Self {
                fail_on_start: Some(start),
                ..Self::new(advance)
            }
        }
    }

    impl TimestampTimer for FakeTimer {
        type Error = NoTimer;

        fn start(&mut self) -> Result<(), NoTimer> {
            self.starts += 1;
            if self.fail_on_start == Some(self.starts) {
                return Err(NoTimer);
            }
            Ok(())
        }

        fn now(&self) -> u64 {
            let t = self.now.get();
            self.now.set(t + self.advance);
            t
        }

        fn frequency(&self) -> u64 {
            FREQ
        }
    }

    /// Mock output register recording every write
    #[derive(Default)]
    struct MockRegister {
        writes: Vec<u32>,
    }

    impl OutputRegister for MockRegister {
        fn write(&mut self, value: u32) {
            self.writes.push(value);
        }
    }

    /// Mock UART capturing transmitted bytes
    #[derive(Default)]
    struct MockUart {
        sent: Vec<u8>,
    }

    impl UartTx for MockUart {
        fn write_byte(&mut self, byte: u8) {
            self.sent.push(byte);
        }
    }

    type TestExerciser = Exerciser<FakeTimer, MockRegister, MockRegister, MockUart>;

    fn exerciser(timer: FakeTimer) -> TestExerciser {
        Exerciser::new(
            timer,
            MockRegister::default(),
            MockRegister::default(),
            MockUart::default(),
        )
    }

    const CYCLE_PATTERNS: [u32; 19] = [
        1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 256, 128, 64, 32, 16, 8, 4, 2, 1,
    ];

    #[test]
    fn test_new_clears_leds() {
        let ex = exerciser(FakeTimer::new(THRESHOLD));
        let (_, leds, display, uart) = ex.free();
        assert_eq!(leds.writes, [0]);
        assert!(display.writes.is_empty());
        assert!(uart.sent.is_empty());
    }

    #[test]
    fn test_boot_derives_threshold() {
        let mut ex = exerciser(FakeTimer::new(1));
        ex.boot().unwrap();
        assert_eq!(ex.pacer().threshold(), THRESHOLD);
    }

    #[test]
    fn test_single_cycle() {
        let mut ex = exerciser(FakeTimer::new(THRESHOLD));
        ex.boot().unwrap();

        let report = ex.run_cycle().unwrap();
        assert_eq!(report.seconds, 1);
        assert_eq!(report.display_word, 0x0001);
        assert_eq!(report.line.as_str(), "Nb of sec: 1\n\r");

        let (timer, leds, display, uart) = ex.free();
        assert_eq!(leds.writes[0], 0);
        assert_eq!(&leds.writes[1..], &CYCLE_PATTERNS);
        assert_eq!(display.writes, [0x0001]);
        assert_eq!(uart.sent, b"Nb of sec: 1\n\r");
        assert_eq!(timer.starts, 2);
    }

    #[test]
    fn test_three_cycles() {
        let mut ex = exerciser(FakeTimer::new(THRESHOLD));
        ex.boot().unwrap();

        let mut counts = Vec::new();
        for _ in 0..3 {
            let report = ex.run_cycle().unwrap();
            assert_eq!(report.display_word, display::encode(report.seconds));
            counts.push(report.seconds);
        }
        assert_eq!(counts, [1, 2, 3]);
        assert_eq!(ex.seconds(), 3);

        let (_, leds, display, uart) = ex.free();
        assert_eq!(leds.writes.len(), 1 + 3 * STEPS_PER_CYCLE as usize);
        for cycle in leds.writes[1..].chunks(STEPS_PER_CYCLE as usize) {
            assert_eq!(cycle, &CYCLE_PATTERNS);
        }
        assert_eq!(display.writes, [0x0001, 0x0002, 0x0003]);
        assert_eq!(
            uart.sent,
            b"Nb of sec: 1\n\rNb of sec: 2\n\rNb of sec: 3\n\r".as_slice()
        );
    }

    #[test]
    fn test_slow_clock_still_writes_every_step() {
        // Only a tenth of the threshold per poll: many idle spins between
        // steps, but the same sequence comes out.
        let mut ex = exerciser(FakeTimer::new(THRESHOLD / 10));
        ex.boot().unwrap();
        ex.run_cycle().unwrap();

        let (timer, leds, _, _) = ex.free();
        assert_eq!(&leds.writes[1..], &CYCLE_PATTERNS);
        // 19 steps of at least one threshold each
        assert!(timer.now.get() >= 19 * THRESHOLD);
    }

    /// LED register stamping each write with the shared clock
    struct StampedRegister {
        clock: Rc<Cell<u64>>,
        writes: Vec<(u64, u32)>,
    }

    impl OutputRegister for StampedRegister {
        fn write(&mut self, value: u32) {
            self.writes.push((self.clock.get(), value));
        }
    }

    /// Clock shared with the register, advancing by a repeating schedule
    struct SharedTimer {
        clock: Rc<Cell<u64>>,
        schedule: &'static [u64],
        poll: Cell<usize>,
    }

    impl TimestampTimer for SharedTimer {
        type Error = NoTimer;

        fn start(&mut self) -> Result<(), NoTimer> {
            Ok(())
        }

        fn now(&self) -> u64 {
            let t = self.clock.get();
            let i = self.poll.get();
            self.poll.set(i + 1);
            self.clock.set(t + self.schedule[i % self.schedule.len()]);
            t
        }

        fn frequency(&self) -> u64 {
            FREQ
        }
    }

    type StampedExerciser = Exerciser<SharedTimer, StampedRegister, MockRegister, MockUart>;

    fn stamped(schedule: &'static [u64]) -> StampedExerciser {
        let clock = Rc::new(Cell::new(0));
        let leds = StampedRegister {
            clock: clock.clone(),
            writes: Vec::new(),
        };
        let timer = SharedTimer {
            clock,
            schedule,
            poll: Cell::new(0),
        };
        Exerciser::new(timer, leds, MockRegister::default(), MockUart::default())
    }

    /// LED writes of the cycles run so far, without the boot-time clear
    fn cycle_writes(ex: StampedExerciser) -> Vec<(u64, u32)> {
        let (_, leds, _, _) = ex.free();
        assert_eq!(leds.writes[0].1, 0);
        leds.writes[1..].to_vec()
    }

    fn assert_paced(writes: &[(u64, u32)]) {
        for pair in writes.windows(2) {
            assert!(
                pair[1].0 - pair[0].0 >= THRESHOLD,
                "steps {} ticks apart",
                pair[1].0 - pair[0].0
            );
        }
    }

    #[test]
    fn test_steps_never_faster_than_threshold() {
        let mut ex = stamped(&[7]);
        ex.boot().unwrap();
        ex.run_cycle().unwrap();

        let writes = cycle_writes(ex);
        assert_eq!(writes.len(), STEPS_PER_CYCLE as usize);
        assert_paced(&writes);
    }

    #[test]
    fn test_run_cycle_paced_without_boot() {
        let mut ex = stamped(&[1]);
        let report = ex.run_cycle().unwrap();
        assert_eq!(report.seconds, 1);
        assert_eq!(ex.pacer().threshold(), THRESHOLD);

        let writes = cycle_writes(ex);
        assert_eq!(writes.len(), STEPS_PER_CYCLE as usize);
        // The first step also waits a full threshold after the restart
        assert!(writes[0].0 >= THRESHOLD);
        assert_paced(&writes);
    }

    #[test]
    fn test_jittery_clock_keeps_sequence() {
        // Irregular advances, some well past the threshold in one poll
        let mut ex = stamped(&[1, 900, 13, 3_100, 250, 7_777, 2, 40]);
        ex.boot().unwrap();
        ex.run_cycle().unwrap();
        ex.run_cycle().unwrap();

        let writes = cycle_writes(ex);
        assert_eq!(writes.len(), 2 * STEPS_PER_CYCLE as usize);
        for cycle in writes.chunks(STEPS_PER_CYCLE as usize) {
            let patterns: Vec<u32> = cycle.iter().map(|&(_, p)| p).collect();
            assert_eq!(patterns, CYCLE_PATTERNS);
            assert_eq!(patterns[9], 512);
        }
        assert_paced(&writes);
    }

    #[test]
    fn test_boot_failure_never_enters_loop() {
        let mut ex = exerciser(FakeTimer::failing_on(THRESHOLD, 1));
        let mut cycles = 0;

        let result = ex.run(|_| cycles += 1);
        let err = match result {
            Err(e) => e,
            Ok(never) => match never {},
        };
        assert_eq!(err, TimerUnavailable);
        assert_eq!(err.exit_status(), -1);
        assert_eq!(cycles, 0);

        let (_, leds, display, uart) = ex.free();
        assert_eq!(leds.writes, [0]);
        assert!(display.writes.is_empty());
        assert!(uart.sent.is_empty());
    }

    #[test]
    fn test_restart_failure_stops_loop() {
        // Start #1 is boot, #2..#3 are cycles 1 and 2, #4 fails.
        let mut ex = exerciser(FakeTimer::failing_on(THRESHOLD, 4));
        let mut seen = Vec::new();

        let result = ex.run(|report| seen.push(report.seconds));
        assert_eq!(result.err(), Some(TimerUnavailable));
        assert_eq!(seen, [1, 2]);

        let (_, _, display, _) = ex.free();
        assert_eq!(display.writes, [0x0001, 0x0002]);
    }
}
