//! ticktock - soft-core peripheral exerciser
//!
//! Walks a lit bit up and down the LED bank, counts seconds on the
//! timestamp timer, sends the count over UART 0 and shows it on the
//! 7-segment display. Bytes arriving on UART 0 are latched by the
//! receive interrupt and echoed to the console.

#![no_std]
#![no_main]

use defmt::*;
use riscv_rt::entry;
use {defmt_rtt as _, panic_halt as _};

use ticktock_core::rx::RX_DEFAULT;
use ticktock_core::{Exerciser, RxLatch};
use ticktock_hal::InterruptLine;
use ticktock_hal_softcore::irq::InterruptController;
use ticktock_hal_softcore::memory_map::{IRQ_BASE, UART_0_BASE, UART_0_IRQ};
use ticktock_hal_softcore::uart::UartData;
use ticktock_hal_softcore::{Board, BOARD_HANDLERS};

/// Last byte received on UART 0
static UART_RX: RxLatch = RxLatch::new(RX_DEFAULT);

/// UART 0 receive-ready interrupt
fn uart_rx_handler() {
    // SAFETY: the handler only reads the data register; the foreground
    // loop only writes it.
    let mut uart = unsafe { UartData::new(UART_0_BASE) };
    let byte = UART_RX.receive(&mut uart);

    info!("Interrupt triggered");
    info!("{}", byte as char);
}

/// Machine external interrupt trap
#[export_name = "MachineExternal"]
extern "C" fn machine_external() {
    // SAFETY: dispatch only reads the controller registers.
    let irq = unsafe { InterruptController::new(IRQ_BASE, &BOARD_HANDLERS) };
    irq.dispatch();
}

#[entry]
fn main() -> ! {
    info!("Hello from the soft core!");

    let Board {
        timer,
        leds,
        sevenseg,
        mut uart,
        mut irq,
    } = unwrap!(Board::take());

    // Hook the UART receive interrupt before anything else runs
    let mut rx_line = unwrap!(irq.line(UART_0_IRQ));
    rx_line.register(uart_rx_handler);
    rx_line.enable();
    uart.enable_rx_interrupt();
    irq.unmask_hart();
    info!("UART receive interrupt on line {}", UART_0_IRQ);

    let mut exerciser = Exerciser::new(timer, leds, sevenseg, uart);

    let err = match exerciser.run(|report| info!("Nb of sec: {}", report.seconds)) {
        Ok(never) => match never {},
        Err(err) => err,
    };

    error!("Error: No timer available");
    halt(err.exit_status())
}

/// Report the exit status and park the hart
fn halt(status: i32) -> ! {
    error!("exiting with status {}", status);
    loop {
        // SAFETY: waiting for an interrupt has no memory effects.
        unsafe { riscv::asm::wfi() };
    }
}
