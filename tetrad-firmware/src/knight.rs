//! Knight-rider LED chaser
//!
//! Sweeps a single lit LED back and forth across one 8-bit shift register.
//! This register is wired LSB-first, unlike the display chain.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::Level;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use tetrad_drivers::shift::{BitOrder, ShiftRegister};
use tetrad_hal_rp2040::gpio::Output;

/// Dwell time per LED position.
const STEP_MS: u64 = 50;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Knight chaser starting...");
    let p = embassy_rp::init(Default::default());

    let sdata = Output::new(p.PIN_2.into(), Level::Low);
    let latch = Output::new(p.PIN_3.into(), Level::Low);
    let clock = Output::new(p.PIN_5.into(), Level::Low);
    let mut chain = ShiftRegister::new(sdata, latch, clock);

    // All LEDs off before the sweep starts.
    chain.write_byte(0, BitOrder::LsbFirst);

    loop {
        let mut bits: u8 = 1;
        for _ in 0..7 {
            chain.write_byte(bits, BitOrder::LsbFirst);
            bits <<= 1;
            Timer::after_millis(STEP_MS).await;
        }
        for _ in 0..7 {
            chain.write_byte(bits, BitOrder::LsbFirst);
            bits >>= 1;
            Timer::after_millis(STEP_MS).await;
        }
    }
}
