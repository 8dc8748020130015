//! Clock binary
//!
//! Shows hours and minutes from the DS1307 on the four-digit display with
//! the colon lit, refreshing the face four times a second. The shift
//! registers hold their outputs between refreshes, so the loop only has to
//! keep the reading fresh.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::Level;
use embassy_rp::i2c;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use tetrad_drivers::display::{Format, SegmentDisplay};
use tetrad_drivers::rtc::Ds1307;
use tetrad_hal_rp2040::gpio::Output;
use tetrad_hal_rp2040::i2c::I2c;

/// Refresh cadence of the clock face.
const REFRESH_MS: u64 = 250;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Tetrad clock starting...");
    let p = embassy_rp::init(Default::default());

    // Shift-register chain on GP2/GP4/GP6 (data, latch, clock).
    let sdata = Output::new(p.PIN_2.into(), Level::Low);
    let latch = Output::new(p.PIN_4.into(), Level::Low);
    let clock = Output::new(p.PIN_6.into(), Level::Low);
    let mut display = SegmentDisplay::new(sdata, latch, clock);
    display.setup();

    // DS1307 on I2C0 (GP1 = SCL, GP0 = SDA).
    let bus = i2c::I2c::new_blocking(p.I2C0, p.PIN_1, p.PIN_0, i2c::Config::default());
    let mut rtc = Ds1307::new(I2c::new(bus));

    match rtc.is_running() {
        Ok(true) => info!("RTC running"),
        Ok(false) => {
            error!("RTC is halted; set the time before using the clock");
            halt().await;
        }
        Err(_) => {
            error!("Couldn't find RTC");
            halt().await;
        }
    }

    loop {
        Timer::after_millis(REFRESH_MS).await;
        match rtc.now() {
            Ok(now) => {
                display.display_pair(now.hour, now.minute, Format::Decimal);
                display.colon(true);
                display.refresh();
            }
            Err(_) => warn!("RTC read failed, keeping last face"),
        }
    }
}

/// Park the executor; the display stays blank.
async fn halt() -> ! {
    loop {
        Timer::after_secs(1).await;
    }
}
