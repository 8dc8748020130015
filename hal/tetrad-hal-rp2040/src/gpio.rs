//! GPIO output wrapper
//!
//! Push-pull output over embassy-rp. Direction and initial level are fixed
//! at construction, which is what lets `setup()` on the drivers side skip
//! pin-mode configuration entirely.

use embassy_rp::gpio::{AnyPin, Level};
use embassy_rp::Peri;

use tetrad_hal::gpio::OutputPin;

/// Push-pull GPIO output implementing [`tetrad_hal::gpio::OutputPin`].
pub struct Output<'d> {
    inner: embassy_rp::gpio::Output<'d>,
}

impl<'d> Output<'d> {
    /// Configure the pin as a push-pull output at the given initial level.
    pub fn new(pin: Peri<'d, AnyPin>, initial: Level) -> Self {
        Self {
            inner: embassy_rp::gpio::Output::new(pin, initial),
        }
    }
}

impl OutputPin for Output<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn toggle(&mut self) {
        self.inner.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}
