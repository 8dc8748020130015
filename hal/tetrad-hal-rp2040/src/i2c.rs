//! I2C bus wrapper
//!
//! Blocking I2C controller over embassy-rp, routed through the
//! embedded-hal 1.0 trait impls.

use embassy_rp::i2c::{Blocking, Error, Instance};
use embedded_hal::i2c::I2c as EhI2c;

use tetrad_hal::i2c::I2cBus;

/// Blocking I2C controller implementing [`tetrad_hal::i2c::I2cBus`].
pub struct I2c<'d, T: Instance> {
    inner: embassy_rp::i2c::I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> I2c<'d, T> {
    /// Wrap an already configured blocking I2C controller.
    pub fn new(inner: embassy_rp::i2c::I2c<'d, T, Blocking>) -> Self {
        Self { inner }
    }
}

impl<T: Instance> I2cBus for I2c<'_, T> {
    type Error = Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        EhI2c::write(&mut self.inner, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        EhI2c::read(&mut self.inner, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        EhI2c::write_read(&mut self.inner, address, write_data, read_buf)
    }
}
