//! I2C bus scanner
//!
//! Probes every 7-bit address with an address-only write and reports the
//! devices that acknowledge. Handy when bringing up a new board to confirm
//! the RTC (and its EEPROM sibling) are wired correctly.

use heapless::Vec;
use tetrad_hal::i2c::I2cBus;

/// Lowest address probed; 0x00 is the general-call address.
pub const FIRST_ADDRESS: u8 = 0x01;
/// Highest valid 7-bit address.
pub const LAST_ADDRESS: u8 = 0x7F;

/// Upper bound on reported devices. More responders than this on a two-chip
/// clock board means the bus itself is misbehaving.
pub const MAX_DEVICES: usize = 16;

/// Name of a device we expect to find on the clock board.
pub fn device_name(address: u8) -> Option<&'static str> {
    match address {
        0x50 => Some("24C32"),
        0x68 => Some("DS1307"),
        _ => None,
    }
}

/// Probe the bus and collect the addresses that acknowledge.
///
/// Bus errors at an address mean "nobody home" and are not reported;
/// collection stops early once [`MAX_DEVICES`] have answered.
pub fn scan<I2C: I2cBus>(bus: &mut I2C) -> Vec<u8, MAX_DEVICES> {
    let mut found = Vec::new();
    for address in FIRST_ADDRESS..=LAST_ADDRESS {
        if bus.write(address, &[]).is_ok() && found.push(address).is_err() {
            break;
        }
    }
    found
}
