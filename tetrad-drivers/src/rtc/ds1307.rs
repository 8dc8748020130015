//! DS1307 real-time clock
//!
//! Battery-backed RTC on the I2C bus, used as the time source for the clock
//! face. The register file is BCD-encoded; register 0x00 doubles as the
//! clock-halt flag (CH, bit 7), and register 0x02 can be configured for
//! 12-hour mode by external tools, so reads handle both hour formats.

use tetrad_hal::i2c::I2cBus;

/// 7-bit bus address of the DS1307.
pub const ADDRESS: u8 = 0x68;

/// First timekeeping register (seconds).
const REG_SECONDS: u8 = 0x00;

/// Clock-halt flag, bit 7 of the seconds register. Set = oscillator stopped.
const CH_BIT: u8 = 0x80;
/// 12-hour mode flag, bit 6 of the hours register.
const MODE_12H: u8 = 0x40;
/// PM flag, meaningful only in 12-hour mode.
const PM_BIT: u8 = 0x20;

/// A calendar timestamp as kept by the DS1307.
///
/// The chip stores two-digit years; they are interpreted as 2000-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// DS1307 driver over any [`I2cBus`] implementation.
pub struct Ds1307<I2C> {
    bus: I2C,
}

impl<I2C: I2cBus> Ds1307<I2C> {
    pub fn new(bus: I2C) -> Self {
        Self { bus }
    }

    /// Whether the oscillator is running.
    ///
    /// A fresh chip (or one whose backup battery died) powers up halted;
    /// callers should [`adjust`](Self::adjust) it before trusting
    /// [`now`](Self::now).
    pub fn is_running(&mut self) -> Result<bool, I2C::Error> {
        let mut seconds = [0u8; 1];
        self.bus.write_read(ADDRESS, &[REG_SECONDS], &mut seconds)?;
        Ok(seconds[0] & CH_BIT == 0)
    }

    /// Read the current timestamp.
    pub fn now(&mut self) -> Result<DateTime, I2C::Error> {
        let mut regs = [0u8; 7];
        self.bus.write_read(ADDRESS, &[REG_SECONDS], &mut regs)?;

        let hour = if regs[2] & MODE_12H != 0 {
            // 12-hour mode stores 1-12; midnight is 12 AM.
            let hour = bcd_to_bin(regs[2] & 0x1F) % 12;
            if regs[2] & PM_BIT != 0 {
                hour + 12
            } else {
                hour
            }
        } else {
            bcd_to_bin(regs[2] & 0x3F)
        };

        Ok(DateTime {
            second: bcd_to_bin(regs[0] & !CH_BIT),
            minute: bcd_to_bin(regs[1]),
            hour,
            day: bcd_to_bin(regs[4]),
            month: bcd_to_bin(regs[5]),
            year: 2000 + u16::from(bcd_to_bin(regs[6])),
        })
    }

    /// Set the timestamp and start the oscillator.
    ///
    /// Always writes 24-hour mode. The CH bit is written as zero, so this
    /// also brings a halted chip to life.
    pub fn adjust(&mut self, time: &DateTime) -> Result<(), I2C::Error> {
        let buf = [
            REG_SECONDS,
            bin_to_bcd(time.second),
            bin_to_bcd(time.minute),
            bin_to_bcd(time.hour),
            0, // day-of-week, unused
            bin_to_bcd(time.day),
            bin_to_bcd(time.month),
            bin_to_bcd((time.year % 100) as u8),
        ];
        self.bus.write(ADDRESS, &buf)
    }
}

const fn bcd_to_bin(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}

const fn bin_to_bcd(bin: u8) -> u8 {
    ((bin / 10) << 4) | (bin % 10)
}
