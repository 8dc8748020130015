//! Bit-banged serial-to-parallel shift register chain
//!
//! Three lines drive the chain: serial data, a shift clock, and a latch
//! (storage register clock). Bits are clocked in one at a time; raising the
//! latch line presents everything shifted since it went low on the parallel
//! outputs, so partially shifted data is never visible.

use tetrad_hal::gpio::OutputPin;

/// Order in which the bits of a byte are shifted out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Bit 7 first
    MsbFirst,
    /// Bit 0 first
    LsbFirst,
}

/// Driver for a chain of shift registers behind one latch line.
///
/// The display uses a chain of two registers latched as one 16-bit word;
/// [`write_byte`](Self::write_byte) serves single-register loads such as the
/// LED chaser.
pub struct ShiftRegister<D, L, C> {
    sdata: D,
    latch: L,
    clock: C,
}

impl<D: OutputPin, L: OutputPin, C: OutputPin> ShiftRegister<D, L, C> {
    /// Take ownership of the data, latch and clock lines.
    ///
    /// The pins must already be configured as outputs; that happens at pin
    /// construction in the chip HAL.
    pub fn new(sdata: D, latch: L, clock: C) -> Self {
        Self { sdata, latch, clock }
    }

    /// Latch one 16-bit word onto the chain's parallel outputs.
    ///
    /// High byte first, MSB-first within each byte. The bit and byte order
    /// is fixed by the board wiring; see the layout in
    /// [`display::segments`](crate::display::segments).
    pub fn write_word(&mut self, bits: u16) {
        self.latch.set_low();
        self.shift_out((bits >> 8) as u8, BitOrder::MsbFirst);
        self.shift_out((bits & 0xFF) as u8, BitOrder::MsbFirst);
        self.latch.set_high();
    }

    /// Latch a single byte onto the chain's parallel outputs.
    pub fn write_byte(&mut self, bits: u8, order: BitOrder) {
        self.latch.set_low();
        self.shift_out(bits, order);
        self.latch.set_high();
    }

    /// Clock out 8 bits without touching the latch line.
    fn shift_out(&mut self, bits: u8, order: BitOrder) {
        for i in 0..8 {
            let bit = match order {
                BitOrder::MsbFirst => bits & (0x80 >> i) != 0,
                BitOrder::LsbFirst => bits & (1 << i) != 0,
            };
            self.sdata.set_state(bit);
            self.clock.set_high();
            self.clock.set_low();
        }
    }
}
