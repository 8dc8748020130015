//! Digit buffer and formatting
//!
//! [`SegmentDisplay`] keeps one composed 16-bit word per physical digit and
//! transmits the whole buffer on [`refresh`](SegmentDisplay::refresh).
//! Formatting operations only mutate the buffer; nothing reaches the
//! hardware until the next refresh.

use tetrad_hal::gpio::OutputPin;

use crate::display::segments::{digit, glyph, COLON, DIGIT_SELECT, DP, MASK};
use crate::shift::ShiftRegister;

/// Number of physical digits on the display.
pub const DIGIT_COUNT: usize = 4;

/// How a two-byte value pair is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Format {
    /// Each byte as a two-digit decimal number; values over 99 render as
    /// the "EE" sentinel.
    Decimal,
    /// Each byte as two hex digits.
    Hex,
}

/// Four-digit seven-segment display behind a shift-register chain.
///
/// Each buffered word combines the digit-select bit for its position, the
/// segment bits, and optionally the colon bit. A freshly constructed display
/// holds an all-zero buffer: no digit is selected at all, which is distinct
/// from a selected digit showing nothing.
pub struct SegmentDisplay<D, L, C> {
    link: ShiftRegister<D, L, C>,
    digits: [u16; DIGIT_COUNT],
}

impl<D: OutputPin, L: OutputPin, C: OutputPin> SegmentDisplay<D, L, C> {
    /// Take ownership of the data, latch and clock lines.
    pub fn new(sdata: D, latch: L, clock: C) -> Self {
        Self {
            link: ShiftRegister::new(sdata, latch, clock),
            digits: [0; DIGIT_COUNT],
        }
    }

    /// Drive the chain to the known all-blank state. Idempotent.
    pub fn setup(&mut self) {
        self.clear();
        self.refresh();
    }

    /// Blank the buffer completely, digit-select bits included.
    pub fn clear(&mut self) {
        self.digits = [0; DIGIT_COUNT];
    }

    /// Raw mode: caller-supplied segment masks, one per digit.
    ///
    /// Control bits in the supplied masks are stripped, so a stray
    /// digit-select or colon bit cannot leak into the composed words.
    pub fn display_raw(&mut self, masks: [u16; DIGIT_COUNT], colon: bool) {
        let cc = if colon { COLON } else { 0 };
        for (i, (word, mask)) in self.digits.iter_mut().zip(masks).enumerate() {
            *word = DIGIT_SELECT[i] | (MASK & mask) | cc;
        }
    }

    /// Two-value mode: `hi` on the left digit pair, `lo` on the right.
    pub fn display_pair(&mut self, hi: u8, lo: u8, format: Format) {
        match format {
            Format::Decimal => self.display_decimal(hi, lo),
            Format::Hex => self.display_hex(hi, lo),
        }
    }

    /// Text mode: walk the characters across the digits left to right.
    ///
    /// A `'.'` does not occupy a digit of its own; it lights the decimal
    /// point of the previously written digit (or of digit 1 when nothing has
    /// been written yet). Everything past the fourth physical digit is
    /// silently dropped, so e.g. `"-3.14"` fills exactly four digits.
    pub fn display_text(&mut self, text: &str) {
        for (i, word) in self.digits.iter_mut().enumerate() {
            *word = DIGIT_SELECT[i];
        }
        let mut cursor = 0;
        for ch in text.chars() {
            if cursor >= DIGIT_COUNT {
                break;
            }
            if ch == '.' {
                self.digits[cursor.saturating_sub(1)] |= DP;
            } else {
                self.digits[cursor] |= glyph(ch);
                cursor += 1;
            }
        }
    }

    /// Set or clear the colon across all digits, leaving segments untouched.
    pub fn colon(&mut self, enabled: bool) {
        for word in &mut self.digits {
            if enabled {
                *word |= COLON;
            } else {
                *word &= !COLON;
            }
        }
    }

    /// Transmit the buffer, digit 1 through digit 4.
    ///
    /// Buffer mutations are not visible on the hardware until this runs.
    pub fn refresh(&mut self) {
        for word in self.digits {
            self.link.write_word(word);
        }
    }

    /// The composed digit words, position 1..4 left to right.
    pub fn digits(&self) -> &[u16; DIGIT_COUNT] {
        &self.digits
    }

    fn display_decimal(&mut self, hi: u8, lo: u8) {
        // Values that do not fit two digits show as "EE"; a visual signal,
        // not an error.
        if hi > 99 {
            self.digits[0] = DIGIT_SELECT[0] | glyph('E');
            self.digits[1] = DIGIT_SELECT[1] | glyph('E');
        } else {
            self.digits[0] = DIGIT_SELECT[0] | digit(hi / 10);
            self.digits[1] = DIGIT_SELECT[1] | digit(hi % 10);
        }
        if lo > 99 {
            self.digits[2] = DIGIT_SELECT[2] | glyph('E');
            self.digits[3] = DIGIT_SELECT[3] | glyph('E');
        } else {
            self.digits[2] = DIGIT_SELECT[2] | digit(lo / 10);
            self.digits[3] = DIGIT_SELECT[3] | digit(lo % 10);
        }
    }

    fn display_hex(&mut self, hi: u8, lo: u8) {
        self.digits[0] = DIGIT_SELECT[0] | digit(hi >> 4);
        self.digits[1] = DIGIT_SELECT[1] | digit(hi & 0xF);
        self.digits[2] = DIGIT_SELECT[2] | digit(lo >> 4);
        self.digits[3] = DIGIT_SELECT[3] | digit(lo & 0xF);
    }
}
