//! Segment bit layout and glyph encoding
//!
//! The shift-register chain latches 16 bits per digit. The named constants
//! below give each output its meaning; the segment letters follow the usual
//! seven-segment convention:
//!
//! ```text
//!     +- A -+
//!     F     B
//!     +- G -+
//!     E     C
//!     +- D -+  DP
//! ```
//!
//! High byte (MSB-first): D1, A, F, D2, E, D, DP, unused.
//! Low byte (MSB-first): C, G, D4, D3, B, COLON, unused, unused.

/// Digit-select, position 1 (leftmost)
pub const D1: u16 = 0b1000_0000 << 8;
/// Segment A (top bar)
pub const A: u16 = 0b0100_0000 << 8;
/// Segment F (top left)
pub const F: u16 = 0b0010_0000 << 8;
/// Digit-select, position 2
pub const D2: u16 = 0b0001_0000 << 8;
/// Segment E (bottom left)
pub const E: u16 = 0b0000_1000 << 8;
/// Segment D (bottom bar)
pub const D: u16 = 0b0000_0100 << 8;
/// Decimal point
pub const DP: u16 = 0b0000_0010 << 8;
/// Segment C (bottom right)
pub const C: u16 = 0b1000_0000;
/// Segment G (middle bar)
pub const G: u16 = 0b0100_0000;
/// Digit-select, position 4 (rightmost)
pub const D4: u16 = 0b0010_0000;
/// Digit-select, position 3
pub const D3: u16 = 0b0001_0000;
/// Segment B (top right)
pub const B: u16 = 0b0000_1000;
/// Colon indicator, shared across the display
pub const COLON: u16 = 0b0000_0100;

/// Everything that is not a control bit (digit-select or colon).
///
/// Caller-supplied raw segment values are ANDed with this before being
/// composed into a digit word, so stray control bits can never select the
/// wrong digit or light the colon.
pub const MASK: u16 = !(D1 | D2 | D3 | D4 | COLON);

/// Digit-select bits indexed by physical position (0..3 = left to right).
pub const DIGIT_SELECT: [u16; 4] = [D1, D2, D3, D4];

/// Encode a character as a segment bitmask.
///
/// Covers digits, the hex letters, the letters that render unambiguously on
/// seven segments, and a few symbols. Anything unrecognized encodes as a
/// blank (0) rather than an error; the result never contains digit-select or
/// colon bits except for `':'` itself, which maps to [`COLON`].
pub const fn glyph(ch: char) -> u16 {
    match ch {
        // Digits.
        '0' => A | B | C | D | E | F,
        '1' => B | C,
        '2' => A | B | G | E | D,
        '3' => A | B | C | D | G,
        '4' => B | C | F | G,
        '5' => A | F | G | C | D,
        '6' => A | C | D | E | F | G,
        '7' => A | B | C,
        '8' => A | B | C | D | E | F | G,
        '9' => A | B | C | D | F | G,

        // Hex letters.
        'A' => A | B | C | E | F | G,
        'B' => C | D | E | F | G,
        'C' => A | D | E | F,
        'D' => B | C | D | E | G,
        'E' => A | D | E | F | G,
        'F' => A | E | F | G,

        // Other unambiguous letters.
        'H' => B | C | E | F | G,
        'h' => C | E | F | G,
        'J' => A | B | C | D | E,
        'L' => D | E | F,
        'n' => C | E | G,
        'o' => C | D | E | G,
        'P' => A | B | E | F | G,
        'r' => E | G,
        't' => D | E | F | G,
        'U' => B | C | D | E | F,
        'u' => C | D | E,
        'Y' => B | C | D | F | G,

        // Symbols.
        '-' => G,
        '=' => A | D,
        '"' => B | F,
        '\'' => F,
        '.' => DP,
        ',' => C,
        ':' => COLON,
        ' ' => 0,
        _ => 0,
    }
}

/// Encode an integer value 0x0..=0xF as a segment bitmask.
///
/// Maps identically to the character form: `digit(0xA) == glyph('A')`.
/// Out-of-range values encode as a blank.
pub fn digit(value: u8) -> u16 {
    match char::from_digit(u32::from(value), 16) {
        Some(ch) => glyph(ch.to_ascii_uppercase()),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_table_matches_segment_layout() {
        // The full recognized set, spelled out against the layout.
        let table = [
            ('0', A | B | C | D | E | F),
            ('1', B | C),
            ('2', A | B | G | E | D),
            ('3', A | B | C | D | G),
            ('4', B | C | F | G),
            ('5', A | F | G | C | D),
            ('6', A | C | D | E | F | G),
            ('7', A | B | C),
            ('8', A | B | C | D | E | F | G),
            ('9', A | B | C | D | F | G),
            ('A', A | B | C | E | F | G),
            ('B', C | D | E | F | G),
            ('C', A | D | E | F),
            ('D', B | C | D | E | G),
            ('E', A | D | E | F | G),
            ('F', A | E | F | G),
            ('H', B | C | E | F | G),
            ('h', C | E | F | G),
            ('J', A | B | C | D | E),
            ('L', D | E | F),
            ('n', C | E | G),
            ('o', C | D | E | G),
            ('P', A | B | E | F | G),
            ('r', E | G),
            ('t', D | E | F | G),
            ('U', B | C | D | E | F),
            ('u', C | D | E),
            ('Y', B | C | D | F | G),
            ('-', G),
            ('=', A | D),
            ('"', B | F),
            ('\'', F),
            ('.', DP),
            (',', C),
            (':', COLON),
            (' ', 0),
        ];
        for (ch, expected) in table {
            assert_eq!(glyph(ch), expected, "glyph({ch:?})");
        }
    }

    #[test]
    fn unrecognized_characters_encode_blank() {
        for ch in ['z', 'X', '!', '?', '(', 'ß', '€'] {
            assert_eq!(glyph(ch), 0, "glyph({ch:?})");
        }
    }

    #[test]
    fn integer_and_character_keys_agree() {
        for value in 0x0..=0xFu8 {
            let ch = char::from_digit(u32::from(value), 16)
                .unwrap()
                .to_ascii_uppercase();
            assert_eq!(digit(value), glyph(ch), "digit(0x{value:X})");
        }
        assert_eq!(digit(0x10), 0);
        assert_eq!(digit(0xFF), 0);
    }

    #[test]
    fn glyphs_never_carry_control_bits() {
        // ':' is the one intentional exception; every other glyph stays
        // within the non-control mask.
        for ch in 0u32..=0x7F {
            let ch = char::from_u32(ch).unwrap();
            if ch == ':' {
                continue;
            }
            assert_eq!(glyph(ch) & !MASK, 0, "glyph({ch:?})");
        }
    }

    #[test]
    fn mask_excludes_exactly_the_control_bits() {
        assert_eq!(MASK & (D1 | D2 | D3 | D4 | COLON), 0);
        assert_eq!(MASK | D1 | D2 | D3 | D4 | COLON, 0xFFFF);
    }
}
