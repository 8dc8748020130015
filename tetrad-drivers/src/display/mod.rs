//! Four-digit seven-segment display driver
//!
//! The display board carries four common-anode seven-segment digits plus a
//! shared colon indicator, driven through a chain of two 8-bit shift
//! registers. Each physical digit is addressed by one 16-bit word combining
//! a digit-select bit, the segment bits, and the colon bit; [`segments`]
//! defines the bit layout and [`controller::SegmentDisplay`] composes and
//! transmits the words.

pub mod controller;
pub mod segments;

pub use controller::{Format, SegmentDisplay, DIGIT_COUNT};
