//! Hardware drivers for the Tetrad clock
//!
//! This crate provides board-agnostic drivers, generic over the traits
//! defined in `tetrad-hal`:
//!
//! - Four-digit seven-segment display on a shift-register chain
//!   ([`display::SegmentDisplay`])
//! - Bit-banged serial-to-parallel shift register ([`shift::ShiftRegister`])
//! - DS1307 real-time clock ([`rtc::Ds1307`])
//! - I2C bus scanner ([`scan`])
//!
//! Everything here is synchronous and runs to completion on the caller's
//! thread; timing (how often the display is refreshed) is the caller's job.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod rtc;
pub mod scan;
pub mod shift;

#[cfg(test)]
mod testutil;
