//! RP2040 implementation of the Tetrad HAL traits
//!
//! Thin wrappers around embassy-rp peripherals so that the drivers in
//! `tetrad-drivers` (written against `tetrad-hal` traits) run unchanged on
//! RP2040 boards.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

pub use gpio::Output;
pub use i2c::I2c;
