//! Shared test doubles: a software shift-register chain
//!
//! `Wire` hands out three mock output pins (data, latch, clock) that all
//! record into one shared trace. The trace mimics what the real 74HC595
//! chain would latch: bits are sampled on the rising clock edge, and a
//! rising latch edge completes a frame.

use std::cell::RefCell;
use std::rc::Rc;

use tetrad_hal::gpio::OutputPin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Data(bool),
    ClockHigh,
    ClockLow,
    LatchLow,
    LatchHigh,
}

#[derive(Default)]
struct WireState {
    events: Vec<Event>,
    data: bool,
    latch: bool,
    clock: bool,
    /// Bits sampled on rising clock edges since the last falling latch edge.
    shifted: Vec<bool>,
    /// Completed latch-bracketed frames.
    frames: Vec<Vec<bool>>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Line {
    Data,
    Latch,
    Clock,
}

pub struct Wire(Rc<RefCell<WireState>>);

impl Wire {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(WireState::default())))
    }

    /// The three pins, in (data, latch, clock) order.
    pub fn pins(&self) -> (WirePin, WirePin, WirePin) {
        (
            WirePin { line: Line::Data, state: Rc::clone(&self.0) },
            WirePin { line: Line::Latch, state: Rc::clone(&self.0) },
            WirePin { line: Line::Clock, state: Rc::clone(&self.0) },
        )
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn frames(&self) -> Vec<Vec<bool>> {
        self.0.borrow().frames.clone()
    }

    /// Completed frames reassembled as bytes, first-shifted bit as MSB.
    pub fn bytes(&self) -> Vec<u8> {
        self.frames()
            .iter()
            .flat_map(|frame| {
                assert_eq!(frame.len() % 8, 0, "partial byte latched");
                frame
                    .chunks(8)
                    .map(|bits| bits.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit)))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Completed 16-bit frames, first-shifted bit as MSB.
    pub fn words(&self) -> Vec<u16> {
        self.frames()
            .iter()
            .map(|frame| {
                assert_eq!(frame.len(), 16, "frame is not one digit word");
                frame
                    .iter()
                    .fold(0u16, |acc, &bit| (acc << 1) | u16::from(bit))
            })
            .collect()
    }
}

pub struct WirePin {
    line: Line,
    state: Rc<RefCell<WireState>>,
}

impl OutputPin for WirePin {
    fn set_high(&mut self) {
        let mut state = self.state.borrow_mut();
        match self.line {
            Line::Data => {
                state.data = true;
                state.events.push(Event::Data(true));
            }
            Line::Clock => {
                // Rising edge samples the data line.
                if !state.clock {
                    let bit = state.data;
                    state.shifted.push(bit);
                }
                state.clock = true;
                state.events.push(Event::ClockHigh);
            }
            Line::Latch => {
                // Rising edge presents the shifted bits on the outputs.
                if !state.latch {
                    let frame = core::mem::take(&mut state.shifted);
                    state.frames.push(frame);
                }
                state.latch = true;
                state.events.push(Event::LatchHigh);
            }
        }
    }

    fn set_low(&mut self) {
        let mut state = self.state.borrow_mut();
        match self.line {
            Line::Data => {
                state.data = false;
                state.events.push(Event::Data(false));
            }
            Line::Clock => {
                state.clock = false;
                state.events.push(Event::ClockLow);
            }
            Line::Latch => {
                state.latch = false;
                state.shifted.clear();
                state.events.push(Event::LatchLow);
            }
        }
    }

    fn toggle(&mut self) {
        if self.is_set_high() {
            self.set_low();
        } else {
            self.set_high();
        }
    }

    fn is_set_high(&self) -> bool {
        let state = self.state.borrow();
        match self.line {
            Line::Data => state.data,
            Line::Latch => state.latch,
            Line::Clock => state.clock,
        }
    }
}
