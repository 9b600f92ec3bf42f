// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Host fakes for the embedded-hal seams.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use pushlight_common::power::{Indicators, OutputGate, Sleeper};
use pushlight_common::sampler::ButtonInput;
use pushlight_common::wake::WakeSource;
use pushlight_common::{ShiftLines, ShiftRegister};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Data,
    Clock,
    Latch,
    OutputEnable,
    Reset,
}

/// Every level change driven on any line, in order.
pub type Trace = Rc<RefCell<Vec<(Line, bool)>>>;

pub struct FakePin {
    line: Line,
    trace: Trace,
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.trace.borrow_mut().push((self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.trace.borrow_mut().push((self.line, true));
        Ok(())
    }
}

/// Delay that returns immediately and only adds up what was asked for.
#[derive(Default)]
pub struct NoDelay {
    pub total_ns: Rc<Cell<u64>>,
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns.set(self.total_ns.get() + u64::from(ns));
    }
}

pub type FakeRegister = ShiftRegister<FakePin, NoDelay>;

pub fn fake_register() -> (FakeRegister, Trace) {
    let (register, trace, _) = fake_register_timed();
    (register, trace)
}

/// Like [`fake_register`], also returning the total delay requested so far.
pub fn fake_register_timed() -> (FakeRegister, Trace, Rc<Cell<u64>>) {
    let trace: Trace = Rc::new(RefCell::new(Vec::new()));
    let delay = NoDelay::default();
    let waited = delay.total_ns.clone();
    let pin = |line| FakePin {
        line,
        trace: trace.clone(),
    };
    let lines = ShiftLines {
        data: pin(Line::Data),
        clock: pin(Line::Clock),
        latch: pin(Line::Latch),
        output_enable: pin(Line::OutputEnable),
        reset: pin(Line::Reset),
    };
    (ShiftRegister::new(lines, delay), trace, waited)
}

/// Behavioural model of a chain of serial-in/parallel-out registers with
/// positive-edge clock and latch, active-low output enable and reset.
pub struct ChainModel {
    width: u32,
    data: bool,
    clock: bool,
    latch: bool,
    oe_high: bool,
    shift: u32,
    outputs: u32,
}

impl ChainModel {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            data: false,
            clock: false,
            latch: false,
            oe_high: true,
            shift: 0,
            outputs: 0,
        }
    }

    fn mask(&self) -> u32 {
        if self.width == 32 {
            u32::MAX
        } else {
            (1 << self.width) - 1
        }
    }

    pub fn apply(&mut self, (line, level): (Line, bool)) {
        match line {
            Line::Data => self.data = level,
            Line::Clock => {
                if level && !self.clock {
                    self.shift = ((self.shift << 1) | u32::from(self.data)) & self.mask();
                }
                self.clock = level;
            }
            Line::Latch => {
                if level && !self.latch {
                    self.outputs = self.shift;
                }
                self.latch = level;
            }
            Line::OutputEnable => self.oe_high = level,
            Line::Reset => {
                if !level {
                    self.shift = 0;
                }
            }
        }
    }

    pub fn replay(width: u32, trace: &[(Line, bool)]) -> Self {
        let mut model = Self::new(width);
        for &event in trace {
            model.apply(event);
        }
        model
    }

    /// Latched word, regardless of output enable.
    pub fn latched(&self) -> u32 {
        self.outputs
    }

    /// What a viewer sees on the LEDs.
    pub fn visible(&self) -> u32 {
        if self.oe_high {
            0
        } else {
            self.outputs
        }
    }

    pub fn outputs_enabled(&self) -> bool {
        !self.oe_high
    }
}

/// Level of DATA at every rising CLOCK edge.
pub fn clocked_bits(trace: &[(Line, bool)]) -> Vec<bool> {
    let mut data = false;
    let mut clock = false;
    let mut bits = Vec::new();
    for &(line, level) in trace {
        match line {
            Line::Data => data = level,
            Line::Clock => {
                if level && !clock {
                    bits.push(data);
                }
                clock = level;
            }
            _ => {}
        }
    }
    bits
}

/// Number of rising edges seen on `line`.
pub fn rising_edges(trace: &[(Line, bool)], line: Line) -> usize {
    let mut level = false;
    let mut count = 0;
    for &(l, value) in trace {
        if l == line {
            if value && !level {
                count += 1;
            }
            level = value;
        }
    }
    count
}

/// Bits of `value`, MSB first, over `width` positions.
pub fn msb_first(value: u32, width: u32) -> Vec<bool> {
    (0..width).rev().map(|i| (value >> i) & 1 == 1).collect()
}

/// Ordered log shared by the power-path fakes.
pub type Journal = Rc<RefCell<Vec<&'static str>>>;

pub struct FakeGate {
    pub enabled: bool,
    pub journal: Journal,
}

impl OutputGate for FakeGate {
    type Error = Infallible;

    fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
        self.enabled = enabled;
        self.journal
            .borrow_mut()
            .push(if enabled { "enable" } else { "disable" });
        Ok(())
    }
}

pub struct FakeIndicators {
    pub journal: Journal,
}

impl Indicators for FakeIndicators {
    fn clear(&mut self) {
        self.journal.borrow_mut().push("clear");
    }
}

pub struct FakeSleeper {
    pub journal: Journal,
}

impl Sleeper for FakeSleeper {
    fn sleep(&mut self) {
        self.journal.borrow_mut().push("sleep");
    }
}

pub fn power_fakes() -> (FakeGate, FakeIndicators, FakeSleeper, Journal) {
    let journal: Journal = Rc::new(RefCell::new(Vec::new()));
    (
        FakeGate {
            enabled: true,
            journal: journal.clone(),
        },
        FakeIndicators {
            journal: journal.clone(),
        },
        FakeSleeper {
            journal: journal.clone(),
        },
        journal,
    )
}

/// Input whose level the test sets directly.
#[derive(Clone, Default)]
pub struct FakeInput {
    pub pressed: Rc<Cell<bool>>,
}

impl ButtonInput for FakeInput {
    fn is_pressed(&mut self) -> bool {
        self.pressed.get()
    }
}

#[derive(Default)]
pub struct FakeWakeSource {
    pub pending: bool,
    pub acknowledged: u32,
}

impl WakeSource for FakeWakeSource {
    fn is_pending(&self) -> bool {
        self.pending
    }

    fn acknowledge(&mut self) {
        self.pending = false;
        self.acknowledged += 1;
    }
}
