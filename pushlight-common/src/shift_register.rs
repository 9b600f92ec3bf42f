// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Bit-banged driver for a daisy-chained serial-in/parallel-out register.
//!
//! Wire protocol, MSB first, for bit `i` from `width - 1` down to `0`:
//!   1. drive DATA to bit `i`
//!   2. pulse CLOCK (high, wait, low, wait); the register samples on the rising edge
//!
//! then pulse LATCH the same way to copy the shifted word to the outputs.
//! Until the latch pulse the outputs keep showing the previous word.
//!
//! OUTPUT_ENABLE and RESET are both active-low on the wire.

use crate::config::{PULSE_WIDTH_NS, RESET_PULSE_NS, SETTLE_NS, SR_LENGTH};
use crate::power::OutputGate;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

/// The five lines of the register link.
pub struct ShiftLines<P> {
    pub data: P,
    pub clock: P,
    pub latch: P,
    pub output_enable: P,
    pub reset: P,
}

/// Shift-register driver owning its lines and a delay provider.
pub struct ShiftRegister<P, D> {
    lines: ShiftLines<P>,
    delay: D,
    width: u32,
    pulse_ns: u32,
    output_enabled: bool,
}

impl<P, D> ShiftRegister<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a driver for a `SR_LENGTH`-bit chain.
    ///
    /// The outputs are assumed disabled until [`init`](Self::init) or
    /// [`output_enable`](Self::output_enable) says otherwise.
    pub fn new(lines: ShiftLines<P>, delay: D) -> Self {
        Self {
            lines,
            delay,
            width: SR_LENGTH,
            pulse_ns: PULSE_WIDTH_NS,
            output_enabled: false,
        }
    }

    /// Use a chain of a different length (1 to 32 outputs).
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width.clamp(1, u32::BITS);
        self
    }

    /// Override the clock/latch half-period.
    pub fn with_pulse_width(mut self, pulse_ns: u32) -> Self {
        self.pulse_ns = pulse_ns;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn is_output_enabled(&self) -> bool {
        self.output_enabled
    }

    /// Start-up sequence: blank, reset, shift in zeros, settle, enable.
    pub fn init(&mut self) -> Result<(), P::Error> {
        self.output_enable(false)?;
        self.reset()?;
        self.write(0)?;
        self.delay.delay_ns(SETTLE_NS);
        self.output_enable(true)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Shift register: {}-bit chain initialized", self.width);
        Ok(())
    }

    /// Shift `value` out MSB first and latch it. Bits above the chain width
    /// are ignored.
    pub fn write(&mut self, value: u32) -> Result<(), P::Error> {
        for bit in (0..self.width).rev() {
            let level = PinState::from((value >> bit) & 1 == 1);
            self.lines.data.set_state(level)?;
            pulse(&mut self.lines.clock, &mut self.delay, self.pulse_ns)?;
        }
        pulse(&mut self.lines.latch, &mut self.delay, self.pulse_ns)
    }

    /// Gate the register outputs. `false` forces them off regardless of the
    /// latched word.
    pub fn output_enable(&mut self, enabled: bool) -> Result<(), P::Error> {
        // OE is active-low
        self.lines
            .output_enable
            .set_state(PinState::from(!enabled))?;
        self.output_enabled = enabled;
        Ok(())
    }

    /// Clear the internal shift stages with a low pulse on RESET.
    pub fn reset(&mut self) -> Result<(), P::Error> {
        self.lines.reset.set_low()?;
        self.delay.delay_ns(RESET_PULSE_NS);
        self.lines.reset.set_high()
    }

    /// Replace the displayed word without showing intermediate shift states.
    pub fn show(&mut self, value: u32) -> Result<(), P::Error> {
        self.output_enable(false)?;
        self.write(value)?;
        self.output_enable(true)
    }

    /// Give back the lines and the delay provider.
    pub fn release(self) -> (ShiftLines<P>, D) {
        (self.lines, self.delay)
    }
}

fn pulse<P: OutputPin, D: DelayNs>(line: &mut P, delay: &mut D, ns: u32) -> Result<(), P::Error> {
    line.set_high()?;
    delay.delay_ns(ns);
    line.set_low()?;
    delay.delay_ns(ns);
    Ok(())
}

impl<P, D> OutputGate for ShiftRegister<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    type Error = P::Error;

    fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
        self.output_enable(enabled)
    }
}
