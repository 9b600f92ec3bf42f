// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Hardware handles owned by the main loop.

use crate::board::{Display, OutputLine};
use crate::irq::WAKE_LATCH;
use embedded_hal::digital::OutputPin;
use pushlight_common::config::BUTTON_COUNT;
use pushlight_common::power::{Indicators, Sleeper};
use pushlight_common::Samples;
use rp2040_hal::Timer;

/// Peripherals shared by the services through [`ServiceContext`].
///
/// [`ServiceContext`]: pushlight_common::service::ServiceContext
pub struct Peripherals {
    pub timer: Timer,
    pub display: Display,
    pub status_leds: StatusLeds,
    pub sleeper: WfiSleeper,
}

impl Peripherals {
    pub fn new(timer: Timer, display: Display, status_leds: StatusLeds) -> Self {
        Self {
            timer,
            display,
            status_leds,
            sleeper: WfiSleeper,
        }
    }
}

/// One LED per input, showing the raw pressed level.
pub struct StatusLeds {
    pins: [OutputLine; BUTTON_COUNT],
}

impl StatusLeds {
    pub fn new(pins: [OutputLine; BUTTON_COUNT]) -> Self {
        Self { pins }
    }

    pub fn mirror(&mut self, samples: &Samples) {
        for (pin, &pressed) in self.pins.iter_mut().zip(samples) {
            pin.set_state(pressed.into()).ok();
        }
    }
}

impl Indicators for StatusLeds {
    fn clear(&mut self) {
        for pin in &mut self.pins {
            pin.set_low().ok();
        }
    }
}

/// Sleeps the core until a GPIO edge interrupt has been serviced.
pub struct WfiSleeper;

impl Sleeper for WfiSleeper {
    fn sleep(&mut self) {
        // Edges seen while awake are not wake requests
        WAKE_LATCH.take();

        // WFI still wakes on a pending interrupt with interrupts masked, so an
        // edge landing between the check and the WFI is not lost.
        critical_section::with(|_| {
            if WAKE_LATCH.peek().is_empty() {
                cortex_m::asm::dsb();
                cortex_m::asm::wfi();
            }
        });
    }
}
