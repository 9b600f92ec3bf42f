// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Compile-time configuration.
//!
//! All windows are expressed in control-loop ticks, not wall-clock time.
//! They were tuned for a 1 ms tick and must be revisited together with
//! `TICK_PERIOD_US` or the shift-register pulse widths if the core clock
//! changes.

/// Number of logical inputs (red, green, blue, key).
pub const BUTTON_COUNT: usize = 4;

/// Ticks a raw level change must persist before it is confirmed.
pub const DEBOUNCE_WINDOW: u16 = 20;

/// Ticks between auto-repeat triggers while a button is held.
pub const HOLD_WINDOW: u16 = 400;

/// Idle ticks before the display is blanked and the CPU sleeps (~2 minutes).
pub const IDLE_TIMEOUT_TICKS: u32 = 120_000;

/// Number of chained shift-register outputs.
pub const SR_LENGTH: u32 = 17;

/// Display word with every chained LED lit.
pub const FULL_MASK: u32 = (1 << SR_LENGTH) - 1;

/// Half-period of the clock and latch pulses.
pub const PULSE_WIDTH_NS: u32 = 1_000;

/// Low time of the register reset pulse.
pub const RESET_PULSE_NS: u32 = 10_000;

/// Wait between the initial blank write and enabling the outputs.
pub const SETTLE_NS: u32 = 100_000;

/// Control-loop period.
pub const TICK_PERIOD_US: u32 = 1_000;

/// Ticks between demo counter steps.
pub const DEMO_STEP_TICKS: u16 = 250;

/// Tick-based windows used by the debounce engine and the idle governor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    pub debounce_window: u16,
    pub hold_window: u16,
    pub idle_timeout_ticks: u32,
    pub demo_step_ticks: u16,
}

impl Timing {
    pub const fn new() -> Self {
        Self {
            debounce_window: DEBOUNCE_WINDOW,
            hold_window: HOLD_WINDOW,
            idle_timeout_ticks: IDLE_TIMEOUT_TICKS,
            demo_step_ticks: DEMO_STEP_TICKS,
        }
    }

    pub const fn with_debounce_window(mut self, ticks: u16) -> Self {
        self.debounce_window = ticks;
        self
    }

    pub const fn with_hold_window(mut self, ticks: u16) -> Self {
        self.hold_window = ticks;
        self
    }

    pub const fn with_idle_timeout(mut self, ticks: u32) -> Self {
        self.idle_timeout_ticks = ticks;
        self
    }

    pub const fn with_demo_step(mut self, ticks: u16) -> Self {
        self.demo_step_ticks = ticks;
        self
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new()
    }
}
