// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Idle countdown and sleep/wake sequencing.
//!
//! The governor has two states, Active and Asleep. Asleep is transient: the
//! sleep call blocks until a wake interrupt fires and control comes back
//! inline. The governor never polls for wake; the wake sources must have been
//! armed at start-up or the device sleeps forever.

use crate::config::IDLE_TIMEOUT_TICKS;

/// Something that can blank the display without losing its contents.
pub trait OutputGate {
    type Error;

    fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Self::Error>;
}

/// Secondary status outputs that must be dark while asleep.
pub trait Indicators {
    fn clear(&mut self);
}

/// Low-power wait. Returns only after a wake interrupt has been serviced.
pub trait Sleeper {
    fn sleep(&mut self);
}

/// Outcome of one governor tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Activity seen, countdown reloaded.
    Reloaded,
    /// Still counting down; ticks left before sleeping.
    Counting(u32),
    /// The countdown expired; the device slept and has woken up again.
    Slept,
}

/// Idle timer driving the power-down decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdleGovernor {
    remaining: u32,
    timeout: u32,
    sleeps: u32,
}

impl IdleGovernor {
    pub const fn new() -> Self {
        Self::with_timeout(IDLE_TIMEOUT_TICKS)
    }

    /// A timeout of zero is raised to one tick.
    pub const fn with_timeout(timeout: u32) -> Self {
        let timeout = if timeout == 0 { 1 } else { timeout };
        Self {
            remaining: timeout,
            timeout,
            sleeps: 0,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn timeout(&self) -> u32 {
        self.timeout
    }

    /// Number of completed sleep cycles since boot.
    pub fn sleeps(&self) -> u32 {
        self.sleeps
    }

    /// Restart the full countdown.
    pub fn reload(&mut self) {
        self.remaining = self.timeout;
    }

    /// One control-loop tick: count down, and sleep on expiry.
    pub fn tick<G, I, S>(
        &mut self,
        active: bool,
        gate: &mut G,
        indicators: &mut I,
        sleeper: &mut S,
    ) -> Result<Tick, G::Error>
    where
        G: OutputGate,
        I: Indicators,
        S: Sleeper,
    {
        if active {
            self.reload();
            return Ok(Tick::Reloaded);
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.sleep_cycle(gate, indicators, sleeper)?;
            return Ok(Tick::Slept);
        }
        Ok(Tick::Counting(self.remaining))
    }

    /// Blank everything, sleep until woken, then restore the display and
    /// reload the countdown.
    pub fn sleep_cycle<G, I, S>(
        &mut self,
        gate: &mut G,
        indicators: &mut I,
        sleeper: &mut S,
    ) -> Result<(), G::Error>
    where
        G: OutputGate,
        I: Indicators,
        S: Sleeper,
    {
        #[cfg(feature = "defmt")]
        defmt::info!("Power: idle for {} ticks, sleeping", self.timeout);

        gate.set_output_enabled(false)?;
        indicators.clear();
        sleeper.sleep();
        gate.set_output_enabled(true)?;

        self.reload();
        self.sleeps = self.sleeps.wrapping_add(1);

        #[cfg(feature = "defmt")]
        defmt::info!("Power: awake (sleep #{})", self.sleeps);
        Ok(())
    }
}

impl Default for IdleGovernor {
    fn default() -> Self {
        Self::new()
    }
}
