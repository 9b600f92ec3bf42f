// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Interrupt-side wake handling.
//!
//! The interrupt handler only acknowledges the pending flags of the inputs
//! that fired and notes which ones they were. All debounce and game work
//! happens in the main loop on the next tick.

use crate::config::BUTTON_COUNT;
use crate::debounce::ButtonId;
use core::cell::Cell;
use critical_section::Mutex;

/// An input whose edge interrupt can wake the device.
pub trait WakeSource {
    /// True if the hardware has latched a pending interrupt for this input.
    fn is_pending(&self) -> bool;

    /// Clear the pending latch so the interrupt does not fire again.
    fn acknowledge(&mut self);
}

/// Set of inputs that requested a wake, one bit per [`ButtonId`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WakeSources(u8);

impl WakeSources {
    pub const NONE: WakeSources = WakeSources(0);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & ((1 << BUTTON_COUNT) - 1))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn insert(&mut self, id: ButtonId) {
        self.0 |= 1 << id.index();
    }

    pub fn contains(self, id: ButtonId) -> bool {
        self.0 & (1 << id.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: WakeSources) -> WakeSources {
        WakeSources(self.0 | other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = ButtonId> {
        ButtonId::ALL.into_iter().filter(move |id| self.contains(*id))
    }
}

/// Acknowledge every pending source and report which ones were pending.
///
/// Meant to be called from the interrupt handler with the shared inputs
/// borrowed under a critical section.
pub fn acknowledge_pending<W: WakeSource>(sources: &mut [W; BUTTON_COUNT]) -> WakeSources {
    let mut fired = WakeSources::NONE;
    for (id, source) in ButtonId::ALL.into_iter().zip(sources.iter_mut()) {
        if source.is_pending() {
            source.acknowledge();
            fired.insert(id);
        }
    }
    fired
}

/// Wake sources recorded by the interrupt handler, drained by the main loop.
pub struct WakeLatch {
    sources: Mutex<Cell<WakeSources>>,
}

impl WakeLatch {
    pub const fn new() -> Self {
        Self {
            sources: Mutex::new(Cell::new(WakeSources::NONE)),
        }
    }

    /// Accumulate sources. Safe to call from interrupt context.
    pub fn record(&self, fired: WakeSources) {
        critical_section::with(|cs| {
            let cell = self.sources.borrow(cs);
            cell.set(cell.get().union(fired));
        });
    }

    /// Return everything recorded since the last call and clear the latch.
    pub fn take(&self) -> WakeSources {
        critical_section::with(|cs| self.sources.borrow(cs).replace(WakeSources::NONE))
    }

    /// Look at the recorded sources without clearing them.
    pub fn peek(&self) -> WakeSources {
        critical_section::with(|cs| self.sources.borrow(cs).get())
    }
}

impl Default for WakeLatch {
    fn default() -> Self {
        Self::new()
    }
}
