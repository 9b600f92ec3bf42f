// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Debounce, edge and hold/repeat detection.
//!
//! Each button is a small counter machine fed one raw sample per tick:
//!
//! ```text
//! Idle -> Debouncing -> (trigger) -> HoldCountdown -> (trigger) -> HoldCountdown ...
//!            ^----------------- any raw change ----------------------'
//! ```
//!
//! The state is fully captured by the counters and the sampled levels, so
//! there is no explicit state enum. A raw change is taken into `last`
//! immediately and only its confirmation is delayed; a second bounce simply
//! restarts the window.

use crate::config::{Timing, BUTTON_COUNT, DEBOUNCE_WINDOW, HOLD_WINDOW};

/// Raw pressed levels for every button, indexed by [`ButtonId::index`].
pub type Samples = [bool; BUTTON_COUNT];

/// Logical inputs of the toy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Red,
    Green,
    Blue,
    /// Key switch
    Key,
}

impl ButtonId {
    pub const ALL: [ButtonId; BUTTON_COUNT] =
        [ButtonId::Red, ButtonId::Green, ButtonId::Blue, ButtonId::Key];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Direction of a confirmed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

/// What caused a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerKind {
    /// A level change survived the debounce window.
    Debounce,
    /// Auto-repeat while the button stays pressed.
    Hold,
}

/// Event fired by [`Button::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Trigger {
    pub edge: Edge,
    pub kind: TriggerKind,
}

/// Debounce state of one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    current: bool,
    last: bool,
    confirmed: bool,
    debounce_counter: u16,
    hold_counter: u16,
    rising_edge: bool,
    falling_edge: bool,
    debounce_window: u16,
    hold_window: u16,
}

impl Button {
    pub const fn new() -> Self {
        Self::with_windows(DEBOUNCE_WINDOW, HOLD_WINDOW)
    }

    /// Windows of zero ticks are raised to one.
    pub const fn with_windows(debounce_window: u16, hold_window: u16) -> Self {
        Self {
            current: false,
            last: false,
            confirmed: false,
            debounce_counter: 0,
            hold_counter: 0,
            rising_edge: false,
            falling_edge: false,
            debounce_window: if debounce_window == 0 { 1 } else { debounce_window },
            hold_window: if hold_window == 0 { 1 } else { hold_window },
        }
    }

    /// Feed one raw sample. Returns the trigger fired on this tick, if any.
    pub fn update(&mut self, raw: bool) -> Option<Trigger> {
        if raw != self.current {
            self.current = raw;
        }

        if self.current != self.last {
            self.debounce_counter = self.debounce_window;
            self.last = self.current;
            return None;
        }

        let kind = if self.debounce_counter > 0 {
            self.debounce_counter -= 1;
            // A bounce that settled back on the confirmed level is not an edge.
            (self.debounce_counter == 0 && self.current != self.confirmed)
                .then_some(TriggerKind::Debounce)
        } else if self.current && self.hold_counter > 0 {
            self.hold_counter -= 1;
            (self.hold_counter == 0).then_some(TriggerKind::Hold)
        } else {
            None
        };

        kind.map(|kind| self.fire(kind))
    }

    fn fire(&mut self, kind: TriggerKind) -> Trigger {
        self.rising_edge = self.current;
        self.falling_edge = !self.current;
        self.confirmed = self.current;
        self.hold_counter = if self.current { self.hold_window } else { 0 };

        let edge = if self.current {
            Edge::Rising
        } else {
            Edge::Falling
        };
        Trigger { edge, kind }
    }

    /// Last sampled raw level.
    pub fn current(&self) -> bool {
        self.current
    }

    /// Level reported by the most recent debounce trigger.
    pub fn is_pressed(&self) -> bool {
        self.confirmed
    }

    pub fn debounce_counter(&self) -> u16 {
        self.debounce_counter
    }

    pub fn hold_counter(&self) -> u16 {
        self.hold_counter
    }

    pub fn rising_edge(&self) -> bool {
        self.rising_edge
    }

    pub fn falling_edge(&self) -> bool {
        self.falling_edge
    }

    /// Consume the rising-edge flag.
    pub fn take_rising(&mut self) -> bool {
        core::mem::take(&mut self.rising_edge)
    }

    /// Consume the falling-edge flag.
    pub fn take_falling(&mut self) -> bool {
        core::mem::take(&mut self.falling_edge)
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

/// The four buttons of the toy, updated together once per tick.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSet {
    buttons: [Button; BUTTON_COUNT],
}

impl ButtonSet {
    pub const fn new() -> Self {
        Self {
            buttons: [Button::new(); BUTTON_COUNT],
        }
    }

    pub const fn with_timing(timing: &Timing) -> Self {
        Self {
            buttons: [Button::with_windows(timing.debounce_window, timing.hold_window);
                BUTTON_COUNT],
        }
    }

    /// Run the debounce engine for every button with this tick's samples.
    pub fn update(&mut self, samples: Samples) -> [Option<Trigger>; BUTTON_COUNT] {
        let mut triggers = [None; BUTTON_COUNT];
        for ((button, raw), trigger) in self.buttons.iter_mut().zip(samples).zip(&mut triggers) {
            *trigger = button.update(raw);
        }
        triggers
    }

    pub fn get(&self, id: ButtonId) -> &Button {
        &self.buttons[id.index()]
    }

    pub fn get_mut(&mut self, id: ButtonId) -> &mut Button {
        &mut self.buttons[id.index()]
    }

    /// True if any button still has an unconsumed edge flag.
    pub fn any_edge(&self) -> bool {
        self.buttons
            .iter()
            .any(|b| b.rising_edge() || b.falling_edge())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ButtonId, &Button)> {
        ButtonId::ALL.into_iter().zip(self.buttons.iter())
    }
}

impl Default for ButtonSet {
    fn default() -> Self {
        Self::new()
    }
}
