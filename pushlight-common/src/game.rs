// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Mapping of button edges onto the display word.
//!
//! The 17-LED chain is split into three bars, one per colour button:
//!
//! | Bar   | Bits  | LEDs |
//! |-------|-------|------|
//! | red   | 0-5   | 6    |
//! | green | 6-11  | 6    |
//! | blue  | 12-16 | 5    |
//!
//! With the key switch on, every rising edge of a colour button (including
//! hold repeats) lights one more LED of its bar, wrapping back to dark once
//! the bar is full. With the key switch off the chain shows a free-running
//! binary counter. Colour edges always count as activity; key edges only
//! when they change the mode.

use crate::config::{Timing, DEMO_STEP_TICKS, FULL_MASK};
use crate::debounce::{ButtonId, ButtonSet, Edge};

struct Bar {
    button: ButtonId,
    shift: u32,
    len: u8,
}

const BARS: [Bar; 3] = [
    Bar {
        button: ButtonId::Red,
        shift: 0,
        len: 6,
    },
    Bar {
        button: ButtonId::Green,
        shift: 6,
        len: 6,
    },
    Bar {
        button: ButtonId::Blue,
        shift: 12,
        len: 5,
    },
];

/// Display mode, selected by the key switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Key switch off: free-running counter.
    Demo,
    /// Key switch on: colour buttons fill their bars.
    Play,
}

/// Result of one game tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameUpdate {
    /// A colour edge or a mode change was handled this tick.
    pub active: bool,
    /// New display word, only when it differs from the previous one.
    pub word: Option<u32>,
}

pub struct Game {
    mode: Mode,
    fills: [u8; 3],
    demo_counter: u32,
    demo_ticks: u16,
    demo_step: u16,
    word: u32,
}

impl Game {
    pub const fn new() -> Self {
        Self {
            mode: Mode::Demo,
            fills: [0; 3],
            demo_counter: 0,
            demo_ticks: 0,
            demo_step: DEMO_STEP_TICKS,
            word: 0,
        }
    }

    pub const fn with_timing(timing: &Timing) -> Self {
        let mut game = Self::new();
        game.demo_step = if timing.demo_step_ticks == 0 {
            1
        } else {
            timing.demo_step_ticks
        };
        game
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Word currently expected on the display.
    pub fn word(&self) -> u32 {
        self.word
    }

    /// Consume this tick's edge flags and advance the display.
    pub fn update(&mut self, buttons: &mut ButtonSet) -> GameUpdate {
        let mut active = false;
        for id in ButtonId::ALL {
            let button = buttons.get_mut(id);
            if button.take_rising() {
                active |= self.apply_edge(id, Edge::Rising);
            }
            if button.take_falling() {
                active |= self.apply_edge(id, Edge::Falling);
            }
        }
        self.advance(active)
    }

    /// Handle one logical edge. Returns true if it counts as user activity.
    ///
    /// The key switch latches, so it keeps producing hold repeats while on;
    /// only an edge that actually changes the mode is activity.
    pub fn apply_edge(&mut self, id: ButtonId, edge: Edge) -> bool {
        if id == ButtonId::Key {
            let mode = match edge {
                Edge::Rising => Mode::Play,
                Edge::Falling => Mode::Demo,
            };
            return self.set_mode(mode);
        }

        if edge == Edge::Rising && self.mode == Mode::Play {
            if let Some((fill, bar)) = self
                .fills
                .iter_mut()
                .zip(&BARS)
                .find(|(_, bar)| bar.button == id)
            {
                *fill = if *fill >= bar.len { 0 } else { *fill + 1 };
            }
        }
        true
    }

    /// Finish the tick: step the demo counter and report a changed word.
    pub fn advance(&mut self, active: bool) -> GameUpdate {
        if self.mode == Mode::Demo {
            self.step_demo();
        }

        let word = self.compose();
        let changed = word != self.word;
        self.word = word;

        GameUpdate {
            active,
            word: changed.then_some(word),
        }
    }

    fn set_mode(&mut self, mode: Mode) -> bool {
        if self.mode == mode {
            return false;
        }
        #[cfg(feature = "defmt")]
        defmt::info!("Game: mode {:?} -> {:?}", self.mode, mode);

        self.mode = mode;
        self.demo_counter = 0;
        self.demo_ticks = 0;
        true
    }

    fn step_demo(&mut self) {
        self.demo_ticks += 1;
        if self.demo_ticks < self.demo_step {
            return;
        }
        self.demo_ticks = 0;
        self.demo_counter = if self.demo_counter >= FULL_MASK {
            0
        } else {
            self.demo_counter + 1
        };
    }

    fn compose(&self) -> u32 {
        match self.mode {
            Mode::Demo => self.demo_counter,
            Mode::Play => self
                .fills
                .iter()
                .zip(&BARS)
                .fold(0, |word, (&fill, bar)| word | (((1u32 << fill) - 1) << bar.shift)),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
