// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Core logic for the pushlight illuminated-pushbutton toy.
//!
//! Everything here is written against `embedded-hal` traits and plain owned
//! state, so the same code runs on the board and in host tests:
//! - `debounce`: per-button debounce, edge and hold/repeat state machine
//! - `shift_register`: bit-banged driver for the daisy-chained LED registers
//! - `power`: idle countdown and sleep/wake sequencing
//! - `wake`: interrupt-side acknowledgement and the wake-source latch
//! - `game`: mapping of button edges onto the display word
//! - `service`: the main-loop service and event bus plumbing

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod debounce;
pub mod game;
pub mod power;
pub mod sampler;
pub mod service;
pub mod shift_register;
pub mod wake;

// Re-export commonly used types
pub use config::{Timing, DEBOUNCE_WINDOW, FULL_MASK, HOLD_WINDOW, IDLE_TIMEOUT_TICKS, SR_LENGTH};
pub use debounce::{Button, ButtonId, ButtonSet, Edge, Samples, Trigger, TriggerKind};
pub use game::{Game, GameUpdate, Mode};
pub use power::{IdleGovernor, Indicators, OutputGate, Sleeper, Tick};
pub use sampler::ButtonInput;
pub use shift_register::{ShiftLines, ShiftRegister};
pub use wake::{WakeLatch, WakeSource, WakeSources};
