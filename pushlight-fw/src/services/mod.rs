// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Service implementations for the control loop.

pub mod game;
pub mod indicators;
pub mod input;
pub mod power;

pub use game::GameService;
pub use indicators::IndicatorService;
pub use input::InputService;
pub use power::PowerService;
