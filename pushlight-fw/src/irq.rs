// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! State shared with the GPIO interrupt.

use crate::board::ButtonLine;
use core::cell::RefCell;
use cortex_m::peripheral::NVIC;
use critical_section::Mutex;
use pushlight_common::config::BUTTON_COUNT;
use pushlight_common::wake::{self, WakeLatch};
use rp2040_hal::pac::{self, interrupt};

type ButtonLines = [ButtonLine; BUTTON_COUNT];

/// Button pins, read by the sampler and acknowledged by the interrupt.
static BUTTON_LINES: Mutex<RefCell<Option<ButtonLines>>> = Mutex::new(RefCell::new(None));

/// Inputs that raised an edge interrupt since the last `take`.
pub static WAKE_LATCH: WakeLatch = WakeLatch::new();

/// Hand the armed button lines over to the interrupt and unmask it.
pub fn install(lines: ButtonLines) {
    critical_section::with(|cs| {
        BUTTON_LINES.borrow_ref_mut(cs).replace(lines);
    });
    // SAFETY: the handler only touches state guarded by critical sections
    unsafe { NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0) };
}

/// Run `f` on the button lines inside a critical section.
pub fn with_button_lines<R>(f: impl FnOnce(&mut ButtonLines) -> R) -> Option<R> {
    critical_section::with(|cs| BUTTON_LINES.borrow_ref_mut(cs).as_mut().map(f))
}

#[interrupt]
fn IO_IRQ_BANK0() {
    // Acknowledge and record only; the main loop does the rest
    with_button_lines(|lines| WAKE_LATCH.record(wake::acknowledge_pending(lines)));
}
