// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Raw input sampling.

use crate::config::BUTTON_COUNT;
use crate::debounce::Samples;

/// A single input read as a boolean "pressed", without any filtering.
///
/// The board inputs are active-low; implementations hide the polarity.
pub trait ButtonInput {
    fn is_pressed(&mut self) -> bool;
}

/// Read every input once, in [`ButtonId`](crate::ButtonId) order.
pub fn sample<I: ButtonInput>(inputs: &mut [I; BUTTON_COUNT]) -> Samples {
    let mut samples = [false; BUTTON_COUNT];
    for (input, sample) in inputs.iter_mut().zip(&mut samples) {
        *sample = input.is_pressed();
    }
    samples
}
