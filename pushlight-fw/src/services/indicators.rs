// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Status LED service.

use crate::peripherals::Peripherals;
use pushlight_common::service::{Event, Service, ServiceContext};

/// Mirrors the raw input levels onto the status LEDs
pub struct IndicatorService;

impl IndicatorService {
    pub fn new() -> Self {
        Self
    }
}

impl Service<Peripherals> for IndicatorService {
    fn process(&self, ctx: &mut ServiceContext<Peripherals>) {
        let status_leds = &mut ctx.peripherals.status_leds;
        ctx.events.consume(|event| match *event {
            Event::Sampled(samples) => {
                status_leds.mirror(&samples);
                true
            }
            Event::DisplayChanged(word) => {
                defmt::debug!("Display: 0x{:05x}", word);
                true
            }
            _ => false,
        });
    }
}
