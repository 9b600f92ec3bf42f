// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Power service: idle countdown and sleep.

use crate::{irq::WAKE_LATCH, peripherals::Peripherals};
use core::cell::Cell;
use pushlight_common::service::{Event, Service, ServiceContext};
use pushlight_common::{IdleGovernor, Tick};

/// Blanks the display and sleeps the core after a period without activity
pub struct PowerService {
    governor: Cell<IdleGovernor>,
}

impl PowerService {
    pub fn new() -> Self {
        Self {
            governor: Cell::new(IdleGovernor::new()),
        }
    }

    fn consume_activity(ctx: &mut ServiceContext<Peripherals>) -> bool {
        let mut active = false;
        ctx.events.consume(|event| {
            let is_activity = matches!(event, Event::Activity);
            active |= is_activity;
            is_activity
        });
        active
    }
}

impl Service<Peripherals> for PowerService {
    fn process(&self, ctx: &mut ServiceContext<Peripherals>) {
        let active = Self::consume_activity(ctx);
        let mut governor = self.governor.get();

        let peripherals = &mut *ctx.peripherals;
        let step = governor
            .tick(
                active,
                &mut peripherals.display,
                &mut peripherals.status_leds,
                &mut peripherals.sleeper,
            )
            .ok();
        self.governor.set(governor);

        if step == Some(Tick::Slept) {
            ctx.events.publish(Event::Woke(WAKE_LATCH.take()));
        }
    }
}
