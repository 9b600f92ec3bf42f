// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Input service: raw sampling and debouncing.

use crate::{irq, peripherals::Peripherals};
use core::cell::RefCell;
use pushlight_common::sampler;
use pushlight_common::service::{Event, Service, ServiceContext};
use pushlight_common::{ButtonId, ButtonSet, Edge};

/// Samples every button once per tick and publishes the debounced edges
pub struct InputService {
    buttons: RefCell<ButtonSet>,
}

impl InputService {
    pub fn new() -> Self {
        Self {
            buttons: RefCell::new(ButtonSet::new()),
        }
    }

    fn log_wake(ctx: &mut ServiceContext<Peripherals>) {
        ctx.events.consume(|event| {
            let Event::Woke(sources) = event else {
                return false;
            };
            if sources.is_empty() {
                defmt::warn!("Input: woke without a recorded source");
            }
            for id in sources.iter() {
                defmt::info!("Input: woken by {:?}", id);
            }
            true
        });
    }
}

impl Service<Peripherals> for InputService {
    fn process(&self, ctx: &mut ServiceContext<Peripherals>) {
        Self::log_wake(ctx);

        // Unreadable lines count as released
        let samples = irq::with_button_lines(sampler::sample).unwrap_or_default();
        ctx.events.publish(Event::Sampled(samples));

        let mut buttons = self.buttons.borrow_mut();
        let triggers = buttons.update(samples);

        for (id, trigger) in ButtonId::ALL.into_iter().zip(triggers) {
            let Some(trigger) = trigger else {
                continue;
            };
            defmt::trace!("Input: {:?} {:?}", id, trigger);

            let button = buttons.get_mut(id);
            if button.take_rising() {
                ctx.events.publish(Event::Edge(id, Edge::Rising));
            }
            if button.take_falling() {
                ctx.events.publish(Event::Edge(id, Edge::Falling));
            }
        }
    }
}
