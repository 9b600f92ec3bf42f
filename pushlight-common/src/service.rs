// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Main-loop services and the event bus connecting them.

use crate::debounce::{ButtonId, Edge, Samples};
use crate::wake::WakeSources;
use core::cell::RefCell;
use heapless::Vec;

/// Events that can be sent between services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Raw input levels read this tick
    Sampled(Samples),
    /// A debounced edge, hold repeats included
    Edge(ButtonId, Edge),
    /// The game saw user activity this tick; restarts the idle countdown
    Activity,
    /// The game produced a new display word
    DisplayChanged(u32),
    /// The device came back from sleep
    Woke(WakeSources),
}

/// Event bus for inter-service communication
pub struct EventBus {
    events: RefCell<Vec<Event, 32>>,
}

impl EventBus {
    pub const fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    /// Publish an event to the bus
    pub fn publish(&self, event: Event) {
        if self.events.borrow_mut().push(event).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Event bus full, dropping event: {:?}", event);
        }
    }

    /// Consume events matching a filter
    pub fn consume<F>(&self, mut filter: F)
    where
        F: FnMut(&Event) -> bool,
    {
        self.events.borrow_mut().retain(|e| !filter(e));
    }

    /// Check if an event exists without consuming it
    pub fn has_event<F>(&self, filter: F) -> bool
    where
        F: FnMut(&Event) -> bool,
    {
        self.events.borrow().iter().any(filter)
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Drop everything nobody consumed during the last tick
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared context passed to all services
pub struct ServiceContext<'a, P> {
    pub peripherals: &'a mut P,
    pub events: &'a EventBus,
}

/// Trait for services that run in the main loop
pub trait Service<P> {
    /// Process this service's logic
    /// Uses interior mutability (Cell/RefCell) for state changes
    fn process(&self, ctx: &mut ServiceContext<P>);
}

/// Run every service once, in order.
pub fn run_tick<P>(services: &[&dyn Service<P>], ctx: &mut ServiceContext<P>) {
    for service in services {
        service.process(ctx);
    }
}
