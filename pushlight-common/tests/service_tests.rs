// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

use std::cell::Cell;

use pushlight_common::service::{run_tick, Event, EventBus, Service, ServiceContext};
use pushlight_common::wake::WakeSources;

#[test]
fn test_publish_and_consume() {
    let bus = EventBus::new();
    bus.publish(Event::Activity);
    bus.publish(Event::DisplayChanged(0x3F));
    assert_eq!(bus.len(), 2);

    assert!(bus.has_event(|e| matches!(e, Event::DisplayChanged(_))));
    bus.consume(|e| *e == Event::Activity);

    assert_eq!(bus.len(), 1);
    assert!(!bus.has_event(|e| *e == Event::Activity));
}

#[test]
fn test_has_event_does_not_consume() {
    let bus = EventBus::new();
    bus.publish(Event::Woke(WakeSources::from_bits(0b0010)));

    assert!(bus.has_event(|e| matches!(e, Event::Woke(_))));
    assert!(bus.has_event(|e| matches!(e, Event::Woke(_))));
    assert_eq!(bus.len(), 1);
}

#[test]
fn test_full_bus_drops_new_events() {
    let bus = EventBus::new();
    for word in 0..40 {
        bus.publish(Event::DisplayChanged(word));
    }

    assert_eq!(bus.len(), 32);
    assert!(bus.has_event(|e| *e == Event::DisplayChanged(31)));
    assert!(!bus.has_event(|e| *e == Event::DisplayChanged(32)));
}

#[test]
fn test_clear() {
    let bus = EventBus::default();
    bus.publish(Event::Activity);
    bus.clear();
    assert!(bus.is_empty());
}

/// Publishes activity on a fixed schedule.
struct Pulse {
    every: u32,
    ticks: Cell<u32>,
}

impl Service<Vec<&'static str>> for Pulse {
    fn process(&self, ctx: &mut ServiceContext<Vec<&'static str>>) {
        self.ticks.set(self.ticks.get() + 1);
        ctx.peripherals.push("pulse");
        if self.ticks.get() % self.every == 0 {
            ctx.events.publish(Event::Activity);
        }
    }
}

/// Counts the activity it consumes.
struct Listener {
    seen: Cell<u32>,
}

impl Service<Vec<&'static str>> for Listener {
    fn process(&self, ctx: &mut ServiceContext<Vec<&'static str>>) {
        ctx.peripherals.push("listener");
        let mut seen = 0;
        ctx.events.consume(|e| {
            let hit = *e == Event::Activity;
            seen += u32::from(hit);
            hit
        });
        self.seen.set(self.seen.get() + seen);
    }
}

#[test]
fn test_run_tick_in_order() {
    let pulse = Pulse {
        every: 2,
        ticks: Cell::new(0),
    };
    let listener = Listener { seen: Cell::new(0) };
    let services: [&dyn Service<Vec<&'static str>>; 2] = [&pulse, &listener];

    let bus = EventBus::new();
    let mut log = Vec::new();
    for _ in 0..4 {
        let mut ctx = ServiceContext {
            peripherals: &mut log,
            events: &bus,
        };
        run_tick(&services, &mut ctx);
        assert!(bus.is_empty());
    }

    assert_eq!(listener.seen.get(), 2);
    assert_eq!(log[..4], ["pulse", "listener", "pulse", "listener"]);
}

#[test]
fn test_edges_consumed_in_publish_order() {
    use pushlight_common::debounce::{ButtonId, Edge};

    let bus = EventBus::new();
    bus.publish(Event::Sampled([true, false, false, true]));
    bus.publish(Event::Edge(ButtonId::Red, Edge::Rising));
    bus.publish(Event::Edge(ButtonId::Key, Edge::Falling));

    let mut edges = Vec::new();
    bus.consume(|event| {
        let Event::Edge(id, edge) = *event else {
            return false;
        };
        edges.push((id, edge));
        true
    });

    assert_eq!(
        edges,
        vec![(ButtonId::Red, Edge::Rising), (ButtonId::Key, Edge::Falling)]
    );
    assert!(bus.has_event(|e| matches!(e, Event::Sampled(_))));
    assert_eq!(bus.len(), 1);
}
