// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Game service driving the LED chain.

use crate::peripherals::Peripherals;
use core::cell::RefCell;
use pushlight_common::service::{Event, Service, ServiceContext};
use pushlight_common::Game;

/// Consumes button edges and pushes new display words to the chain
pub struct GameService {
    game: RefCell<Game>,
}

impl GameService {
    pub fn new() -> Self {
        Self {
            game: RefCell::new(Game::new()),
        }
    }
}

impl Service<Peripherals> for GameService {
    fn process(&self, ctx: &mut ServiceContext<Peripherals>) {
        let mut game = self.game.borrow_mut();

        let mut active = false;
        ctx.events.consume(|event| {
            let Event::Edge(id, edge) = *event else {
                return false;
            };
            active |= game.apply_edge(id, edge);
            true
        });
        let update = game.advance(active);

        if let Some(word) = update.word {
            ctx.peripherals.display.show(word).ok();
            ctx.events.publish(Event::DisplayChanged(word));
        }
        if update.active {
            ctx.events.publish(Event::Activity);
        }
    }
}
