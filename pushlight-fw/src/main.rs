// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

#![no_std]
#![no_main]

mod board;
mod irq;
mod peripherals;
mod services;

use defmt_rtt as _;
use embedded_hal::delay::DelayNs;
use panic_probe as _;

defmt::timestamp!("{=u64:us}", { 0 });

use cortex_m_rt::entry;
use pushlight_common::config::TICK_PERIOD_US;
use pushlight_common::service::{self, Event, EventBus, Service, ServiceContext};
use peripherals::Peripherals;
use services::{GameService, IndicatorService, InputService, PowerService};

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

#[entry]
fn main() -> ! {
    defmt::println!("pushlight v{} init", env!("PUSHLIGHT_VERSION"));

    let mut peripherals = board::init();
    let events = EventBus::new();

    let input = InputService::new();
    let game = GameService::new();
    let indicators = IndicatorService::new();
    let power = PowerService::new();
    let services: [&dyn Service<Peripherals>; 4] = [&input, &game, &indicators, &power];

    defmt::println!("Entering control loop");
    loop {
        let mut ctx = ServiceContext {
            peripherals: &mut peripherals,
            events: &events,
        };
        service::run_tick(&services, &mut ctx);

        // Woke is read by the input service on the next tick
        events.consume(|event| !matches!(event, Event::Woke(_)));

        peripherals.timer.delay_us(TICK_PERIOD_US);
    }
}
