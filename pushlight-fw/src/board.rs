// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Board bring-up and the fixed pin map.
//!
//! | Function        | Pin  | Notes                         |
//! |-----------------|------|-------------------------------|
//! | Red button      | GP2  | pull-up, active-low           |
//! | Green button    | GP3  | pull-up, active-low           |
//! | Blue button     | GP4  | pull-up, active-low           |
//! | Key switch      | GP5  | pull-up, active-low           |
//! | SR data         | GP10 |                               |
//! | SR clock        | GP11 | positive edge                 |
//! | SR latch        | GP12 | positive edge                 |
//! | SR output enable| GP13 | active-low, boots high        |
//! | SR reset        | GP14 | active-low, boots high        |
//! | Status LEDs     | GP16-GP19 | red, green, blue, key    |

use crate::irq;
use crate::peripherals::{Peripherals, StatusLeds};
use embedded_hal::digital::{InputPin, PinState};
use pushlight_common::sampler::ButtonInput;
use pushlight_common::wake::WakeSource;
use pushlight_common::{ShiftLines, ShiftRegister};
use rp2040_hal::{
    clocks::init_clocks_and_plls,
    gpio::{self, DynPinId, FunctionSioInput, FunctionSioOutput, Interrupt, Pin, PullDown, PullUp},
    pac, Sio, Timer, Watchdog,
};

pub const XTAL_FREQ_HZ: u32 = 12_000_000;

pub type OutputLine = Pin<DynPinId, FunctionSioOutput, PullDown>;
pub type InputLine = Pin<DynPinId, FunctionSioInput, PullUp>;
pub type Display = ShiftRegister<OutputLine, Timer>;

/// One active-low button input, also used as its own wake source.
pub struct ButtonLine {
    pin: InputLine,
}

impl ButtonLine {
    fn new(pin: InputLine) -> Self {
        Self { pin }
    }

    /// Arm both edges so a press or a release wakes the core.
    fn arm(&mut self) {
        self.acknowledge();
        self.pin.set_interrupt_enabled(Interrupt::EdgeLow, true);
        self.pin.set_interrupt_enabled(Interrupt::EdgeHigh, true);
    }
}

impl ButtonInput for ButtonLine {
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

impl WakeSource for ButtonLine {
    fn is_pending(&self) -> bool {
        self.pin.interrupt_status(Interrupt::EdgeLow)
            || self.pin.interrupt_status(Interrupt::EdgeHigh)
    }

    fn acknowledge(&mut self) {
        self.pin.clear_interrupt(Interrupt::EdgeLow);
        self.pin.clear_interrupt(Interrupt::EdgeHigh);
    }
}

/// Bring up clocks and pins, run the display start-up sequence and arm the
/// wake interrupts.
pub fn init() -> Peripherals {
    let Some(mut pac) = pac::Peripherals::take() else {
        defmt::panic!("Peripherals already taken");
    };
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let Ok(clocks) = init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    ) else {
        defmt::panic!("Clock init failed");
    };

    let sio = Sio::new(pac.SIO);
    let pins = gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // OE and RESET must never glitch low before init() drives them
    let lines = ShiftLines {
        data: pins.gpio10.into_push_pull_output().into_dyn_pin(),
        clock: pins.gpio11.into_push_pull_output().into_dyn_pin(),
        latch: pins.gpio12.into_push_pull_output().into_dyn_pin(),
        output_enable: pins
            .gpio13
            .into_push_pull_output_in_state(PinState::High)
            .into_dyn_pin(),
        reset: pins
            .gpio14
            .into_push_pull_output_in_state(PinState::High)
            .into_dyn_pin(),
    };
    let mut display = ShiftRegister::new(lines, timer);
    display.init().ok();

    let status_leds = StatusLeds::new([
        pins.gpio16.into_push_pull_output().into_dyn_pin(),
        pins.gpio17.into_push_pull_output().into_dyn_pin(),
        pins.gpio18.into_push_pull_output().into_dyn_pin(),
        pins.gpio19.into_push_pull_output().into_dyn_pin(),
    ]);

    let mut buttons = [
        ButtonLine::new(pins.gpio2.into_pull_up_input().into_dyn_pin()),
        ButtonLine::new(pins.gpio3.into_pull_up_input().into_dyn_pin()),
        ButtonLine::new(pins.gpio4.into_pull_up_input().into_dyn_pin()),
        ButtonLine::new(pins.gpio5.into_pull_up_input().into_dyn_pin()),
    ];
    buttons.iter_mut().for_each(ButtonLine::arm);
    irq::install(buttons);

    defmt::println!("Board init done");
    Peripherals::new(timer, display, status_leds)
}
