//! The four front-panel switches read through GPIO.

use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Pull};

use crate::input::{ButtonId, ButtonPad};

/// Describes how the switches are physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum PressedTo {
    /// Switch connects its pin to voltage (3.3V) when pressed.
    /// Uses the internal pull-down; the pin reads HIGH when pressed.
    ///
    /// Note: the original Pico 2 (RP2350) has a known silicon bug with
    /// pull-down resistors that can leave pins HIGH after release. Wire to
    /// ground on that board.
    Voltage,

    /// Switch connects its pin to ground (GND) when pressed.
    /// Uses the internal pull-up; the pin reads LOW when pressed.
    Ground,
}

/// Four GPIO inputs exposed as a [`ButtonPad`].
///
/// Raw levels only: debouncing and edge detection stay with
/// [`InputController`](crate::input::InputController).
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use pixel_gallery::gpio_pad::{GpioPad, PressedTo};
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// fn example(p: embassy_rp::Peripherals) {
///     // Front switches A-D wired to ground.
///     let pad = GpioPad::new(p.PIN_0, p.PIN_1, p.PIN_3, p.PIN_6, PressedTo::Ground);
/// }
/// ```
pub struct GpioPad<'a> {
    inputs: [Input<'a>; 4],
    pressed_to: PressedTo,
}

impl<'a> GpioPad<'a> {
    /// Claim the four switch pins, in A, B, C, D order.
    ///
    /// The internal pull is chosen from the wiring:
    /// [`PressedTo::Voltage`] pulls down, [`PressedTo::Ground`] pulls up.
    #[must_use]
    pub fn new<PA, PB, PC, PD>(
        a: Peri<'a, PA>,
        b: Peri<'a, PB>,
        c: Peri<'a, PC>,
        d: Peri<'a, PD>,
        pressed_to: PressedTo,
    ) -> Self
    where
        PA: embassy_rp::gpio::Pin,
        PB: embassy_rp::gpio::Pin,
        PC: embassy_rp::gpio::Pin,
        PD: embassy_rp::gpio::Pin,
    {
        let pull = match pressed_to {
            PressedTo::Voltage => Pull::Down,
            PressedTo::Ground => Pull::Up,
        };
        Self {
            inputs: [
                Input::new(a, pull),
                Input::new(b, pull),
                Input::new(c, pull),
                Input::new(d, pull),
            ],
            pressed_to,
        }
    }
}

impl ButtonPad for GpioPad<'_> {
    fn is_pressed(&self, button: ButtonId) -> bool {
        let input = &self.inputs[button.position()];
        match self.pressed_to {
            PressedTo::Voltage => input.is_high(),
            PressedTo::Ground => input.is_low(),
        }
    }
}
