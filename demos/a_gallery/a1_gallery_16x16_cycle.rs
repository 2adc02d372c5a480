#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};
use embassy_executor::Spawner;
use pixel_gallery::{
    Result,
    gallery::Gallery,
    gpio_pad::{GpioPad, PressedTo},
    input::{ButtonId, DEBOUNCE_DWELL, InputController},
    palette::RGB8,
    panel::{PanelSurface, layout::PanelLayout},
    player::{DEFAULT_TICK, GalleryPlayer},
};
use smart_leds::SmartLedsWrite;
use {defmt_rtt as _, panic_probe as _};

/// Demo gallery baked into flash at build time: the eight-color quadrant test
/// card plus a heart. Press switch A to cycle.
const GALLERY_JSON: &str = include_str!("a1_images.json");

const WIDTH: usize = 16;
const HEIGHT: usize = 16;
const LED_COUNT: usize = WIDTH * HEIGHT;
const MAX_FRAMES: usize = 8;

const PANEL_LAYOUT: PanelLayout<LED_COUNT, WIDTH, HEIGHT> = PanelLayout::row_major();

/// Stand-in driver that reports each presented frame over defmt.
///
/// Swap in your panel's `SmartLedsWrite` driver to light actual LEDs.
struct TraceWriter;

impl SmartLedsWrite for TraceWriter {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> core::result::Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let mut lit = 0usize;
        for item in iterator {
            let color: RGB8 = item.into();
            if color != RGB8::new(0, 0, 0) {
                lit += 1;
            }
        }
        defmt::info!("presented frame: {}/{} pixels lit", lit, LED_COUNT);
        Ok(())
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let err = inner_main().await.unwrap_err();
    panic!("{err}");
}

async fn inner_main() -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let gallery: Gallery<WIDTH, HEIGHT, MAX_FRAMES> = Gallery::from_json(GALLERY_JSON)?;
    defmt::info!("gallery loaded: {} frames", gallery.len());

    // Front-panel switches A-D, wired to ground.
    let pad = GpioPad::new(p.PIN_0, p.PIN_1, p.PIN_3, p.PIN_6, PressedTo::Ground);

    let mut surface = PanelSurface::new(&PANEL_LAYOUT, TraceWriter);
    let mut player = GalleryPlayer::new(
        DEFAULT_TICK,
        InputController::new(ButtonId::A, DEBOUNCE_DWELL),
    );
    player.run(&gallery, &mut surface, &pad).await
}
