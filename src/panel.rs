//! Display surface for NeoPixel-style (WS2812) LED matrix panels.
//!
//! [`PanelSurface`] stages pixels in a [`PixelCanvas`], converts the finished
//! frame to the strip's physical LED order through a [`PanelLayout`] wiring
//! map, and hands it to a [`SmartLedsWrite`] driver in a single write per
//! present. The driver itself (panel timing, DMA, brightness) lives outside
//! this crate; anything implementing [`SmartLedsWrite`] plugs in.

pub mod layout;

use smart_leds::{RGB8, SmartLedsWrite};

use crate::canvas::PixelCanvas;
use crate::panel::layout::PanelLayout;
use crate::render::Surface;
use crate::{Error, Result};

/// Staged framebuffer plus wiring map feeding a smart-LED driver.
///
/// `set_pixel` and `clear` touch only the staging canvas; nothing reaches the
/// driver until [`present`](Surface::present) converts the canvas to strip
/// order and writes it out, once.
pub struct PanelSurface<const N: usize, const W: usize, const H: usize, Writer> {
    canvas: PixelCanvas<W, H>,
    mapping_by_xy: [u16; N],
    writer: Writer,
}

impl<const N: usize, const W: usize, const H: usize, Writer> PanelSurface<N, W, H, Writer> {
    /// Pair a wiring layout with a driver. The layout is inverted once here
    /// so per-pixel conversion stays O(1).
    #[must_use]
    pub fn new(layout: &PanelLayout<N, W, H>, writer: Writer) -> Self {
        assert!(
            W * H == N,
            "width * height must equal N (total LEDs of the layout)"
        );
        Self {
            canvas: PixelCanvas::new(),
            mapping_by_xy: layout.xy_to_index(),
            writer,
        }
    }

    /// The staged (not yet presented) canvas.
    #[must_use]
    pub const fn canvas(&self) -> &PixelCanvas<W, H> {
        &self.canvas
    }

    /// Convert the staged canvas to the strip's physical LED order.
    fn strip_order(&self) -> [RGB8; N] {
        let mut strip = [RGB8::new(0, 0, 0); N];
        for y in 0..H {
            for x in 0..W {
                let led_index = self.mapping_by_xy[y * W + x] as usize;
                strip[led_index] = self.canvas[(x, y)];
            }
        }
        strip
    }
}

impl<const N: usize, const W: usize, const H: usize, Writer> Surface
    for PanelSurface<N, W, H, Writer>
where
    Writer: SmartLedsWrite<Color = RGB8>,
{
    fn set_pixel(&mut self, x: usize, y: usize, color: RGB8) {
        if x < W && y < H {
            self.canvas[(x, y)] = color;
        }
    }

    fn clear(&mut self, color: RGB8) {
        self.canvas = PixelCanvas::filled(color);
    }

    fn present(&mut self) -> Result<()> {
        let strip = self.strip_order();
        self.writer.write(strip).map_err(|_| Error::DisplayWrite)
    }
}
