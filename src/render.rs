//! Frame rendering through the display-surface seam.

use smart_leds::RGB8;

use crate::frame::Frame;
use crate::palette::colors;
use crate::{Error, Result};

/// Background color painted before every frame so no stale pixel survives.
pub const BACKGROUND: RGB8 = colors::BLACK;

/// Minimal contract a display must offer the renderer.
///
/// Implementations stage pixels in their own buffer; nothing reaches the
/// physical device until [`present`](Self::present), which is called exactly
/// once per successful draw. All three operations are synchronous; the only
/// suspend point in the whole system is the player's tick sleep.
///
/// [`PixelCanvas`](crate::canvas::PixelCanvas) is an in-memory
/// implementation; [`PanelSurface`](crate::panel::PanelSurface) feeds a
/// smart-LED driver.
pub trait Surface {
    /// Stage one pixel. Coordinates outside the surface are ignored.
    fn set_pixel(&mut self, x: usize, y: usize, color: RGB8);

    /// Fill the whole staging buffer with one color.
    fn clear(&mut self, color: RGB8);

    /// Push the staged pixels to the device, one call per frame swap.
    ///
    /// # Errors
    ///
    /// [`Error::DisplayWrite`] when the underlying driver rejects the frame.
    fn present(&mut self) -> Result<()>;
}

/// Draw one frame through its palette onto a surface, then present it.
///
/// Cells are visited in raster order (top-to-bottom, left-to-right) and the
/// surface is cleared to [`BACKGROUND`] first. The surface is presented
/// exactly once, after every cell is staged, bounding the expensive hardware
/// update to one call per tick.
///
/// # Errors
///
/// [`Error::PaletteIndexOverflow`] when a cell references a color its palette
/// does not define (mismatched source data that slipped past load
/// validation). The draw aborts *before* presenting, so a buffered device
/// keeps showing its previous frame; the caller skips this frame and
/// continues. [`Error::DisplayWrite`] propagates from the present itself.
pub fn draw<const W: usize, const H: usize, S: Surface>(
    frame: &Frame<W, H>,
    surface: &mut S,
) -> Result<()> {
    surface.clear(BACKGROUND);
    for y in 0..H {
        for x in 0..W {
            let index = frame.grid().index_at(x, y)? as usize;
            let color = frame
                .palette()
                .color_at(index)
                .map_err(|_| Error::PaletteIndexOverflow {
                    index,
                    palette_len: frame.palette().len(),
                })?;
            surface.set_pixel(x, y, color);
        }
    }
    surface.present()
}
