//! Ordered color tables resolving palette indices to RGB colors.

use heapless::Vec;
use serde::Deserialize;

use crate::{Error, Result};

/// RGB color type used for every pixel in the crate.
pub use smart_leds::RGB8;

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// Maximum colors in one palette. Grid indices are bytes, so 256 covers them.
pub const PALETTE_CAPACITY: usize = 256;

/// One palette entry as it appears in a gallery source, channels unvalidated.
///
/// Channels are read wide on purpose: a source value of e.g. 300 must surface
/// as [`Error::MalformedPalette`] at load time, not as a parse failure.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub struct RawColor {
    /// Red channel, 0-255 in a valid source.
    pub r: u32,
    /// Green channel, 0-255 in a valid source.
    pub g: u32,
    /// Blue channel, 0-255 in a valid source.
    pub b: u32,
}

/// Ordered color table private to one frame. Immutable once constructed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Palette {
    colors: Vec<RGB8, PALETTE_CAPACITY>,
}

impl Palette {
    /// Validate raw source entries and build the table.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedPalette`] if any channel exceeds 255;
    /// [`Error::PaletteOverflow`] past [`PALETTE_CAPACITY`] entries.
    pub fn from_raw(raw: &[RawColor]) -> Result<Self> {
        let mut colors = Vec::new();
        for (index, entry) in raw.iter().enumerate() {
            let color = RGB8::new(
                channel(index, entry.r)?,
                channel(index, entry.g)?,
                channel(index, entry.b)?,
            );
            colors.push(color).map_err(|_| Error::PaletteOverflow {
                capacity: PALETTE_CAPACITY,
            })?;
        }
        Ok(Self { colors })
    }

    /// Build the table from already-validated colors.
    ///
    /// # Errors
    ///
    /// [`Error::PaletteOverflow`] past [`PALETTE_CAPACITY`] entries.
    pub fn from_colors(source: &[RGB8]) -> Result<Self> {
        let mut colors = Vec::new();
        colors
            .extend_from_slice(source)
            .map_err(|()| Error::PaletteOverflow {
                capacity: PALETTE_CAPACITY,
            })?;
        Ok(Self { colors })
    }

    /// Number of colors in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the table defines no colors at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Resolve a palette index to its color.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len()`. Never clamps or
    /// wraps.
    pub fn color_at(&self, index: usize) -> Result<RGB8> {
        self.colors
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.colors.len(),
            })
    }
}

fn channel(index: usize, value: u32) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::MalformedPalette { index, value })
}
