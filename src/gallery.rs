//! Ordered, immutable frame collections with cyclic navigation.

use heapless::Vec;
use serde::Deserialize;

use crate::frame::{Frame, IndexGrid};
use crate::palette::{Palette, PALETTE_CAPACITY, RawColor};
use crate::{Error, Result};

/// Maximum rows/columns accepted from a gallery source before shape
/// validation. Bounds the parse buffers, not the display: a 16×16 panel still
/// rejects a 17-wide grid with [`Error::GridDimensions`].
pub const GRID_SOURCE_CAPACITY: usize = 32;

/// One frame descriptor as it appears in the JSON gallery source.
///
/// The source is an ordered JSON array of these: a `palette` list of
/// `{"r", "g", "b"}` objects and a rectangular `grid` of palette indices
/// sized exactly to the display.
#[derive(Clone, Debug, Deserialize)]
pub struct FrameDescriptor {
    /// Ordered palette entries, channels still unvalidated.
    pub palette: Vec<RawColor, PALETTE_CAPACITY>,
    /// Row-major grid of palette indices.
    pub grid: Vec<Vec<u8, GRID_SOURCE_CAPACITY>, GRID_SOURCE_CAPACITY>,
}

/// Ordered, non-empty sequence of frames for a W×H display.
///
/// Built once at startup and read-only afterwards: the gallery owns all frame
/// data for the process lifetime, while the current-frame cursor lives with
/// the caller (see [`GalleryPlayer`](crate::player::GalleryPlayer)) and is
/// advanced through the pure [`next`](Self::next) arithmetic.
#[derive(Clone, Debug)]
pub struct Gallery<const W: usize, const H: usize, const MAX_FRAMES: usize> {
    frames: Vec<Frame<W, H>, MAX_FRAMES>,
}

impl<const W: usize, const H: usize, const MAX_FRAMES: usize> Gallery<W, H, MAX_FRAMES> {
    /// Parse and validate a JSON gallery source.
    ///
    /// Frames are built in source order; the first malformed frame aborts the
    /// whole load. No partial galleries.
    ///
    /// # Errors
    ///
    /// [`Error::SourceSyntax`] for structurally bad JSON, otherwise whatever
    /// [`Self::from_descriptors`] rejects.
    pub fn from_json(source: &str) -> Result<Self> {
        let (descriptors, _remainder): (Vec<FrameDescriptor, MAX_FRAMES>, usize) =
            serde_json_core::de::from_str(source)?;
        Self::from_descriptors(&descriptors)
    }

    /// Validate parsed descriptors into frames, in order.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::MalformedPalette`], [`Error::RaggedGrid`],
    /// [`Error::GridDimensions`] and [`Error::PaletteIndexOverflow`] from
    /// frame construction; [`Error::EmptyGallery`] for zero descriptors;
    /// [`Error::GalleryOverflow`] past `MAX_FRAMES`.
    pub fn from_descriptors(descriptors: &[FrameDescriptor]) -> Result<Self> {
        let mut frames = Vec::new();
        for descriptor in descriptors {
            let palette = Palette::from_raw(&descriptor.palette)?;
            let grid = IndexGrid::from_rows(descriptor.grid.iter().map(|row| &row[..]))?;
            let frame = Frame::new(palette, grid)?;
            frames.push(frame).map_err(|_| Error::GalleryOverflow {
                capacity: MAX_FRAMES,
            })?;
        }
        Self::from_vec(frames)
    }

    /// Build a gallery from ready-made frames.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyGallery`] for zero frames; [`Error::GalleryOverflow`]
    /// past `MAX_FRAMES`.
    pub fn from_frames(frames: impl IntoIterator<Item = Frame<W, H>>) -> Result<Self> {
        let mut collected = Vec::new();
        for frame in frames {
            collected.push(frame).map_err(|_| Error::GalleryOverflow {
                capacity: MAX_FRAMES,
            })?;
        }
        Self::from_vec(collected)
    }

    fn from_vec(frames: Vec<Frame<W, H>, MAX_FRAMES>) -> Result<Self> {
        if frames.is_empty() {
            return Err(Error::EmptyGallery);
        }
        Ok(Self { frames })
    }

    /// Number of frames. At least 1 by construction.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false for a constructed gallery; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at an externally-owned cursor position.
    #[must_use]
    pub fn frame_at(&self, cursor: usize) -> Option<&Frame<W, H>> {
        self.frames.get(cursor)
    }

    /// Cyclic advance of an external cursor: `(cursor + 1) % len()`.
    ///
    /// Pure arithmetic over read-only state; advancing from the last index
    /// wraps to 0.
    #[must_use]
    pub fn next(&self, cursor: usize) -> usize {
        (cursor + 1) % self.frames.len()
    }
}
