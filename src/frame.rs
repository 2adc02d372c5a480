//! One gallery frame: a fixed-size grid of palette indices plus its palette.

use crate::palette::Palette;
use crate::{Error, Result};

/// Fixed-size 2D grid of palette indices backing one image.
///
/// Storage is row-major, matching the display's raster order: `(0, 0)` is the
/// top-left cell, `x` increases to the right, `y` increases downward. The
/// dimensions are the physical display resolution; a source grid of any other
/// shape is rejected at construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IndexGrid<const W: usize, const H: usize>([[u8; W]; H]);

impl<const W: usize, const H: usize> IndexGrid<W, H> {
    /// Grid width in cells (columns).
    pub const WIDTH: usize = W;
    /// Grid height in cells (rows).
    pub const HEIGHT: usize = H;
    /// Total number of cells (WIDTH × HEIGHT).
    pub const LEN: usize = W * H;

    /// Build a grid from source rows.
    ///
    /// # Errors
    ///
    /// [`Error::RaggedGrid`] when row lengths differ among themselves;
    /// [`Error::GridDimensions`] when the (rectangular) source shape is not
    /// exactly W×H.
    pub fn from_rows<'a, I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut cells = [[0u8; W]; H];
        let mut expected: Option<usize> = None;
        let mut height = 0usize;

        for (y, source) in rows.into_iter().enumerate() {
            let found = source.len();
            let expected = *expected.get_or_insert(found);
            if found != expected {
                return Err(Error::RaggedGrid {
                    row: y,
                    expected,
                    found,
                });
            }
            if y < H && found == W {
                cells[y].copy_from_slice(source);
            }
            height = y + 1;
        }

        let width = expected.unwrap_or(0);
        if width != W || height != H {
            return Err(Error::GridDimensions {
                width,
                height,
                expected_width: W,
                expected_height: H,
            });
        }
        Ok(Self(cells))
    }

    /// Wrap a cell array directly. Rectangularity is guaranteed by the type.
    #[must_use]
    pub const fn from_cells(cells: [[u8; W]; H]) -> Self {
        Self(cells)
    }

    /// Palette index stored at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] past the display edge.
    pub fn index_at(&self, x: usize, y: usize) -> Result<u8> {
        if x >= W || y >= H {
            return Err(Error::OutOfBounds { x, y });
        }
        Ok(self.0[y][x])
    }

    /// Largest palette index referenced anywhere in the grid.
    ///
    /// `None` only for a zero-area grid.
    #[must_use]
    pub fn max_index(&self) -> Option<u8> {
        self.0.iter().flat_map(|row| row.iter()).copied().max()
    }
}

impl<const W: usize, const H: usize> From<[[u8; W]; H]> for IndexGrid<W, H> {
    fn from(cells: [[u8; W]; H]) -> Self {
        Self(cells)
    }
}

/// One complete image: an index grid paired with its private palette.
///
/// Palettes are per-frame, not shared: different frames may define entirely
/// different color sets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frame<const W: usize, const H: usize> {
    palette: Palette,
    grid: IndexGrid<W, H>,
}

impl<const W: usize, const H: usize> Frame<W, H> {
    /// Pair a palette with a grid, rejecting grids that reference colors the
    /// palette does not define. This is the primary guard; the render path
    /// re-checks per draw as a last resort.
    ///
    /// # Errors
    ///
    /// [`Error::PaletteIndexOverflow`] when any grid cell is `>=` the palette
    /// length.
    pub fn new(palette: Palette, grid: IndexGrid<W, H>) -> Result<Self> {
        if let Some(max) = grid.max_index() {
            let index = max as usize;
            if index >= palette.len() {
                return Err(Error::PaletteIndexOverflow {
                    index,
                    palette_len: palette.len(),
                });
            }
        }
        Ok(Self { palette, grid })
    }

    /// Pair a palette with a grid without the index-bounds check.
    ///
    /// For callers that validated elsewhere. The render path still rejects
    /// out-of-range indices per draw, so a mismatched frame is skipped at
    /// display time rather than shown wrong.
    #[must_use]
    pub const fn new_unchecked(palette: Palette, grid: IndexGrid<W, H>) -> Self {
        Self { palette, grid }
    }

    /// The frame's color table.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The frame's index grid.
    #[must_use]
    pub const fn grid(&self) -> &IndexGrid<W, H> {
        &self.grid
    }
}
