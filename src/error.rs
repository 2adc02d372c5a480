//! Crate-wide error taxonomy and result alias.

use derive_more::{Display, Error, From};

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can go wrong while loading or showing a gallery.
///
/// Load-time variants are fatal: startup aborts with the diagnostic and no
/// partially-usable gallery is ever run. The frame-fault variants (see
/// [`Error::is_frame_fault`]) surface during rendering and are recoverable:
/// the player skips that frame's draw for the tick and keeps going.
#[derive(Debug, Display, Error, From)]
#[non_exhaustive]
pub enum Error {
    /// A palette entry carried a channel value that does not fit 8 bits.
    #[display("palette entry {index} has channel value {value}, expected 0-255")]
    MalformedPalette {
        /// Position of the offending entry in the palette.
        index: usize,
        /// The out-of-range channel value.
        value: u32,
    },

    /// A palette held more colors than the table capacity.
    #[display("palette exceeds the {capacity}-color capacity")]
    PaletteOverflow {
        /// Maximum colors a palette can hold.
        capacity: usize,
    },

    /// A source grid row did not match the length of the rows before it.
    #[display("grid row {row} has {found} cells, rows before it have {expected}")]
    RaggedGrid {
        /// Zero-based row that broke the rectangle.
        row: usize,
        /// Cell count of the preceding rows.
        expected: usize,
        /// Cell count of the offending row.
        found: usize,
    },

    /// A (rectangular) source grid did not match the display resolution.
    #[display(
        "grid is {width}x{height}, display is {expected_width}x{expected_height}"
    )]
    GridDimensions {
        /// Columns found in the source.
        width: usize,
        /// Rows found in the source.
        height: usize,
        /// Display width.
        expected_width: usize,
        /// Display height.
        expected_height: usize,
    },

    /// The gallery source yielded zero frames.
    #[display("gallery source contains no frames")]
    EmptyGallery,

    /// The gallery source yielded more frames than the gallery can hold.
    #[display("gallery exceeds the {capacity}-frame capacity")]
    GalleryOverflow {
        /// Maximum frames the gallery can hold.
        capacity: usize,
    },

    /// A grid cell was requested outside the display area.
    #[display("cell ({x}, {y}) is outside the display area")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
    },

    /// A palette lookup used an index past the end of the table.
    #[display("palette index {index} out of range for a {len}-color palette")]
    IndexOutOfRange {
        /// Requested palette index.
        index: usize,
        /// Number of colors in the palette.
        len: usize,
    },

    /// A frame's grid references a color its own palette does not define.
    #[display("grid references palette index {index}, palette has {palette_len} colors")]
    PaletteIndexOverflow {
        /// Largest offending grid index.
        index: usize,
        /// Number of colors in the frame's palette.
        palette_len: usize,
    },

    /// The gallery source is not structurally well-formed JSON.
    #[display("gallery source is not well-formed: {_0}")]
    #[from]
    SourceSyntax(#[error(not(source))] serde_json_core::de::Error),

    /// The display driver rejected a frame write.
    #[display("display driver rejected the frame write")]
    DisplayWrite,
}

impl Error {
    /// True for per-frame data faults the render loop skips instead of
    /// aborting: the device keeps showing the previous frame and moves on.
    #[must_use]
    pub const fn is_frame_fault(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. }
                | Self::IndexOutOfRange { .. }
                | Self::PaletteIndexOverflow { .. }
        )
    }
}
