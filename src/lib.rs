//! Indexed-palette pixel-art gallery player for small LED matrix displays.
//!
//! The crate decodes compact palette+index frame data, renders it through a
//! narrow display-surface seam, and cycles a gallery of images from debounced,
//! edge-triggered button presses. Display drivers and gallery authoring live
//! outside the crate: any [`SmartLedsWrite`](smart_leds::SmartLedsWrite)
//! driver can sit behind [`panel::PanelSurface`], and any polled switch
//! source can implement [`input::ButtonPad`].
//!
//! # Glossary
//!
//! - **Palette index**: a small integer selecting a color from a frame's
//!   palette.
//! - **Frame**: one complete image, a palette plus a matching index grid.
//! - **Gallery**: the ordered, immutable collection of frames available to
//!   show.
//! - **Advance event**: the single edge-triggered signal produced when the
//!   advance switch goes from released to pressed.
//! - **Tick**: one draw-present-poll-sleep cycle of the player loop.
#![cfg_attr(not(feature = "host"), no_std)]

// Compile-time check: at most one board may be selected
#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

pub mod canvas;
mod error;
pub mod frame;
pub mod gallery;
// Hardware glue requires embassy_rp and a selected board
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod gpio_pad;
pub mod input;
pub mod palette;
pub mod panel;
pub mod player;
pub mod render;
#[cfg(feature = "host")]
pub mod snapshot;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
