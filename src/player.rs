//! The always-on display loop: draw, present, poll, sleep.

use core::convert::Infallible;

use embassy_time::{Duration, Instant, Timer};

use crate::gallery::Gallery;
use crate::input::{ButtonPad, InputController};
use crate::render::{self, Surface};
use crate::{Error, Result};

/// Default tick interval between draw-poll cycles. A design parameter, not a
/// hard real-time deadline; jitter is acceptable.
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// What one tick did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TickOutcome {
    /// False when the frame was skipped over a per-frame data fault.
    pub drawn: bool,
    /// True when an advance event moved the cursor this tick.
    pub advanced: bool,
}

/// Drives rendering and navigation over an immutable [`Gallery`].
///
/// The player owns the two pieces of mutable state in the system: the cursor
/// (reset to 0 at startup) and the tick cadence. Everything runs on one task
/// in strict sequence (render, present, poll, sleep) and the sleep inside
/// [`run`](Self::run) is the only suspend point, so an advance press during
/// the sleep is observed at the next poll and input latency is bounded by one
/// tick.
pub struct GalleryPlayer {
    cursor: usize,
    tick: Duration,
    input: InputController,
}

impl GalleryPlayer {
    /// Build a player with cursor 0.
    #[must_use]
    pub const fn new(tick: Duration, input: InputController) -> Self {
        Self {
            cursor: 0,
            tick,
            input,
        }
    }

    /// The current frame position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// One draw-poll cycle, with the timestamp injected for testability.
    ///
    /// In order: render and present the frame at the cursor (a per-frame data
    /// fault skips the draw, leaving a buffered device on its previous image,
    /// and is reported as `drawn: false`); poll the switches; on an advance
    /// event move the cursor cyclically. No sleeping here: [`run`](Self::run)
    /// owns the cadence.
    ///
    /// # Errors
    ///
    /// Anything that is not a per-frame fault, e.g. [`Error::DisplayWrite`]
    /// from the driver, is fatal and propagates.
    pub fn step<const W: usize, const H: usize, const M: usize, S, P>(
        &mut self,
        gallery: &Gallery<W, H, M>,
        surface: &mut S,
        pad: &P,
        now: Instant,
    ) -> Result<TickOutcome>
    where
        S: Surface,
        P: ButtonPad,
    {
        // follow the gallery we are driven with, even if it shrank
        if self.cursor >= gallery.len() {
            self.cursor = 0;
        }
        let Some(frame) = gallery.frame_at(self.cursor) else {
            // unreachable: galleries are non-empty by construction
            return Err(Error::EmptyGallery);
        };

        let drawn = match render::draw(frame, surface) {
            Ok(()) => true,
            Err(err) if err.is_frame_fault() => false,
            Err(err) => return Err(err),
        };

        let advanced = self.input.poll(pad, now);
        if advanced {
            self.cursor = gallery.next(self.cursor);
        }
        Ok(TickOutcome { drawn, advanced })
    }

    /// Run the loop forever at the tick cadence.
    ///
    /// Init once, run until external termination: there is no internal exit
    /// path, matching an always-on device. Every iteration performs exactly
    /// one draw-present-poll-sleep cycle regardless of how long rendering
    /// took; frames are never coalesced.
    ///
    /// # Errors
    ///
    /// Returns only on a fatal error such as [`Error::DisplayWrite`];
    /// per-frame data faults are logged and skipped.
    pub async fn run<const W: usize, const H: usize, const M: usize, S, P>(
        &mut self,
        gallery: &Gallery<W, H, M>,
        surface: &mut S,
        pad: &P,
    ) -> Result<Infallible>
    where
        S: Surface,
        P: ButtonPad,
    {
        defmt::info!("gallery player: {} frames, starting at 0", gallery.len());
        loop {
            let outcome = self.step(gallery, surface, pad, Instant::now())?;
            if !outcome.drawn {
                defmt::warn!(
                    "frame {} references colors its palette lacks; draw skipped",
                    self.cursor
                );
            }
            if outcome.advanced {
                defmt::info!("advance: frame {}/{}", self.cursor, gallery.len());
            }
            Timer::after(self.tick).await;
        }
    }
}
