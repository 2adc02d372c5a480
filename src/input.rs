//! Button polling, debouncing, and the edge-triggered advance event.

use embassy_time::{Duration, Instant};

// ============================================================================
// Constants
// ============================================================================

/// Debounce dwell: minimum time between counted switch transitions.
pub const DEBOUNCE_DWELL: Duration = Duration::from_millis(10);

// ============================================================================
// ButtonId and the pad seam
// ============================================================================

/// The four front-panel switches.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum ButtonId {
    A,
    B,
    C,
    D,
}

impl ButtonId {
    /// All switches in poll order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub(crate) const fn position(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }
}

/// Raw, level-based read access to the four switches.
///
/// Implementations report the instantaneous state only, with no history and
/// no debouncing. Edge detection and bounce suppression are entirely this
/// module's job. [`GpioPad`](crate::gpio_pad::GpioPad) is the hardware
/// implementation.
pub trait ButtonPad {
    /// Instantaneous pressed state of one switch.
    fn is_pressed(&self, button: ButtonId) -> bool;
}

// ============================================================================
// Per-switch debouncing
// ============================================================================

/// Debounced state of one switch.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum SwitchState {
    /// Switch reads low (not pressed).
    Released,
    /// Switch reads high (pressed).
    Pressed,
}

/// A counted transition reported by [`Debouncer::update`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum Edge {
    /// Released → Pressed.
    Down,
    /// Pressed → Released.
    Up,
}

/// Debounce state machine for one switch.
///
/// A sampled transition is counted only if at least the dwell has elapsed
/// since the previous counted transition; earlier flips are treated as
/// mechanical contact bounce and ignored. Timestamps are passed in by the
/// caller, so the machine is pure and host-testable.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    state: SwitchState,
    dwell: Duration,
    settled_at: Option<Instant>,
}

impl Debouncer {
    /// Start in [`SwitchState::Released`] with the given dwell.
    #[must_use]
    pub const fn new(dwell: Duration) -> Self {
        Self {
            state: SwitchState::Released,
            dwell,
            settled_at: None,
        }
    }

    /// Current debounced state.
    #[must_use]
    pub const fn state(&self) -> SwitchState {
        self.state
    }

    /// Feed one polled sample; `Some(edge)` on a counted transition.
    ///
    /// A press held across many samples yields exactly one [`Edge::Down`]:
    /// edge detection, not level detection.
    pub fn update(&mut self, pressed: bool, now: Instant) -> Option<Edge> {
        let sample = if pressed {
            SwitchState::Pressed
        } else {
            SwitchState::Released
        };
        if sample == self.state {
            return None;
        }
        if let Some(settled_at) = self.settled_at {
            if now.saturating_duration_since(settled_at) < self.dwell {
                // bounce: too soon after the last counted transition
                return None;
            }
        }
        self.state = sample;
        self.settled_at = Some(now);
        Some(match sample {
            SwitchState::Pressed => Edge::Down,
            SwitchState::Released => Edge::Up,
        })
    }
}

// ============================================================================
// InputController
// ============================================================================

/// Polls and debounces all four switches, reporting an advance event on each
/// press of the designated advance switch.
///
/// Only the advance switch (A in the reference wiring) drives gallery
/// navigation; B, C and D are polled and debounced but bound to no action,
/// left for applications to claim.
pub struct InputController {
    switches: [Debouncer; 4],
    advance: ButtonId,
}

impl InputController {
    /// Build a controller advancing on `advance` with the given debounce
    /// dwell.
    #[must_use]
    pub const fn new(advance: ButtonId, dwell: Duration) -> Self {
        Self {
            switches: [Debouncer::new(dwell); 4],
            advance,
        }
    }

    /// The switch that drives gallery navigation.
    #[must_use]
    pub const fn advance_button(&self) -> ButtonId {
        self.advance
    }

    /// Sample every switch once; true exactly when the advance switch
    /// produced a down edge this poll.
    pub fn poll(&mut self, pad: &impl ButtonPad, now: Instant) -> bool {
        let mut advance = false;
        for button in ButtonId::ALL {
            let edge = self.switches[button.position()].update(pad.is_pressed(button), now);
            if button == self.advance && edge == Some(Edge::Down) {
                advance = true;
            }
        }
        advance
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(ButtonId::A, DEBOUNCE_DWELL)
    }
}
