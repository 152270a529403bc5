//! Two-phase gain state shared by the compressor and the gate.
//!
//! Gain always follows one of two linear ramps: a *rising* ramp (gain moving
//! toward 1) or a *falling* ramp (gain moving toward 0). The ramp formula
//! changes at every phase switch, so [`GainRamp`] carries two extremum
//! snapshots, `floor` and `ceiling`, that let each new ramp start where the
//! previous one left off.
//!
//! # Bookkeeping
//!
//! ```text
//! enter rising:   ceiling = gain
//! while rising:   ceiling = max(ceiling, gain)
//! enter falling:  floor = gain, ceiling = 1 - ceiling
//! while falling:  floor = min(floor, gain)
//! ```
//!
//! The rising formula is `floor + t / duration` and the falling formula is
//! `1 - t / duration - ceiling`; which duration (attack or release) feeds
//! which ramp is up to the processor.

/// Which ramp the gain is following.
///
/// Both processors start in [`RampPhase::Idle`]; the first processed frame
/// always enters one of the two active phases, after which the processor is
/// in exactly one of them for the rest of its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampPhase {
    /// No frame processed yet.
    #[default]
    Idle,
    /// Gain ramps toward 1. `since` is the frame index the phase began on.
    Rising {
        /// Frame index of phase entry.
        since: u64,
    },
    /// Gain ramps toward 0. `since` is the frame index the phase began on.
    Falling {
        /// Frame index of phase entry.
        since: u64,
    },
}

impl RampPhase {
    /// Whether the gain is on the rising ramp.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Rising { .. })
    }

    /// Whether the gain is on the falling ramp.
    pub fn is_falling(self) -> bool {
        matches!(self, Self::Falling { .. })
    }

    /// Frame index the current phase began on, if any.
    pub fn since(self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Rising { since } | Self::Falling { since } => Some(since),
        }
    }
}

/// Portion of a ramp covered after `elapsed` frames of a `duration`-frame ramp.
///
/// A zero-length ramp completes instantly: the result is `+inf`, which the
/// gain clamps saturate to the ramp's end point.
#[inline]
pub fn ramp_fraction(elapsed: u64, duration: u64) -> f64 {
    if duration == 0 {
        return f64::INFINITY;
    }
    elapsed as f64 / duration as f64
}

/// Gain with continuity bookkeeping across phase switches.
#[derive(Debug, Clone)]
pub struct GainRamp {
    gain: f64,
    /// Running minimum of the falling ramp; origin of the next rising ramp.
    floor: f64,
    /// Running maximum of the rising ramp, turned into an offset on entry to
    /// the falling ramp.
    ceiling: f64,
    phase: RampPhase,
}

impl GainRamp {
    /// Unity gain, zero snapshots, idle.
    pub fn new() -> Self {
        Self {
            gain: 1.0,
            floor: 0.0,
            ceiling: 0.0,
            phase: RampPhase::Idle,
        }
    }

    /// Current gain, always in [0, 1].
    #[inline]
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Origin of the rising ramp.
    #[inline]
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Offset of the falling ramp (while falling) or running peak (while rising).
    #[inline]
    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> RampPhase {
        self.phase
    }

    /// Enter the rising phase at `frame` unless already in it.
    ///
    /// Returns the number of frames elapsed since the phase began.
    #[inline]
    pub fn rising(&mut self, frame: u64) -> u64 {
        let since = match self.phase {
            RampPhase::Rising { since } => since,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(frame, gain = self.gain, "gain ramp rising");
                self.ceiling = self.gain;
                self.phase = RampPhase::Rising { since: frame };
                frame
            }
        };
        frame - since
    }

    /// Enter the falling phase at `frame` unless already in it.
    ///
    /// Returns the number of frames elapsed since the phase began.
    #[inline]
    pub fn falling(&mut self, frame: u64) -> u64 {
        let since = match self.phase {
            RampPhase::Falling { since } => since,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(frame, gain = self.gain, "gain ramp falling");
                self.floor = self.gain;
                self.ceiling = 1.0 - self.ceiling;
                self.phase = RampPhase::Falling { since: frame };
                frame
            }
        };
        frame - since
    }

    /// Set the gain from the rising formula, clamped to at most 1.
    #[inline]
    pub fn set_rising(&mut self, gain: f64) {
        self.gain = gain.min(1.0);
        self.ceiling = self.ceiling.max(self.gain);
    }

    /// Set the gain from the falling formula, clamped to at least 0.
    #[inline]
    pub fn set_falling(&mut self, gain: f64) {
        self.gain = gain.max(0.0);
        self.floor = self.floor.min(self.gain);
    }

    /// Leave the gain where it is for this frame of the falling phase.
    #[inline]
    pub fn hold(&mut self) {
        self.floor = self.floor.min(self.gain);
    }
}

impl Default for GainRamp {
    fn default() -> Self {
        Self::new()
    }
}
