//! Envelope follower for tracking signal amplitude.
//!
//! Drives the threshold decisions of both the compressor and the gate.

use crate::{Error, Result};

/// Default weight given to the newest sample.
pub const DEFAULT_SMOOTHING: f64 = 0.9;

/// One-pole low-pass filter on the rectified signal.
///
/// `envelope = exp * |s| + (1 - exp) * envelope`
///
/// An `exp` close to 1 reacts quickly (and follows noise); close to 0 it
/// reacts slowly and smoothly.
///
/// # Example
///
/// ```rust
/// use voxdyn_core::EnvelopeFollower;
///
/// let mut env = EnvelopeFollower::new();
/// assert_eq!(env.process(-1000), 900.0);
/// ```
#[derive(Debug, Clone)]
pub struct EnvelopeFollower {
    /// Current envelope level in sample units
    envelope: f64,
    /// Weight of the newest sample, in (0, 1]
    exp: f64,
}

impl EnvelopeFollower {
    /// Create a follower with the default smoothing coefficient of 0.9.
    pub fn new() -> Self {
        Self {
            envelope: 0.0,
            exp: DEFAULT_SMOOTHING,
        }
    }

    /// Create a follower with a custom smoothing coefficient.
    ///
    /// `exp` must be finite and in (0, 1].
    pub fn with_smoothing(exp: f64) -> Result<Self> {
        if !(exp > 0.0 && exp <= 1.0) {
            return Err(Error::InvalidParameter {
                name: "exp",
                reason: "must be in (0, 1]",
            });
        }
        Ok(Self { envelope: 0.0, exp })
    }

    /// Smoothing coefficient.
    pub fn smoothing(&self) -> f64 {
        self.exp
    }

    /// Feed one sample and return the updated envelope.
    #[inline]
    pub fn process(&mut self, sample: i16) -> f64 {
        let rectified = libm::fabs(f64::from(sample));
        self.envelope = rectified * self.exp + (1.0 - self.exp) * self.envelope;
        self.envelope
    }

    /// Current envelope without processing new input.
    pub fn level(&self) -> f64 {
        self.envelope
    }
}

impl Default for EnvelopeFollower {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_weighted() {
        let mut env = EnvelopeFollower::new();
        assert_eq!(env.process(2000), 1800.0);
    }

    #[test]
    fn negative_input_is_rectified() {
        let mut pos = EnvelopeFollower::new();
        let mut neg = EnvelopeFollower::new();
        for _ in 0..10 {
            assert_eq!(pos.process(1234), neg.process(-1234));
        }

        // i16::MIN has no positive i16 counterpart
        let prev = neg.level();
        assert_eq!(neg.process(i16::MIN), 32768.0 * 0.9 + (1.0 - 0.9) * prev);
    }

    #[test]
    fn converges_to_constant_amplitude() {
        let mut env = EnvelopeFollower::new();
        for _ in 0..100 {
            env.process(-500);
        }
        assert!((env.level() - 500.0).abs() < 1e-9, "got {}", env.level());
    }

    #[test]
    fn unit_smoothing_tracks_input_exactly() {
        let mut env = EnvelopeFollower::with_smoothing(1.0).unwrap();
        env.process(700);
        assert_eq!(env.process(-300), 300.0);
    }

    #[test]
    fn decays_in_silence() {
        let mut env = EnvelopeFollower::with_smoothing(0.5).unwrap();
        env.process(1000);
        assert_eq!(env.process(0), 250.0);
        assert_eq!(env.process(0), 125.0);
    }

    #[test]
    fn rejects_out_of_range_smoothing() {
        for bad in [0.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                EnvelopeFollower::with_smoothing(bad).is_err(),
                "accepted exp = {bad}"
            );
        }
    }
}
