//! Frame-accurate compressor for 16-bit PCM.
//!
//! Pulls the gain down while the *compressed* output (`envelope * gain`) is
//! at or above the threshold, and lets it recover while the output is quiet.
//!
//! # Signal Flow
//!
//! ```text
//! Input → Envelope Follower → (envelope · gain) vs threshold → Gain Ramp → Output
//!                                        ↑                          │
//!                                        └──────── gain ────────────┘
//! ```
//!
//! # Ramps
//!
//! | Condition | Phase | Gain |
//! |-----------|-------|------|
//! | `envelope · gain < threshold` | release (rising) | `floor + t / release`, at most 1 |
//! | otherwise | attack (falling) | `1 - t / attack - ceiling`, at least 0 |
//!
//! `t` counts frames since the phase was entered; the entry frame has `t = 0`.

use voxdyn_core::{
    DynamicsProcessor, EnvelopeFollower, GainRamp, ParamDescriptor, ParameterInfo, Result,
    SampleCodec, ramp_fraction,
};

/// Compressor with frame-counted attack and release ramps.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Unit | Default |
/// |-------|------|------|---------|
/// | 0 | Attack | frames | 44 |
/// | 1 | Release | frames | 4410 |
/// | 2 | Threshold | level | 10000 |
///
/// # Example
///
/// ```rust
/// use voxdyn_core::DynamicsProcessor;
/// use voxdyn_effects::Compressor;
///
/// let mut comp = Compressor::new(44, 4410, 10_000);
/// let output = comp.feed(&[0x10, 0x27, 0xf0, 0xd8]).unwrap();
/// assert_eq!(output.len(), 4);
/// assert_eq!(comp.frame_index(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Compressor {
    envelope_follower: EnvelopeFollower,
    ramp: GainRamp,
    /// Frames processed so far; the first frame is frame 1.
    frame: u64,

    attack: u64,
    release: u64,
    threshold: u64,
}

impl Compressor {
    /// Create a compressor with the default smoothing coefficient (0.9).
    pub fn new(attack: u64, release: u64, threshold: u64) -> Self {
        Self::from_parts(EnvelopeFollower::new(), attack, release, threshold)
    }

    /// Create a compressor with a custom smoothing coefficient in (0, 1].
    pub fn with_smoothing(attack: u64, release: u64, threshold: u64, exp: f64) -> Result<Self> {
        let follower = EnvelopeFollower::with_smoothing(exp)?;
        Ok(Self::from_parts(follower, attack, release, threshold))
    }

    fn from_parts(
        envelope_follower: EnvelopeFollower,
        attack: u64,
        release: u64,
        threshold: u64,
    ) -> Self {
        Self {
            envelope_follower,
            ramp: GainRamp::new(),
            frame: 0,
            attack,
            release,
            threshold,
        }
    }

    /// Frames for the gain to fall from 1 to 0.
    pub fn attack(&self) -> u64 {
        self.attack
    }

    /// Set the attack length in frames. Zero makes the fall instantaneous.
    pub fn set_attack(&mut self, attack: u64) {
        self.attack = attack;
    }

    /// Frames for the gain to rise from 0 to 1.
    pub fn release(&self) -> u64 {
        self.release
    }

    /// Set the release length in frames. Zero makes the rise instantaneous.
    pub fn set_release(&mut self, release: u64) {
        self.release = release;
    }

    /// Output level at which gain reduction kicks in.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Set the threshold in sample-magnitude units.
    pub fn set_threshold(&mut self, threshold: u64) {
        self.threshold = threshold;
    }

    /// Envelope smoothing coefficient.
    pub fn smoothing(&self) -> f64 {
        self.envelope_follower.smoothing()
    }

    /// Gain state, including the continuity snapshots.
    pub fn ramp(&self) -> &GainRamp {
        &self.ramp
    }
}

impl DynamicsProcessor for Compressor {
    fn name(&self) -> &'static str {
        "compressor"
    }

    #[inline]
    fn process_frame(&mut self, sample: i16) -> i16 {
        self.frame += 1;
        let envelope = self.envelope_follower.process(sample);

        if envelope * self.ramp.gain() < self.threshold as f64 {
            let elapsed = self.ramp.rising(self.frame);
            let gain = self.ramp.floor() + ramp_fraction(elapsed, self.release);
            self.ramp.set_rising(gain);
        } else {
            let elapsed = self.ramp.falling(self.frame);
            let gain = 1.0 - ramp_fraction(elapsed, self.attack) - self.ramp.ceiling();
            self.ramp.set_falling(gain);
        }

        SampleCodec::scale(sample, self.ramp.gain())
    }

    fn gain(&self) -> f64 {
        self.ramp.gain()
    }

    fn envelope(&self) -> f64 {
        self.envelope_follower.level()
    }

    fn frame_index(&self) -> u64 {
        self.frame
    }
}

impl ParameterInfo for Compressor {
    fn param_count(&self) -> usize {
        3
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor::frames("Attack", "Atk", 44)),
            1 => Some(ParamDescriptor::frames("Release", "Rel", 4410)),
            2 => Some(ParamDescriptor::level("Threshold", "Thresh", 10_000)),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> u64 {
        match index {
            0 => self.attack,
            1 => self.release,
            2 => self.threshold,
            _ => 0,
        }
    }

    fn set_param(&mut self, index: usize, value: u64) {
        match index {
            0 => self.set_attack(value),
            1 => self.set_release(value),
            2 => self.set_threshold(value),
            _ => {}
        }
    }
}
