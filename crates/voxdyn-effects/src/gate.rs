//! Noise gate for silencing quiet passages.
//!
//! The gate opens while the envelope is above the threshold and closes,
//! after a hold period, once it drops to or below it.

use voxdyn_core::{
    DynamicsProcessor, EnvelopeFollower, GainRamp, ParamDescriptor, ParameterInfo, Result,
    SampleCodec, ramp_fraction,
};

/// Noise gate with frame-counted attack, hold and release.
///
/// | Condition | Phase | Gain |
/// |-----------|-------|------|
/// | `envelope > threshold` | open (rising) | `floor + t / attack`, at most 1 |
/// | otherwise, `t < hold` | hold | unchanged |
/// | otherwise | closing (falling) | `1 - (t - hold) / release - ceiling`, at least 0 |
///
/// `t` counts frames since the phase was entered. The hold timer restarts
/// every time the envelope crosses back under the threshold.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Unit | Default |
/// |-------|------|------|---------|
/// | 0 | Attack | frames | 154 |
/// | 1 | Hold | frames | 441 |
/// | 2 | Release | frames | 441 |
/// | 3 | Threshold | level | 950 |
///
/// # Example
///
/// ```rust
/// use voxdyn_core::DynamicsProcessor;
/// use voxdyn_effects::Gate;
///
/// let mut gate = Gate::new(100, 50, 200, 1000);
/// for _ in 0..11 {
///     gate.process_frame(2000);
/// }
/// assert_eq!(gate.gain(), 10.0 / 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct Gate {
    envelope_follower: EnvelopeFollower,
    ramp: GainRamp,
    /// Frames processed so far; the first frame is frame 1.
    frame: u64,

    attack: u64,
    hold: u64,
    release: u64,
    threshold: u64,
}

impl Gate {
    /// Create a gate with the default smoothing coefficient (0.9).
    pub fn new(attack: u64, hold: u64, release: u64, threshold: u64) -> Self {
        Self::from_parts(EnvelopeFollower::new(), attack, hold, release, threshold)
    }

    /// Create a gate with a custom smoothing coefficient in (0, 1].
    pub fn with_smoothing(
        attack: u64,
        hold: u64,
        release: u64,
        threshold: u64,
        exp: f64,
    ) -> Result<Self> {
        let follower = EnvelopeFollower::with_smoothing(exp)?;
        Ok(Self::from_parts(follower, attack, hold, release, threshold))
    }

    fn from_parts(
        envelope_follower: EnvelopeFollower,
        attack: u64,
        hold: u64,
        release: u64,
        threshold: u64,
    ) -> Self {
        Self {
            envelope_follower,
            ramp: GainRamp::new(),
            frame: 0,
            attack,
            hold,
            release,
            threshold,
        }
    }

    /// Frames for the gate to open fully.
    pub fn attack(&self) -> u64 {
        self.attack
    }

    /// Set the attack length in frames. Zero opens instantly.
    pub fn set_attack(&mut self, attack: u64) {
        self.attack = attack;
    }

    /// Frames the gain stays frozen after the signal drops under the threshold.
    pub fn hold(&self) -> u64 {
        self.hold
    }

    /// Set the hold length in frames.
    pub fn set_hold(&mut self, hold: u64) {
        self.hold = hold;
    }

    /// Frames for the gate to close fully once the hold has elapsed.
    pub fn release(&self) -> u64 {
        self.release
    }

    /// Set the release length in frames. Zero closes instantly.
    pub fn set_release(&mut self, release: u64) {
        self.release = release;
    }

    /// Envelope level the signal must exceed to open the gate.
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

impl DynamicsProcessor for Gate {
    fn name(&self) -> &'static str {
        "gate"
    }

    #[inline]
    fn process_frame(&mut self, sample: i16) -> i16 {
        self.frame += 1;
        let envelope = self.envelope_follower.process(sample);

        if envelope > self.threshold as f64 {
            let elapsed = self.ramp.rising(self.frame);
            let gain = self.ramp.floor() + ramp_fraction(elapsed, self.attack);
            self.ramp.set_rising(gain);
        } else {
            let elapsed = self.ramp.falling(self.frame);
            if elapsed >= self.hold {
                let gain =
                    1.0 - ramp_fraction(elapsed - self.hold, self.release) - self.ramp.ceiling();
                self.ramp.set_falling(gain);
            } else {
                self.ramp.hold();
            }
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

impl ParameterInfo for Gate {
    fn param_count(&self) -> usize {
        4
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor::frames("Attack", "Atk", 154)),
            1 => Some(ParamDescriptor::frames("Hold", "Hold", 441)),
            2 => Some(ParamDescriptor::frames("Release", "Rel", 441)),
            3 => Some(ParamDescriptor::level("Threshold", "Thresh", 950)),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> u64 {
        match index {
            0 => self.attack,
            1 => self.hold,
            2 => self.release,
            3 => self.threshold,
            _ => 0,
        }
    }

    fn set_param(&mut self, index: usize, value: u64) {
        match index {
            0 => self.set_attack(value),
            1 => self.set_hold(value),
            2 => self.set_release(value),
            3 => self.set_threshold(value),
            _ => {}
        }
    }
}
