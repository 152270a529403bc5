//! Bit-exact comparison against a sentinel-indexed model of the dynamics loop.
//!
//! The model below keeps the phase timers as raw frame indices where `0`
//! means "phase not entered", exactly as the data model describes it. The
//! processors use an explicit phase enum instead; both representations must
//! produce identical bytes and identical gain trajectories.

use proptest::prelude::*;
use voxdyn_core::{DynamicsProcessor, SampleCodec};
use voxdyn_effects::{Compressor, Gate};

/// Which processor the model emulates.
#[derive(Clone, Copy)]
enum Kind {
    Compressor,
    Gate { hold: u64 },
}

struct Model {
    kind: Kind,
    attack: u64,
    release: u64,
    threshold: u64,
    exp: f64,

    gain: f64,
    envelope: f64,
    floor_gain: f64,
    ceil_gain: f64,
    frame_index: u64,
    phase_start: u64,
    phase_end: u64,
}

impl Model {
    fn new(kind: Kind, attack: u64, release: u64, threshold: u64, exp: f64) -> Self {
        Self {
            kind,
            attack,
            release,
            threshold,
            exp,
            gain: 1.0,
            envelope: 0.0,
            floor_gain: 0.0,
            ceil_gain: 0.0,
            frame_index: 0,
            phase_start: 0,
            phase_end: 0,
        }
    }

    fn enter_start(&mut self) {
        if self.phase_start == 0 {
            self.ceil_gain = self.gain;
            self.phase_start = self.frame_index;
            self.phase_end = 0;
        }
    }

    fn enter_end(&mut self) {
        if self.phase_end == 0 {
            self.floor_gain = self.gain;
            self.ceil_gain = 1.0 - self.ceil_gain;
            self.phase_end = self.frame_index;
            self.phase_start = 0;
        }
    }

    fn step(&mut self, s: i16) -> i16 {
        self.frame_index += 1;
        let x = f64::from(s);
        let magnitude = if x < 0.0 { -x } else { x };
        self.envelope = magnitude * self.exp + (1.0 - self.exp) * self.envelope;

        match self.kind {
            Kind::Compressor => {
                if self.envelope * self.gain < self.threshold as f64 {
                    self.enter_start();
                    self.gain = self.floor_gain
                        + (self.frame_index - self.phase_start) as f64 / self.release as f64;
                    if self.gain > 1.0 {
                        self.gain = 1.0;
                    }
                    if self.gain > self.ceil_gain {
                        self.ceil_gain = self.gain;
                    }
                } else {
                    self.enter_end();
                    self.gain = 1.0
                        - (self.frame_index - self.phase_end) as f64 / self.attack as f64
                        - self.ceil_gain;
                    if self.gain < 0.0 {
                        self.gain = 0.0;
                    }
                    if self.floor_gain > self.gain {
                        self.floor_gain = self.gain;
                    }
                }
            }
            Kind::Gate { hold } => {
                if self.envelope > self.threshold as f64 {
                    self.enter_start();
                    self.gain = self.floor_gain
                        + (self.frame_index - self.phase_start) as f64 / self.attack as f64;
                    if self.gain > 1.0 {
                        self.gain = 1.0;
                    }
                    if self.gain > self.ceil_gain {
                        self.ceil_gain = self.gain;
                    }
                } else {
                    self.enter_end();
                    if self.frame_index - self.phase_end >= hold {
                        self.gain = 1.0
                            - (self.frame_index - self.phase_end - hold) as f64
                                / self.release as f64
                            - self.ceil_gain;
                        if self.gain < 0.0 {
                            self.gain = 0.0;
                        }
                    }
                    if self.floor_gain > self.gain {
                        self.floor_gain = self.gain;
                    }
                }
            }
        }

        (x * self.gain) as i16
    }

    fn feed(&mut self, bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(bytes.len());
        for pair in bytes.chunks_exact(2) {
            let y = self.step(i16::from_le_bytes([pair[0], pair[1]]));
            out.extend_from_slice(&y.to_le_bytes());
        }
        out
    }
}

/// Speech-like test signal: bursts of a loud tone separated by quiet gaps.
fn bursts(frames: usize, amplitude: f64) -> Vec<u8> {
    let samples: Vec<i16> = (0..frames)
        .map(|i| {
            let burst = (i / 300) % 2 == 0;
            let level = if burst { amplitude } else { amplitude * 0.02 };
            (level * (i as f64 * 0.07).sin()) as i16
        })
        .collect();
    SampleCodec::encode_buffer(&samples)
}

#[test]
fn compressor_matches_model_on_bursts() {
    let input = bursts(6000, 24_000.0);
    let mut comp = Compressor::new(44, 4410, 10_000);
    let mut model = Model::new(Kind::Compressor, 44, 4410, 10_000, 0.9);
    assert_eq!(comp.feed(&input).unwrap(), model.feed(&input));
    assert_eq!(comp.gain(), model.gain);
    assert_eq!(comp.envelope(), model.envelope);
}

#[test]
fn gate_matches_model_on_bursts() {
    let input = bursts(6000, 3000.0);
    let mut gate = Gate::new(154, 441, 441, 950);
    let mut model = Model::new(Kind::Gate { hold: 441 }, 154, 441, 950, 0.9);
    assert_eq!(gate.feed(&input).unwrap(), model.feed(&input));
    assert_eq!(gate.gain(), model.gain);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn compressor_is_bit_exact(
        attack in 1u64..200,
        release in 1u64..2000,
        threshold in 0u64..20_000,
        exp in 0.05f64..=1.0,
        samples in prop::collection::vec(any::<i16>(), 0..2048),
    ) {
        let input = SampleCodec::encode_buffer(&samples);
        let mut comp = Compressor::with_smoothing(attack, release, threshold, exp).unwrap();
        let mut model = Model::new(Kind::Compressor, attack, release, threshold, exp);
        prop_assert_eq!(comp.feed(&input).unwrap(), model.feed(&input));
        prop_assert_eq!(comp.gain(), model.gain);
        prop_assert_eq!(comp.ramp().floor(), model.floor_gain);
        prop_assert_eq!(comp.ramp().ceiling(), model.ceil_gain);
    }

    #[test]
    fn gate_is_bit_exact(
        attack in 1u64..200,
        hold in 0u64..300,
        release in 1u64..2000,
        threshold in 0u64..20_000,
        exp in 0.05f64..=1.0,
        samples in prop::collection::vec(any::<i16>(), 0..2048),
    ) {
        let input = SampleCodec::encode_buffer(&samples);
        let mut gate = Gate::with_smoothing(attack, hold, release, threshold, exp).unwrap();
        let mut model = Model::new(Kind::Gate { hold }, attack, release, threshold, exp);
        prop_assert_eq!(gate.feed(&input).unwrap(), model.feed(&input));
        prop_assert_eq!(gate.gain(), model.gain);
        prop_assert_eq!(gate.ramp().floor(), model.floor_gain);
        prop_assert_eq!(gate.ramp().ceiling(), model.ceil_gain);
    }
}
