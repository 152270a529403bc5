//! Partial parameter updates for running processors.
//!
//! Control messages may change only some parameters of a live processor.
//! Fields left as `None` keep their current value. On the wire an
//! unspecified value is sent as `-1`.
//!
//! ```rust
//! use voxdyn_config::GateUpdate;
//! use voxdyn_effects::Gate;
//!
//! let mut gate = Gate::new(154, 441, 441, 950);
//! GateUpdate::from_wire([-1, 882, -1, 1200]).unwrap().apply(&mut gate);
//! assert_eq!((gate.attack(), gate.hold(), gate.threshold()), (154, 882, 1200));
//! ```

use voxdyn_effects::{Compressor, Gate};

use crate::error::ConfigError;

/// Wire value meaning "leave this parameter unchanged".
pub const UNCHANGED: i64 = -1;

fn wire_value(processor: &str, param: &str, value: i64) -> Result<Option<u64>, ConfigError> {
    match value {
        UNCHANGED => Ok(None),
        v if v < 0 => Err(ConfigError::invalid_param(
            processor,
            param,
            format!("{v} is negative; use -1 to leave unchanged"),
        )),
        v => Ok(Some(v as u64)),
    }
}

/// Partial update for a [`Compressor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressorUpdate {
    /// New attack length in frames.
    pub attack: Option<u64>,
    /// New release length in frames.
    pub release: Option<u64>,
    /// New threshold.
    pub threshold: Option<u64>,
}

impl CompressorUpdate {
    /// Decode `[attack, release, threshold]` wire values.
    pub fn from_wire(values: [i64; 3]) -> Result<Self, ConfigError> {
        let [attack, release, threshold] = values;
        Ok(Self {
            attack: wire_value("compressor", "attack", attack)?,
            release: wire_value("compressor", "release", release)?,
            threshold: wire_value("compressor", "threshold", threshold)?,
        })
    }

    /// True when the update changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the specified fields; takes effect from the next frame.
    pub fn apply(&self, compressor: &mut Compressor) {
        if let Some(attack) = self.attack {
            compressor.set_attack(attack);
        }
        if let Some(release) = self.release {
            compressor.set_release(release);
        }
        if let Some(threshold) = self.threshold {
            compressor.set_threshold(threshold);
        }
    }
}

/// Partial update for a [`Gate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateUpdate {
    /// New attack length in frames.
    pub attack: Option<u64>,
    /// New hold length in frames.
    pub hold: Option<u64>,
    /// New release length in frames.
    pub release: Option<u64>,
    /// New threshold.
    pub threshold: Option<u64>,
}

impl GateUpdate {
    /// Decode `[attack, hold, release, threshold]` wire values.
    pub fn from_wire(values: [i64; 4]) -> Result<Self, ConfigError> {
        let [attack, hold, release, threshold] = values;
        Ok(Self {
            attack: wire_value("gate", "attack", attack)?,
            hold: wire_value("gate", "hold", hold)?,
            release: wire_value("gate", "release", release)?,
            threshold: wire_value("gate", "threshold", threshold)?,
        })
    }

    /// True when the update changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the specified fields; takes effect from the next frame.
    pub fn apply(&self, gate: &mut Gate) {
        if let Some(attack) = self.attack {
            gate.set_attack(attack);
        }
        if let Some(hold) = self.hold {
            gate.set_hold(hold);
        }
        if let Some(release) = self.release {
            gate.set_release(release);
        }
        if let Some(threshold) = self.threshold {
            gate.set_threshold(threshold);
        }
    }
}
