//! Parameter introspection for discoverable processor parameters.
//!
//! Processors expose their integer parameters by zero-based index, each
//! described by a [`ParamDescriptor`]. Name based access is layered on top
//! so configuration files and command lines can address parameters as
//! `attack`, `hold`, `release`, `threshold`.
//!
//! All parameter values are non-negative integers (`u64`). Rejecting anything
//! else (floats, negative numbers, strings) is the job of whatever boundary
//! parses the value; once a `u64` exists, every setter accepts it.
//!
//! # Example
//!
//! ```rust
//! use voxdyn_core::{ParamDescriptor, ParameterInfo};
//!
//! struct Threshold(u64);
//!
//! impl ParameterInfo for Threshold {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::level("Threshold", "Thresh", 1000)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> u64 {
//!         match index {
//!             0 => self.0,
//!             _ => 0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: u64) {
//!         if index == 0 {
//!             self.0 = value;
//!         }
//!     }
//! }
//!
//! let mut t = Threshold(0);
//! t.set_param_by_name("threshold", 950).unwrap();
//! assert_eq!(t.get_param_by_name("THRESH"), Some(950));
//! ```

use crate::{Error, Result};

/// Unit of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamUnit {
    /// Duration counted in frames.
    Frames,
    /// Absolute sample magnitude (0..=32768 is meaningful).
    Level,
}

impl ParamUnit {
    /// Short suffix for display.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Frames => "frames",
            Self::Level => "",
        }
    }
}

/// Metadata for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// Full name, e.g. "Attack".
    pub name: &'static str,
    /// Abbreviated name, e.g. "Atk".
    pub short_name: &'static str,
    /// Value unit.
    pub unit: ParamUnit,
    /// Value used by factory defaults and `params` listings.
    pub default: u64,
}

impl ParamDescriptor {
    /// Descriptor for a frame-count duration.
    pub const fn frames(name: &'static str, short_name: &'static str, default: u64) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Frames,
            default,
        }
    }

    /// Descriptor for a sample-magnitude level.
    pub const fn level(name: &'static str, short_name: &'static str, default: u64) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Level,
            default,
        }
    }

    /// Whether `key` names this parameter (case-insensitive, full or short).
    pub fn matches(&self, key: &str) -> bool {
        self.name.eq_ignore_ascii_case(key) || self.short_name.eq_ignore_ascii_case(key)
    }
}

/// Processors that expose introspectable integer parameters.
///
/// Indices must be stable for the lifetime of the processor. Setters take
/// effect on the next processed frame; there is nothing to recompute.
pub trait ParameterInfo {
    /// Number of parameters.
    fn param_count(&self) -> usize;

    /// Descriptor for the parameter at `index`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Value of the parameter at `index` (0 for unknown indices).
    fn get_param(&self, index: usize) -> u64;

    /// Set the parameter at `index`; unknown indices are ignored.
    fn set_param(&mut self, index: usize, value: u64);

    /// Index of the parameter named `key`.
    fn param_index(&self, key: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.matches(key)))
    }

    /// Value of the parameter named `key`.
    fn get_param_by_name(&self, key: &str) -> Option<u64> {
        self.param_index(key).map(|i| self.get_param(i))
    }

    /// Set the parameter named `key`.
    fn set_param_by_name(&mut self, key: &str, value: u64) -> Result<()> {
        let index = self
            .param_index(key)
            .ok_or_else(|| Error::UnknownParameter(key.into()))?;
        self.set_param(index, value);
        Ok(())
    }
}
