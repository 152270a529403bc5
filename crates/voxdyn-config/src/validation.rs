//! Preset validation.
//!
//! Hard problems (an empty chain, a smoothing coefficient outside (0, 1])
//! are returned as [`ValidationError`]s; every problem is collected before
//! returning. Settings that are legal but probably unintended, such as a
//! zero-length timer, come back as [`ValidationWarning`]s.
//!
//! # Example
//!
//! ```rust
//! use voxdyn_config::{get_factory_preset, validate_preset};
//!
//! let preset = get_factory_preset("voice").unwrap();
//! let warnings = validate_preset(&preset).unwrap();
//! assert!(warnings.is_empty());
//! ```

use thiserror::Error;

use crate::Preset;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The preset has no processors.
    #[error("preset '{0}' has no processors")]
    EmptyChain(String),

    /// Smoothing coefficient outside (0, 1].
    #[error("processor {index} ({processor}): exp {value} must be in (0, 1]")]
    InvalidSmoothing {
        /// Position of the processor in the chain.
        index: usize,
        /// Processor type.
        processor: String,
        /// The rejected coefficient.
        value: f64,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Legal but suspicious settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// A zero-length timer makes its ramp instantaneous.
    ZeroTimer {
        /// Position of the processor in the chain.
        index: usize,
        /// Processor type.
        processor: &'static str,
        /// Timer name.
        param: &'static str,
    },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self::ZeroTimer {
            index,
            processor,
            param,
        } = self;
        write!(
            f,
            "processor {index} ({processor}): {param} = 0 makes the ramp instantaneous"
        )
    }
}

/// Validate a preset, returning warnings on success.
pub fn validate_preset(preset: &Preset) -> ValidationResult<Vec<ValidationWarning>> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if preset.is_empty() {
        errors.push(ValidationError::EmptyChain(preset.name.clone()));
    }

    for (index, config) in preset.iter().enumerate() {
        let processor = config.processor_type();

        if let Some(exp) = config.exp()
            && !(exp > 0.0 && exp <= 1.0)
        {
            errors.push(ValidationError::InvalidSmoothing {
                index,
                processor: processor.to_string(),
                value: exp,
            });
        }

        // Gate hold of zero is the normal "no hold" setting.
        for (param, value) in config.timers() {
            if value == 0 && param != "hold" {
                warnings.push(ValidationWarning::ZeroTimer {
                    index,
                    processor,
                    param,
                });
            }
        }
    }

    match errors.len() {
        0 => Ok(warnings),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompressorConfig, GateConfig};

    #[test]
    fn empty_preset_is_rejected() {
        let preset = Preset::new("nothing");
        assert_eq!(
            validate_preset(&preset),
            Err(ValidationError::EmptyChain("nothing".to_string()))
        );
    }

    #[test]
    fn collects_every_error() {
        let preset = Preset::new("bad")
            .with_processor(CompressorConfig {
                exp: Some(0.0),
                ..CompressorConfig::default()
            })
            .with_processor(GateConfig {
                exp: Some(f64::NAN),
                ..GateConfig::default()
            });
        let Err(ValidationError::Multiple(errors)) = validate_preset(&preset) else {
            panic!("expected multiple errors");
        };
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[1], ValidationError::InvalidSmoothing { index: 1, .. }));
    }

    #[test]
    fn zero_timers_warn() {
        let preset = Preset::new("instant").with_processor(GateConfig {
            attack: 0,
            hold: 0,
            release: 10,
            threshold: 950,
            exp: None,
        });
        assert_eq!(
            validate_preset(&preset).unwrap(),
            vec![ValidationWarning::ZeroTimer {
                index: 0,
                processor: "gate",
                param: "attack",
            }]
        );
    }

    #[test]
    fn exp_of_one_is_valid() {
        let preset = Preset::new("raw").with_processor(CompressorConfig {
            exp: Some(1.0),
            ..CompressorConfig::default()
        });
        assert!(validate_preset(&preset).is_ok());
    }

    #[test]
    fn warning_display() {
        let w = ValidationWarning::ZeroTimer {
            index: 2,
            processor: "compressor",
            param: "release",
        };
        assert_eq!(
            w.to_string(),
            "processor 2 (compressor): release = 0 makes the ramp instantaneous"
        );
    }
}
