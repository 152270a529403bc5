//! Processor configuration types.

use serde::{Deserialize, Serialize};
use voxdyn_core::DynamicsProcessor;
use voxdyn_effects::{Compressor, Gate};

use crate::error::ConfigError;

/// Processor type names accepted in presets and on the command line.
pub const PROCESSOR_TYPES: &[&str] = &["compressor", "gate"];

/// Compressor settings. Timers are in frames, threshold in sample units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CompressorConfig {
    /// Frames for the gain to fall from 1 to 0.
    pub attack: u64,
    /// Frames for the gain to rise from 0 to 1.
    pub release: u64,
    /// Level the compressed output is held under.
    pub threshold: u64,
    /// Envelope smoothing coefficient in (0, 1]; 0.9 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<f64>,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            attack: 44,
            release: 4410,
            threshold: 10_000,
            exp: None,
        }
    }
}

impl CompressorConfig {
    /// Build the configured compressor.
    pub fn build(&self) -> Result<Compressor, ConfigError> {
        match self.exp {
            None => Ok(Compressor::new(self.attack, self.release, self.threshold)),
            Some(exp) => Compressor::with_smoothing(self.attack, self.release, self.threshold, exp)
                .map_err(|e| ConfigError::from_core("compressor", e)),
        }
    }
}

/// Gate settings. Timers are in frames, threshold in sample units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GateConfig {
    /// Frames for the gain to rise from 0 to 1 once the gate opens.
    pub attack: u64,
    /// Frames the gain is frozen after the signal drops.
    pub hold: u64,
    /// Frames for the gain to fall from 1 to 0 after the hold.
    pub release: u64,
    /// Envelope level the signal must exceed to open the gate.
    pub threshold: u64,
    /// Envelope smoothing coefficient in (0, 1]; 0.9 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<f64>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            attack: 154,
            hold: 441,
            release: 441,
            threshold: 950,
            exp: None,
        }
    }
}

impl GateConfig {
    /// Build the configured gate.
    pub fn build(&self) -> Result<Gate, ConfigError> {
        match self.exp {
            None => Ok(Gate::new(self.attack, self.hold, self.release, self.threshold)),
            Some(exp) => {
                Gate::with_smoothing(self.attack, self.hold, self.release, self.threshold, exp)
                    .map_err(|e| ConfigError::from_core("gate", e))
            }
        }
    }
}

/// One processor entry of a preset chain.
///
/// Serialized as a TOML table tagged with `type`:
///
/// ```rust
/// use voxdyn_config::ProcessorConfig;
///
/// let config: ProcessorConfig = toml::from_str(
///     "type = \"gate\"\nattack = 154\nhold = 441\nrelease = 441\nthreshold = 950\n",
/// )
/// .unwrap();
/// assert_eq!(config.processor_type(), "gate");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProcessorConfig {
    /// A [`Compressor`] stage.
    Compressor(CompressorConfig),
    /// A [`Gate`] stage.
    Gate(GateConfig),
}

impl ProcessorConfig {
    /// Default configuration for a processor type name (case-insensitive).
    pub fn from_type(processor_type: &str) -> Result<Self, ConfigError> {
        match processor_type.to_ascii_lowercase().as_str() {
            "compressor" | "comp" => Ok(Self::Compressor(CompressorConfig::default())),
            "gate" => Ok(Self::Gate(GateConfig::default())),
            _ => Err(ConfigError::UnknownProcessor(processor_type.to_string())),
        }
    }

    /// Type tag as written in presets.
    pub fn processor_type(&self) -> &'static str {
        match self {
            Self::Compressor(_) => "compressor",
            Self::Gate(_) => "gate",
        }
    }

    /// Smoothing coefficient override, if any.
    pub fn exp(&self) -> Option<f64> {
        match self {
            Self::Compressor(c) => c.exp,
            Self::Gate(g) => g.exp,
        }
    }

    /// Named timers of this processor, in declaration order.
    pub fn timers(&self) -> Vec<(&'static str, u64)> {
        match self {
            Self::Compressor(c) => vec![("attack", c.attack), ("release", c.release)],
            Self::Gate(g) => vec![
                ("attack", g.attack),
                ("hold", g.hold),
                ("release", g.release),
            ],
        }
    }

    /// Set a parameter from its textual form, e.g. `("attack", "44")`.
    ///
    /// Timers and threshold must be non-negative integers; `exp` is a float.
    /// Short names (`atk`, `rel`, `thresh`) are accepted.
    pub fn set_param(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let processor = self.processor_type();
        let key_lower = key.to_ascii_lowercase();

        if matches!(key_lower.as_str(), "exp" | "smoothing") {
            let exp: f64 = value.trim().parse().map_err(|_| {
                ConfigError::invalid_param(processor, key, format!("'{value}' is not a number"))
            })?;
            match self {
                Self::Compressor(c) => c.exp = Some(exp),
                Self::Gate(g) => g.exp = Some(exp),
            }
            return Ok(());
        }

        let parsed: u64 = value.trim().parse().map_err(|_| {
            ConfigError::invalid_param(
                processor,
                key,
                format!("'{value}' is not a non-negative integer"),
            )
        })?;

        let slot = match (self, key_lower.as_str()) {
            (Self::Compressor(c), "attack" | "atk") => &mut c.attack,
            (Self::Compressor(c), "release" | "rel") => &mut c.release,
            (Self::Compressor(c), "threshold" | "thresh") => &mut c.threshold,
            (Self::Gate(g), "attack" | "atk") => &mut g.attack,
            (Self::Gate(g), "hold") => &mut g.hold,
            (Self::Gate(g), "release" | "rel") => &mut g.release,
            (Self::Gate(g), "threshold" | "thresh") => &mut g.threshold,
            _ => return Err(ConfigError::invalid_param(processor, key, "no such parameter")),
        };
        *slot = parsed;
        Ok(())
    }

    /// Build a boxed processor for dynamic chains.
    pub fn build(&self) -> Result<Box<dyn DynamicsProcessor + Send>, ConfigError> {
        Ok(match self {
            Self::Compressor(c) => Box::new(c.build()?),
            Self::Gate(g) => Box::new(g.build()?),
        })
    }
}

impl From<CompressorConfig> for ProcessorConfig {
    fn from(config: CompressorConfig) -> Self {
        Self::Compressor(config)
    }
}

impl From<GateConfig> for ProcessorConfig {
    fn from(config: GateConfig) -> Self {
        Self::Gate(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_type_is_case_insensitive() {
        assert_eq!(
            ProcessorConfig::from_type("Gate").unwrap(),
            ProcessorConfig::Gate(GateConfig::default())
        );
        assert!(matches!(
            ProcessorConfig::from_type("expander"),
            Err(ConfigError::UnknownProcessor(ref name)) if name == "expander"
        ));
    }

    #[test]
    fn set_param_accepts_short_names() {
        let mut config = ProcessorConfig::from_type("compressor").unwrap();
        config.set_param("ATK", "10").unwrap();
        config.set_param("thresh", " 5000 ").unwrap();
        config.set_param("exp", "0.5").unwrap();
        assert_eq!(
            config,
            ProcessorConfig::Compressor(CompressorConfig {
                attack: 10,
                release: 4410,
                threshold: 5000,
                exp: Some(0.5),
            })
        );
    }

    #[test]
    fn set_param_rejects_non_integers() {
        let mut config = ProcessorConfig::from_type("gate").unwrap();
        assert!(config.set_param("hold", "1.5").is_err());
        assert!(config.set_param("hold", "-3").is_err());
        assert!(config.set_param("ratio", "4").is_err());
        assert!(config.set_param("exp", "lots").is_err());
        assert_eq!(config, ProcessorConfig::Gate(GateConfig::default()));
    }

    #[test]
    fn compressor_has_no_hold() {
        let mut config = ProcessorConfig::from_type("compressor").unwrap();
        assert!(matches!(
            config.set_param("hold", "10"),
            Err(ConfigError::InvalidParameter { ref param, .. }) if param == "hold"
        ));
    }

    #[test]
    fn build_uses_configured_values() {
        let gate = GateConfig {
            attack: 1,
            hold: 2,
            release: 3,
            threshold: 4,
            exp: Some(0.5),
        }
        .build()
        .unwrap();
        assert_eq!(
            (gate.attack(), gate.hold(), gate.release(), gate.threshold()),
            (1, 2, 3, 4)
        );
        assert_eq!(gate.smoothing(), 0.5);
    }

    #[test]
    fn build_rejects_bad_exp() {
        let config = ProcessorConfig::Compressor(CompressorConfig {
            exp: Some(1.5),
            ..CompressorConfig::default()
        });
        assert!(matches!(
            config.build(),
            Err(ConfigError::InvalidParameter { ref processor, .. }) if processor == "compressor"
        ));
    }

    #[test]
    fn boxed_processor_reports_name() {
        let boxed = ProcessorConfig::from_type("gate").unwrap().build().unwrap();
        assert_eq!(boxed.name(), "gate");
        assert_eq!(boxed.frame_index(), 0);
    }

    #[test]
    fn toml_tag_round_trip() {
        let config = ProcessorConfig::Compressor(CompressorConfig::default());
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("type = \"compressor\""), "got: {text}");
        assert!(!text.contains("exp"), "got: {text}");
        let back: ProcessorConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
