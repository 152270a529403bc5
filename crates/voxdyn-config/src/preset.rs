//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;
use voxdyn_core::DynamicsProcessor;

use crate::error::ConfigError;
use crate::factory_presets::get_factory_preset;
use crate::processor_config::ProcessorConfig;

/// Preset file format for processor chains.
///
/// Processors run in list order; each one's output feeds the next.
///
/// # TOML Format
///
/// ```toml
/// name = "voice"
/// description = "Compressor into gate"
/// sample_rate = 44100
///
/// [[processors]]
/// type = "compressor"
/// attack = 44
/// release = 4410
/// threshold = 10000
///
/// [[processors]]
/// type = "gate"
/// attack = 154
/// hold = 441
/// release = 441
/// threshold = 950
/// exp = 0.9
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate the frame counts were chosen for (defaults to 44100).
    /// Informational only; processors count frames, not seconds.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Processors in chain order.
    #[serde(default)]
    pub processors: Vec<ProcessorConfig>,
}

fn default_sample_rate() -> u32 {
    44100
}

impl Preset {
    /// Create a new empty preset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            processors: Vec::new(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate hint.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Append a processor to the chain.
    pub fn with_processor(mut self, processor: impl Into<ProcessorConfig>) -> Self {
        self.processors.push(processor.into());
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: Preset = toml::from_str(&content)?;
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Resolve a factory preset name or a path to a preset file.
    ///
    /// Factory names win over relative paths of the same spelling.
    pub fn resolve(name_or_path: &str) -> Result<Self, ConfigError> {
        if let Some(preset) = get_factory_preset(name_or_path) {
            return Ok(preset);
        }
        let path = Path::new(name_or_path);
        if path.is_file() {
            return Self::load(path);
        }
        Err(ConfigError::PresetNotFound(name_or_path.to_string()))
    }

    /// Save the preset to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the number of processors in the preset.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Check if the preset is empty.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Get a processor config by index.
    pub fn get(&self, index: usize) -> Option<&ProcessorConfig> {
        self.processors.get(index)
    }

    /// Get a mutable processor config by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut ProcessorConfig> {
        self.processors.get_mut(index)
    }

    /// Iterate over processor configs.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessorConfig> {
        self.processors.iter()
    }

    /// Processor type names in chain order.
    pub fn processor_types(&self) -> Vec<&'static str> {
        self.processors
            .iter()
            .map(ProcessorConfig::processor_type)
            .collect()
    }

    /// Instantiate every processor, in chain order.
    pub fn build(&self) -> Result<Vec<Box<dyn DynamicsProcessor + Send>>, ConfigError> {
        self.processors.iter().map(ProcessorConfig::build).collect()
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
