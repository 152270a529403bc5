//! Configuration and preset management for voxdyn processor chains.
//!
//! # Features
//!
//! - **Presets**: load and save compressor/gate chains as TOML
//! - **Partial updates**: change some parameters of a running processor
//! - **Validation**: collect every problem in a preset before building it
//! - **Factory presets**: the voice chain and its single-stage variants
//!
//! # Example
//!
//! ```rust,no_run
//! use voxdyn_config::{CompressorConfig, GateConfig, Preset};
//!
//! let preset = Preset::new("my voice")
//!     .with_description("Slower compressor")
//!     .with_processor(CompressorConfig {
//!         attack: 441,
//!         ..CompressorConfig::default()
//!     })
//!     .with_processor(GateConfig::default());
//! preset.save("my_voice.toml").unwrap();
//!
//! let chain = Preset::load("my_voice.toml").unwrap().build().unwrap();
//! assert_eq!(chain.len(), 2);
//! ```

mod error;
mod preset;
mod processor_config;

/// Partial parameter updates.
pub mod update;

/// Preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset, ms_to_frames,
};
pub use preset::Preset;
pub use processor_config::{CompressorConfig, GateConfig, PROCESSOR_TYPES, ProcessorConfig};
pub use update::{CompressorUpdate, GateUpdate, UNCHANGED};
pub use validation::{ValidationError, ValidationResult, ValidationWarning, validate_preset};
