//! Factory presets bundled with the voxdyn library.
//!
//! The voice settings come from a 44.1 kHz voice chat pipeline: a fast
//! compressor (1 ms attack, 100 ms release) feeding a noise gate (3.5 ms
//! attack, 10 ms hold, 10 ms release). [`ms_to_frames`] gives the frame
//! counts for other rates.

use crate::Preset;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &["voice", "gate-only", "compressor-only"];

/// TOML content for factory presets.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("voice", VOICE_PRESET),
    ("gate-only", GATE_ONLY_PRESET),
    ("compressor-only", COMPRESSOR_ONLY_PRESET),
];

/// Compressor into gate, in the order a voice chat client runs them.
const VOICE_PRESET: &str = r#"
name = "voice"
description = "Voice chat chain: compressor into noise gate"
sample_rate = 44100

[[processors]]
type = "compressor"
attack = 44
release = 4410
threshold = 10000

[[processors]]
type = "gate"
attack = 154
hold = 441
release = 441
threshold = 950
"#;

const GATE_ONLY_PRESET: &str = r#"
name = "gate-only"
description = "Noise gate with voice timings"
sample_rate = 44100

[[processors]]
type = "gate"
attack = 154
hold = 441
release = 441
threshold = 950
"#;

const COMPRESSOR_ONLY_PRESET: &str = r#"
name = "compressor-only"
description = "Fast voice compressor"
sample_rate = 44100

[[processors]]
type = "compressor"
attack = 44
release = 4410
threshold = 10000
"#;

/// Convert milliseconds to a whole number of frames at `sample_rate`.
///
/// Rounds to the nearest frame; negative or non-finite input gives 0.
///
/// ```rust
/// use voxdyn_config::ms_to_frames;
///
/// assert_eq!(ms_to_frames(3.5, 44100), 154);
/// assert_eq!(ms_to_frames(100.0, 44100), 4410);
/// ```
pub fn ms_to_frames(ms: f64, sample_rate: u32) -> u64 {
    let frames = (ms * f64::from(sample_rate) / 1000.0).round();
    if frames.is_finite() && frames > 0.0 {
        frames as u64
    } else {
        0
    }
}

/// Get all factory presets.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by name (case-insensitive).
///
/// # Example
///
/// ```rust
/// use voxdyn_config::get_factory_preset;
///
/// let voice = get_factory_preset("Voice").unwrap();
/// assert_eq!(voice.processor_types(), ["compressor", "gate"]);
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .find(|(preset_name, _)| preset_name.eq_ignore_ascii_case(name))
        .and_then(|(_, toml)| Preset::from_toml(toml).ok())
}

/// Get the names of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a preset name is a factory preset (case-insensitive).
pub fn is_factory_preset(name: &str) -> bool {
    FACTORY_PRESET_NAMES
        .iter()
        .any(|preset_name| preset_name.eq_ignore_ascii_case(name))
}
