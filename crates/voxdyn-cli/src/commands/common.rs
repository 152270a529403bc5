//! Shared CLI helpers used across multiple commands.

use voxdyn_config::{Preset, ProcessorConfig};

/// Parse a `key=value` string for clap's `value_parser`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("Invalid parameter format: '{s}' (expected key=value)")),
    }
}

/// Load a preset by factory name or file path.
pub fn load_preset(name: &str) -> anyhow::Result<Preset> {
    Preset::resolve(name).map_err(|e| {
        anyhow::anyhow!("{e}. Use 'voxdyn presets' to see the factory presets.")
    })
}

/// Build one processor config from a type name and `key=value` overrides.
pub fn processor_from_args(
    processor_type: &str,
    params: &[(String, String)],
) -> anyhow::Result<ProcessorConfig> {
    let mut config = ProcessorConfig::from_type(processor_type)?;
    for (key, value) in params {
        config.set_param(key, value)?;
    }
    Ok(config)
}
