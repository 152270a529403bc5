//! Preset listing command.

use super::common::load_preset;
use clap::Args;
use voxdyn_config::factory_presets;

#[derive(Args)]
pub struct PresetsArgs {
    /// Print one preset (factory name or file) as TOML
    #[arg(long, value_name = "NAME")]
    show: Option<String>,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.show {
        Some(name) => {
            let preset = load_preset(&name)?;
            print!("{}", preset.to_toml()?);
        }
        None => {
            println!("Factory Presets:");
            println!("================");
            for preset in factory_presets() {
                let desc = preset.description.as_deref().unwrap_or("");
                println!("  {:16} - {desc}", preset.name);
                let chain = preset.processor_types().join(" -> ");
                println!("                     chain: {chain}");
            }
            println!();
            println!("Show one with: voxdyn presets --show <name>");
        }
    }
    Ok(())
}
