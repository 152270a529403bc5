//! Processor parameter listing command.

use clap::Args;
use voxdyn_config::PROCESSOR_TYPES;
use voxdyn_core::ParameterInfo;
use voxdyn_effects::{Compressor, Gate};

#[derive(Args)]
pub struct ParamsArgs {
    /// Processor to describe (compressor or gate); all when omitted
    #[arg(value_name = "PROCESSOR")]
    processor: Option<String>,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    match args.processor.as_deref() {
        Some(name) => print_processor(name),
        None => {
            for (i, name) in PROCESSOR_TYPES.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_processor(name)?;
            }
            Ok(())
        }
    }
}

fn print_processor(name: &str) -> anyhow::Result<()> {
    match name.to_ascii_lowercase().as_str() {
        "compressor" | "comp" => {
            print_table("compressor", &Compressor::new(44, 4410, 10_000));
            Ok(())
        }
        "gate" => {
            print_table("gate", &Gate::new(154, 441, 441, 950));
            Ok(())
        }
        _ => anyhow::bail!(
            "Unknown processor '{name}'. Available: {}",
            PROCESSOR_TYPES.join(", ")
        ),
    }
}

fn print_table(name: &str, processor: &dyn ParameterInfo) {
    println!("{name}");
    println!("Parameters:");
    println!("  name       short    default  unit");
    for index in 0..processor.param_count() {
        if let Some(desc) = processor.param_info(index) {
            println!(
                "  {:<10} {:<7} {:>8}  {}",
                desc.name.to_ascii_lowercase(),
                desc.short_name.to_ascii_lowercase(),
                desc.default,
                desc.unit.suffix()
            );
        }
    }
    println!("  exp                     0.9  smoothing, (0, 1]");
}
