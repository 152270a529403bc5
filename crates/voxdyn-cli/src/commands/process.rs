//! File-based compressor/gate processing command.

use super::common::{load_preset, parse_key_val, processor_from_args};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use voxdyn_config::{Preset, validate_preset};
use voxdyn_io::{
    ProcessingEngine, peak_level, read_pcm16_wav, read_raw_pcm, write_pcm16_wav, write_raw_pcm,
};

#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (16-bit mono WAV, or raw LE PCM with --raw)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Factory preset name or preset file (TOML); defaults to "voice"
    #[arg(short, long)]
    preset: Option<String>,

    /// Processor to append after the preset (compressor or gate)
    #[arg(long)]
    processor: Option<String>,

    /// Parameter for --processor (e.g., "attack=44")
    #[arg(long, value_parser = parse_key_val, number_of_values = 1)]
    param: Vec<(String, String)>,

    /// Frames per processing block
    #[arg(long, default_value = "1024")]
    block_frames: usize,

    /// Treat input and output as headerless 16-bit little-endian PCM
    #[arg(long)]
    raw: bool,
}

/// Resolve the processor chain described by the arguments.
fn build_preset(args: &ProcessArgs) -> anyhow::Result<Preset> {
    if !args.param.is_empty() && args.processor.is_none() {
        anyhow::bail!("--param requires --processor");
    }

    let mut preset = match (&args.preset, &args.processor) {
        (Some(name), _) => load_preset(name)?,
        (None, Some(_)) => Preset::new("command line"),
        (None, None) => load_preset("voice")?,
    };

    if let Some(processor_type) = &args.processor {
        let config = processor_from_args(processor_type, &args.param)?;
        preset = preset.with_processor(config);
    }

    for warning in validate_preset(&preset)? {
        tracing::warn!("{warning}");
    }
    Ok(preset)
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let preset = build_preset(&args)?;

    println!("Reading {}...", args.input.display());
    let (pcm, spec) = if args.raw {
        (read_raw_pcm(&args.input)?, None)
    } else {
        let (pcm, spec) = read_pcm16_wav(&args.input)?;
        (pcm, Some(spec))
    };
    let frames = pcm.len() / 2;
    match spec {
        Some(spec) => println!(
            "  {frames} frames, {} Hz, {:.2}s",
            spec.sample_rate,
            frames as f64 / f64::from(spec.sample_rate)
        ),
        None => println!("  {frames} frames (raw)"),
    }

    let mut engine = ProcessingEngine::from_processors(preset.build()?);
    println!(
        "Processing with '{}': {}",
        preset.name,
        preset.processor_types().join(" -> ")
    );
    tracing::info!(
        preset = %preset.name,
        processors = engine.len(),
        block_frames = args.block_frames,
        "processing"
    );

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );
    let output = engine.process_stream_with(&pcm, args.block_frames, |n| pb.inc(n as u64))?;
    pb.finish_and_clear();

    let input_peak = peak_level(&pcm)?;
    let output_peak = peak_level(&output)?;
    println!("\nStats:");
    let (input_db, output_db) = (peak_to_dbfs(input_peak), peak_to_dbfs(output_peak));
    println!("  Input:  Peak {input_peak:>5} ({input_db:.1} dBFS)");
    println!("  Output: Peak {output_peak:>5} ({output_db:.1} dBFS)");

    println!("\nWriting {}...", args.output.display());
    match spec {
        Some(spec) => write_pcm16_wav(&args.output, &output, spec)?,
        None => write_raw_pcm(&args.output, &output)?,
    }
    println!("Done!");

    Ok(())
}

/// Peak sample magnitude relative to full scale (32768).
fn peak_to_dbfs(peak: u16) -> f64 {
    if peak == 0 {
        -120.0
    } else {
        20.0 * (f64::from(peak) / 32768.0).log10()
    }
}
