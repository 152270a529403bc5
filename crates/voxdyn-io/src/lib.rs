//! File I/O and block processing for voxdyn.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_pcm16_wav`] and [`write_pcm16_wav`] for 16-bit mono files
//! - **Raw PCM I/O**: [`read_raw_pcm`] and [`write_raw_pcm`] for headerless LE buffers
//! - **Chain processing**: [`ProcessingEngine`] for running processors over byte buffers
//!
//! Audio stays in its wire form throughout: a `Vec<u8>` of little-endian
//! `i16` frames, the same buffers [`DynamicsProcessor::feed`] consumes.
//!
//! [`DynamicsProcessor::feed`]: voxdyn_core::DynamicsProcessor::feed
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use voxdyn_io::{read_pcm16_wav, write_pcm16_wav, ProcessingEngine};
//! use voxdyn_effects::{Compressor, Gate};
//!
//! let (pcm, spec) = read_pcm16_wav("input.wav")?;
//!
//! let mut engine = ProcessingEngine::new();
//! engine.add_processor(Box::new(Compressor::new(44, 4410, 10_000)));
//! engine.add_processor(Box::new(Gate::new(154, 441, 441, 950)));
//! let processed = engine.process_stream(&pcm, 1024)?;
//!
//! write_pcm16_wav("output.wav", &processed, spec)?;
//! ```

mod engine;
mod raw;
mod wav;

pub use engine::{ProcessingEngine, peak_level};
pub use raw::{read_raw_pcm, write_raw_pcm};
pub use wav::{WavSpec, read_pcm16_wav, write_pcm16_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file is not 16-bit integer mono PCM.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Buffer rejected by the processing core.
    #[error("Processing error: {0}")]
    Core(#[from] voxdyn_core::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
