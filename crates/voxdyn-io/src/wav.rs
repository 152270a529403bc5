//! WAV file reading and writing.
//!
//! Only 16-bit integer mono PCM is accepted, since that is the only format
//! the processors understand. Nothing is converted or mixed down.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;
use voxdyn_core::SampleCodec;

/// WAV file specification.
///
/// Channel count and bit depth are fixed at mono, 16-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self { sample_rate: 44100 }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: 1,
            sample_rate: spec.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }
}

/// Read a 16-bit mono WAV file as a little-endian PCM byte buffer.
///
/// Any other channel count, bit depth, or float data is rejected with
/// [`Error::UnsupportedFormat`].
///
/// # Example
/// ```ignore
/// let (pcm, spec) = read_pcm16_wav("input.wav")?;
/// println!("Loaded {} frames at {} Hz", pcm.len() / 2, spec.sample_rate);
/// ```
pub fn read_pcm16_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, WavSpec)> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let hound_spec = reader.spec();

    if hound_spec.sample_format != SampleFormat::Int || hound_spec.bits_per_sample != 16 {
        return Err(Error::UnsupportedFormat(format!(
            "{}-bit {:?} (expected 16-bit integer PCM)",
            hound_spec.bits_per_sample, hound_spec.sample_format
        )));
    }
    if hound_spec.channels != 1 {
        return Err(Error::UnsupportedFormat(format!(
            "{} channels (expected mono)",
            hound_spec.channels
        )));
    }

    let samples = reader
        .into_samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!(
        path = %path.display(),
        frames = samples.len(),
        sample_rate = hound_spec.sample_rate,
        "read wav"
    );

    Ok((
        SampleCodec::encode_buffer(&samples),
        WavSpec {
            sample_rate: hound_spec.sample_rate,
        },
    ))
}

/// Write a little-endian PCM byte buffer as a 16-bit mono WAV file.
///
/// An odd-length buffer is rejected before the file is created.
///
/// # Example
/// ```ignore
/// let silence = vec![0u8; 2 * 44100]; // 1 second
/// write_pcm16_wav("output.wav", &silence, WavSpec::default())?;
/// ```
pub fn write_pcm16_wav<P: AsRef<Path>>(path: P, pcm: &[u8], spec: WavSpec) -> Result<()> {
    let path = path.as_ref();
    let samples = SampleCodec::frames(pcm)?;
    let mut writer = WavWriter::create(path, hound::WavSpec::from(spec))?;

    let mut frames = 0usize;
    for sample in samples {
        writer.write_sample(sample)?;
        frames += 1;
    }

    writer.finalize()?;
    tracing::debug!(path = %path.display(), frames, "wrote wav");
    Ok(())
}
