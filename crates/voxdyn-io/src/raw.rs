//! Headerless little-endian 16-bit PCM files.

use crate::Result;
use std::path::Path;
use voxdyn_core::SampleCodec;

/// Read a raw PCM file. Odd-length files are rejected.
pub fn read_raw_pcm<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let frames = SampleCodec::frame_count(bytes.len())?;
    tracing::debug!(path = %path.display(), frames, "read raw pcm");
    Ok(bytes)
}

/// Write a raw PCM file. Odd-length buffers are rejected before writing.
pub fn write_raw_pcm<P: AsRef<Path>>(path: P, pcm: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let frames = SampleCodec::frame_count(pcm.len())?;
    std::fs::write(path, pcm)?;
    tracing::debug!(path = %path.display(), frames, "wrote raw pcm");
    Ok(())
}
