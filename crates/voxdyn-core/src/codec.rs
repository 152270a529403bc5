//! Signed 16-bit little-endian frame codec.
//!
//! Buffers are always walked in consecutive 2-byte pairs. Length is checked
//! once per buffer; after that the pairs are taken with `chunks_exact`, so no
//! per-byte bounds logic is needed in the processing loops.

use crate::{Error, Result};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Number of bytes in one encoded frame.
pub const BYTES_PER_FRAME: usize = 2;

/// Codec for single-channel signed 16-bit little-endian PCM.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCodec;

impl SampleCodec {
    /// Decode one frame from its two bytes.
    #[inline]
    pub fn decode(pair: [u8; BYTES_PER_FRAME]) -> i16 {
        i16::from_le_bytes(pair)
    }

    /// Encode one frame into two bytes.
    #[inline]
    pub fn encode(sample: i16) -> [u8; BYTES_PER_FRAME] {
        sample.to_le_bytes()
    }

    /// Scale a frame by `gain` and truncate toward zero back to 16 bits.
    ///
    /// With `gain` in [0, 1] the product always fits in `i16`.
    #[inline]
    pub fn scale(sample: i16, gain: f64) -> i16 {
        (f64::from(sample) * gain) as i16
    }

    /// Number of frames in a buffer of `len` bytes.
    ///
    /// Fails with [`Error::InvalidBufferLength`] for odd lengths.
    #[inline]
    pub fn frame_count(len: usize) -> Result<usize> {
        if !len.is_multiple_of(BYTES_PER_FRAME) {
            return Err(Error::InvalidBufferLength { len });
        }
        Ok(len / BYTES_PER_FRAME)
    }

    /// Iterate over the decoded frames of a validated buffer.
    pub fn frames(bytes: &[u8]) -> Result<impl Iterator<Item = i16> + '_> {
        Self::frame_count(bytes.len())?;
        Ok(bytes
            .chunks_exact(BYTES_PER_FRAME)
            .map(|pair| Self::decode([pair[0], pair[1]])))
    }

    /// Decode a whole buffer into samples.
    pub fn decode_buffer(bytes: &[u8]) -> Result<Vec<i16>> {
        Ok(Self::frames(bytes)?.collect())
    }

    /// Encode samples into a byte buffer.
    pub fn encode_buffer(samples: &[i16]) -> Vec<u8> {
        samples.iter().flat_map(|&s| Self::encode(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_is_little_endian() {
        assert_eq!(SampleCodec::decode([0x34, 0x12]), 0x1234);
        assert_eq!(SampleCodec::decode([0xff, 0xff]), -1);
        assert_eq!(SampleCodec::decode([0x00, 0x80]), i16::MIN);
    }

    #[test]
    fn encode_is_little_endian() {
        assert_eq!(SampleCodec::encode(0x1234), [0x34, 0x12]);
        assert_eq!(SampleCodec::encode(-2), [0xfe, 0xff]);
    }

    #[test]
    fn scale_truncates_toward_zero() {
        assert_eq!(SampleCodec::scale(1000, 0.5), 500);
        assert_eq!(SampleCodec::scale(999, 0.5), 499);
        assert_eq!(SampleCodec::scale(-999, 0.5), -499);
        assert_eq!(SampleCodec::scale(i16::MIN, 1.0), i16::MIN);
        assert_eq!(SampleCodec::scale(i16::MAX, 0.0), 0);
    }

    #[test]
    fn odd_length_is_rejected() {
        assert_eq!(
            SampleCodec::frame_count(3),
            Err(Error::InvalidBufferLength { len: 3 })
        );
        assert!(SampleCodec::frames(&[1, 2, 3]).is_err());
        assert!(SampleCodec::decode_buffer(&[0]).is_err());
    }

    #[test]
    fn empty_buffer_has_no_frames() {
        assert_eq!(SampleCodec::frame_count(0), Ok(0));
        assert!(SampleCodec::decode_buffer(&[]).unwrap().is_empty());
    }

    #[test]
    fn buffer_round_trip() {
        let samples = [0i16, 1, -1, i16::MAX, i16::MIN, 12345];
        let bytes = SampleCodec::encode_buffer(&samples);
        assert_eq!(bytes.len(), samples.len() * BYTES_PER_FRAME);
        assert_eq!(SampleCodec::decode_buffer(&bytes).unwrap(), samples);
    }
}
