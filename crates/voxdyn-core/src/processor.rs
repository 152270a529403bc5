//! Core processor trait and chaining.
//!
//! The [`DynamicsProcessor`] trait is the seam between the codec and the
//! per-frame gain state machines. Implementors only provide
//! [`process_frame`](DynamicsProcessor::process_frame) plus state getters;
//! byte buffer handling comes for free.
//!
//! ## Design Decisions
//!
//! - **Mono, 16-bit**: one `i16` in, one `i16` out.
//!
//! - **Validate first**: buffer lengths are checked before the first frame
//!   is processed, so a rejected call never advances processor state.
//!
//! - **Not thread-safe**: processors carry mutable per-stream state. Use one
//!   instance per stream, or wrap an instance in a lock.

use crate::{BYTES_PER_FRAME, Error, Result, SampleCodec};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Per-frame gain processor for 16-bit PCM.
///
/// # Example
///
/// ```rust
/// use voxdyn_core::DynamicsProcessor;
///
/// struct Halve {
///     frames: u64,
/// }
///
/// impl DynamicsProcessor for Halve {
///     fn name(&self) -> &'static str { "halve" }
///     fn process_frame(&mut self, sample: i16) -> i16 {
///         self.frames += 1;
///         sample / 2
///     }
///     fn gain(&self) -> f64 { 0.5 }
///     fn envelope(&self) -> f64 { 0.0 }
///     fn frame_index(&self) -> u64 { self.frames }
/// }
///
/// let mut halve = Halve { frames: 0 };
/// let out = halve.feed(&[0x10, 0x00, 0xf0, 0xff]).unwrap();
/// assert_eq!(out, [0x08, 0x00, 0xf8, 0xff]);
/// assert!(halve.feed(&[0x00]).is_err());
/// ```
pub trait DynamicsProcessor {
    /// Short identifier, e.g. "compressor".
    fn name(&self) -> &'static str;

    /// Process one frame, advancing the state by exactly one frame.
    fn process_frame(&mut self, sample: i16) -> i16;

    /// Gain applied to the most recent frame.
    fn gain(&self) -> f64;

    /// Envelope after the most recent frame.
    fn envelope(&self) -> f64;

    /// Number of frames processed since construction.
    fn frame_index(&self) -> u64;

    /// Process `input` into `output`, which must have the same length.
    fn feed_into(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        SampleCodec::frame_count(input.len())?;
        if output.len() != input.len() {
            return Err(Error::OutputLengthMismatch {
                expected: input.len(),
                actual: output.len(),
            });
        }
        for (inp, out) in input
            .chunks_exact(BYTES_PER_FRAME)
            .zip(output.chunks_exact_mut(BYTES_PER_FRAME))
        {
            let sample = self.process_frame(SampleCodec::decode([inp[0], inp[1]]));
            out.copy_from_slice(&SampleCodec::encode(sample));
        }
        Ok(())
    }

    /// Process a byte buffer, returning a new buffer of identical length.
    fn feed(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = vec![0u8; input.len()];
        self.feed_into(input, &mut output)?;
        Ok(output)
    }

    /// Process a byte buffer in place.
    fn feed_inplace(&mut self, buffer: &mut [u8]) -> Result<()> {
        SampleCodec::frame_count(buffer.len())?;
        for pair in buffer.chunks_exact_mut(BYTES_PER_FRAME) {
            let sample = self.process_frame(SampleCodec::decode([pair[0], pair[1]]));
            pair.copy_from_slice(&SampleCodec::encode(sample));
        }
        Ok(())
    }

    /// Process decoded samples in place.
    fn process_samples(&mut self, samples: &mut [i16]) {
        for sample in samples.iter_mut() {
            *sample = self.process_frame(*sample);
        }
    }
}

/// Extension trait for chaining processors.
///
/// Provides a fluent interface for static-dispatch chains. For chains built
/// at runtime use `Vec<Box<dyn DynamicsProcessor>>` instead.
pub trait DynamicsExt: DynamicsProcessor + Sized {
    /// Chain this processor with another; `self` runs first.
    ///
    /// # Example
    /// ```rust,ignore
    /// let chain = compressor.chain(gate);
    /// ```
    fn chain<P: DynamicsProcessor>(self, next: P) -> Chain<Self, P> {
        Chain {
            first: self,
            second: next,
        }
    }
}

// Blanket implementation for all processors
impl<T: DynamicsProcessor> DynamicsExt for T {}

/// Two processors in series.
///
/// Both stages are causal and per-frame, so running the chain frame by frame
/// is identical to feeding the first stage's whole output buffer into the
/// second stage.
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: DynamicsProcessor, B: DynamicsProcessor> DynamicsProcessor for Chain<A, B> {
    fn name(&self) -> &'static str {
        "chain"
    }

    #[inline]
    fn process_frame(&mut self, sample: i16) -> i16 {
        let mid = self.first.process_frame(sample);
        self.second.process_frame(mid)
    }

    /// Product of both stage gains (ignores intermediate truncation).
    fn gain(&self) -> f64 {
        self.first.gain() * self.second.gain()
    }

    /// Envelope of the first stage, which sees the raw input.
    fn envelope(&self) -> f64 {
        self.first.envelope()
    }

    fn frame_index(&self) -> u64 {
        self.first.frame_index()
    }
}

impl<A, B> Chain<A, B> {
    /// Get a reference to the first processor in the chain.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Get a mutable reference to the first processor in the chain.
    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    /// Get a reference to the second processor in the chain.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Get a mutable reference to the second processor in the chain.
    pub fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }
}
