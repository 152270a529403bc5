//! Voxdyn Core - primitives for sample-accurate 16-bit PCM dynamics processing
//!
//! This crate provides the building blocks shared by the compressor and gate in
//! `voxdyn-effects`. Everything here operates on single-channel, signed 16-bit
//! little-endian PCM, and every time constant is expressed in **frames**
//! (one frame = one sample), never in seconds.
//!
//! # Core Abstractions
//!
//! - [`DynamicsProcessor`] - Object-safe trait for per-frame gain processors
//! - [`DynamicsExt`] - Extension trait for chaining processors
//! - [`Chain`] - Zero-cost processor chain combinator
//! - [`ParameterInfo`] - Index/name based parameter introspection
//!
//! ## Building Blocks
//!
//! - [`SampleCodec`] - Little-endian i16 frame decoding and encoding
//! - [`EnvelopeFollower`] - One-pole rectified amplitude estimate
//! - [`GainRamp`] - Two-phase gain state with continuity bookkeeping
//! - [`RampPhase`] - Which ramp (if any) the gain is currently following
//!
//! # no_std Support
//!
//! Disable the default `std` feature to build for embedded targets:
//!
//! ```toml
//! [dependencies]
//! voxdyn-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use voxdyn_core::{DynamicsExt, DynamicsProcessor};
//! use voxdyn_effects::{Compressor, Gate};
//!
//! let mut chain = Compressor::new(44, 4410, 10_000).chain(Gate::new(154, 441, 441, 950));
//! let output = chain.feed(&pcm_bytes)?;
//! assert_eq!(output.len(), pcm_bytes.len());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod codec;
pub mod envelope;
pub mod error;
pub mod param_info;
pub mod processor;
pub mod ramp;

pub use codec::{BYTES_PER_FRAME, SampleCodec};
pub use envelope::{DEFAULT_SMOOTHING, EnvelopeFollower};
pub use error::{Error, Result};
pub use param_info::{ParamDescriptor, ParamUnit, ParameterInfo};
pub use processor::{Chain, DynamicsExt, DynamicsProcessor};
pub use ramp::{GainRamp, RampPhase, ramp_fraction};
