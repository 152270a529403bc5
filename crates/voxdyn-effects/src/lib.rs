//! Voxdyn Effects - dynamics processors for 16-bit PCM voice streams
//!
//! This crate provides the two processors built on voxdyn-core:
//!
//! - [`Compressor`] - pulls gain down while the output is loud, releases it gradually
//! - [`Gate`] - opens above a threshold, closes after a hold period below it
//!
//! Both work sample by sample on a single channel, with every timer counted
//! in frames, and ramp their gain linearly so phase switches never click.
//!
//! ## Example
//!
//! ```rust
//! use voxdyn_core::{DynamicsExt, DynamicsProcessor};
//! use voxdyn_effects::{Compressor, Gate};
//!
//! let compressor = Compressor::new(44, 4410, 10_000);
//! let gate = Gate::new(154, 441, 441, 950);
//!
//! // Compressor first, then gate
//! let mut chain = compressor.chain(gate);
//! let output = chain.feed(&[0u8; 960]).unwrap();
//! assert_eq!(output.len(), 960);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod compressor;
pub mod gate;

// Re-export main types at crate root
pub use compressor::Compressor;
pub use gate::Gate;
