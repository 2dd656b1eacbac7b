//! Random number generation module
//!
//! Splitting consumes randomness through the [`RandomSource`] trait so the
//! engine never decides where its coefficients come from. Two sources are
//! provided:
//!
//! - [`Csprng`]: OS-seeded ChaCha20 generator for real use.
//! - [`FixedRandom`]: a finite, deterministic byte blob for reproducible
//!   and cross-implementation runs.
mod csprng;
mod source;

pub use csprng::Csprng;
pub use source::{FixedRandom, RandomSource};
