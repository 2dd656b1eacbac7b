//! Threshold secret sharing over large binary fields
//!
//! This crate splits a secret of 1 to 128 bytes into up to 65535 shares
//! such that any `t` of them reconstruct it and any `t − 1` reveal nothing.
//! The whole secret is a single element of GF(2^(8·L)), so share counts
//! are not limited by a 256-element field.
//!
//! The focus is on **clarity, predictability, and auditability**. Splitting
//! is a pure function of the secret, the parameters and an injected
//! randomness source, which makes share listings reproducible across runs
//! and across implementations.
//!
//! # Module overview
//!
//! - `field`
//!   Binary extension field arithmetic for degrees 8 to 1024 in steps of
//!   8, with reduction polynomials chosen deterministically per degree.
//!
//! - `rng`
//!   The [`RandomSource`] abstraction, a deterministic [`FixedRandom`]
//!   source over a caller-supplied byte string, and an OS-seeded
//!   [`Csprng`].
//!
//! - `recovery`
//!   Shamir Secret Sharing: split, reconstruct and refresh, together with
//!   the [`Share`], [`ShareSet`] and [`Secret`] types and their canonical
//!   encodings.
//!
//! - `params` / `error`
//!   Split parameters with their validation, and the [`ShareError`]
//!   taxonomy shared by every fallible operation.
//!
//! # Example
//!
//! ```
//! use polyshare::{FixedRandom, reconstruct, split};
//!
//! let mut rng = FixedRandom::new(vec![7u8; 4 * 2]);
//! let set = split(b"abcd", 3, 5, &mut rng).unwrap();
//!
//! let secret = reconstruct(&set.shares()[1..4], 3).unwrap();
//! assert_eq!(secret.as_bytes(), b"abcd");
//! ```
//!
//! # Logging
//!
//! Operations emit [`tracing`] events at `debug` (and `warn` for
//! inconsistent share sets). Secret material and share values are never
//! logged; install a subscriber to see them.

pub mod error;
pub mod field;
pub mod params;
mod primitives;
pub mod recovery;
pub mod rng;

pub use error::{Result, ShareError};
pub use field::{BinaryField, FieldElement};
pub use params::SplitParams;
pub use recovery::shamirsecretsharing::{
    Secret, Share, ShareSet, reconstruct, refresh, split, split_with_params,
};
pub use rng::{Csprng, FixedRandom, RandomSource};
