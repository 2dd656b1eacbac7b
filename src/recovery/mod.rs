//! Secret recovery primitives.
//!
//! # Shamir Secret Sharing (SSS)
//!
//! The `shamirsecretsharing` module provides **Shamir Secret Sharing**, a
//! threshold-based secret distribution scheme. A secret is split into `n`
//! shares such that:
//!
//! - Any subset of at least `t` shares can reconstruct the original secret.
//! - Any subset of fewer than `t` shares reveals no information about it.
//!
//! ## Provided functionality
//!
//! - **Splitting** into `n` shares with threshold `t`, drawing polynomial
//!   coefficients from an injected [`RandomSource`](crate::rng::RandomSource).
//! - **Reconstruction** from any valid subset of at least `t` shares using
//!   Lagrange interpolation at zero.
//! - **Refreshing** shares without reconstructing the secret.
//!
//! Splitting is reproducible: the same secret, parameters and random bytes
//! give byte-identical share listings, so independent implementations can
//! be checked against each other.
//!
//! The module is purely computational and does not include:
//! - authentication or MACs for shares
//! - networking or storage
//! - access control or recovery policies

mod sss;

pub use sss::core as shamirsecretsharing;
