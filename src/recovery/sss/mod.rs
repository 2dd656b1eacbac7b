//! Shamir Secret Sharing (SSS) implementation.
//!
//! The implementation is split into two layers:
//!
//! - [`core`]
//!   Public API and protocol logic: parameter and share validation,
//!   secret splitting, reconstruction and share refresh. Every function
//!   operates on explicit inputs and is deterministic given its
//!   parameters and randomness source.
//!
//! - `share`
//!   The value types exchanged with callers ([`Share`](core::Share),
//!   [`ShareSet`](core::ShareSet), [`Secret`](core::Secret)) and their
//!   canonical text and binary encodings.
//!
//! Field arithmetic lives in [`crate::field`].
//!
//! ## Design notes
//!
//! - The secret is one element of GF(2^(8·L)); share values have the same
//!   length as the secret.
//! - Share identifiers are non-zero and unique within a set.
//! - Share refresh renews shares without reconstructing the secret.
//!
//! ## Security scope
//!
//! This module provides **confidentiality through threshold secrecy**.
//! It does not provide:
//! - authentication or integrity protection for shares
//! - resistance against malicious or byzantine participants
//! - storage or transport mechanisms

pub mod core;
mod share;
