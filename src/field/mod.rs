//! Binary extension fields GF(2^k).
//!
//! A secret of `L` bytes is shared inside a single field of degree
//! `k = 8·L`, so the whole secret is one field element and every share
//! value is exactly as long as the secret. This keeps share indices
//! independent of the secret size: any field with `k ≥ 16` can host up to
//! 65535 shares, which a per-byte GF(256) construction cannot.
//!
//! The module is split in two layers:
//!
//! - [`modulus`]
//!   Selection of the canonical irreducible pentanomial for each degree,
//!   with a process-wide cache.
//!
//! - `core`
//!   The [`BinaryField`] context and [`FieldElement`] arithmetic:
//!   addition, multiplication (full and by a share index), squaring,
//!   inversion, polynomial evaluation and Lagrange interpolation at zero.

pub(crate) mod core;
pub mod modulus;

pub use self::core::{BinaryField, FieldElement, MAX_DEGREE};
pub use modulus::Pentanomial;
