//! Primitive building blocks
//!
//! This module holds the low-level, allocation-free helpers the field
//! arithmetic is built from. Values are little-endian arrays of `u64`
//! limbs interpreted as polynomials over GF(2), which is the natural
//! representation for binary extension fields: addition is a word-wise
//! XOR and multiplication is a carry-less product followed by reduction.
//!
//! The helpers are deliberately minimal and crate-private. They are not a
//! general big-integer library.

pub(crate) mod limbs;
