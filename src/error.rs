//! Error types for secret splitting and reconstruction.
//!
//! Every failure is reported synchronously to the caller of the operation
//! that detected it. No operation returns partial results and none of them
//! retries internally: a split that runs out of randomness produces no
//! shares at all, and a reconstruction with bad input never attempts
//! interpolation.

use thiserror::Error;

/// The Result type for this crate.
pub type Result<T> = std::result::Result<T, ShareError>;

/// Errors that may occur while splitting, reconstructing, refreshing or
/// decoding shares.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// Threshold or share count out of range.
    #[error("invalid parameters (threshold {threshold}, shares {num_shares}): {reason}")]
    InvalidParameters {
        /// The requested threshold.
        threshold: usize,
        /// The requested number of shares.
        num_shares: usize,
        /// Which constraint was violated.
        reason: String,
    },

    /// A zero-length secret was supplied to split.
    #[error("secret is empty")]
    EmptySecret,

    /// The secret does not fit in the largest supported field.
    #[error("secret of {len} bytes exceeds the maximum of {max} bytes")]
    SecretTooLong {
        /// Length of the rejected secret.
        len: usize,
        /// Largest supported length.
        max: usize,
    },

    /// Fewer shares than the threshold were supplied.
    #[error("insufficient shares: {provided} provided, {required} required")]
    InsufficientShares {
        /// Number of shares supplied.
        provided: usize,
        /// Threshold that must be met.
        required: usize,
    },

    /// The same share index appears more than once.
    #[error("duplicate share index {0}")]
    DuplicateIndex(u16),

    /// A share index lies outside `[1, max_index]` for the field in use.
    #[error("share index {0} is out of range")]
    InvalidIndex(u32),

    /// Shares disagree on length or do not lie on a single polynomial.
    #[error("inconsistent shares: {0}")]
    InconsistentShares(String),

    /// The randomness source ran dry before all coefficients were drawn.
    #[error("randomness exhausted: {requested} bytes requested, {remaining} remaining")]
    RandomnessExhausted {
        /// Bytes requested by the failing read.
        requested: usize,
        /// Bytes the source still held.
        remaining: usize,
    },

    /// A serialized share could not be decoded.
    #[error("malformed share: {0}")]
    MalformedShare(String),

    /// The requested field degree is not a multiple of 8 in `8..=1024`.
    #[error("unsupported field degree {0}")]
    InvalidFieldDegree(u32),

    /// Reading a randomness blob from disk failed.
    #[error("failed to read randomness file: {0}")]
    RandomnessFile(String),
}

impl ShareError {
    pub(crate) fn invalid_parameters<S: Into<String>>(
        threshold: usize,
        num_shares: usize,
        reason: S,
    ) -> Self {
        Self::InvalidParameters {
            threshold,
            num_shares,
            reason: reason.into(),
        }
    }

    pub(crate) fn inconsistent<S: Into<String>>(reason: S) -> Self {
        Self::InconsistentShares(reason.into())
    }

    pub(crate) fn malformed<S: Into<String>>(reason: S) -> Self {
        Self::MalformedShare(reason.into())
    }
}
