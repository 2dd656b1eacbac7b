//! Split parameters and their validation.
//!
//! [`SplitParams`] bundles the threshold and the number of shares of a
//! split. Values are checked once when the struct is built and again
//! against the secret length when a split runs, since the largest usable
//! share index depends on the field size.

use crate::error::{Result, ShareError};
use crate::field::MAX_DEGREE;

/// Longest supported secret, in bytes.
pub const MAX_SECRET_LEN: usize = (MAX_DEGREE / 8) as usize;

/// Largest number of shares a split may produce. Share indices are
/// serialized on two bytes.
pub const MAX_SHARES: usize = u16::MAX as usize;

/// Threshold and share count for a split.
///
/// # Defaults
///
/// The default is 400-of-1000, the setting used by the cross-implementation
/// sweep this engine was built to pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitParams {
    /// Minimum number of shares required to reconstruct (at least 1).
    pub threshold: usize,
    /// Total number of shares produced (at least `threshold`).
    pub num_shares: usize,
}

impl SplitParams {
    /// Builds validated parameters.
    pub fn new(threshold: usize, num_shares: usize) -> Result<Self> {
        let params = Self {
            threshold,
            num_shares,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks `1 ≤ threshold ≤ num_shares ≤ 65535`.
    pub fn validate(&self) -> Result<()> {
        if self.threshold < 1 {
            return Err(self.error("threshold must be at least 1"));
        }

        if self.threshold > self.num_shares {
            return Err(self.error("threshold exceeds share count"));
        }

        if self.num_shares > MAX_SHARES {
            return Err(self.error(format!("share count exceeds {MAX_SHARES}")));
        }

        Ok(())
    }

    /// Checks the parameters against a secret of `secret_len` bytes: the
    /// share count may not exceed `2^(8·len) − 1`.
    pub fn validate_for(&self, secret_len: usize) -> Result<()> {
        self.validate()?;

        let max = max_share_index(secret_len);
        if self.num_shares > max {
            return Err(self.error(format!(
                "a {secret_len}-byte secret allows at most {max} shares"
            )));
        }

        Ok(())
    }

    fn error<S: Into<String>>(&self, reason: S) -> ShareError {
        ShareError::invalid_parameters(self.threshold, self.num_shares, reason)
    }
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            threshold: 400,
            num_shares: 1000,
        }
    }
}

/// Largest share index for a secret of `secret_len` bytes.
pub fn max_share_index(secret_len: usize) -> usize {
    match secret_len {
        0 => 0,
        1 => u8::MAX as usize,
        _ => MAX_SHARES,
    }
}

/// Number of random bytes one split consumes: one `secret_len`-byte
/// coefficient for each of the `threshold − 1` non-constant terms.
pub fn required_randomness(secret_len: usize, threshold: usize) -> usize {
    secret_len * threshold.saturating_sub(1)
}
