//! Shamir Secret Sharing (SSS) core implementation.
//!
//! This module provides the public API for **Shamir Secret Sharing**, a
//! threshold-based cryptographic scheme for splitting and recovering
//! secrets.
//!
//! A secret is divided into multiple *shares* such that:
//!
//! - Any subset of at least `threshold` shares can reconstruct the secret.
//! - Any subset of fewer than `threshold` shares reveals no information
//!   about the secret.
//!
//! The whole secret of `L` bytes is a single element of GF(2^(8·L)), hidden
//! as the constant term of one random polynomial of degree
//! `threshold − 1`. Share `i` is that polynomial evaluated at the field
//! element whose bit pattern is `i`, for `i = 1..=num_shares`.
//!
//! ## Provided operations
//!
//! - [`split`]
//!   Split a secret into shares with a configurable threshold.
//!
//! - [`reconstruct`]
//!   Recover the secret from a sufficient number of shares.
//!
//! - [`refresh`]
//!   Renew shares without ever reconstructing the secret.
//!
//! ## Determinism
//!
//! Given the same secret, parameters and randomness bytes, [`split`]
//! produces the same shares on every run and on every machine. Randomness
//! is read in one request of `L · (threshold − 1)` bytes; each consecutive
//! `L`-byte chunk becomes one coefficient, lowest degree first, decoded
//! big-endian.
//!
//! ## Scope and limitations
//!
//! This module provides **confidentiality through threshold secrecy only**.
//! It does **not** provide authentication or integrity protection for
//! shares, nor resistance against malicious participants.

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::error::{Result, ShareError};
use crate::field::{BinaryField, FieldElement};
use crate::params::{SplitParams, required_randomness};
use crate::rng::RandomSource;

pub use crate::recovery::sss::share::{Secret, Share, ShareSet};

/// Splits a secret into `num_shares` shares, any `threshold` of which
/// reconstruct it.
///
/// # Arguments
///
/// - `secret`
///   The secret to split, 1 to 128 bytes. It becomes the constant term of
///   the sharing polynomial.
/// - `threshold`
///   The minimum number of shares required to reconstruct the secret.
/// - `num_shares`
///   The total number of shares to generate. Indices run `1..=num_shares`.
/// - `randomness`
///   Source of the `len · (threshold − 1)` coefficient bytes, read in a
///   single request.
///
/// # Returns
///
/// A [`ShareSet`] of `num_shares` shares in index order, each as long as
/// the secret.
///
/// # Errors
///
/// - [`ShareError::InvalidParameters`] unless
///   `1 ≤ threshold ≤ num_shares ≤ 2^(8·len) − 1` (and at most 65535)
/// - [`ShareError::EmptySecret`] / [`ShareError::SecretTooLong`] unless the
///   secret is 1 to 128 bytes long
/// - [`ShareError::RandomnessExhausted`] if the source cannot supply
///   `len · (threshold − 1)` bytes; no shares are produced
pub fn split<R: RandomSource + ?Sized>(
    secret: &[u8],
    threshold: usize,
    num_shares: usize,
    randomness: &mut R,
) -> Result<ShareSet> {
    let params = SplitParams {
        threshold,
        num_shares,
    };

    split_with_params(secret, &params, randomness)
}

/// [`split`] taking its parameters as a [`SplitParams`].
pub fn split_with_params<R: RandomSource + ?Sized>(
    secret: &[u8],
    params: &SplitParams,
    randomness: &mut R,
) -> Result<ShareSet> {
    let field = BinaryField::for_secret_len(secret.len())?;
    params.validate_for(secret.len())?;

    let constant = Zeroizing::new(field.element_from_bytes(secret)?);
    let coeffs = draw_polynomial(&field, *constant, params.threshold, randomness)?;

    let shares: Vec<Share> = (1..=params.num_shares as u16)
        .map(|index| {
            let y = field.evaluate(&coeffs, index);
            Share::new(index, field.element_to_bytes(&y))
        })
        .collect();

    debug!(
        secret_len = secret.len(),
        threshold = params.threshold,
        num_shares = params.num_shares,
        randomness = required_randomness(secret.len(), params.threshold),
        "split secret"
    );

    Ok(ShareSet::new(params.threshold, shares))
}

/// Reconstructs a secret from at least `threshold` shares of one split.
///
/// # Arguments
///
/// - `shares`
///   Shares from a single split or refresh, in any order.
/// - `threshold`
///   The threshold the shares were produced with.
///
/// # Returns
///
/// The reconstructed [`Secret`], as long as the share values.
///
/// Interpolation uses the first `threshold` shares. When more are
/// supplied, the last `threshold` shares are interpolated as well and the
/// two results must agree, which catches shares mixed from different
/// splits or refreshes instead of returning a wrong secret.
///
/// # Errors
///
/// Checked in this order, before any interpolation:
///
/// - [`ShareError::InvalidParameters`] for `threshold == 0`
/// - [`ShareError::InsufficientShares`] for fewer than `threshold` shares
/// - [`ShareError::InconsistentShares`] when share lengths differ or are
///   not 1 to 128 bytes
/// - [`ShareError::InvalidIndex`] for an index outside `[1, max_index]`
/// - [`ShareError::DuplicateIndex`] for a repeated index
///
/// After interpolation, [`ShareError::InconsistentShares`] if the
/// cross-check above fails.
pub fn reconstruct(shares: &[Share], threshold: usize) -> Result<Secret> {
    let field = validate_shares(shares, threshold, threshold)?;

    let secret = Zeroizing::new(interpolate(&field, &shares[..threshold])?);

    if shares.len() > threshold {
        let check = Zeroizing::new(interpolate(&field, &shares[shares.len() - threshold..])?);

        if *check != *secret {
            warn!(
                shares = shares.len(),
                threshold, "shares do not lie on a single polynomial"
            );
            return Err(ShareError::inconsistent(
                "shares do not lie on a single polynomial",
            ));
        }
    }

    debug!(
        shares = shares.len(),
        threshold,
        secret_len = field.byte_len(),
        "reconstructed secret"
    );

    Ok(Secret::new(field.element_to_bytes(&secret)))
}

/// Refreshes shares without reconstructing the secret.
///
/// A random polynomial `g` of degree `threshold − 1` with `g(0) = 0` is
/// drawn and every share `(i, y)` becomes `(i, y + g(i))`. The secret is
/// unchanged, indices are kept, and old shares can no longer be combined
/// with new ones.
///
/// # Errors
///
/// Same validation as [`reconstruct`], except that a single share is
/// enough; plus [`ShareError::RandomnessExhausted`].
pub fn refresh<R: RandomSource + ?Sized>(
    shares: &[Share],
    threshold: usize,
    randomness: &mut R,
) -> Result<Vec<Share>> {
    let field = validate_shares(shares, threshold, 1)?;
    let coeffs = draw_polynomial(&field, FieldElement::ZERO, threshold, randomness)?;

    let refreshed = shares
        .iter()
        .map(|share| {
            let y = field.element_from_bytes(share.value())?;
            let g = field.evaluate(&coeffs, share.index());
            Ok(Share::new(share.index(), field.element_to_bytes(&(y + g))))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        shares = shares.len(),
        threshold,
        secret_len = field.byte_len(),
        "refreshed shares"
    );

    Ok(refreshed)
}

/// Builds `[constant, c_1, …, c_{t−1}]` with the random coefficients read
/// from `randomness` in a single request.
fn draw_polynomial<R: RandomSource + ?Sized>(
    field: &BinaryField,
    constant: FieldElement,
    threshold: usize,
    randomness: &mut R,
) -> Result<Zeroizing<Vec<FieldElement>>> {
    let len = field.byte_len();
    let mut bytes = Zeroizing::new(vec![0u8; required_randomness(len, threshold)]);
    randomness.fill(&mut bytes)?;

    let mut coeffs = Zeroizing::new(Vec::with_capacity(threshold));
    coeffs.push(constant);
    for chunk in bytes.chunks_exact(len) {
        coeffs.push(field.element_from_bytes(chunk)?);
    }

    Ok(coeffs)
}

/// Checks the share list and returns the field it lives in.
fn validate_shares(shares: &[Share], threshold: usize, min_count: usize) -> Result<BinaryField> {
    if threshold < 1 {
        return Err(ShareError::invalid_parameters(
            threshold,
            shares.len(),
            "threshold must be at least 1",
        ));
    }

    if shares.len() < min_count || shares.is_empty() {
        return Err(ShareError::InsufficientShares {
            provided: shares.len(),
            required: min_count.max(1),
        });
    }

    let len = shares[0].value().len();
    if shares.iter().any(|s| s.value().len() != len) {
        return Err(ShareError::inconsistent("shares differ in length"));
    }

    let field = BinaryField::for_secret_len(len)
        .map_err(|e| ShareError::inconsistent(format!("share value: {e}")))?;
    let max_index = field.max_index();

    let mut seen = vec![false; max_index as usize + 1];
    for share in shares {
        let index = share.index();

        if index == 0 || index > max_index {
            return Err(ShareError::InvalidIndex(index as u32));
        }

        if seen[index as usize] {
            return Err(ShareError::DuplicateIndex(index));
        }
        seen[index as usize] = true;
    }

    Ok(field)
}

fn interpolate(field: &BinaryField, shares: &[Share]) -> Result<FieldElement> {
    let points = shares
        .iter()
        .map(|s| Ok((s.index(), field.element_from_bytes(s.value())?)))
        .collect::<Result<Vec<_>>>()?;

    field
        .lagrange_at_zero(&points)
        .ok_or_else(|| ShareError::inconsistent("repeated share index"))
}
