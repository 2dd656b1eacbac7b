//! Share, share set and secret types with their canonical encodings.
//!
//! Two encodings are defined and both are stable:
//!
//! - **Text**: `<index>-<hex>`, the index in decimal and the value as
//!   lowercase big-endian hex, two digits per byte. In a [`ShareSet`]
//!   listing the index is zero-padded to the number of decimal digits of
//!   the largest index, one share per line:
//!
//!   ```text
//!   0001-8a3f…
//!   0002-11c0…
//!   ```
//!
//! - **Binary**: the index as two big-endian bytes followed by the value.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use zeroize::{Zeroize, Zeroizing};

use crate::error::{Result, ShareError};
use crate::recovery::sss::core::reconstruct;

/// One evaluation `(i, P(i))` of a sharing polynomial.
#[derive(Clone, PartialEq, Eq, Hash, Zeroize)]
pub struct Share {
    index: u16,
    value: Vec<u8>,
}

impl Share {
    /// Builds a share from its index and big-endian value bytes.
    ///
    /// No validation happens here; reconstruction checks indices and
    /// lengths against each other.
    pub fn new(index: u16, value: Vec<u8>) -> Self {
        Self { index, value }
    }

    /// The x-coordinate. Never zero for shares produced by a split.
    pub fn index(&self) -> u16 {
        self.index
    }

    /// The evaluation, as long as the secret.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Binary encoding: 2-byte big-endian index, then the value.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + self.value.len());
        out.extend_from_slice(&self.index.to_be_bytes());
        out.extend_from_slice(&self.value);
        out
    }

    /// Decodes the binary encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes {
            [hi, lo, value @ ..] if !value.is_empty() => {
                Ok(Self::new(u16::from_be_bytes([*hi, *lo]), value.to_vec()))
            }
            _ => Err(ShareError::malformed(format!(
                "binary share needs at least 3 bytes, got {}",
                bytes.len()
            ))),
        }
    }

    fn write_padded(&self, f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
        write!(f, "{:0width$}-{}", self.index, hex::encode(&self.value))
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_padded(f, 0)
    }
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Share({self})")
    }
}

impl FromStr for Share {
    type Err = ShareError;

    fn from_str(s: &str) -> Result<Self> {
        let (index, value) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| ShareError::malformed("missing '-' separator"))?;

        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ShareError::malformed(format!(
                "index {index:?} is not a decimal number"
            )));
        }

        let index: u16 = index
            .parse()
            .map_err(|e| ShareError::malformed(format!("bad index {index:?}: {e}")))?;

        let value = hex::decode(value).map_err(|e| ShareError::malformed(format!("bad value: {e}")))?;
        if value.is_empty() {
            return Err(ShareError::malformed("empty value"));
        }

        Ok(Self::new(index, value))
    }
}

/// The shares of one split with their threshold.
///
/// Sets returned by a split hold every share in index order. Sets parsed
/// from a listing keep the listing's order; their indices are non-zero and
/// distinct. Immutable once produced.
#[derive(Clone, PartialEq, Eq)]
pub struct ShareSet {
    threshold: usize,
    shares: Vec<Share>,
}

impl ShareSet {
    pub(crate) fn new(threshold: usize, shares: Vec<Share>) -> Self {
        Self { threshold, shares }
    }

    /// Minimum number of these shares needed to reconstruct.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Length in bytes of the shared secret.
    pub fn secret_len(&self) -> usize {
        self.shares.first().map_or(0, |s| s.value.len())
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Share> {
        self.shares.iter()
    }

    /// The share with the given index, if present.
    pub fn get(&self, index: u16) -> Option<&Share> {
        self.shares.iter().find(|s| s.index == index)
    }

    pub fn into_shares(self) -> Vec<Share> {
        self.shares
    }

    /// Reconstructs from the whole set with its own threshold.
    pub fn reconstruct(&self) -> Result<Secret> {
        reconstruct(&self.shares, self.threshold)
    }

    /// Canonical text listing, one padded share per line.
    pub fn listing(&self) -> String {
        self.to_string()
    }

    /// Parses a listing produced by [`ShareSet::listing`]. Blank lines are
    /// ignored.
    ///
    /// # Errors
    ///
    /// - [`ShareError::MalformedShare`] for a line that does not parse
    /// - [`ShareError::InvalidParameters`] unless `1 ≤ threshold ≤` the
    ///   number of listed shares
    /// - [`ShareError::InconsistentShares`] when values differ in length
    /// - [`ShareError::InvalidIndex`] / [`ShareError::DuplicateIndex`] for
    ///   a zero or repeated index
    pub fn from_listing(text: &str, threshold: usize) -> Result<Self> {
        let shares = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Share::from_str)
            .collect::<Result<Vec<_>>>()?;

        if threshold < 1 || threshold > shares.len() {
            return Err(ShareError::invalid_parameters(
                threshold,
                shares.len(),
                "threshold must be between 1 and the number of listed shares",
            ));
        }

        let len = shares[0].value.len();
        if shares.iter().any(|s| s.value.len() != len) {
            return Err(ShareError::inconsistent("listed shares differ in length"));
        }

        let mut seen = HashSet::with_capacity(shares.len());
        for share in &shares {
            if share.index == 0 {
                return Err(ShareError::InvalidIndex(0));
            }
            if !seen.insert(share.index) {
                return Err(ShareError::DuplicateIndex(share.index));
            }
        }

        Ok(Self::new(threshold, shares))
    }

    fn index_width(&self) -> usize {
        self.shares
            .iter()
            .map(|s| s.index)
            .max()
            .map_or(1, |max| max.to_string().len())
    }
}

impl fmt::Display for ShareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.index_width();

        for (i, share) in self.shares.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            share.write_padded(f, width)?;
        }

        Ok(())
    }
}

impl fmt::Debug for ShareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareSet")
            .field("threshold", &self.threshold)
            .field("shares", &self.shares.len())
            .field("secret_len", &self.secret_len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Share;
    type IntoIter = std::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.iter()
    }
}

/// A reconstructed secret. Its bytes are wiped on drop and never printed.
#[derive(Clone)]
pub struct Secret(Zeroizing<Vec<u8>>);

impl Secret {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Secret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Secret {}

impl PartialEq<[u8]> for Secret {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(<{} bytes>)", self.0.len())
    }
}
