//! Injectable randomness for splitting.
//!
//! Splitting draws its polynomial coefficients from a [`RandomSource`].
//! Production callers pass a [`Csprng`](crate::rng::Csprng); reproducible
//! runs pass a [`FixedRandom`] loaded with a known byte blob, which is what
//! makes share listings from two engines comparable byte for byte.

use std::fs;
use std::path::Path;

use tracing::trace;
use zeroize::Zeroizing;

use crate::error::{Result, ShareError};

/// A supplier of raw random bytes.
///
/// A source is borrowed mutably for the duration of one split. A failed
/// `fill` is fatal for that split; sources are never retried.
pub trait RandomSource {
    /// Fills `dest` entirely or fails without consuming anything.
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

/// A deterministic, finite source backed by an in-memory byte blob.
///
/// Bytes are handed out in order. The blob is wiped when the source is
/// dropped.
pub struct FixedRandom {
    bytes: Zeroizing<Vec<u8>>,
    position: usize,
}

impl FixedRandom {
    /// Wraps a byte blob.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Zeroizing::new(bytes.into()),
            position: 0,
        }
    }

    /// Loads a blob from disk, e.g. a pre-generated `fixed-random` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|e| ShareError::RandomnessFile(format!("{}: {e}", path.display())))?;

        Ok(Self::new(bytes))
    }

    /// Bytes handed out so far.
    pub fn consumed(&self) -> usize {
        self.position
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }
}

impl RandomSource for FixedRandom {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        let remaining = self.remaining();

        if dest.len() > remaining {
            return Err(ShareError::RandomnessExhausted {
                requested: dest.len(),
                remaining,
            });
        }

        let end = self.position + dest.len();
        dest.copy_from_slice(&self.bytes[self.position..end]);
        self.position = end;

        trace!(taken = dest.len(), remaining = self.remaining(), "fixed randomness consumed");
        Ok(())
    }
}

impl std::fmt::Debug for FixedRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedRandom")
            .field("len", &self.bytes.len())
            .field("position", &self.position)
            .finish()
    }
}
