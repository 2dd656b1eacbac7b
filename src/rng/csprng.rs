//! ChaCha20-based CSPRNG
//!
//! This module implements the system randomness source used when a caller
//! does not inject a deterministic one. It is a ChaCha20 deterministic
//! random bit generator seeded from the operating system:
//! - initial entropy comes from the OS (`getrandom` through `OsRng`)
//! - expansion uses the ChaCha20 stream
//! - the generator rekeys itself after every request, so a later
//!   compromise of its state does not reveal earlier output

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use zeroize::Zeroize;

use crate::error::Result;
use crate::rng::RandomSource;

/// Cryptographically secure pseudorandom number generator.
///
/// Never runs out: as a [`RandomSource`] it always succeeds.
pub struct Csprng {
    inner: ChaCha20Rng,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    ///
    /// This is equivalent to calling [`Csprng::from_os`].
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a new CSPRNG using entropy provided by the operating system.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);

        Self::from_seed(seed)
    }

    /// Creates a new CSPRNG from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable. The local copy
    /// is wiped once the generator is keyed.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let inner = ChaCha20Rng::from_seed(seed);
        seed.zeroize();

        Self { inner }
    }

    /// Fills the buffer with random bytes, then rekeys.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        self.inner.fill_bytes(out);
        self.rekey();
    }

    /// Replaces the ChaCha20 key with 32 bytes of the generator's own output.
    fn rekey(&mut self) {
        let mut key = [0u8; 32];
        self.inner.fill_bytes(&mut key);
        self.inner = ChaCha20Rng::from_seed(key);
        key.zeroize();
    }
}

impl Default for Csprng {
    /// Creates a default CSPRNG instance seeded from the operating system.
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Csprng {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl std::fmt::Debug for Csprng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Csprng { .. }")
    }
}
