//! Arithmetic in GF(2^k).
//!
//! A [`BinaryField`] is a small, copyable context describing one field:
//! its degree `k` and its reduction pentanomial. [`FieldElement`] values
//! are plain data and only acquire meaning together with the field that
//! produced them, in the same way a residue only makes sense next to its
//! modulus.
//!
//! Elements are stored as sixteen little-endian `u64` limbs, enough for the
//! largest supported field (k = 1024). Limbs above `ceil(k / 64)` are always
//! zero. No operation allocates.
//!
//! ## Byte encoding
//!
//! Elements convert to and from exactly `k / 8` bytes in big-endian order:
//! the first byte carries the coefficients of `x^(k-1)` down to `x^(k-8)`.
//! A share index `i` maps to the element whose bit pattern equals `i`.

use std::ops::Add;

use zeroize::Zeroize;

use crate::error::{Result, ShareError};
use crate::field::modulus::{self, MODULUS_LIMBS, Pentanomial};
use crate::primitives::limbs;

/// Largest supported field degree in bits.
pub const MAX_DEGREE: u32 = 1024;

pub(crate) const LIMBS: usize = (MAX_DEGREE / 64) as usize;

const WIDE_LIMBS: usize = 2 * LIMBS;

/// An element of a binary extension field GF(2^k).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct FieldElement {
    limbs: [u64; LIMBS],
}

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = Self { limbs: [0; LIMBS] };

    /// The multiplicative identity.
    pub const ONE: Self = Self::from_u64(1);

    pub(crate) const fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = value;
        Self { limbs }
    }

    pub(crate) fn limbs(&self) -> &[u64; LIMBS] {
        &self.limbs
    }

    /// Returns true for the additive identity.
    pub fn is_zero(&self) -> bool {
        limbs::is_zero(&self.limbs)
    }
}

/// Field addition: coefficient-wise XOR, independent of the modulus.
impl Add for FieldElement {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn add(mut self, rhs: Self) -> Self::Output {
        self.limbs
            .iter_mut()
            .zip(rhs.limbs.iter())
            .for_each(|(l, r)| *l ^= r);
        self
    }
}

/// A binary extension field GF(2^k), `k` a multiple of 8 in `8..=1024`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryField {
    modulus: Pentanomial,
    limbs: usize,
}

impl BinaryField {
    /// Creates the field of the given degree with its canonical modulus.
    ///
    /// # Errors
    ///
    /// [`ShareError::InvalidFieldDegree`] unless `degree` is a multiple of 8
    /// in `8..=1024`.
    pub fn new(degree: u32) -> Result<Self> {
        Ok(Self::with_modulus(modulus::pentanomial(degree)?))
    }

    /// Creates the field whose elements are exactly `len` bytes long.
    ///
    /// # Errors
    ///
    /// [`ShareError::EmptySecret`] for `len == 0`,
    /// [`ShareError::SecretTooLong`] above 128 bytes.
    pub fn for_secret_len(len: usize) -> Result<Self> {
        let max = (MAX_DEGREE / 8) as usize;

        if len == 0 {
            return Err(ShareError::EmptySecret);
        }
        if len > max {
            return Err(ShareError::SecretTooLong { len, max });
        }

        Self::new(8 * len as u32)
    }

    pub(crate) fn with_modulus(modulus: Pentanomial) -> Self {
        Self {
            modulus,
            limbs: modulus.degree().div_ceil(64) as usize,
        }
    }

    /// Degree `k` of the field.
    pub fn degree(&self) -> u32 {
        self.modulus.degree()
    }

    /// Size in bytes of an encoded element.
    pub fn byte_len(&self) -> usize {
        (self.degree() / 8) as usize
    }

    /// The reduction polynomial.
    pub fn modulus(&self) -> Pentanomial {
        self.modulus
    }

    /// Largest share index usable in this field: `min(2^k − 1, 65535)`.
    pub fn max_index(&self) -> u16 {
        if self.degree() >= 16 {
            u16::MAX
        } else {
            ((1u32 << self.degree()) - 1) as u16
        }
    }

    /// Decodes a big-endian byte string of exactly [`byte_len`] bytes.
    ///
    /// [`byte_len`]: BinaryField::byte_len
    pub fn element_from_bytes(&self, bytes: &[u8]) -> Result<FieldElement> {
        if bytes.len() != self.byte_len() {
            return Err(ShareError::malformed(format!(
                "expected {} bytes for GF(2^{}), got {}",
                self.byte_len(),
                self.degree(),
                bytes.len()
            )));
        }

        let mut out = FieldElement::ZERO;
        for (r, &b) in bytes.iter().rev().enumerate() {
            out.limbs[r / 8] |= (b as u64) << (8 * (r % 8));
        }

        Ok(out)
    }

    /// Encodes an element as [`byte_len`](BinaryField::byte_len) big-endian bytes.
    pub fn element_to_bytes(&self, element: &FieldElement) -> Vec<u8> {
        let mut out = vec![0u8; self.byte_len()];
        for (r, o) in out.iter_mut().rev().enumerate() {
            *o = (element.limbs[r / 8] >> (8 * (r % 8))) as u8;
        }
        out
    }

    /// The element representing share index `index`.
    pub fn element_from_index(&self, index: u16) -> FieldElement {
        self.mul_small(&FieldElement::ONE, index)
    }

    /// Field addition, the XOR of both operands.
    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        *a + *b
    }

    /// Field multiplication.
    ///
    /// # Arguments
    ///
    /// - `a`, `b`
    ///   Elements of this field.
    ///
    /// # Returns
    ///
    /// `a · b mod f`: the carry-less product of the two operands reduced by
    /// the field's pentanomial.
    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let n = self.limbs;
        let mut wide = [0u64; WIDE_LIMBS];

        for (i, &ai) in a.limbs[..n].iter().enumerate() {
            if ai == 0 {
                continue;
            }
            for (j, &bj) in b.limbs[..n].iter().enumerate() {
                let (lo, hi) = limbs::clmul(bj, ai);
                wide[i + j] ^= lo;
                wide[i + j + 1] ^= hi;
            }
        }

        self.reduce(&mut wide[..2 * n], n)
    }

    /// `a²`. Squaring over GF(2) only spreads the bits of `a` apart, so no
    /// cross products are computed before reduction.
    pub fn square(&self, a: &FieldElement) -> FieldElement {
        let n = self.limbs;
        let mut wide = [0u64; WIDE_LIMBS];

        limbs::square_into(&a.limbs[..n], &mut wide[..2 * n]);
        self.reduce(&mut wide[..2 * n], n)
    }

    /// Multiplies by the element for a share index.
    ///
    /// This is the workhorse of split and reconstruct: it costs one shifted
    /// XOR per set bit of `x` plus a short reduction, instead of a full
    /// field multiplication.
    pub fn mul_small(&self, a: &FieldElement, x: u16) -> FieldElement {
        let n = self.limbs;
        let mut wide = [0u64; LIMBS + 1];
        let mut bits = x;

        while bits != 0 {
            limbs::xor_shifted(
                &mut wide[..n + 1],
                &a.limbs[..n],
                bits.trailing_zeros() as usize,
            );
            bits &= bits - 1;
        }

        self.reduce(&mut wide[..n + 1], 1)
    }

    /// Multiplicative inverse by the extended Euclidean algorithm over
    /// GF(2)[x]. Returns `None` for zero.
    pub fn invert(&self, a: &FieldElement) -> Option<FieldElement> {
        if a.is_zero() {
            return None;
        }

        let mut u = [0u64; MODULUS_LIMBS];
        u[..LIMBS].copy_from_slice(&a.limbs);
        let mut v = self.modulus.to_limbs();
        let mut g1 = [0u64; MODULUS_LIMBS];
        let mut g2 = [0u64; MODULUS_LIMBS];
        g1[0] = 1;

        // invariant: a·g1 ≡ u and a·g2 ≡ v (mod f), deg g1, g2 < k
        while !limbs::is_one(&u) {
            let du = limbs::bit_length(&u);
            let dv = limbs::bit_length(&v);

            if du < dv {
                std::mem::swap(&mut u, &mut v);
                std::mem::swap(&mut g1, &mut g2);
                continue;
            }

            let shift = du - dv;
            limbs::xor_shifted(&mut u, &v, shift);
            limbs::xor_shifted(&mut g1, &g2, shift);
        }

        let mut out = FieldElement::ZERO;
        out.limbs.copy_from_slice(&g1[..LIMBS]);
        g1.zeroize();
        g2.zeroize();

        Some(out)
    }

    /// Evaluates `coeffs[0] + coeffs[1]·x + … ` at a share index with
    /// Horner's rule.
    pub fn evaluate(&self, coeffs: &[FieldElement], x: u16) -> FieldElement {
        coeffs
            .iter()
            .rev()
            .fold(FieldElement::ZERO, |acc, c| self.mul_small(&acc, x) + *c)
    }

    /// Value at zero of the unique polynomial of degree `< points.len()`
    /// through the given `(index, value)` points:
    ///
    /// ```text
    /// P(0) = Σ_j y_j · Π_{m≠j} x_m / (x_m − x_j)
    /// ```
    ///
    /// Subtraction is addition in characteristic 2. Returns `None` if two
    /// points share an index, which leaves a zero denominator.
    pub fn lagrange_at_zero(&self, points: &[(u16, FieldElement)]) -> Option<FieldElement> {
        let mut acc = FieldElement::ZERO;

        for (j, &(xj, yj)) in points.iter().enumerate() {
            let mut num = FieldElement::ONE;
            let mut den = FieldElement::ONE;

            for (m, &(xm, _)) in points.iter().enumerate() {
                if m != j {
                    num = self.mul_small(&num, xm);
                    den = self.mul_small(&den, xm ^ xj);
                }
            }

            let basis = self.mul(&num, &self.invert(&den)?);
            acc = acc + self.mul(&basis, &yj);
        }

        Some(acc)
    }

    /// Reduces `wide` modulo the pentanomial.
    ///
    /// `high_limbs` bounds the size of the part above `x^k`: `n` for a full
    /// product, 1 for a product by a share index.
    fn reduce(&self, wide: &mut [u64], high_limbs: usize) -> FieldElement {
        let k = self.degree() as usize;
        let mut buffer = [0u64; LIMBS];
        let high = &mut buffer[..high_limbs];

        // x^k ≡ x^a + x^b + x^c + 1; each pass lowers the degree of the
        // overflow by at least k − a.
        loop {
            limbs::shift_right(wide, k, high);
            if limbs::is_zero(high) {
                break;
            }

            limbs::mask_low_bits(wide, k);
            limbs::xor_shifted(wide, high, 0);
            for tap in self.modulus.taps() {
                limbs::xor_shifted(wide, high, tap as usize);
            }
        }

        let mut out = FieldElement::ZERO;
        out.limbs[..self.limbs].copy_from_slice(&wide[..self.limbs]);
        out
    }
}
