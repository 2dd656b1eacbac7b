//! A second, independently written share engine.
//!
//! Polynomials over GF(2) are stored as `BigUint` bit patterns and every
//! operation is bit-serial. It shares no code with the crate under test and
//! exists only to produce listings the crate's output is diffed against.

#![allow(dead_code)]

use num_bigint::BigUint;
use num_traits::{One, Zero};

pub struct ReferenceField {
    degree: u64,
    modulus: BigUint,
}

impl ReferenceField {
    /// Builds GF(2^degree) with modulus `x^degree + x^a + x^b + x^c + 1`.
    pub fn with_taps(degree: u64, taps: [u32; 3]) -> Self {
        let mut modulus = (BigUint::one() << degree as usize) ^ BigUint::one();
        for tap in taps {
            modulus ^= BigUint::one() << tap as usize;
        }

        Self { degree, modulus }
    }

    /// Finds the first irreducible pentanomial of the given degree, ordered
    /// by middle exponents ascending, using Ben-Or's test.
    pub fn search(degree: u64) -> Self {
        let k = degree as u32;

        for a in 3..k {
            for b in 2..a {
                for c in 1..b {
                    let field = Self::with_taps(degree, [a, b, c]);
                    if field.is_irreducible() {
                        return field;
                    }
                }
            }
        }

        panic!("no irreducible pentanomial of degree {degree}");
    }

    pub fn taps(&self) -> [u32; 3] {
        let mut found = Vec::new();
        for bit in (1..self.degree).rev() {
            if bit_set(&self.modulus, bit) {
                found.push(bit as u32);
            }
        }
        [found[0], found[1], found[2]]
    }

    pub fn byte_len(&self) -> usize {
        (self.degree / 8) as usize
    }

    /// `gcd(x^(2^i) − x, f) = 1` for every `i ≤ k/2`.
    fn is_irreducible(&self) -> bool {
        let x = BigUint::from(2u8);
        let mut power = x.clone();

        for _ in 0..self.degree / 2 {
            power = self.mul(&power, &power);
            if !poly_gcd(&power ^ &x, self.modulus.clone()).is_one() {
                return false;
            }
        }

        true
    }

    fn reduce(&self, mut value: BigUint) -> BigUint {
        while value.bits() > self.degree {
            let shift = value.bits() - 1 - self.degree;
            value ^= &self.modulus << shift as usize;
        }
        value
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let mut acc = BigUint::zero();

        for (w, digit) in b.to_u64_digits().into_iter().enumerate() {
            for bit in 0..64 {
                if (digit >> bit) & 1 == 1 {
                    acc ^= a << (64 * w + bit);
                }
            }
        }

        self.reduce(acc)
    }

    pub fn decode(&self, bytes: &[u8]) -> BigUint {
        BigUint::from_bytes_be(bytes)
    }

    pub fn encode(&self, value: &BigUint) -> Vec<u8> {
        let raw = if value.is_zero() {
            Vec::new()
        } else {
            value.to_bytes_be()
        };

        let mut out = vec![0u8; self.byte_len() - raw.len()];
        out.extend_from_slice(&raw);
        out
    }

    /// Splits `secret` with coefficients taken from `random` in
    /// `byte_len`-byte big-endian chunks and returns the text listing.
    pub fn listing(&self, secret: &[u8], threshold: usize, num_shares: usize, random: &[u8]) -> String {
        let len = self.byte_len();
        assert_eq!(secret.len(), len);

        let mut coeffs = vec![self.decode(secret)];
        coeffs.extend(
            random[..len * (threshold - 1)]
                .chunks(len)
                .map(|chunk| self.decode(chunk)),
        );

        let width = num_shares.to_string().len();

        (1..=num_shares)
            .map(|index| {
                let x = BigUint::from(index as u64);
                let y = coeffs
                    .iter()
                    .rev()
                    .fold(BigUint::zero(), |acc, c| self.mul(&acc, &x) ^ c);
                format!("{index:0width$}-{}", hex::encode(self.encode(&y)))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn bit_set(value: &BigUint, bit: u64) -> bool {
    ((value >> bit as usize) & BigUint::one()).is_one()
}

fn poly_rem(mut a: BigUint, b: &BigUint) -> BigUint {
    let db = b.bits();
    while !a.is_zero() && a.bits() >= db {
        a ^= b << (a.bits() - db) as usize;
    }
    a
}

fn poly_gcd(mut a: BigUint, mut b: BigUint) -> BigUint {
    while !b.is_zero() {
        let r = poly_rem(a, &b);
        a = b;
        b = r;
    }
    a
}
