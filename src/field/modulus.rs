//! Reduction polynomials for GF(2^k).
//!
//! Every supported degree `k` (a multiple of 8 between 8 and 1024) is paired
//! with a canonical irreducible pentanomial
//!
//! ```text
//! f(x) = x^k + x^a + x^b + x^c + 1,    k > a > b > c > 0
//! ```
//!
//! namely the first irreducible one when candidates are ordered by `a`,
//! then `b`, then `c`, all ascending. Trinomials are never considered: by
//! Swan's theorem a trinomial whose degree is divisible by 8 is reducible.
//! For `k = 8` the rule yields the AES polynomial `0x11B`.
//!
//! Candidates are screened by trial division against every irreducible
//! polynomial of degree at most [`TRIAL_DEGREE`], and survivors are
//! settled with Rabin's irreducibility test. The selected polynomial is
//! cached per degree for the lifetime of the process.

use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{Result, ShareError};
use crate::field::core::{BinaryField, FieldElement, LIMBS, MAX_DEGREE};
use crate::primitives::limbs;

/// Number of limbs needed to hold a modulus of degree `MAX_DEGREE`.
pub(crate) const MODULUS_LIMBS: usize = LIMBS + 1;

/// Largest degree used for trial division of candidates.
const TRIAL_DEGREE: u32 = 10;

const SUPPORTED_DEGREES: usize = (MAX_DEGREE / 8) as usize;

static CACHE: [OnceLock<Pentanomial>; SUPPORTED_DEGREES] =
    [const { OnceLock::new() }; SUPPORTED_DEGREES];

static SMALL_IRREDUCIBLES: OnceLock<Vec<u32>> = OnceLock::new();

/// An irreducible pentanomial `x^k + x^a + x^b + x^c + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pentanomial {
    degree: u32,
    taps: [u32; 3],
}

impl Pentanomial {
    /// Degree `k` of the polynomial.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Middle exponents `[a, b, c]` in decreasing order.
    pub fn taps(&self) -> [u32; 3] {
        self.taps
    }

    /// The full polynomial as little-endian limbs.
    pub fn to_limbs(&self) -> [u64; MODULUS_LIMBS] {
        let mut out = [0u64; MODULUS_LIMBS];

        for bit in [self.degree, self.taps[0], self.taps[1], self.taps[2], 0] {
            out[(bit / 64) as usize] |= 1u64 << (bit % 64);
        }

        out
    }
}

impl fmt::Display for Pentanomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x^{}", self.degree)?;
        for tap in self.taps {
            match tap {
                1 => write!(f, " + x")?,
                _ => write!(f, " + x^{tap}")?,
            }
        }
        write!(f, " + 1")
    }
}

/// Returns true when `degree` is a multiple of 8 in `8..=1024`.
pub fn is_supported_degree(degree: u32) -> bool {
    degree >= 8 && degree <= MAX_DEGREE && degree % 8 == 0
}

/// Returns the canonical reduction pentanomial for GF(2^degree).
///
/// The first call for a given degree runs the search; later calls return
/// the cached result.
///
/// # Errors
///
/// [`ShareError::InvalidFieldDegree`] if the degree is not supported.
pub fn pentanomial(degree: u32) -> Result<Pentanomial> {
    if !is_supported_degree(degree) {
        return Err(ShareError::InvalidFieldDegree(degree));
    }

    let slot = &CACHE[(degree / 8 - 1) as usize];
    if let Some(found) = slot.get() {
        return Ok(*found);
    }

    let found = search(degree).ok_or(ShareError::InvalidFieldDegree(degree))?;
    debug!(degree, modulus = %found, "selected reduction polynomial");

    Ok(*slot.get_or_init(|| found))
}

fn search(degree: u32) -> Option<Pentanomial> {
    for a in 3..degree {
        for b in 2..a {
            for c in 1..b {
                let candidate = Pentanomial {
                    degree,
                    taps: [a, b, c],
                };

                if has_small_factor(&candidate) {
                    continue;
                }

                if is_irreducible(&candidate) {
                    return Some(candidate);
                }
            }
        }
    }

    None
}

/// Rabin's test: `f` of degree `k` is irreducible iff `x^(2^k) ≡ x mod f`
/// and `gcd(f, x^(2^(k/q)) − x) = 1` for every prime `q` dividing `k`.
pub(crate) fn is_irreducible(candidate: &Pentanomial) -> bool {
    let k = candidate.degree;
    let field = BinaryField::with_modulus(*candidate);
    let x = FieldElement::from_u64(0b10);

    let checkpoints: Vec<u32> = prime_factors(k).into_iter().map(|q| k / q).collect();
    let mut saved: Vec<FieldElement> = Vec::with_capacity(checkpoints.len());

    let mut y = x;
    for step in 1..=k {
        y = field.square(&y);
        if checkpoints.contains(&step) {
            saved.push(y);
        }
    }

    if y != x {
        return false;
    }

    let modulus = candidate.to_limbs();
    saved.iter().all(|power| {
        let h = field.add(power, &x);
        let mut h_limbs = [0u64; MODULUS_LIMBS];
        h_limbs[..LIMBS].copy_from_slice(h.limbs());

        gcd_is_one(modulus, h_limbs)
    })
}

/// Euclid's algorithm over GF(2)[x], reporting whether the gcd is 1.
fn gcd_is_one(mut u: [u64; MODULUS_LIMBS], mut v: [u64; MODULUS_LIMBS]) -> bool {
    loop {
        if limbs::is_zero(&v) {
            return limbs::is_one(&u);
        }

        let dv = limbs::bit_length(&v);
        loop {
            let du = limbs::bit_length(&u);
            if du < dv {
                break;
            }
            limbs::xor_shifted(&mut u, &v, du - dv);
        }

        std::mem::swap(&mut u, &mut v);
    }
}

fn prime_factors(mut n: u32) -> Vec<u32> {
    let mut out = Vec::new();
    let mut p = 2;

    while p * p <= n {
        if n % p == 0 {
            out.push(p);
            while n % p == 0 {
                n /= p;
            }
        }
        p += 1;
    }

    if n > 1 {
        out.push(n);
    }

    out
}

/// True when the candidate is divisible by an irreducible polynomial of
/// degree `2..=TRIAL_DEGREE` that is at most half its own degree.
/// Pentanomials with a constant term have an odd number of terms, so `x`
/// and `x + 1` never divide them.
fn has_small_factor(candidate: &Pentanomial) -> bool {
    let small = SMALL_IRREDUCIBLES.get_or_init(|| small_irreducibles(TRIAL_DEGREE));
    let [a, b, c] = candidate.taps;

    small
        .iter()
        .take_while(|&&g| 2 * (31 - g.leading_zeros()) <= candidate.degree)
        .any(|&g| {
            let residue = [candidate.degree, a, b, c]
                .into_iter()
                .fold(1u32, |acc, e| acc ^ x_pow_mod(e, g));
            residue == 0
        })
}

/// All irreducible polynomials of degree `2..=max_degree`, as bit patterns.
fn small_irreducibles(max_degree: u32) -> Vec<u32> {
    let mut found: Vec<u32> = Vec::new();

    for g in 4u32..(1 << (max_degree + 1)) {
        let dg = 31 - g.leading_zeros();
        let reducible = found
            .iter()
            .take_while(|&&h| 2 * (31 - h.leading_zeros()) <= dg)
            .chain([0b10u32, 0b11].iter())
            .any(|&h| small_rem(g, h) == 0);

        if !reducible {
            found.push(g);
        }
    }

    found
}

fn small_rem(mut a: u32, g: u32) -> u32 {
    let dg = 31 - g.leading_zeros();

    while a != 0 && 31 - a.leading_zeros() >= dg {
        a ^= g << (31 - a.leading_zeros() - dg);
    }

    a
}

fn small_mulmod(a: u32, b: u32, g: u32) -> u32 {
    let (lo, _) = limbs::clmul(a as u64, b as u64);
    small_rem(lo as u32, g)
}

/// `x^e mod g` for a small modulus `g` of degree at least 2.
fn x_pow_mod(e: u32, g: u32) -> u32 {
    let mut result = 1u32;
    let mut base = small_rem(0b10, g);
    let mut e = e;

    while e != 0 {
        if e & 1 == 1 {
            result = small_mulmod(result, base, g);
        }
        base = small_mulmod(base, base, g);
        e >>= 1;
    }

    result
}
