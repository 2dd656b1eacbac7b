//! Bit-level operations on little-endian `u64` limb slices.
//!
//! A limb slice represents a polynomial over GF(2): bit `j` of limb `i` is
//! the coefficient of `x^(64·i + j)`. Addition of such polynomials is XOR,
//! so the helpers here only need shifts, XOR, masking and a carry-less
//! product. Nothing in this module allocates.
//!
//! Shifts that would move bits past the end of the destination drop them
//! silently; callers size their buffers so that this never happens for
//! values they care about.

/// Table mapping a byte to the 16-bit value obtained by inserting a zero
/// bit between each of its bits. Squaring over GF(2) is exactly this.
const SPREAD: [u16; 256] = build_spread();

const fn build_spread() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;

    while i < 256 {
        let mut v = 0u16;
        let mut bit = 0;

        while bit < 8 {
            if (i >> bit) & 1 == 1 {
                v |= 1 << (2 * bit);
            }
            bit += 1;
        }

        table[i] = v;
        i += 1;
    }

    table
}

/// Carry-less product of two 64-bit words, returned as `(low, high)`.
///
/// The loop runs once per set bit position of `b`, so passing the operand
/// with fewer significant bits as `b` is cheaper.
#[inline]
pub(crate) fn clmul(a: u64, b: u64) -> (u64, u64) {
    let mut lo = 0u64;
    let mut hi = 0u64;
    let mut rest = b;

    while rest != 0 {
        let i = rest.trailing_zeros();

        lo ^= a << i;
        if i != 0 {
            hi ^= a >> (64 - i);
        }

        rest &= rest - 1;
    }

    (lo, hi)
}

/// Writes the square of `src` (over GF(2)) into `dst`.
///
/// `dst` must hold at least `2 * src.len()` limbs; extra limbs are cleared.
pub(crate) fn square_into(src: &[u64], dst: &mut [u64]) {
    dst.fill(0);

    for (i, &w) in src.iter().enumerate() {
        let mut lo = 0u64;
        let mut hi = 0u64;

        for byte in 0..4 {
            lo |= (SPREAD[((w >> (8 * byte)) & 0xff) as usize] as u64) << (16 * byte);
            hi |= (SPREAD[((w >> (8 * (byte + 4))) & 0xff) as usize] as u64) << (16 * byte);
        }

        dst[2 * i] = lo;
        dst[2 * i + 1] = hi;
    }
}

/// `dst ^= src << shift`, truncated to the length of `dst`.
#[inline]
pub(crate) fn xor_shifted(dst: &mut [u64], src: &[u64], shift: usize) {
    let words = shift / 64;
    let bits = shift % 64;

    for (i, &w) in src.iter().enumerate() {
        if w == 0 {
            continue;
        }

        let at = i + words;
        if at >= dst.len() {
            break;
        }

        dst[at] ^= w << bits;
        if bits != 0 && at + 1 < dst.len() {
            dst[at + 1] ^= w >> (64 - bits);
        }
    }
}

/// `dst = src >> shift`, reading zeros past the end of `src`.
#[inline]
pub(crate) fn shift_right(src: &[u64], shift: usize, dst: &mut [u64]) {
    let words = shift / 64;
    let bits = shift % 64;

    for (i, d) in dst.iter_mut().enumerate() {
        let lo = src.get(i + words).copied().unwrap_or(0);

        *d = if bits == 0 {
            lo
        } else {
            let hi = src.get(i + words + 1).copied().unwrap_or(0);
            (lo >> bits) | (hi << (64 - bits))
        };
    }
}

/// Clears every bit at position `bits` or above.
#[inline]
pub(crate) fn mask_low_bits(limbs: &mut [u64], bits: usize) {
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = 64 * i;

        if start >= bits {
            *limb = 0;
        } else if bits - start < 64 {
            *limb &= (1u64 << (bits - start)) - 1;
        }
    }
}

/// Number of significant bits, i.e. degree + 1 of the polynomial, or 0 for
/// the zero polynomial.
#[inline]
pub(crate) fn bit_length(limbs: &[u64]) -> usize {
    limbs
        .iter()
        .rposition(|&w| w != 0)
        .map(|i| 64 * i + (64 - limbs[i].leading_zeros() as usize))
        .unwrap_or(0)
}

#[inline]
pub(crate) fn is_zero(limbs: &[u64]) -> bool {
    limbs.iter().all(|&w| w == 0)
}

/// True when the slice encodes the constant polynomial 1.
#[inline]
pub(crate) fn is_one(limbs: &[u64]) -> bool {
    match limbs.split_first() {
        Some((&first, rest)) => first == 1 && is_zero(rest),
        None => false,
    }
}
