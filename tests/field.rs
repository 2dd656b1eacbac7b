use polyshare::field::{BinaryField, FieldElement, modulus};
use polyshare::ShareError;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Remainder of `a` divided by `b` over GF(2), both packed in a `u64`.
fn rem(mut a: u64, b: u64) -> u64 {
    let db = 63 - b.leading_zeros();
    while a != 0 && 63 - a.leading_zeros() >= db {
        a ^= b << (63 - a.leading_zeros() - db);
    }
    a
}

fn full_polynomial(field: &BinaryField) -> u64 {
    let mut f = 1u64 << field.degree() | 1;
    for tap in field.modulus().taps() {
        f |= 1 << tap;
    }
    f
}

fn random_element(field: &BinaryField, rng: &mut ChaCha20Rng) -> FieldElement {
    let mut bytes = vec![0u8; field.byte_len()];
    rng.fill_bytes(&mut bytes);
    field.element_from_bytes(&bytes).unwrap()
}

#[test]
fn aes_modulus_for_single_bytes() {
    let field = BinaryField::for_secret_len(1).unwrap();

    assert_eq!(field.degree(), 8);
    assert_eq!(full_polynomial(&field), 0x11b);
    assert_eq!(field.modulus().to_string(), "x^8 + x^4 + x^3 + x + 1");
}

#[test]
fn small_moduli_have_no_factor() {
    for degree in [8u32, 16, 24, 32] {
        let field = BinaryField::new(degree).unwrap();
        let f = full_polynomial(&field);

        for divisor in 2u64..(1 << (degree / 2 + 1)) {
            assert_ne!(rem(f, divisor), 0, "degree {degree} divisible by {divisor:#x}");
        }
    }
}

#[test]
fn moduli_are_pentanomials() {
    for degree in (8..=1024).step_by(8) {
        let taps = modulus::pentanomial(degree).unwrap().taps();

        assert!(degree > taps[0] && taps[0] > taps[1] && taps[1] > taps[2] && taps[2] > 0);
    }
}

#[test]
fn unsupported_degrees() {
    for degree in [0u32, 7, 12, 1025, 1032] {
        assert_eq!(
            BinaryField::new(degree).unwrap_err(),
            ShareError::InvalidFieldDegree(degree)
        );
    }
}

#[test]
fn field_axioms() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    for degree in [8u32, 16, 64, 136, 512, 1024] {
        let field = BinaryField::new(degree).unwrap();

        for _ in 0..20 {
            let a = random_element(&field, &mut rng);
            let b = random_element(&field, &mut rng);
            let c = random_element(&field, &mut rng);

            assert_eq!(field.mul(&a, &b), field.mul(&b, &a));
            assert_eq!(
                field.mul(&field.mul(&a, &b), &c),
                field.mul(&a, &field.mul(&b, &c))
            );
            assert_eq!(
                field.mul(&a, &field.add(&b, &c)),
                field.add(&field.mul(&a, &b), &field.mul(&a, &c))
            );
            assert_eq!(field.square(&a), field.mul(&a, &a));
            assert_eq!(field.mul(&a, &FieldElement::ONE), a);
            assert_eq!(field.add(&a, &a), FieldElement::ZERO);

            if !a.is_zero() {
                let inverse = field.invert(&a).unwrap();
                assert_eq!(field.mul(&a, &inverse), FieldElement::ONE);
            }
        }

        assert_eq!(field.invert(&FieldElement::ZERO), None);
    }
}

#[test]
fn index_multiplication_matches_full() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);

    for degree in [16u32, 24, 72, 1024] {
        let field = BinaryField::new(degree).unwrap();
        let a = random_element(&field, &mut rng);

        for x in [1u16, 2, 3, 255, 256, 1000, u16::MAX] {
            let mut bytes = vec![0u8; field.byte_len()];
            let len = bytes.len();
            bytes[len - 2..].copy_from_slice(&x.to_be_bytes());
            let as_element = field.element_from_bytes(&bytes).unwrap();

            assert_eq!(field.element_from_index(x), as_element);
            assert_eq!(field.mul_small(&a, x), field.mul(&a, &as_element));
        }
    }
}

#[test]
fn frobenius_fixes_every_element() {
    let mut rng = ChaCha20Rng::seed_from_u64(13);

    for degree in [8u32, 40, 128] {
        let field = BinaryField::new(degree).unwrap();
        let a = random_element(&field, &mut rng);

        let mut power = a;
        for _ in 0..degree {
            power = field.square(&power);
        }

        assert_eq!(power, a, "a^(2^{degree}) != a");
    }
}

#[test]
fn interpolation_through_random_polynomial() {
    let mut rng = ChaCha20Rng::seed_from_u64(17);
    let field = BinaryField::new(96).unwrap();

    let coeffs: Vec<FieldElement> = (0..6).map(|_| random_element(&field, &mut rng)).collect();
    let points: Vec<(u16, FieldElement)> = [3u16, 9, 200, 1001, 4, 65535]
        .into_iter()
        .map(|x| (x, field.evaluate(&coeffs, x)))
        .collect();

    assert_eq!(field.lagrange_at_zero(&points), Some(coeffs[0]));
    assert_ne!(field.lagrange_at_zero(&points[..5]), Some(coeffs[0]));
}
