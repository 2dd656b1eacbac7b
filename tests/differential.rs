mod common;

use common::ReferenceField;
use polyshare::{BinaryField, FixedRandom, split};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn random_blob(seed: u64, len: usize) -> Vec<u8> {
    let mut blob = vec![0u8; len];
    ChaCha20Rng::seed_from_u64(seed).fill_bytes(&mut blob);
    blob
}

#[test]
fn listing_matches_reference_engine() {
    let secret = b"abcdef0123456789";
    let (threshold, num_shares) = (400, 1000);
    let blob = random_blob(0x5353_5353, secret.len() * (threshold - 1));

    let set = split(secret, threshold, num_shares, &mut FixedRandom::new(blob.clone())).unwrap();

    let reference = ReferenceField::search(128);
    let expected = reference.listing(secret, threshold, num_shares, &blob);

    assert_eq!(set.listing(), expected);
}

#[test]
fn listing_layout() {
    let secret = b"abcdef0123456789";
    let blob = random_blob(1, 16 * 399);

    let listing = split(secret, 400, 1000, &mut FixedRandom::new(blob))
        .unwrap()
        .listing();
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(lines.len(), 1000);
    assert!(lines[0].starts_with("0001-"));
    assert!(lines[999].starts_with("1000-"));
    assert!(lines.iter().all(|line| line.len() == 5 + 32));
}

#[test]
fn moduli_match_reference_search() {
    for len in 1..=16usize {
        let field = BinaryField::for_secret_len(len).unwrap();
        let reference = ReferenceField::search(8 * len as u64);

        assert_eq!(field.modulus().taps(), reference.taps(), "degree {}", 8 * len);
    }
}

#[test]
fn listings_match_reference_for_every_length() {
    let (threshold, num_shares) = (5, 20);

    for len in 1..=128usize {
        let secret = random_blob(len as u64, len);
        let blob = random_blob(1000 + len as u64, len * (threshold - 1));

        let set = split(&secret, threshold, num_shares, &mut FixedRandom::new(blob.clone())).unwrap();

        let taps = BinaryField::for_secret_len(len).unwrap().modulus().taps();
        let reference = ReferenceField::with_taps(8 * len as u64, taps);

        assert_eq!(
            set.listing(),
            reference.listing(&secret, threshold, num_shares, &blob),
            "secret length {len}"
        );
    }
}
