use polyshare::{FixedRandom, Share, ShareError, ShareSet, reconstruct, split};

fn sample_set(num_shares: usize) -> ShareSet {
    let blob: Vec<u8> = (0..6 * 2).map(|i| 0x10 + i as u8).collect();
    split(b"secret", 3, num_shares, &mut FixedRandom::new(blob)).unwrap()
}

#[test]
fn listing_round_trips_through_text() {
    let set = sample_set(12);
    let listing = set.listing();

    let parsed = ShareSet::from_listing(&listing, 3).unwrap();
    assert_eq!(parsed, set);
    assert_eq!(parsed.reconstruct().unwrap().as_bytes(), b"secret");
}

#[test]
fn listing_width_follows_largest_index() {
    let listing = sample_set(9).listing();
    assert!(listing.lines().all(|line| line.as_bytes()[1] == b'-'));

    let listing = sample_set(1000).listing();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 1000);
    assert!(lines[0].starts_with("0001-"));
    assert!(lines[99].starts_with("0100-"));
    assert!(lines[999].starts_with("1000-"));
    assert!(!listing.ends_with('\n'));
}

#[test]
fn single_shares_use_minimal_index() {
    let set = sample_set(1000);
    let share = set.get(42).unwrap();

    let text = share.to_string();
    assert!(text.starts_with("42-"));
    assert_eq!(text.len(), 3 + 12);
    assert_eq!(text.parse::<Share>().unwrap(), *share);
}

#[test]
fn binary_encoding_is_big_endian() {
    let set = sample_set(1000);
    let share = set.get(1000).unwrap();

    let bytes = share.to_bytes();
    assert_eq!(&bytes[..2], &[0x03u8, 0xe8]);
    assert_eq!(&bytes[2..], share.value());
    assert_eq!(Share::from_bytes(&bytes).unwrap(), *share);
}

#[test]
fn parsed_shares_reconstruct() {
    let set = sample_set(5);
    let lines: Vec<String> = set.iter().map(|share| share.to_string()).collect();

    let shares = [&lines[4], &lines[0], &lines[2]]
        .into_iter()
        .map(|line| line.parse::<Share>())
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(reconstruct(&shares, 3).unwrap().as_bytes(), b"secret");
}

#[test]
fn malformed_text_rejected() {
    for bad in ["", "12", "-00ff", "1-", "1-abc", "1-gg", "65536-00", "one-00"] {
        assert!(
            matches!(bad.parse::<Share>(), Err(ShareError::MalformedShare(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn parsed_index_zero_rejected_on_reconstruct() {
    let set = sample_set(5);
    let mut shares = set.shares()[..2].to_vec();
    shares.push(format!("0-{}", hex::encode(b"secret")).parse().unwrap());

    assert_eq!(
        reconstruct(&shares, 3).unwrap_err(),
        ShareError::InvalidIndex(0)
    );
}

#[test]
fn listing_threshold_checked() {
    let listing = sample_set(4).listing();

    assert!(matches!(
        ShareSet::from_listing(&listing, 5),
        Err(ShareError::InvalidParameters { .. })
    ));
    assert!(matches!(
        ShareSet::from_listing(&listing, 0),
        Err(ShareError::InvalidParameters { .. })
    ));
}
