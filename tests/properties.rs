use proptest::prelude::*;
use timehash::{
    after, before, decode, encode, ENCODE_ALPHABET, TIME_INTERVAL_END, TIME_INTERVAL_START,
};

fn hash_of_len(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0usize..8, len).prop_map(|values| {
        values
            .into_iter()
            .map(|v| ENCODE_ALPHABET.as_bytes()[v] as char)
            .collect()
    })
}

fn any_hash() -> impl Strategy<Value = String> {
    (1usize..=12).prop_flat_map(hash_of_len)
}

proptest! {
    #[test]
    fn roundtrip_stays_within_the_error_bound(
        t in TIME_INTERVAL_START..TIME_INTERVAL_END,
        precision in 1usize..=10,
    ) {
        let center = decode(&encode(t, precision)).unwrap();
        let bound =
            (TIME_INTERVAL_END - TIME_INTERVAL_START) / 2f64.powi(3 * precision as i32 + 1);
        // A hair of slack for accumulated f64 rounding at deep precision.
        prop_assert!((center - t).abs() <= bound + 1e-6);
    }

    #[test]
    fn lexicographic_order_matches_time_order(
        (a, b) in (1usize..=10).prop_flat_map(|len| (hash_of_len(len), hash_of_len(len))),
    ) {
        // Alphabet order coincides with byte order for "01abcdef".
        if a < b {
            prop_assert!(decode(&a).unwrap() <= decode(&b).unwrap());
        } else if b < a {
            prop_assert!(decode(&b).unwrap() <= decode(&a).unwrap());
        } else {
            prop_assert_eq!(decode(&a).unwrap(), decode(&b).unwrap());
        }
    }

    #[test]
    fn after_inverts_before(hash in any_hash()) {
        if let Some(earlier) = before(&hash).unwrap() {
            prop_assert_eq!(after(&earlier).unwrap(), Some(hash));
        } else {
            // Only the all-zero hash has no predecessor.
            prop_assert!(hash.chars().all(|c| c == '0'));
        }
    }

    #[test]
    fn before_inverts_after(hash in any_hash()) {
        if let Some(later) = after(&hash).unwrap() {
            prop_assert_eq!(before(&later).unwrap(), Some(hash));
        } else {
            prop_assert!(hash.chars().all(|c| c == 'f'));
        }
    }

    #[test]
    fn neighbors_preserve_length_and_validity(hash in any_hash()) {
        for stepped in [before(&hash).unwrap(), after(&hash).unwrap()].into_iter().flatten() {
            prop_assert_eq!(stepped.len(), hash.len());
            prop_assert!(timehash::validate(&stepped));
        }
    }
}
