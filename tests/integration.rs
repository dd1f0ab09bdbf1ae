use chrono::DateTime;
use timehash::{
    after, before, decode, decode_exactly, encode, encode_utc, neighbors, validate, TimeHash,
    TimeHashError, DEFAULT_PRECISION, TIME_INTERVAL_END, TIME_INTERVAL_START,
};

#[test]
fn encode_decode_roundtrip_at_default_precision() {
    let t = 1_516_933_969.398_167;
    let hash = encode(t, DEFAULT_PRECISION);
    assert_eq!(hash.len(), DEFAULT_PRECISION);

    let th = decode_exactly(&hash).unwrap();
    assert!((th.center_value() - t).abs() <= th.error_value());
    assert_eq!(decode(&hash).unwrap(), th.center_value());
}

#[test]
fn precision_controls_the_error_margin() {
    let window = TIME_INTERVAL_END - TIME_INTERVAL_START;
    for precision in 0..=10 {
        let th = TimeHash::from_epoch_seconds(946_728_000.0, precision);
        assert_eq!(th.error_value(), window / 2f64.powi(3 * precision as i32 + 1));
    }
}

#[test]
fn zero_precision_roundtrips_to_the_whole_window() {
    let hash = encode(946_728_000.0, 0);
    assert_eq!(hash, "");
    let th = decode_exactly(&hash).unwrap();
    assert_eq!(th.center_value(), 2_019_686_400.0);
    assert_eq!(th.error_value(), 2_019_686_400.0);
}

#[test]
fn validate_matches_the_alphabet() {
    assert!(validate("01abcdef"));
    assert!(!validate("01abcdefg"));
}

#[test]
fn navigation_covers_borrow_carry_and_exhaustion() {
    assert_eq!(before("a10").unwrap().as_deref(), Some("a0f"));
    assert_eq!(after("a0f").unwrap().as_deref(), Some("a10"));
    assert_eq!(before("000").unwrap(), None);
    assert_eq!(after("fff").unwrap(), None);
}

#[test]
fn neighbors_of_an_encoded_timestamp_bracket_it_in_time() {
    let t = 1_700_000_000.0;
    let hash = encode(t, 8);
    let n = neighbors(&hash).unwrap();

    let earlier = decode(&n.before.unwrap()).unwrap();
    let later = decode(&n.after.unwrap()).unwrap();
    let center = decode(&hash).unwrap();
    assert!(earlier < center && center < later);
}

#[test]
fn stepping_agrees_with_string_navigation() {
    let th = TimeHash::from_epoch_seconds(1_234_567_890.0, 9);
    let hopped = th.step_after(3).unwrap();

    let mut hash = th.hash_code().to_string();
    for _ in 0..3 {
        hash = after(&hash).unwrap().unwrap();
    }
    assert_eq!(hopped.hash_code(), hash);
    assert_eq!(hopped.step_before(3).unwrap(), th);
}

#[test]
fn stepping_out_of_the_window_surfaces_an_error() {
    let last = TimeHash::new("ffffff").unwrap();
    assert_eq!(last.step_after(1), Err(TimeHashError::WindowExhausted));
    assert!(last.step_before(1).is_ok());
}

#[test]
fn utc_encoding_agrees_with_epoch_seconds() {
    let datetime = DateTime::from_timestamp(1_464_310_557, 0).unwrap();
    assert_eq!(
        encode_utc(datetime, 7),
        encode(1_464_310_557.0, 7)
    );
    let th = TimeHash::from_utc(datetime, 7);
    assert_eq!(th.hash_code(), encode_utc(datetime, 7));
}

#[cfg(feature = "serde")]
#[test]
fn serde_timehash_is_the_bare_hash_string() {
    let th = TimeHash::new("af1cef0").unwrap();
    let json = serde_json::to_string(&th).unwrap();
    assert_eq!(json, "\"af1cef0\"");

    let back: TimeHash = serde_json::from_str(&json).unwrap();
    assert_eq!(back, th);
    assert_eq!(back.center(), th.center());

    let invalid: Result<TimeHash, _> = serde_json::from_str("\"not-a-hash\"");
    assert!(invalid.is_err());
}
