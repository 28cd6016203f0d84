use groupnum::BigInt;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn serializes_as_plain_decimal() {
    assert_eq!(
        serde_json::to_string(&big("1987210")).unwrap(),
        "\"1987210\""
    );
    assert_eq!(serde_json::to_string(&big("0")).unwrap(), "\"0\"");
}

#[test]
fn negative_results_round_trip() {
    let n = big("999") - big("1000");
    let json = serde_json::to_string(&n).unwrap();
    assert_eq!(json, "\"-1\"");

    let back: BigInt = serde_json::from_str(&json).unwrap();
    assert!(back.is_negative());
    assert_eq!(back, n);
}

#[test]
fn deserializes_digit_strings() {
    let n: BigInt = serde_json::from_str("\"1000\"").unwrap();
    assert_eq!(n.to_string(), "1,000");

    assert!(serde_json::from_str::<BigInt>("\"12a\"").is_err());
    assert!(serde_json::from_str::<BigInt>("\"\"").is_err());
    // numbers must arrive as strings
    assert!(serde_json::from_str::<BigInt>("1000").is_err());
}

#[test]
fn negative_zero_normalizes() {
    let n: BigInt = serde_json::from_str("\"-0\"").unwrap();
    assert!(!n.is_negative());
    assert_eq!(n.to_string(), "0");
}
