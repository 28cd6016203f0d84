use groupnum::{BigInt, Error};
use num_traits::Zero;

#[test]
fn round_trip_formatting() {
    for (input, formatted) in [
        ("0", "0"),
        ("7", "7"),
        ("42", "42"),
        ("999", "999"),
        ("1000", "1,000"),
        ("1987210", "1,987,210"),
        ("1000000", "1,000,000"),
        ("123456789012", "123,456,789,012"),
    ] {
        let n: BigInt = input.parse().unwrap();
        assert_eq!(n.to_string(), formatted);
        assert_eq!(n.to_plain_string(), input);
        assert!(!n.is_negative());
    }
}

#[test]
fn leading_zeros_are_pruned() {
    let n: BigInt = "000123".parse().unwrap();
    assert_eq!(n.limb_count(), 1);
    assert_eq!(n.to_string(), "123");

    let n: BigInt = "0000".parse().unwrap();
    assert_eq!(n.limb_count(), 1);
    assert_eq!(n.to_string(), "0");
}

#[test]
fn zero_identity() {
    let zero: BigInt = "0".parse().unwrap();
    assert_eq!(zero.limb_count(), 1);
    assert_eq!(zero.to_string(), "0");
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert_eq!(zero, BigInt::default());
}

#[test]
fn rejects_malformed_input() {
    for input in ["", "12a4", "-5", "+5", " 12", "1_000", "12.5"] {
        assert_eq!(input.parse::<BigInt>(), Err(Error::InvalidFormat));
    }
}

#[test]
fn from_primitives() {
    assert_eq!(BigInt::from(0u32).to_string(), "0");
    assert_eq!(BigInt::from(999u32).to_string(), "999");
    assert_eq!(BigInt::from(1000u32).to_string(), "1,000");
    assert_eq!(
        BigInt::from(u64::MAX).to_string(),
        "18,446,744,073,709,551,615"
    );
}

#[test]
fn limb_accessors() {
    let n: BigInt = "1987210".parse().unwrap();
    assert_eq!(n.limb_count(), 3);
    assert_eq!(n.limb(0), Some(1));
    assert_eq!(n.limb(1), Some(987));
    assert_eq!(n.limb(2), Some(210));
    assert_eq!(n.limb(3), None);
    assert_eq!(n.limbs().collect::<Vec<_>>(), [1, 987, 210]);
}

#[test]
fn debug_shows_the_formatted_value() {
    let n: BigInt = "1000".parse().unwrap();
    assert_eq!(format!("{:?}", n), "BigInt(1,000)");
}
