use exactint::{BigInt, ErrorCode};

#[test]
fn test_small_powers_of_five() {
    let expected = [1, 5, 25, 125, 625];
    for (e, &value) in expected.iter().enumerate() {
        assert_eq!(BigInt::power_of_five(e as i64).unwrap(), BigInt::from(value));
    }
}

#[test]
fn test_ten_is_five_times_two() {
    for k in [0i64, 1, 2, 19, 20, 27, 28, 64, 100, 343, 1000, 2500] {
        let five = BigInt::power_of_five(k).unwrap();
        let two = BigInt::power_of_two(k).unwrap();
        let ten = BigInt::power_of_ten(k).unwrap();
        assert_eq!(five.mul(&two).unwrap(), ten, "k = {}", k);
        assert_eq!(BigInt::from(10).pow(k as u32).unwrap(), ten, "k = {}", k);
    }
}

#[test]
fn test_power_of_ten_text() {
    let ten = BigInt::power_of_ten(50).unwrap();
    let text = ten.to_string();
    assert_eq!(text.len(), 51);
    assert!(text.starts_with('1'));
    assert!(text[1..].bytes().all(|b| b == b'0'));
}

#[test]
fn test_set_power() {
    let mut x = BigInt::from(-9);
    x.set_power_of_two(70).unwrap();
    assert_eq!(x.to_u128(), Some(1 << 70));
    x.set_power_of_five(3).unwrap();
    assert_eq!(x, BigInt::from(125));
    x.set_power_of_ten(3).unwrap();
    assert_eq!(x, BigInt::from(1000));

    // A rejected exponent leaves the destination alone.
    let err = x.set_power_of_ten(-1).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::NegativeExponent);
    assert_eq!(x, BigInt::from(1000));
}

#[test]
fn test_exponent_errors() {
    for err in [
        BigInt::power_of_two(-1).unwrap_err(),
        BigInt::power_of_five(-5).unwrap_err(),
        BigInt::power_of_ten(i64::MIN).unwrap_err(),
    ] {
        assert_eq!(*err.code(), ErrorCode::NegativeExponent);
        assert!(err.is_invalid_argument());
    }

    let err = BigInt::power_of_ten(i64::MAX).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::ExponentTooLarge);
}

#[test]
fn test_bit_length() {
    assert_eq!(BigInt::zero().bit_length(), 0);
    assert_eq!(BigInt::from(1).bit_length(), 1);
    assert_eq!(BigInt::from(-1).bit_length(), 1);
    assert_eq!(BigInt::from(u64::MAX).bit_length(), 64);
    assert_eq!(BigInt::from(u128::MAX).bit_length(), 128);
    for e in [0i64, 1, 63, 64, 65, 1000] {
        assert_eq!(BigInt::power_of_two(e).unwrap().bit_length(), e as u64 + 1);
    }
}

#[test]
fn test_pow() {
    assert_eq!(BigInt::from(-2).pow(63).unwrap(), BigInt::from(i64::MIN));
    assert_eq!(BigInt::from(7).pow(1).unwrap(), BigInt::from(7));
    assert_eq!(
        BigInt::from(3).pow(100).unwrap().to_string(),
        "515377520732011331036461129765621272702107522001",
    );
}
