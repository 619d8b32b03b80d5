use exactint::{BigInt, ErrorCode};

fn samples() -> Vec<BigInt> {
    let mut values: Vec<BigInt> = [0i128, 1, -1, 5, -5, 127, -128, 1 << 70, -(1 << 70), i128::MIN]
        .iter()
        .map(|&v| BigInt::from(v))
        .collect();
    values.push("-123456789012345678901234567890123456789012345".parse().unwrap());
    values.push("98765432109876543210987654321098765432109876543".parse().unwrap());
    values
}

fn neg_sub_one(v: &BigInt) -> BigInt {
    (-v.clone()).sub(&BigInt::from(1)).unwrap()
}

#[test]
fn test_literals() {
    let minus_one = BigInt::from(-1);
    let five = BigInt::from(5);
    assert_eq!(minus_one.bitand(&five).unwrap(), five);
    assert_eq!(minus_one.bitor(&five).unwrap(), minus_one);
}

#[test]
fn test_identities() {
    let zero = BigInt::zero();
    let minus_one = BigInt::from(-1);
    for v in samples() {
        assert_eq!(v.bitand(&v).unwrap(), v);
        assert_eq!(v.bitor(&v).unwrap(), v);
        assert!(v.bitxor(&v).unwrap().is_zero());
        assert!(v.bitand(&zero).unwrap().is_zero());
        assert_eq!(v.bitor(&zero).unwrap(), v);
        assert_eq!(v.bitxor(&zero).unwrap(), v);
        assert_eq!(v.bitand(&minus_one).unwrap(), v);
        assert_eq!(v.bitor(&minus_one).unwrap(), minus_one);

        let not = v.not().unwrap();
        assert_eq!(not, neg_sub_one(&v));
        assert_eq!(not.not().unwrap(), v);
    }
}

#[test]
fn test_commutative() {
    let values = samples();
    for a in &values {
        for b in &values {
            assert_eq!(a.bitand(b).unwrap(), b.bitand(a).unwrap());
            assert_eq!(a.bitor(b).unwrap(), b.bitor(a).unwrap());
            assert_eq!(a.bitxor(b).unwrap(), b.bitxor(a).unwrap());
        }
    }
}

#[test]
fn test_sign_extension() {
    // The short operand is negative: its missing high words are all ones.
    let short = BigInt::from(-2);
    let long = BigInt::power_of_two(200).unwrap().add(&BigInt::from(3)).unwrap();
    let expected = BigInt::power_of_two(200).unwrap().add(&BigInt::from(2)).unwrap();
    assert_eq!(short.bitand(&long).unwrap(), expected);

    // The short operand is positive: its missing high words are zero.
    assert_eq!(BigInt::from(6).bitand(&long).unwrap(), BigInt::from(2));
}

#[test]
fn test_assign() {
    let mut x = BigInt::from(-8);
    let y = BigInt::from(0xFF);
    x.bitand_assign(&y).unwrap();
    assert_eq!(x, BigInt::from(0xF8));
    x.bitor_assign(&BigInt::from(-256)).unwrap();
    assert_eq!(x, BigInt::from(-8));
    x.bitxor_assign(&BigInt::from(-1)).unwrap();
    assert_eq!(x, BigInt::from(7));

    let mut same = BigInt::from(-42);
    let copy = same.clone();
    same.bitand_assign(&copy).unwrap();
    assert_eq!(same, copy);
}

#[test]
fn test_twos_complement_bytes() {
    for v in samples() {
        let bytes = v.to_twos_complement_bytes(0).unwrap();
        assert_eq!(BigInt::from_twos_complement_bytes(&bytes).unwrap(), v);

        let padded = v.to_twos_complement_bytes(bytes.len() + 5).unwrap();
        assert_eq!(padded.len(), bytes.len() + 5);
        assert_eq!(BigInt::from_twos_complement_bytes(&padded).unwrap(), v);
    }

    for &v in &[0i64, 1, -1, 255, -256, i64::MIN, i64::MAX] {
        let bytes = BigInt::from(v).to_twos_complement_bytes(8).unwrap();
        assert_eq!(bytes, v.to_le_bytes());
    }

    assert_eq!(BigInt::from_twos_complement_bytes(&[0x80]).unwrap(), BigInt::from(-128));
    let err = BigInt::from_twos_complement_bytes(&[]).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::EmptyBuffer);
}
