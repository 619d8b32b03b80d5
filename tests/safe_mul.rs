use exactint::{
    safe_mul_i16, safe_mul_i32, safe_mul_i64, safe_mul_i8, safe_mul_u16, safe_mul_u32,
    safe_mul_u64, safe_mul_u8,
};

#[test]
fn test_unsigned() {
    assert_eq!(safe_mul_u8(255, 2), (1, 254));
    assert_eq!(safe_mul_u8(255, 4), (3, 252));
    assert_eq!(safe_mul_u16(u16::MAX, u16::MAX), (u16::MAX - 1, 1));
    assert_eq!(safe_mul_u32(1 << 31, 2), (1, 0));
    assert_eq!(safe_mul_u64(u64::MAX, 0), (0, 0));
    assert_eq!(safe_mul_u64(u64::MAX, u64::MAX), (u64::MAX - 1, 1));
}

#[test]
fn test_signed() {
    assert_eq!(safe_mul_i64(-1, 1), (false, -1, -1));
    assert_eq!(safe_mul_i64(-1, -1), (false, 0, 1));
    assert_eq!(safe_mul_i64(i64::MAX, 2), (true, 0, -2));
    assert_eq!(safe_mul_i32(i32::MIN, 1), (false, -1, i32::MIN));
    assert_eq!(safe_mul_i16(300, 300), (true, 1, 24464));
    assert_eq!(safe_mul_i8(-128, -1), (true, 0, -128));
    assert_eq!(safe_mul_i8(-128, -128), (true, 64, 0));
    assert_eq!(safe_mul_i8(-64, 2), (false, -1, -128));
}

#[test]
fn test_commutative() {
    let values = [0i64, 1, -1, 2, -3, 1 << 40, i64::MAX, i64::MIN, -(1 << 33)];
    for &a in &values {
        for &b in &values {
            assert_eq!(safe_mul_i64(a, b), safe_mul_i64(b, a));
            assert_eq!(safe_mul_u64(a as u64, b as u64), safe_mul_u64(b as u64, a as u64));

            let (overflow, high, low) = safe_mul_i64(a, b);
            let exact = a as i128 * b as i128;
            assert_eq!(((high as i128) << 64) | (low as u64 as i128), exact);
            assert_eq!(overflow, a.checked_mul(b).is_none());
        }
    }
}

#[test]
fn test_agrees_with_i32() {
    let values = [0i32, 7, -7, 46341, -46341, i32::MAX, i32::MIN];
    for &a in &values {
        for &b in &values {
            let (overflow, _, low) = safe_mul_i32(a, b);
            assert_eq!(overflow, a.checked_mul(b).is_none());
            assert_eq!(low, a.wrapping_mul(b));
        }
    }
}
