// Karatsuba on operands of very different length, and on operands whose
// low halves are all zero words.

use exactint::BigInt;

#[test]
fn test() {
    let long = BigInt::power_of_ten(3000).unwrap().sub(&BigInt::from(1)).unwrap();
    let short = BigInt::power_of_ten(700).unwrap().add(&BigInt::from(1)).unwrap();
    let product = long.mul(&short).unwrap();
    assert_eq!(product.div(&short).unwrap(), long);
    assert!(product.rem(&long).unwrap().is_zero());

    // 2^4000 * 2^3000 has nothing but zero words below the top one.
    let x = BigInt::power_of_two(4000).unwrap();
    let y = BigInt::power_of_two(3000).unwrap();
    assert_eq!(x.mul(&y).unwrap(), BigInt::power_of_two(7000).unwrap());
}
