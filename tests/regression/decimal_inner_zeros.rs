// Decimal chunks below the most significant one keep their leading zeros.

use exactint::BigInt;

#[test]
fn test() {
    for text in [
        "1000000000000000000000000000000000000001",
        "-100000000000000000000000000000000000000000000000000000000000000007",
        "10000000000000000000",
        "18446744073709551616",
    ] {
        let x: BigInt = text.parse().unwrap();
        assert_eq!(x.to_string(), text);
        assert_eq!(x.to_decimal_string().unwrap(), text);
    }
}
