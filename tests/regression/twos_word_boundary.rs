// Values at a power-of-two boundary need an extra extension word in one
// direction but not the other.

use exactint::BigInt;

#[test]
fn test() {
    for bits in [7i64, 8, 15, 16, 31, 32, 63, 64, 127, 128] {
        let p = BigInt::power_of_two(bits).unwrap();
        let minus_p = -p.clone();
        let one = BigInt::from(1);

        // -2^bits is representable in one byte fewer than 2^bits.
        let neg = minus_p.to_twos_complement_bytes(0).unwrap();
        let pos = p.to_twos_complement_bytes(0).unwrap();
        assert!(neg.len() <= pos.len(), "bits = {}", bits);
        assert_eq!(BigInt::from_twos_complement_bytes(&neg).unwrap(), minus_p);
        assert_eq!(BigInt::from_twos_complement_bytes(&pos).unwrap(), p);

        let below = minus_p.sub(&one).unwrap();
        assert_eq!(below.bitand(&minus_p).unwrap(), minus_p.sub(&p).unwrap());
        assert_eq!(below.not().unwrap(), p);
    }
}
