#![no_main]
use exactint::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mid = data.len() / 2;
    let (a, b) = data.split_at(mid);
    let (x, y) = match (
        BigInt::from_twos_complement_bytes(a),
        BigInt::from_twos_complement_bytes(b),
    ) {
        (Ok(x), Ok(y)) => (x, y),
        _ => return,
    };

    let bytes = x.to_twos_complement_bytes(a.len()).unwrap();
    assert_eq!(BigInt::from_twos_complement_bytes(&bytes).unwrap(), x);

    // a & b == a + b - (a | b)
    let and = x.bitand(&y).unwrap();
    let or = x.bitor(&y).unwrap();
    assert_eq!(and, x.add(&y).unwrap().sub(&or).unwrap());
    assert_eq!(x.bitxor(&y).unwrap(), or.sub(&and).unwrap());

    if !y.is_zero() {
        let (q, r) = x.div_rem(&y).unwrap();
        assert_eq!(q.mul(&y).unwrap().add(&r).unwrap(), x);
    }
});
