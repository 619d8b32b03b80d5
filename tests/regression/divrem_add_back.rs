// Quotient digit estimates that are one too large must be corrected by
// adding the divisor back. These operands hit that path for 32-bit and
// 64-bit words respectively.

use exactint::BigInt;

fn check(n: &str, d: &str, q: &str, r: &str) {
    let n: BigInt = n.parse().unwrap();
    let d: BigInt = d.parse().unwrap();
    let (quotient, remainder) = n.div_rem(&d).unwrap();
    assert_eq!(quotient.to_string(), q);
    assert_eq!(remainder.to_string(), r);
    assert_eq!(quotient.mul(&d).unwrap().add(&remainder).unwrap(), n);
}

#[test]
fn test() {
    check(
        "170141183420855150474555134919112130560",
        "39614081257132168796771975169",
        "4294967294",
        "39614081257132168792477007874",
    );
    check(
        "57896044618658097708646941636650613544717097621216448811677614281724547563520",
        "3138550867693340381917894711603833208051177722232017256449",
        "18446744073709551614",
        "3138550867693340381917894711603833208032730978158307704834",
    );
}
