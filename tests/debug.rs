use exactint::{BigInt, Error, Sign};

#[test]
fn bigint() {
    assert_eq!(format!("{:?}", BigInt::zero()), "BigInt(0)");
    assert_eq!(format!("{:?}", BigInt::from(-12)), "BigInt(-12)");
    assert_eq!(format!("{:?}", vec![BigInt::from(1)]), "[BigInt(1)]");
}

#[test]
fn sign() {
    assert_eq!(format!("{:?}", Sign::Negative), "Negative");
    assert_eq!(format!("{:?}", BigInt::from(3).sign()), "Positive");
}

#[test]
fn error() {
    let err: Error = "1x".parse::<BigInt>().unwrap_err();
    let expected = "Error(\"invalid decimal digit\", column: 2)";
    assert_eq!(format!("{:?}", err), expected);
    assert_eq!(err.to_string(), "invalid decimal digit at column 2");

    let err = BigInt::from(1).div(&BigInt::zero()).unwrap_err();
    assert_eq!(format!("{:?}", err), "Error(\"division by zero\", column: 0)");
}

#[test]
fn error_is_std_error() {
    fn assert_std_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    let err = "".parse::<BigInt>().unwrap_err();
    assert_std_error(&err);
    assert_eq!(err.to_string(), "empty decimal text");
}
