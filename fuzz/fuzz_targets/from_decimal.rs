#![no_main]
use exactint::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(x) = s.parse::<BigInt>() {
            let text = x.to_string();
            assert_eq!(text.parse::<BigInt>().unwrap(), x);
        }
    }
});
