#![no_main]

use libfuzzer_sys::fuzz_target;

use decint::BigInt;
use num_bigint::BigInt as Oracle;

fuzz_target!(|data: &[u8]| {
    // Split the input into two decimal operands of bounded size.
    if data.is_empty() || data.len() > 400 {
        return;
    }
    let mid = data.len() / 2;
    let a: String = data[..mid].iter().map(|b| char::from(b'0' + b % 10)).collect();
    let b: String = data[mid..].iter().map(|b| char::from(b'0' + b % 10)).collect();
    if a.is_empty() || b.is_empty() {
        return;
    }

    let x: BigInt = a.parse().unwrap();
    let y: BigInt = b.parse().unwrap();
    let ox: Oracle = a.parse().unwrap();
    let oy: Oracle = b.parse().unwrap();

    let sum = (&x + &y).to_string();
    assert_eq!(sum, (&ox + &oy).to_string(), "add mismatch");

    let product = (&x * &y).to_string();
    assert_eq!(product, (&ox * &oy).to_string(), "mul mismatch");

    if !y.is_zero() {
        let (q, r) = x.divmod(&y).unwrap();
        assert_eq!(q.to_string(), (&ox / &oy).to_string(), "div mismatch");
        assert_eq!(r.to_string(), (&ox % &oy).to_string(), "rem mismatch");
    }
});
