#![no_main]

use libfuzzer_sys::fuzz_target;

use decint::BigInt;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing must never panic; a successful parse must round-trip.
    if let Ok(x) = s.parse::<BigInt>() {
        let printed = x.to_string();
        let back: BigInt = printed.parse().unwrap();
        assert_eq!(back, x, "round trip through {printed}");
    }
});
