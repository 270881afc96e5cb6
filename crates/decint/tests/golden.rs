//! Golden end-to-end scenarios and threshold boundary cases, all against
//! known values.

use decint::{factorial, BigInt, BigIntError};

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn golden_factorial_100() {
    let f = factorial(100);
    let s = f.to_string();
    assert_eq!(s.len(), 158);
    assert_eq!(
        s,
        "93326215443944152681699238856266700490715968264381621468592963895217\
         599993229915608941463976156518286253697920827223758251185210916864\
         000000000000000000000000"
    );
    assert!(s.ends_with(&"0".repeat(24)));
}

#[test]
fn golden_30_digit_product() {
    let a = big("123456789012345678901234567890");
    let b = big("987654321098765432109876543210");
    assert_eq!(
        (&a * &b).to_string(),
        "121932631137021795226185032733622923332237463801111263526900"
    );
}

#[test]
fn golden_ten_to_the_thousand() {
    let p = big("10").pow(1000);
    let mut want = String::from("1");
    want.push_str(&"0".repeat(1000));
    assert_eq!(p.to_string(), want);
}

#[test]
fn golden_modpow() {
    let got = big("1000000007").modpow(2, &big("999999937")).unwrap();
    assert_eq!(got, big("4900"));
}

#[test]
fn golden_sqrt_of_power_of_two() {
    let r = big("2").pow(1024).sqrt().unwrap();
    assert_eq!(r, big("2").pow(512));
}

#[test]
fn golden_gcd() {
    assert_eq!(big("461952").gcd(&big("116298")), big("18"));
}

#[test]
fn int64_extremes_round_trip() {
    for v in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX] {
        let x = BigInt::from(v);
        assert_eq!(x.to_i64(), Some(v));
        assert_eq!(x.to_string(), v.to_string());
        assert_eq!(big(&v.to_string()), x);
    }
}

#[test]
fn products_across_fft_threshold() {
    // Lengths 1x1 .. 4x4 base-10^8 digits straddle FFT_LIMIT = 8 from both
    // sides; all must agree with the digit-by-digit expected strings.
    let a = big("99999999999999999999999999999999"); // 4 digits
    let b = big("9999999999999999"); // 2 digits
    assert_eq!(
        (&a * &b).to_string(),
        "999999999999999899999999999999990000000000000001"
    );
    let c = big("12345678"); // 1 digit
    let d = big("87654321"); // 1 digit
    assert_eq!((&c * &d).to_string(), "1082152022374638");
    assert_eq!(
        (&a * &c).to_string(),
        "1234567799999999999999999999999987654322"
    );
}

#[test]
fn division_across_newton_threshold() {
    // Quotient lengths just below and above NEWTON_DIV_LIMIT = 32 digits.
    for quotient_digits in [30usize, 33, 40] {
        let b = big("999999000000999999");
        let q_true = big("10").pow(8 * quotient_digits as u64);
        let a = &(&q_true * &b) + &big("12345");
        let (q, r) = a.divmod(&b).unwrap();
        assert_eq!(q, q_true, "quotient at {quotient_digits} digits");
        assert_eq!(r, big("12345"));
    }
}

#[test]
fn sqrt_across_newton_threshold() {
    // 48 base-digits is the last Heron size; 49+ goes through Newton.
    for decimal_digits in [383usize, 385, 401] {
        let x = &big("10").pow(decimal_digits as u64) + &big("987654321");
        let r = x.sqrt().unwrap();
        assert!(r.square() <= x);
        assert!((&r + 1).square() > x);
    }
}

#[test]
fn subtraction_trims_leading_zeros() {
    let a = big("100000000000000000000000000");
    let b = big("99999999999999999999999999");
    let d = &a - &b;
    assert_eq!(d, big("1"));
    assert_eq!(d.to_string(), "1");
}

#[test]
fn unary_complement_identity() {
    for s in ["0", "1", "-1", "123456789012345678901234567890"] {
        let x = big(s);
        assert_eq!(!&x, &(-&x) - 1);
        assert_eq!(!&!&x, x);
    }
}

#[test]
fn shift_examples() {
    assert_eq!(big("1") << 64u64, big("18446744073709551616"));
    assert_eq!(big("-3") >> 1u64, big("-1"));
    assert_eq!(big("-1") >> 5u64, big("0"));
}

#[test]
fn error_surface() {
    assert_eq!(big("1").divmod(&big("0")), Err(BigIntError::ZeroDivision));
    assert_eq!(big("-1").sqrt(), Err(BigIntError::NegativeRadicand));
    assert_eq!(big("-16").root(4), Err(BigIntError::NegativeRadicand));
    assert_eq!(big("16").root(0), Err(BigIntError::NegativeRadicand));
}

#[test]
fn divmod_sign_conventions() {
    let table = [
        ("17", "5", "3", "2"),
        ("-17", "5", "-3", "-2"),
        ("17", "-5", "-3", "2"),
        ("-17", "-5", "3", "-2"),
    ];
    for (a, b, q, r) in table {
        let (got_q, got_r) = big(a).divmod(&big(b)).unwrap();
        assert_eq!(got_q, big(q), "{a} / {b}");
        assert_eq!(got_r, big(r), "{a} % {b}");
    }
}

#[test]
fn lcm_golden() {
    assert_eq!(big("461952").lcm(&big("116298")), big("2984671872"));
}
