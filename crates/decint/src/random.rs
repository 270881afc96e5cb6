//! Convenience factories: factorial and a random-digit generator.

use rand::Rng;

use crate::bigint::{BigInt, Digit};

/// `n!` by running scalar multiplication.
#[must_use]
pub fn factorial(n: u32) -> BigInt {
    let mut res = BigInt::from(1);
    for i in 2..=Digit::from(n) {
        res = res.mul_small(i);
    }
    res
}

/// A random integer with `n` decimal characters.
///
/// The leading character is drawn from `[0, 9]` (and may be zero); every
/// later character is drawn from `[1, 9]`, so the value never contains an
/// interior zero. An unusual distribution, kept for compatibility with the
/// generator this one replaces.
#[must_use]
pub fn rand_bigint(n: u32) -> BigInt {
    let mut rng = rand::rng();
    let mut s = String::with_capacity(n as usize);
    s.push(char::from(b'0' + rng.random_range(0..=9u8)));
    for _ in 2..=n {
        s.push(char::from(b'0' + rng.random_range(1..=9u8)));
    }
    s.parse().expect("generated string is all digits")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_factorials() {
        assert_eq!(factorial(0), BigInt::from(1));
        assert_eq!(factorial(1), BigInt::from(1));
        assert_eq!(factorial(5), BigInt::from(120));
        assert_eq!(factorial(10), BigInt::from(3628800));
        assert_eq!(factorial(20).to_string(), "2432902008176640000");
    }

    #[test]
    fn rand_digit_count_and_alphabet() {
        for _ in 0..20 {
            let x = rand_bigint(30);
            let s = x.to_string();
            assert!(s.len() <= 30);
            // Interior characters never include zero.
            assert!(s[1..].bytes().all(|b| (b'1'..=b'9').contains(&b)));
        }
    }

    #[test]
    fn rand_single_digit() {
        let x = rand_bigint(1);
        assert!(x >= BigInt::new() && x < BigInt::from(10));
    }
}
