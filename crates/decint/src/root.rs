//! Integer m-th root: digit-wise binary search for short magnitudes,
//! recursion plus one Newton step and a bounded window search otherwise.

use crate::bigint::{BigInt, Digit};
use crate::constants::BASE;
use crate::error::BigIntError;

impl BigInt {
    /// `⌊self^(1/m)⌋`.
    ///
    /// Fails with `NegativeRadicand` when `m <= 0` or when `m` is even and
    /// `self` is negative. `m == 1` and zero return the value unchanged;
    /// `m == 2` delegates to [`BigInt::sqrt`].
    pub fn root(&self, m: i64) -> Result<BigInt, BigIntError> {
        if m <= 0 || (m % 2 == 0 && self.is_negative()) {
            return Err(BigIntError::NegativeRadicand);
        }
        if m == 1 || self.is_zero() {
            return Ok(self.clone());
        }
        if m == 2 {
            return self.sqrt();
        }
        let n = self.len() as i64;
        if n <= m {
            // Single-digit result
            let (mut l, mut r) = (0 as Digit, BASE - 1);
            while l < r {
                let mid = (l + r + 1) >> 1;
                if BigInt::from(mid).pow(m as u64) <= *self {
                    l = mid;
                } else {
                    r = mid - 1;
                }
            }
            return Ok(BigInt::from(l));
        }
        if n <= m * 2 {
            // Two-digit result: search the high digit, then the low one.
            let mut res = BigInt {
                digits: vec![0, 0],
                non_negative: true,
            };
            let (mut l, mut r) = (0 as Digit, BASE - 1);
            while l < r {
                let mid = (l + r + 1) >> 1;
                res.digits[1] = mid;
                if res.pow(m as u64) <= *self {
                    l = mid;
                } else {
                    r = mid - 1;
                }
            }
            res.digits[1] = l;
            let (mut l, mut r) = (0 as Digit, BASE - 1);
            while l < r {
                let mid = (l + r + 1) >> 1;
                res.digits[0] = mid;
                if res.pow(m as u64) <= *self {
                    l = mid;
                } else {
                    r = mid - 1;
                }
            }
            res.digits[0] = l;
            res.trim();
            return Ok(res);
        }
        // Recurse on the high digits, shift back, one Newton step, then a
        // window search around the low digit.
        let t = (n / m / 2) as usize;
        let s = (self.move_r(t * m as usize).root(m)? + 1).move_l(t);
        let mut res = (&s.mul_small(m - 1) + &(self / &s.pow(m as u64 - 1))) / m;
        let low = res.digits[0];
        let (mut l, mut r) = ((low - 100).max(0), (low + 100).min(BASE - 1));
        while l < r {
            let mid = (l + r + 1) >> 1;
            res.digits[0] = mid;
            if res.pow(m as u64) <= *self {
                l = mid;
            } else {
                r = mid - 1;
            }
        }
        res.digits[0] = l;
        res.trim();
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BigIntError;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    fn assert_floor_root(a: &BigInt, m: i64) {
        let r = a.root(m).unwrap();
        assert!(r.pow(m as u64) <= *a, "root({m}) overshoots for {a}");
        assert!(
            (&r + 1).pow(m as u64) > *a,
            "root({m}) undershoots for {a}: got {r}"
        );
    }

    #[test]
    fn invalid_orders_report() {
        assert_eq!(big("8").root(0), Err(BigIntError::NegativeRadicand));
        assert_eq!(big("8").root(-3), Err(BigIntError::NegativeRadicand));
        assert_eq!(big("-8").root(2), Err(BigIntError::NegativeRadicand));
        assert_eq!(big("-8").root(4), Err(BigIntError::NegativeRadicand));
    }

    #[test]
    fn identity_orders() {
        assert_eq!(big("-8").root(1).unwrap(), big("-8"));
        assert_eq!(big("0").root(5).unwrap(), big("0"));
        assert_eq!(big("12345").root(2).unwrap(), big("111"));
    }

    #[test]
    fn single_digit_search() {
        assert_eq!(big("27").root(3).unwrap(), big("3"));
        assert_eq!(big("26").root(3).unwrap(), big("2"));
        assert_eq!(big("1000000").root(3).unwrap(), big("100"));
    }

    #[test]
    fn two_digit_search() {
        // 10^100 has 13 base-digits: m=10 takes the two-digit branch.
        assert_eq!(big("10").pow(100).root(10).unwrap(), big("10").pow(10));
        assert_floor_root(&(&big("10").pow(100) + 12345), 10);
    }

    #[test]
    fn recursive_path() {
        // 10^420 has 53 base-digits, past 2m for m=3.
        assert_eq!(big("10").pow(420).root(3).unwrap(), big("10").pow(140));
        assert_eq!(big("2").pow(900).root(3).unwrap(), big("2").pow(300));
        assert_floor_root(&(&big("10").pow(421) + &big("987654321")), 3);
        assert_floor_root(&big("10").pow(427), 5);
    }

    #[test]
    fn exact_powers_round_trip() {
        for m in [3i64, 5, 7] {
            let base = big("123456789123456789");
            let p = base.pow(m as u64);
            assert_eq!(p.root(m).unwrap(), base, "m = {m}");
        }
    }
}
