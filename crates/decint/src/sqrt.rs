//! Integer square root: Heron iteration for small magnitudes, Newton
//! inverse-square-root with exact refinement for large ones.

use crate::bigint::BigInt;
use crate::constants::{BASE, NEWTON_SQRT_LIMIT, NEWTON_SQRT_MIN_LEVEL};
use crate::error::BigIntError;

impl BigInt {
    /// `⌊√self⌋` for `self >= 0`; `NegativeRadicand` otherwise.
    pub fn sqrt(&self) -> Result<BigInt, BigIntError> {
        if self.is_negative() {
            return Err(BigIntError::NegativeRadicand);
        }
        if self.is_zero() {
            return Ok(BigInt::new());
        }
        if self.len() <= NEWTON_SQRT_LIMIT {
            return Ok(self.sqrt_heron());
        }
        tracing::trace!(digits = self.len(), "newton sqrt path");
        let n = self.len();
        let n2 = n + (n & 1);
        let mut res = (self * &self.newton_invsqrt()).move_r(n2);
        let mut r = self - &res.square();
        let mut delta = BigInt::from(1);
        loop {
            let dr = (&(&res + &res) + &delta) * &delta;
            if dr > r {
                break;
            }
            r.sub_assign_big(&dr);
            res.add_assign_big(&delta);
            delta = &delta + &delta;
        }
        while delta.is_positive() {
            let dr = (&(&res + &res) + &delta) * &delta;
            if dr <= r {
                r.sub_assign_big(&dr);
                res.add_assign_big(&delta);
            }
            delta = delta.half();
        }
        Ok(res)
    }

    /// Heron iteration from an over-estimate, stopping at the first
    /// non-decreasing step. Requires `self > 0`.
    fn sqrt_heron(&self) -> BigInt {
        let mut x0 = BigInt::from(BASE).move_l((self.len() + 2) >> 1);
        let mut x = (&x0 + &(self / &x0)).half();
        while x < x0 {
            std::mem::swap(&mut x, &mut x0);
            x = (&x0 + &(self / &x0)).half();
        }
        x0
    }

    /// Approximate `BASE^(2*n2) / √self` by recursing on the top half of the
    /// digits, one Newton step `(3s - s³·a)/2`, then an expansion/contraction
    /// sweep on the residual. Positional shifts discard digits; the sweep
    /// absorbs the slack.
    fn newton_invsqrt(&self) -> BigInt {
        let n = self.len();
        let n2 = n + (n & 1);
        let k2 = (n2 + 2) / 4 * 2;
        if n <= NEWTON_SQRT_MIN_LEVEL {
            return BigInt::from(1).move_l(n2 << 1) / self.move_l(n2 << 1).sqrt_heron();
        }
        let top = BigInt::from_digits(self.digits[n2 - k2..].to_vec());
        let s = top.newton_invsqrt().move_l((n2 - k2) / 2);
        let cubed = &(&s * &s) * &s;
        let mut x2 = (&(&s + &s) + &s).half() - &(&cubed * self).half().move_r(n2 << 1);
        let mut rx = BigInt::from(1).move_l(n2 << 1) - &(self * &x2.square());
        let mut delta = BigInt::from(1);
        if rx.is_negative() {
            while rx.is_negative() {
                let t = (&(&(&x2 + &x2) - &delta) + &delta.square()) * self;
                x2.sub_assign_big(&delta);
                rx.add_assign_big(&t);
                delta = &delta + &delta;
            }
        } else {
            loop {
                let t = (&(&(&x2 + &x2) + &delta) * &delta) * self;
                if t > rx {
                    break;
                }
                x2.add_assign_big(&delta);
                rx.sub_assign_big(&t);
                delta = &delta + &delta;
            }
        }
        while delta.is_positive() {
            let t = (&(&(&x2 + &x2) + &delta) * &delta) * self;
            if t <= rx {
                x2.add_assign_big(&delta);
                rx.sub_assign_big(&t);
            }
            delta = delta.half();
        }
        x2
    }
}
