//! Division: schoolbook (Knuth algorithm D) for short quotients, Newton
//! reciprocal for long ones.
//!
//! The contract is truncation toward zero: `a = q*d + r` with `|r| < |d|`
//! and `r` carrying the dividend's sign. Signs are applied after the
//! magnitude division.

use std::ops::{Div, DivAssign, Rem, RemAssign};

use crate::bigint::BigInt;
use crate::constants::{BASE, NEWTON_DIV_LIMIT, NEWTON_DIV_MIN_LEVEL};
use crate::error::BigIntError;

impl BigInt {
    /// Quotient and remainder, truncating toward zero.
    ///
    /// The remainder is zero or carries `self`'s sign; the quotient sign is
    /// positive exactly when the operand signs agree.
    pub fn divmod(&self, d: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        let a = self.abs();
        let b = d.abs();
        if b.is_zero() {
            return Err(BigIntError::ZeroDivision);
        }
        if a < b {
            return Ok((BigInt::new(), self.clone()));
        }
        let n = a.len();
        let m = b.len();
        let (q, r) = if n.min(n - m) > NEWTON_DIV_LIMIT {
            tracing::trace!(n, m, "newton division path");
            divmod_newton(&a, &b)?
        } else {
            divmod_knuth(&a, &b)?
        };
        Ok((
            q.with_sign(self.non_negative == d.non_negative),
            r.with_sign(self.non_negative),
        ))
    }

    /// `self / rhs`, or `None` when `rhs` is zero.
    #[must_use]
    pub fn checked_div(&self, rhs: &BigInt) -> Option<BigInt> {
        self.divmod(rhs).map(|(q, _)| q).ok()
    }

    /// `self % rhs`, or `None` when `rhs` is zero.
    #[must_use]
    pub fn checked_rem(&self, rhs: &BigInt) -> Option<BigInt> {
        self.divmod(rhs).map(|(_, r)| r).ok()
    }

    /// Approximate `BASE^n / self` from below by Newton iteration.
    ///
    /// Positional shifts inside the doubling update silently discard digits;
    /// the bounded correction loop in [`divmod_newton`] absorbs the slack.
    pub(crate) fn newton_inv(&self, n: usize) -> Result<BigInt, BigIntError> {
        if self.is_zero() {
            return Err(BigIntError::ZeroDivision);
        }
        let sz = self.len();
        if sz.min(n.saturating_sub(sz)) <= NEWTON_DIV_MIN_LEVEL {
            // One-shot: BASE^n divided by self. Goes straight to the
            // schoolbook kernel; re-dispatching would bounce every short
            // divisor back here with a larger n.
            let mut digits = vec![0; n + 1];
            digits[n] = 1;
            let (q, _) = divmod_knuth(&BigInt::from_digits(digits), self)?;
            return Ok(q);
        }
        let k = (n - sz + 2) >> 1;
        let k2 = if k > sz { 0 } else { sz - k };
        let x = self.move_r(k2);
        let n2 = k + x.len();
        let y = x.newton_inv(n2)?;
        let doubled = &y + &y;
        let correction = self.try_mul(&y)?.try_mul(&y)?;
        let mut res = doubled.move_l(n - n2 - k2);
        res.sub_assign_big(&correction.move_r(2 * (n2 + k2) - n));
        res.sub_assign_i32(1);
        Ok(res)
    }
}

/// Schoolbook long division over magnitudes (`a >= b > 0`).
///
/// Normalizes both operands by `t = BASE / (b_high + 1)` so the two-digit
/// quotient estimate is nearly exact, then walks the dividend high to low,
/// adjusting each estimated digit downward while the remainder is negative.
fn divmod_knuth(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
    let t = BASE / (b.digits[b.len() - 1] + 1);
    let a = a.mul_small(t);
    let b = b.mul_small(t);
    let n = a.len();
    let m = b.len();
    let b_high = b.digits[m - 1];
    let mut q_digits = vec![0; n];
    let mut r = BigInt::new();
    for i in (0..n).rev() {
        r = r.move_l(1);
        r.digits[0] = a.digits[i];
        r.trim();
        let d1 = r.digit(m);
        let d2 = r.digit(m - 1);
        let mut dq = (d1 * BASE + d2) / b_high;
        r.sub_assign_big(&b.mul_small(dq));
        while r.is_negative() {
            r.add_assign_big(&b);
            dq -= 1;
        }
        q_digits[i] = dq;
    }
    let mut r = r;
    r.div_assign_i64(t)?;
    Ok((BigInt::from_digits(q_digits), r))
}

/// Newton-reciprocal division over magnitudes (`a >= b > 0`).
fn divmod_newton(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
    let n = a.len();
    let m = b.len();
    let k = n - m + 2;
    let k2 = m.saturating_sub(k);
    let mut b2 = b.move_r(k2);
    if k2 != 0 {
        b2.add_assign_i32(1);
    }
    let n2 = k + b2.len();
    let y = b2.newton_inv(n2)?;
    let mut q = a.try_mul(&y)?.move_r(n2 + k2);
    let mut r = a - &q.try_mul(b)?;
    while r >= *b {
        q.add_assign_i32(1);
        r.sub_assign_big(b);
    }
    Ok((q, r))
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics on division by zero.
    fn div(self, rhs: &BigInt) -> BigInt {
        match self.divmod(rhs) {
            Ok((q, _)) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics on division by zero.
    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.divmod(rhs) {
            Ok((_, r)) => r,
            Err(e) => panic!("{e}"),
        }
    }
}

forward_binop!(impl Div, div);
forward_binop!(impl Rem, rem);

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = &*self / rhs;
    }
}

impl DivAssign<BigInt> for BigInt {
    fn div_assign(&mut self, rhs: BigInt) {
        *self = &*self / &rhs;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = &*self % rhs;
    }
}

impl RemAssign<BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: BigInt) {
        *self = &*self % &rhs;
    }
}
