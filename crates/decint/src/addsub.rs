//! Addition and subtraction: signed dispatch over magnitude kernels with
//! carry/borrow in base 10^8, plus short-circuit scalar paths that touch
//! only the low digits.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::bigint::{BigInt, Digit};
use crate::constants::BASE;

impl BigInt {
    pub(crate) fn add_assign_big(&mut self, x: &BigInt) {
        if x.is_negative() {
            self.sub_assign_big(&x.abs());
            return;
        }
        if self.is_negative() {
            *self = x - &self.abs();
            return;
        }
        let n = self.digits.len().max(x.digits.len()) + 1;
        let mut carry: Digit = 0;
        for i in 0..n {
            if i >= self.digits.len() {
                self.digits.push(0);
            }
            self.digits[i] += x.digit(i) + carry;
            if self.digits[i] >= BASE {
                carry = 1;
                self.digits[i] -= BASE;
            } else {
                carry = 0;
            }
        }
        self.trim();
    }

    pub(crate) fn sub_assign_big(&mut self, x: &BigInt) {
        if x.is_negative() {
            self.add_assign_big(&x.abs());
            return;
        }
        if self.is_negative() {
            *self = -(x + &self.abs());
            return;
        }
        // Both operands non-negative: subtract the smaller magnitude from
        // the larger, the result sign follows which side was larger.
        let greater_eq = *self >= *x;
        let n = self.digits.len().max(x.digits.len());
        let mut borrow: Digit = 0;
        for i in 0..n {
            if i >= self.digits.len() {
                self.digits.push(0);
            }
            self.digits[i] = if greater_eq {
                self.digits[i] - x.digit(i) - borrow
            } else {
                x.digit(i) - self.digits[i] - borrow
            };
            if self.digits[i] < 0 {
                self.digits[i] += BASE;
                borrow = 1;
            } else {
                borrow = 0;
            }
        }
        self.non_negative = greater_eq;
        self.trim();
    }

    /// Add `k >= 0` onto a non-negative value, propagating carries only as
    /// far as they reach.
    fn add_small(&mut self, k: Digit) {
        debug_assert!(!self.is_negative() && k >= 0);
        self.digits[0] += k;
        let mut i = 0;
        while self.digits[i] >= BASE {
            let carry = self.digits[i] / BASE;
            self.digits[i] %= BASE;
            if i + 1 >= self.digits.len() {
                self.digits.push(0);
            }
            self.digits[i + 1] += carry;
            i += 1;
        }
        self.trim();
    }

    /// Subtract `k >= 0` from a non-negative value. Short magnitudes fall
    /// back to the full kernel, which handles a sign flip; longer ones
    /// cannot go negative and only borrow as far as needed.
    fn sub_small(&mut self, k: Digit) {
        debug_assert!(!self.is_negative() && k >= 0);
        if self.digits.len() <= 2 {
            self.sub_assign_big(&BigInt::from(k));
            return;
        }
        self.digits[0] -= k;
        let mut i = 0;
        while self.digits[i] < 0 {
            let borrow = (-self.digits[i] + BASE - 1) / BASE;
            self.digits[i] += borrow * BASE;
            self.digits[i + 1] -= borrow;
            i += 1;
        }
        self.trim();
    }

    pub(crate) fn add_assign_i32(&mut self, x: i32) {
        if x == 0 {
            return;
        }
        let k = Digit::from(x).abs();
        if self.is_negative() {
            let mut m = self.abs();
            if x > 0 {
                m.sub_small(k);
            } else {
                m.add_small(k);
            }
            *self = -m;
        } else if x > 0 {
            self.add_small(k);
        } else {
            self.sub_small(k);
        }
    }

    pub(crate) fn sub_assign_i32(&mut self, x: i32) {
        if x == 0 {
            return;
        }
        let k = Digit::from(x).abs();
        if self.is_negative() {
            let mut m = self.abs();
            if x > 0 {
                m.add_small(k);
            } else {
                m.sub_small(k);
            }
            *self = -m;
        } else if x > 0 {
            self.sub_small(k);
        } else {
            self.add_small(k);
        }
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        let mut out = self.clone();
        out.add_assign_big(rhs);
        out
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        let mut out = self.clone();
        out.sub_assign_big(rhs);
        out
    }
}

forward_binop!(impl Add, add);
forward_binop!(impl Sub, sub);
forward_assign!(impl AddAssign, add_assign, add_assign_big);
forward_assign!(impl SubAssign, sub_assign, sub_assign_big);

impl Add<i32> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: i32) -> BigInt {
        let mut out = self.clone();
        out.add_assign_i32(rhs);
        out
    }
}

impl Sub<i32> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: i32) -> BigInt {
        let mut out = self.clone();
        out.sub_assign_i32(rhs);
        out
    }
}

forward_scalar_binop!(impl Add<i32>, add);
forward_scalar_binop!(impl Sub<i32>, sub);

impl AddAssign<i32> for BigInt {
    fn add_assign(&mut self, rhs: i32) {
        self.add_assign_i32(rhs);
    }
}

impl SubAssign<i32> for BigInt {
    fn sub_assign(&mut self, rhs: i32) {
        self.sub_assign_i32(rhs);
    }
}
