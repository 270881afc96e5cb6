//! Binary GCD and least common multiple.

use crate::bigint::BigInt;

impl BigInt {
    /// Greatest common divisor by the binary algorithm: strip the common
    /// factor-of-two shifts, halve even operands, subtract the smaller odd
    /// from the larger, and reassemble the stripped power of two.
    ///
    /// Operands are expected to be non-negative; `gcd(a, 0) == a`.
    #[must_use]
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.clone();
        let mut b = other.clone();
        if a < b {
            std::mem::swap(&mut a, &mut b);
        }
        if b.is_zero() {
            return a;
        }
        let mut twos = 0u64;
        while a.is_even() && b.is_even() {
            a = a.half();
            b = b.half();
            twos += 1;
        }
        while b.is_positive() {
            if a.is_even() {
                a = a.half();
            } else if b.is_even() {
                b = b.half();
            } else {
                a.sub_assign_big(&b);
            }
            if a < b {
                std::mem::swap(&mut a, &mut b);
            }
        }
        &a * &BigInt::from(2).pow(twos)
    }

    /// Least common multiple, `self / gcd * other`.
    ///
    /// # Panics
    /// Panics when both operands are zero.
    #[must_use]
    pub fn lcm(&self, other: &BigInt) -> BigInt {
        &(self / &self.gcd(other)) * other
    }
}
