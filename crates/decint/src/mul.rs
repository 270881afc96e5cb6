//! Multiplication: schoolbook convolution below `FFT_LIMIT`, packed complex
//! FFT above it, plus squaring, scalar multiply, halving, and scalar
//! division.
//!
//! The FFT path splits every base-10^8 digit into two base-10^4 half-digits
//! and packs operand A into the real parts and operand B into the imaginary
//! parts of one complex signal: a single forward transform, a pointwise
//! self-square, and one inverse transform then yield the convolution in the
//! imaginary parts scaled by `1/(2L)`.

use std::ops::{Div, DivAssign, Mul, MulAssign};

use decint_fft::{dft, idft, plan_len};
use num_complex::Complex64;

use crate::bigint::{BigInt, Digit};
use crate::constants::{BASE, FFT_BASE, FFT_LIMIT};
use crate::error::BigIntError;

/// Largest scalar magnitude accepted by [`BigInt::mul_small`]:
/// `digit * k + carry` must stay inside `i64`.
const MUL_SMALL_MAX: Digit = i64::MAX / BASE - BASE;

impl BigInt {
    /// Multiply, reporting `FftLimitExceeded` instead of panicking when the
    /// product would need a transform longer than the engine supports.
    pub fn try_mul(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(BigInt::new());
        }
        let n = self.len();
        let m = rhs.len();
        let sign = self.non_negative == rhs.non_negative;
        let mag = if n * m >= FFT_LIMIT {
            fft_mul(self, rhs)?
        } else {
            BigInt::from_digits(schoolbook(&self.digits, &rhs.digits))
        };
        Ok(mag.with_sign(sign))
    }

    /// Square, dispatching like multiplication but with the single-operand
    /// FFT packing.
    ///
    /// # Panics
    /// Panics if the product would exceed the FFT size limit.
    #[must_use]
    pub fn square(&self) -> BigInt {
        match self.try_square() {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    pub(crate) fn try_square(&self) -> Result<BigInt, BigIntError> {
        if self.is_zero() {
            return Ok(BigInt::new());
        }
        let n = self.len();
        if n * n < FFT_LIMIT {
            return Ok(BigInt::from_digits(schoolbook(&self.digits, &self.digits)));
        }
        let lim = plan_len(2 * (2 * n + 1))?;
        let mut arr = vec![Complex64::new(0.0, 0.0); lim];
        for (i, &d) in self.digits.iter().enumerate() {
            let lo = (d % FFT_BASE) as f64;
            let hi = (d / FFT_BASE) as f64;
            arr[i << 1] = Complex64::new(lo, lo);
            arr[(i << 1) | 1] = Complex64::new(hi, hi);
        }
        convolve_packed(&mut arr)?;
        Ok(BigInt::from_digits(unpack(&arr, 2 * n + 1, lim)))
    }

    /// Multiply by a machine-word scalar. The caller keeps `|k|` below
    /// [`MUL_SMALL_MAX`]; every in-crate use is bounded by a few times
    /// `BASE`.
    pub(crate) fn mul_small(&self, k: Digit) -> BigInt {
        debug_assert!(k.abs() <= MUL_SMALL_MAX);
        if k == 0 || self.is_zero() {
            return BigInt::new();
        }
        let sign = self.non_negative == (k >= 0);
        let k = k.abs();
        let mut digits = Vec::with_capacity(self.len() + 2);
        let mut carry: Digit = 0;
        for &d in &self.digits {
            let v = d * k + carry;
            digits.push(v % BASE);
            carry = v / BASE;
        }
        while carry != 0 {
            digits.push(carry % BASE);
            carry /= BASE;
        }
        BigInt::from_digits(digits).with_sign(sign)
    }

    /// Halve, truncating toward zero: the odd bit of each digit carries into
    /// the next lower digit as `BASE / 2`.
    #[must_use]
    pub fn half(&self) -> BigInt {
        let mut res = self.clone();
        for i in (0..res.digits.len()).rev() {
            if res.digits[i] & 1 == 1 && i > 0 {
                res.digits[i - 1] += BASE;
            }
            res.digits[i] >>= 1;
        }
        res.trim();
        res
    }

    /// Single-pass scalar division with a running remainder.
    pub(crate) fn div_assign_i64(&mut self, x: i64) -> Result<(), BigIntError> {
        if x == 0 {
            return Err(BigIntError::ZeroDivision);
        }
        if self.is_zero() {
            return Ok(());
        }
        if x < 0 {
            self.non_negative = !self.non_negative;
        }
        let k = i128::from(x.unsigned_abs());
        let mut cur: i128 = 0;
        for i in (0..self.digits.len()).rev() {
            cur = cur * i128::from(BASE) + i128::from(self.digits[i]);
            self.digits[i] = (cur / k) as Digit;
            cur %= k;
        }
        self.trim();
        Ok(())
    }
}

/// O(n*m) convolution with an interleaved carry-normalize sweep.
fn schoolbook(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let mut res = vec![0; a.len() + b.len() + 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            res[i + j] += x * y;
            res[i + j + 1] += res[i + j] / BASE;
            res[i + j] %= BASE;
        }
    }
    res
}

/// Forward transform, pointwise self-square, inverse transform.
fn convolve_packed(arr: &mut [Complex64]) -> Result<(), BigIntError> {
    dft(arr)?;
    for z in arr.iter_mut() {
        *z = *z * *z;
    }
    idft(arr)?;
    Ok(())
}

/// Read the convolution out of the imaginary parts, scaled by `1/(2L)` and
/// rounded to nearest, recombining half-digit pairs into `digits` base-10^8
/// digits.
fn unpack(arr: &[Complex64], digits: usize, lim: usize) -> Vec<Digit> {
    let inv = 0.5 / lim as f64;
    let mut res = vec![0; digits];
    let mut carry: Digit = 0;
    for (i, slot) in res.iter_mut().enumerate() {
        carry += (arr[i << 1].im * inv + 0.5) as Digit;
        carry += ((arr[(i << 1) | 1].im * inv + 0.5) as Digit) * FFT_BASE;
        *slot = carry % BASE;
        carry /= BASE;
    }
    res
}

fn fft_mul(a: &BigInt, b: &BigInt) -> Result<BigInt, BigIntError> {
    let n = a.len();
    let m = b.len();
    let lim = plan_len(2 * (n + m + 1))?;
    let mut arr = vec![Complex64::new(0.0, 0.0); lim];
    for (i, &d) in a.digits.iter().enumerate() {
        arr[i << 1].re = (d % FFT_BASE) as f64;
        arr[(i << 1) | 1].re = (d / FFT_BASE) as f64;
    }
    for (i, &d) in b.digits.iter().enumerate() {
        arr[i << 1].im = (d % FFT_BASE) as f64;
        arr[(i << 1) | 1].im = (d / FFT_BASE) as f64;
    }
    convolve_packed(&mut arr)?;
    Ok(BigInt::from_digits(unpack(&arr, n + m + 1, lim)))
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics if the product would exceed the FFT size limit.
    fn mul(self, rhs: &BigInt) -> BigInt {
        match self.try_mul(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

forward_binop!(impl Mul, mul);

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

impl MulAssign<BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: BigInt) {
        *self = &*self * &rhs;
    }
}

impl Mul<i32> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: i32) -> BigInt {
        self.mul_small(Digit::from(rhs))
    }
}

forward_scalar_binop!(impl Mul<i32>, mul);

impl MulAssign<i32> for BigInt {
    fn mul_assign(&mut self, rhs: i32) {
        *self = self.mul_small(Digit::from(rhs));
    }
}

impl Div<i64> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics on division by zero.
    fn div(self, rhs: i64) -> BigInt {
        let mut out = self.clone();
        match out.div_assign_i64(rhs) {
            Ok(()) => out,
            Err(e) => panic!("{e}"),
        }
    }
}

forward_scalar_binop!(impl Div<i64>, div);

impl DivAssign<i64> for BigInt {
    /// # Panics
    /// Panics on division by zero.
    fn div_assign(&mut self, rhs: i64) {
        if let Err(e) = self.div_assign_i64(rhs) {
            panic!("{e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn schoolbook_small_products() {
        // 1x1 digits: product of lengths stays under FFT_LIMIT
        assert_eq!(big("99999999") * big("99999999"), big("9999999800000001"));
        assert_eq!(big("-4") * big("6"), big("-24"));
        assert_eq!(big("-4") * big("-6"), big("24"));
    }

    #[test]
    fn fft_path_matches_known_product() {
        // 4x2 digits crosses FFT_LIMIT = 8
        let a = big("12345678901234567890123456789012");
        let b = big("9876543210987654321");
        assert_eq!(
            (&a * &b).to_string(),
            "121932631137021795224965706422493156529644487120852"
        );
    }

    #[test]
    fn mul_zero_annihilates() {
        let a = big("123456789012345678901234567890");
        assert!((&a * BigInt::new()).is_zero());
        assert!((BigInt::new() * &a).is_zero());
    }

    #[test]
    fn square_agrees_with_mul() {
        for s in ["7", "123456789", "98765432109876543210987654321"] {
            let a = big(s);
            assert_eq!(a.square(), &a * &a);
            assert_eq!((-&a).square(), &a * &a);
        }
    }

    #[test]
    fn scalar_mul() {
        assert_eq!(big("123456789") * 1000i32, big("123456789000"));
        assert_eq!(big("5") * -3i32, big("-15"));
        assert_eq!(big("-5") * -3i32, big("15"));
        assert_eq!(big("5") * 0i32, BigInt::new());
    }

    #[test]
    fn half_carries_odd_bit() {
        assert_eq!(big("100000001").half(), big("50000000"));
        assert_eq!(big("7").half(), big("3"));
        assert_eq!(big("-7").half(), big("-3"));
        assert_eq!(big("1").half(), BigInt::new());
    }

    #[test]
    fn scalar_div() {
        assert_eq!(big("123456789012345678") / 1000i64, big("123456789012345"));
        assert_eq!(big("-7") / 2i64, big("-3"));
        assert_eq!(big("7") / -2i64, big("-3"));
        assert_eq!(big("-7") / -2i64, big("3"));
        assert_eq!(big("0") / 5i64, BigInt::new());
    }

    #[test]
    fn scalar_div_by_zero_reports() {
        let mut a = big("5");
        assert_eq!(a.div_assign_i64(0), Err(BigIntError::ZeroDivision));
    }

    #[test]
    fn scalar_div_i64_min() {
        let a = big("-9223372036854775808");
        assert_eq!(a / i64::MIN, big("1"));
    }
}
