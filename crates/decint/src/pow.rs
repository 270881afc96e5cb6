//! Binary exponentiation, plain and modular.

use crate::bigint::BigInt;
use crate::error::BigIntError;

impl BigInt {
    /// `self^exp` by binary exponentiation over [`BigInt::square`].
    ///
    /// # Panics
    /// Panics if an intermediate product exceeds the FFT size limit.
    #[must_use]
    pub fn pow(&self, mut exp: u64) -> BigInt {
        let mut base = self.clone();
        let mut res = BigInt::from(1);
        while exp != 0 {
            if exp & 1 == 1 {
                res *= &base;
            }
            base = base.square();
            exp >>= 1;
        }
        res
    }

    /// `self^exp mod m`, reducing after every multiply.
    ///
    /// The result carries the sign the remainder contract gives it: for a
    /// negative base and odd contributing steps it can be negative. A zero
    /// exponent yields one without a final reduction.
    pub fn modpow(&self, mut exp: u64, m: &BigInt) -> Result<BigInt, BigIntError> {
        let mut base = self.divmod(m)?.1;
        let mut res = BigInt::from(1);
        while exp != 0 {
            if exp & 1 == 1 {
                res = res.try_mul(&base)?.divmod(m)?.1;
            }
            base = base.try_square()?.divmod(m)?.1;
            exp >>= 1;
        }
        Ok(res)
    }
}
