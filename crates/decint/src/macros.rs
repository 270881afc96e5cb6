//! Operator-forwarding macros.
//!
//! Each arithmetic module hand-writes the `&BigInt op &BigInt` (or
//! `&BigInt op scalar`) implementation; these macros forward the remaining
//! owned/borrowed combinations to it.

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident) => {
        impl core::ops::$imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                core::ops::$imp::$method(&self, &rhs)
            }
        }

        impl core::ops::$imp<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                core::ops::$imp::$method(&self, rhs)
            }
        }

        impl core::ops::$imp<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                core::ops::$imp::$method(self, &rhs)
            }
        }
    };
}

macro_rules! forward_scalar_binop {
    (impl $imp:ident<$scalar:ty>, $method:ident) => {
        impl core::ops::$imp<$scalar> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: $scalar) -> BigInt {
                core::ops::$imp::$method(&self, rhs)
            }
        }
    };
}

macro_rules! forward_assign {
    (impl $imp:ident, $method:ident, $inner:ident) => {
        impl core::ops::$imp<&BigInt> for BigInt {
            #[inline]
            fn $method(&mut self, rhs: &BigInt) {
                self.$inner(rhs);
            }
        }

        impl core::ops::$imp<BigInt> for BigInt {
            #[inline]
            fn $method(&mut self, rhs: BigInt) {
                self.$inner(&rhs);
            }
        }
    };
}
