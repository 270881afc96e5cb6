//! # decint
//!
//! Arbitrary-precision signed integers stored as little-endian base-10^8
//! digit vectors. Multiplication switches to a packed complex FFT above a
//! small threshold; division and square root switch to Newton iteration for
//! large operands and fall back to schoolbook algorithms below.
//!
//! Values are immutable once observed: every operator takes its operands by
//! reference and returns a fresh value. Division truncates toward zero and
//! the remainder carries the dividend's sign.
//!
//! # Example
//! ```
//! use decint::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b: BigInt = "987654321098765432109876543210".parse().unwrap();
//! assert_eq!(
//!     (&a * &b).to_string(),
//!     "121932631137021795226185032733622923332237463801111263526900",
//! );
//!
//! let (q, r) = b.divmod(&a).unwrap();
//! assert_eq!(&q * &a + &r, b);
//! ```

#[macro_use]
mod macros;

mod addsub;
mod bigint;
mod bits;
mod constants;
mod convert;
mod div;
mod error;
mod gcd;
mod mul;
mod pow;
mod random;
mod root;
mod sqrt;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use bigint::{BigInt, Digit};
pub use constants::{
    BASE, FFT_LIMIT, NEWTON_DIV_LIMIT, NEWTON_DIV_MIN_LEVEL, NEWTON_SQRT_LIMIT,
    NEWTON_SQRT_MIN_LEVEL, WIDTH,
};
pub use convert::ParseBigIntError;
pub use error::BigIntError;
pub use random::{factorial, rand_bigint};
