//! # decint-fft
//!
//! Split-radix complex FFT used by `decint` for big-number multiplication.
//!
//! The transforms operate in-place on `Complex64` buffers whose length is a
//! power of two up to 2^21; longer requests fail with
//! [`FftError::LimitExceeded`] instead of degrading silently.

pub mod transform;

// Re-exports
pub use transform::{dft, idft, plan_len, FftError, MAX_FFT_LEN};
