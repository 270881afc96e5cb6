//! Arithmetic error surface.

/// Error type for fallible `BigInt` operations.
///
/// Operator sugar (`/`, `%`, `*`, shifts) panics with the corresponding
/// message instead; the `Result` methods (`divmod`, `try_mul`, `sqrt`,
/// `root`, `modpow`) are the non-panicking paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    /// A divisor was zero.
    #[error("division by zero")]
    ZeroDivision,

    /// A product would need a transform longer than the largest supported
    /// FFT size.
    #[error("FFT limit exceeded")]
    FftLimitExceeded,

    /// Square root of a negative value, even-order root of a negative
    /// value, or a non-positive root order.
    #[error("radicand is negative")]
    NegativeRadicand,
}

impl From<decint_fft::FftError> for BigIntError {
    fn from(_: decint_fft::FftError) -> Self {
        BigIntError::FftLimitExceeded
    }
}
