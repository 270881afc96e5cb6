//! Tuning constants for the digit representation and kernel dispatch.

use crate::bigint::Digit;

/// Decimal digits per internal digit.
pub const WIDTH: usize = 8;

/// The representation base, 10^WIDTH.
pub const BASE: Digit = 100_000_000;

/// Half-digit base used by the FFT packing, 10^(WIDTH/2).
pub(crate) const FFT_BASE: Digit = 10_000;

/// Product of operand lengths below which schoolbook multiplication is used.
pub const FFT_LIMIT: usize = 8;

/// Recursion base for the Newton reciprocal.
pub const NEWTON_DIV_MIN_LEVEL: usize = 8;

/// Operand-size threshold switching division to the Newton reciprocal.
pub const NEWTON_DIV_LIMIT: usize = 32;

/// Recursion base for the Newton inverse square root.
pub const NEWTON_SQRT_MIN_LEVEL: usize = 6;

/// Operand-size threshold switching square root to Newton iteration.
pub const NEWTON_SQRT_LIMIT: usize = 48;

const _: () = assert!(NEWTON_DIV_MIN_LEVEL < NEWTON_DIV_LIMIT);
const _: () = assert!(NEWTON_SQRT_MIN_LEVEL < NEWTON_SQRT_LIMIT);
