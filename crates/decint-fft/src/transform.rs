//! Forward and inverse split-radix complex DFT.
//!
//! Each pass of the forward transform combines radix-2 and radix-4
//! butterflies, then recurses into one half-size and two quarter-size
//! sub-transforms. The inverse mirrors the pass order with conjugated
//! twiddles; the final `1/n` scaling is left to the caller, which folds it
//! into coefficient rounding.
//!
//! Twiddle factors are advanced by incremental multiplication and
//! re-synthesized from sin/cos every `RBASE + 1` steps. The cadence bounds
//! accumulated phase error and is part of the accuracy contract, not a
//! tunable.

use std::f64::consts::TAU;

use num_complex::Complex64;

/// Largest supported transform length (slots).
pub const MAX_FFT_LEN: usize = 1 << 21;

/// Twiddle re-synthesis mask; recompute from sin/cos whenever
/// `i & RBASE == 0`. Must be `2^k - 1`.
const RBASE: usize = (1 << 10) - 1;

/// Error type for transform planning and execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FftError {
    /// The requested transform length exceeds [`MAX_FFT_LEN`].
    #[error("FFT limit exceeded")]
    LimitExceeded,
}

/// Smallest power-of-two length holding at least `least` slots.
pub fn plan_len(least: usize) -> Result<usize, FftError> {
    let mut lim = 1;
    while lim < least {
        lim <<= 1;
        if lim > MAX_FFT_LEN {
            return Err(FftError::LimitExceeded);
        }
    }
    Ok(lim)
}

/// In-place forward DFT. The length must be a power of two.
pub fn dft(data: &mut [Complex64]) -> Result<(), FftError> {
    let n = data.len();
    if n <= 1 {
        return Ok(());
    }
    if n > MAX_FFT_LEN {
        return Err(FftError::LimitExceeded);
    }
    debug_assert!(n.is_power_of_two());
    fft(data);
    Ok(())
}

/// In-place inverse DFT, unscaled: the caller divides by the length.
pub fn idft(data: &mut [Complex64]) -> Result<(), FftError> {
    let n = data.len();
    if n <= 1 {
        return Ok(());
    }
    if n > MAX_FFT_LEN {
        return Err(FftError::LimitExceeded);
    }
    debug_assert!(n.is_power_of_two());
    ifft(data);
    Ok(())
}

/// Multiply by `-i` (quarter-turn clockwise).
#[inline]
fn mul_neg_i(z: Complex64) -> Complex64 {
    Complex64::new(z.im, -z.re)
}

fn fft(a: &mut [Complex64]) {
    let n = a.len();
    match n {
        0 | 1 => return,
        2 => return fft2(a),
        4 => return fft4(a),
        _ => {}
    }
    let n2 = n >> 1;
    let n4 = n >> 2;
    let wn = Complex64::from_polar(1.0, TAU / n as f64);
    let wn3 = Complex64::from_polar(1.0, 3.0 * TAU / n as f64);
    let mut w = Complex64::new(1.0, 0.0);
    let mut w3 = w;
    for i in 0..n4 {
        if i & RBASE == 0 {
            w = Complex64::from_polar(1.0, TAU * i as f64 / n as f64);
            w3 = w * w * w;
        }
        let x = a[i] - a[i + n2];
        let y = mul_neg_i(a[i + n4] - a[i + n2 + n4]);
        a[i] += a[i + n2];
        a[i + n4] += a[i + n2 + n4];
        a[i + n2] = (x - y) * w;
        a[i + n2 + n4] = (x + y) * w3;
        w *= wn;
        w3 *= wn3;
    }
    let (half, quarters) = a.split_at_mut(n2);
    let (q2, q3) = quarters.split_at_mut(n4);
    fft(half);
    fft(q2);
    fft(q3);
}

fn fft2(a: &mut [Complex64]) {
    let x = a[0];
    let y = a[1];
    a[0] += y;
    a[1] = x - y;
}

fn fft4(a: &mut [Complex64]) {
    let x = a[0] - a[2];
    let y = mul_neg_i(a[1] - a[3]);
    a[0] += a[2];
    a[1] += a[3];
    a[2] = x - y;
    a[3] = x + y;
    fft2(&mut a[..2]);
}

fn ifft(a: &mut [Complex64]) {
    let n = a.len();
    match n {
        0 | 1 => return,
        2 => return fft2(a),
        4 => return ifft4(a),
        _ => {}
    }
    let n2 = n >> 1;
    let n4 = n >> 2;
    {
        let (half, quarters) = a.split_at_mut(n2);
        let (q2, q3) = quarters.split_at_mut(n4);
        ifft(half);
        ifft(q2);
        ifft(q3);
    }
    let wn = Complex64::from_polar(1.0, -TAU / n as f64);
    let wn3 = Complex64::from_polar(1.0, -3.0 * TAU / n as f64);
    let mut w = Complex64::new(1.0, 0.0);
    let mut w3 = w;
    for i in 0..n4 {
        if i & RBASE == 0 {
            w = Complex64::from_polar(1.0, -TAU * i as f64 / n as f64);
            w3 = w * w * w;
        }
        let p = w * a[i + n2];
        let q = w3 * a[i + n2 + n4];
        let x = a[i];
        let y = p + q;
        let x1 = a[i + n4];
        let y1 = mul_neg_i(p - q);
        a[i] += y;
        a[i + n4] += y1;
        a[i + n2] = x - y;
        a[i + n2 + n4] = x1 - y1;
        w *= wn;
        w3 *= wn3;
    }
}

fn ifft4(a: &mut [Complex64]) {
    fft2(&mut a[..2]);
    let p = a[2];
    let q = a[3];
    let x = a[0];
    let y = p + q;
    let x1 = a[1];
    let y1 = mul_neg_i(p - q);
    a[0] += y;
    a[1] += y1;
    a[2] = x - y;
    a[3] = x1 - y1;
}
