//! Exponential low-pass bias tracking.
//!
//! Every call moves `bias` a fixed fraction `1 / n` of the way towards `raw`
//! and returns what is left over, `raw - bias`. The bias is owned by the
//! caller and carried from one sample to the next.

use num_traits::Float;

use super::smoothing::SmoothingFactor;

/// Reference smoothing constant, in samples.
pub const SMOOTHING_FACTOR: u16 = 1024;

/// A sample type the bias recurrence can run on.
pub trait LowPass: Copy {
    /// Update `bias` in place towards `raw` and return `raw - bias`.
    fn low_pass(bias: &mut Self, raw: Self, smoothing: SmoothingFactor) -> Self;
}

/// 16-bit low-pass with truncating division.
///
/// Steps smaller than 1024 in magnitude truncate to zero and leave the bias
/// where it is. The residual is narrowed to 16 bits with wrap-around, so a
/// residual outside the `i16` range (bias and sample near opposite limits)
/// comes back wrapped. Use [`int_low_pass_wide`] if that matters.
pub fn int_low_pass(bias: &mut i16, raw: i16) -> i16 {
    i16::low_pass(bias, raw, SmoothingFactor::DEFAULT)
}

/// Same update as [`int_low_pass`] but the residual is returned unnarrowed.
pub fn int_low_pass_wide(bias: &mut i16, raw: i16) -> i32 {
    widened_i16_low_pass(bias, raw, SMOOTHING_FACTOR)
}

fn widened_i16_low_pass(bias: &mut i16, raw: i16, n: u16) -> i32 {
    let delta = i32::from(raw) - i32::from(*bias);
    // new bias lies between the old bias and raw, so it always fits
    *bias = (i32::from(*bias) + delta / i32::from(n)) as i16;
    i32::from(raw) - i32::from(*bias)
}

/// Double precision low-pass.
///
/// Long runs accumulate rounding error in `bias`. A NaN sample poisons the
/// bias for good.
pub fn double_low_pass(bias: &mut f64, raw: f64) -> f64 {
    f64::low_pass(bias, raw, SmoothingFactor::DEFAULT)
}

impl LowPass for i16 {
    fn low_pass(bias: &mut i16, raw: i16, smoothing: SmoothingFactor) -> i16 {
        widened_i16_low_pass(bias, raw, smoothing.get()) as i16
    }
}

impl LowPass for i32 {
    fn low_pass(bias: &mut i32, raw: i32, smoothing: SmoothingFactor) -> i32 {
        let delta = i64::from(raw) - i64::from(*bias);
        *bias = (i64::from(*bias) + delta / i64::from(smoothing.get())) as i32;
        (i64::from(raw) - i64::from(*bias)) as i32
    }
}

impl LowPass for f32 {
    fn low_pass(bias: &mut f32, raw: f32, smoothing: SmoothingFactor) -> f32 {
        float_low_pass(bias, raw, f32::from(smoothing.get()))
    }
}

impl LowPass for f64 {
    fn low_pass(bias: &mut f64, raw: f64, smoothing: SmoothingFactor) -> f64 {
        float_low_pass(bias, raw, f64::from(smoothing.get()))
    }
}

fn float_low_pass<ItemT: Float>(bias: &mut ItemT, raw: ItemT, n: ItemT) -> ItemT {
    *bias = *bias + (raw - *bias) / n;
    raw - *bias
}
