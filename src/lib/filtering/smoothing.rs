use super::lowpass::SMOOTHING_FACTOR;
use crate::error::FilterError;

/// Time constant of the filter in samples. Each update moves the bias
/// `1 / n` of the way towards the raw sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SmoothingFactor(u16);

impl SmoothingFactor {
    /// Reference constant used by `int_low_pass` and `double_low_pass`.
    pub const DEFAULT: SmoothingFactor = SmoothingFactor(SMOOTHING_FACTOR);

    pub fn new(n: u16) -> Result<SmoothingFactor, FilterError> {
        if n == 0 {
            log::warn!("rejected zero smoothing factor");
            return Err(FilterError::ZeroSmoothingFactor);
        }
        Ok(SmoothingFactor(n))
    }

    pub fn get(&self) -> u16 {
        self.0
    }

    /// Largest `|raw - bias|` for which truncating integer division leaves
    /// the bias unchanged.
    pub fn deadband(&self) -> u16 {
        self.0 - 1
    }

    /// Number of samples after a step input until the floating-point filter
    /// has closed all but `tolerance` of the step, i.e. the smallest `k` with
    /// `(1 - 1/n)^k <= tolerance`.
    pub fn settle_samples(&self, tolerance: f64) -> Result<u32, FilterError> {
        if !(tolerance > 0.0 && tolerance < 1.0) {
            log::warn!("rejected settling tolerance {}", tolerance);
            return Err(FilterError::InvalidTolerance);
        }
        if self.0 == 1 {
            // bias jumps straight to the sample
            return Ok(1);
        }
        let n = f64::from(self.0);
        let retained = 1.0 - 1.0 / n;
        let mut samples = libm::ceil(libm::log(tolerance) / libm::log1p(-1.0 / n));
        // rounding in the logs can land one off when tolerance is an exact power
        if samples > 1.0 && libm::pow(retained, samples - 1.0) <= tolerance {
            samples -= 1.0;
        } else if libm::pow(retained, samples) > tolerance {
            samples += 1.0;
        }
        Ok(samples as u32)
    }
}

impl Default for SmoothingFactor {
    fn default() -> SmoothingFactor {
        SmoothingFactor::DEFAULT
    }
}

impl TryFrom<u16> for SmoothingFactor {
    type Error = FilterError;

    fn try_from(n: u16) -> Result<SmoothingFactor, FilterError> {
        SmoothingFactor::new(n)
    }
}
