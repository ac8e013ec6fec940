use crate::error::FilterError;
use crate::filtering::lowpass::SMOOTHING_FACTOR;
use crate::filtering::smoothing::SmoothingFactor;

pub const DEFAULT_SMOOTHING_FACTOR: u16 = SMOOTHING_FACTOR;
pub const DEFAULT_BIAS_INIT: BiasInit = BiasInit::Zero;

/// How a [`BiasFilter`](crate::BiasFilter) seeds its bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BiasInit {
    /// Start from zero and let the filter pull the bias in.
    Zero,
    /// Take the first sample as the bias; its residual is zero.
    FirstSample,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterConfig {
    pub smoothing: SmoothingFactor,
    pub init: BiasInit,
}

impl FilterConfig {
    pub fn new(smoothing: u16) -> Result<FilterConfig, FilterError> {
        Ok(FilterConfig {
            smoothing: SmoothingFactor::new(smoothing)?,
            init: DEFAULT_BIAS_INIT,
        })
    }

    pub fn with_init(mut self, init: BiasInit) -> FilterConfig {
        self.init = init;
        self
    }
}

impl Default for FilterConfig {
    fn default() -> FilterConfig {
        FilterConfig {
            smoothing: SmoothingFactor::DEFAULT,
            init: DEFAULT_BIAS_INIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference() {
        let config = FilterConfig::default();
        assert_eq!(config.smoothing.get(), DEFAULT_SMOOTHING_FACTOR);
        assert_eq!(config.init, BiasInit::Zero);
        assert_eq!(FilterConfig::new(DEFAULT_SMOOTHING_FACTOR), Ok(config));
    }

    #[test]
    fn zero_smoothing_propagates() {
        assert_eq!(FilterConfig::new(0), Err(FilterError::ZeroSmoothingFactor));
    }

    #[test]
    fn with_init_keeps_smoothing() {
        let config = FilterConfig::new(64).unwrap().with_init(BiasInit::FirstSample);
        assert_eq!(config.smoothing.get(), 64);
        assert_eq!(config.init, BiasInit::FirstSample);
    }
}
