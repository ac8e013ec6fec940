use num_traits::Zero;

use super::lowpass::LowPass;
use super::smoothing::SmoothingFactor;
use crate::config::{BiasInit, FilterConfig};

/// Single channel bias tracker. Owns the bias that the free functions in
/// [`lowpass`](super::lowpass) expect the caller to carry.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BiasFilter<ItemT> {
    bias: ItemT,
    smoothing: SmoothingFactor,
    init: BiasInit,
    seeded: bool,
}

impl<ItemT> BiasFilter<ItemT>
where
    ItemT: LowPass + Zero,
{
    pub fn new(config: FilterConfig) -> BiasFilter<ItemT> {
        BiasFilter {
            bias: ItemT::zero(),
            smoothing: config.smoothing,
            init: config.init,
            seeded: false,
        }
    }

    /// Start from a known bias, e.g. one saved from a previous run. No
    /// seeding takes place regardless of `config.init`.
    pub fn with_bias(config: FilterConfig, bias: ItemT) -> BiasFilter<ItemT> {
        BiasFilter {
            bias,
            smoothing: config.smoothing,
            init: config.init,
            seeded: true,
        }
    }

    pub fn reset(&mut self) {
        log::debug!("bias filter reset");
        self.bias = ItemT::zero();
        self.seeded = false;
    }

    /// Feed one sample, returns the residual `raw - bias`.
    pub fn update(&mut self, raw: ItemT) -> ItemT {
        if !self.seeded {
            self.seeded = true;
            if self.init == BiasInit::FirstSample {
                log::trace!("bias seeded from first sample");
                self.bias = raw;
            }
        }
        ItemT::low_pass(&mut self.bias, raw, self.smoothing)
    }

    /// Replace every sample with its residual. State carries over between
    /// calls.
    pub fn process_inplace(&mut self, data: &mut [ItemT]) {
        for x in data.iter_mut() {
            *x = self.update(*x);
        }
    }

    pub fn bias(&self) -> ItemT {
        self.bias
    }

    pub fn smoothing(&self) -> SmoothingFactor {
        self.smoothing
    }
}

impl<ItemT> Default for BiasFilter<ItemT>
where
    ItemT: LowPass + Zero,
{
    fn default() -> BiasFilter<ItemT> {
        BiasFilter::new(FilterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::lowpass::{double_low_pass, int_low_pass};

    #[test]
    fn default_tracks_like_reference() {
        let mut filter = BiasFilter::<i16>::default();
        let mut bias = 0i16;
        for raw in [1024, 5000, -7000, 300, 32767] {
            assert_eq!(filter.update(raw), int_low_pass(&mut bias, raw));
            assert_eq!(filter.bias(), bias);
        }

        let mut filter = BiasFilter::<f64>::default();
        let mut bias = 0.0;
        for raw in [1024.0, 5000.5, -7000.25, 0.001] {
            assert_eq!(filter.update(raw), double_low_pass(&mut bias, raw));
            assert_eq!(filter.bias(), bias);
        }
    }

    #[test]
    fn first_sample_seeds_bias() {
        let config = FilterConfig::default().with_init(BiasInit::FirstSample);
        let mut filter = BiasFilter::<i16>::new(config);
        assert_eq!(filter.update(2000), 0);
        assert_eq!(filter.bias(), 2000);
        // second sample filters normally
        assert_eq!(filter.update(3024), 1023);
        assert_eq!(filter.bias(), 2001);
    }

    #[test]
    fn reset_rearms_seeding() {
        let config = FilterConfig::default().with_init(BiasInit::FirstSample);
        let mut filter = BiasFilter::<f64>::new(config);
        filter.update(10.0);
        filter.update(20.0);
        filter.reset();
        assert_eq!(filter.bias(), 0.0);
        assert_eq!(filter.update(-5.0), 0.0);
        assert_eq!(filter.bias(), -5.0);
    }

    #[test]
    fn with_bias_skips_seeding() {
        let config = FilterConfig::default().with_init(BiasInit::FirstSample);
        let mut filter = BiasFilter::<i16>::with_bias(config, 100);
        assert_eq!(filter.smoothing(), SmoothingFactor::DEFAULT);
        assert_eq!(filter.update(100), 0);
        assert_eq!(filter.update(1124), 1023);
        assert_eq!(filter.bias(), 101);
    }

    #[test]
    fn process_inplace_is_continuous() {
        let mut whole = [2048i16; 8];
        let mut split = whole;

        BiasFilter::<i16>::default().process_inplace(&mut whole);

        let mut filter = BiasFilter::<i16>::default();
        let (a, b) = split.split_at_mut(3);
        filter.process_inplace(a);
        filter.process_inplace(b);

        assert_eq!(whole, split);
        // +2 on the first sample, then +1 while the gap is still >= 1024
        assert_eq!(whole[0], 2046);
        assert_eq!(whole[7], 2039);
        assert_eq!(filter.bias(), 9);
    }
}
