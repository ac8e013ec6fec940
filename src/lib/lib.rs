//! Single-pole low-pass filters for separating a slowly drifting bias from a
//! measured signal on constrained power-metering hardware.
//!
//! Two numeric flavours are provided: [`filtering::lowpass::int_low_pass`]
//! works on 16-bit samples with truncating integer division, and
//! [`filtering::lowpass::double_low_pass`] works on `f64` samples. Both update
//! a caller-owned bias in place and return the residual `raw - bias`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod config;
pub mod error;
pub mod filtering;

pub use config::{BiasInit, FilterConfig};
pub use error::FilterError;
pub use filtering::bias::BiasFilter;
pub use filtering::lowpass::{double_low_pass, int_low_pass, int_low_pass_wide, LowPass};
pub use filtering::smoothing::SmoothingFactor;
