pub mod bias;
pub mod lowpass;
pub mod smoothing;
