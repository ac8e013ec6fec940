use core::fmt;

/// Errors raised while configuring a filter. Filtering itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterError {
    /// The smoothing factor is a divisor and must be at least 1.
    ZeroSmoothingFactor,
    /// Settling tolerances must lie strictly between 0 and 1.
    InvalidTolerance,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::ZeroSmoothingFactor => write!(f, "smoothing factor must be non-zero"),
            FilterError::InvalidTolerance => {
                write!(f, "settling tolerance must be in the open interval (0, 1)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FilterError {}
