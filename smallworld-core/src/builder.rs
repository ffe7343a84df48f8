//! Builder utilities for configuring the propensity pipeline.
//!
//! Exposes the seeding and tolerance surface and the validation performed
//! before constructing [`Swp`] instances.

use crate::{Result, error::SwpError, swp::Swp};

/// Default relative tolerance for the symmetry skip check.
pub const DEFAULT_RTOL: f64 = 1e-5;
/// Default absolute tolerance for the symmetry skip check.
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Configures and constructs [`Swp`] instances.
///
/// # Examples
/// ```
/// use smallworld_core::SwpBuilder;
///
/// let swp = SwpBuilder::new()
///     .with_seed(1337)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(swp.seed(), Some(1337));
/// ```
#[derive(Debug, Clone)]
pub struct SwpBuilder {
    seed: Option<u64>,
    rtol: f64,
    atol: f64,
}

impl Default for SwpBuilder {
    fn default() -> Self {
        Self {
            seed: None,
            rtol: DEFAULT_RTOL,
            atol: DEFAULT_ATOL,
        }
    }
}

impl SwpBuilder {
    /// Creates a builder populated with default parameters: no fixed seed
    /// and the conventional `allclose` symmetry tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the random seed so reference construction is reproducible
    /// bit-for-bit. Without a seed each run draws fresh entropy.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Overrides the relative and absolute tolerances used to decide
    /// whether an input is already symmetric.
    #[must_use]
    pub const fn with_symmetry_tolerance(mut self, rtol: f64, atol: f64) -> Self {
        self.rtol = rtol;
        self.atol = atol;
        self
    }

    /// Returns the configured `(rtol, atol)` pair.
    #[must_use]
    pub const fn symmetry_tolerance(&self) -> (f64, f64) {
        (self.rtol, self.atol)
    }

    /// Validates the configuration and constructs an [`Swp`] runner.
    ///
    /// # Errors
    /// Returns [`SwpError::InvalidTolerance`] when either tolerance is
    /// negative, NaN, or infinite.
    ///
    /// # Examples
    /// ```
    /// use smallworld_core::{SwpBuilder, SwpError};
    ///
    /// let err = SwpBuilder::new()
    ///     .with_symmetry_tolerance(-1.0, 0.0)
    ///     .build()
    ///     .expect_err("negative tolerance must be rejected");
    /// assert!(matches!(err, SwpError::InvalidTolerance { .. }));
    /// ```
    pub fn build(self) -> Result<Swp> {
        if !(self.rtol.is_finite() && self.atol.is_finite() && self.rtol >= 0.0 && self.atol >= 0.0)
        {
            return Err(SwpError::InvalidTolerance {
                rtol: self.rtol,
                atol: self.atol,
            });
        }
        Ok(Swp::new(self.seed, self.rtol, self.atol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_allclose_tolerances() {
        let builder = SwpBuilder::new();
        assert_eq!(builder.symmetry_tolerance(), (1e-5, 1e-8));
        assert_eq!(builder.seed(), None);
    }

    #[test]
    fn nan_tolerances_are_rejected() {
        let err = SwpBuilder::new()
            .with_symmetry_tolerance(f64::NAN, 0.0)
            .build()
            .expect_err("NaN tolerance must be rejected");
        assert!(matches!(err, SwpError::InvalidTolerance { .. }));
    }
}
