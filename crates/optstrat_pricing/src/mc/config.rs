//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Maximum number of samples allowed per pricing call.
pub const MAX_SAMPLES: usize = 100_000_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying the sample count and the optional
/// seed. Use [`MonteCarloConfig::builder`] to construct instances; the
/// builder validates at build time.
///
/// # Examples
///
/// ```rust
/// use optstrat_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_samples(1_000_000)
///     .seed(123)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 1_000_000);
/// assert_eq!(config.seed(), Some(123));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloConfig {
    n_samples: usize,
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of terminal-price samples per pricing call.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the optional seed for reproducibility.
    ///
    /// `None` means every pricing call draws a fresh entropy seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSampleCount` if `n_samples` is 0 or
    /// greater than [`MAX_SAMPLES`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_samples == 0 || self.n_samples > MAX_SAMPLES {
            return Err(ConfigError::InvalidSampleCount(self.n_samples));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// # Examples
///
/// ```rust
/// use optstrat_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_samples(10_000)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.seed(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_samples: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of samples per pricing call.
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingParameter` if `n_samples` was never
    /// set, or `ConfigError::InvalidSampleCount` if it is out of range.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_samples = self
            .n_samples
            .ok_or(ConfigError::MissingParameter("n_samples"))?;

        let config = MonteCarloConfig {
            n_samples,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_valid() {
        let config = MonteCarloConfig::builder()
            .n_samples(10_000)
            .build()
            .unwrap();

        assert_eq!(config.n_samples(), 10_000);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_builder_with_seed() {
        let config = MonteCarloConfig::builder()
            .n_samples(1_000)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_builder_zero_samples() {
        let result = MonteCarloConfig::builder().n_samples(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidSampleCount(0))));
    }

    #[test]
    fn test_builder_too_many_samples() {
        let result = MonteCarloConfig::builder().n_samples(MAX_SAMPLES + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidSampleCount(_))));
    }

    #[test]
    fn test_builder_missing_samples() {
        let result = MonteCarloConfig::builder().seed(42).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("n_samples"))
        ));
    }

    #[test]
    fn test_max_samples_is_legal() {
        let config = MonteCarloConfig::builder()
            .n_samples(MAX_SAMPLES)
            .build()
            .unwrap();
        assert_eq!(config.n_samples(), MAX_SAMPLES);
    }
}
