//! Input sizes and run configuration.

use std::fmt;

use crate::error::{ConfigError, Result};

/// Element counts a run may select from.
pub const SUPPORTED_SIZES: [i64; 4] = [100, 10_000, 100_000, 1_000_000];

/// Elements traversed per strategy per size when the repetition count is not pinned.
pub const ELEMENT_BUDGET: u64 = 50_000_000;
pub const MIN_ITERATIONS: u64 = 10;
pub const MAX_ITERATIONS: u64 = 100_000;

/// A validated, positive element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputSize(usize);

impl InputSize {
    pub fn new(size: i64) -> Result<Self> {
        if size <= 0 {
            return Err(ConfigError::NonPositiveSize { size });
        }
        usize::try_from(size)
            .map(Self)
            .map_err(|_| ConfigError::SizeTooLarge { size })
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for InputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The sizes a run covers, in order, plus an optional pinned repetition count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    sizes: Vec<InputSize>,
    iterations: Option<u64>,
}

impl RunConfig {
    /// Validates raw size values against [`SUPPORTED_SIZES`].
    ///
    /// # Errors
    ///
    /// Returns the first offending value: non-positive, too large for the
    /// platform, or outside the supported set. An empty list is rejected.
    pub fn from_sizes(raw: &[i64]) -> Result<Self> {
        if raw.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        let sizes = raw
            .iter()
            .map(|&size| {
                let validated = InputSize::new(size)?;
                if SUPPORTED_SIZES.contains(&size) {
                    Ok(validated)
                } else {
                    Err(ConfigError::UnsupportedSize {
                        size,
                        supported: &SUPPORTED_SIZES,
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            sizes,
            iterations: None,
        })
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = Some(iterations.max(1));
        self
    }

    pub fn sizes(&self) -> &[InputSize] {
        &self.sizes
    }

    /// Timed repetitions for one strategy at `size`.
    pub fn iterations_for(&self, size: InputSize) -> u64 {
        self.iterations.unwrap_or_else(|| {
            let size = u64::try_from(size.get()).unwrap_or(u64::MAX);
            (ELEMENT_BUDGET / size).clamp(MIN_ITERATIONS, MAX_ITERATIONS)
        })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sizes: SUPPORTED_SIZES.iter().map(|&s| InputSize(s as usize)).collect(),
            iterations: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_sizes() {
        assert_eq!(
            InputSize::new(0),
            Err(ConfigError::NonPositiveSize { size: 0 })
        );
        assert_eq!(
            InputSize::new(-1),
            Err(ConfigError::NonPositiveSize { size: -1 })
        );
        assert_eq!(InputSize::new(5).map(InputSize::get), Ok(5));
    }

    #[test]
    fn error_message_names_the_size() {
        let err = RunConfig::from_sizes(&[100, -1]).unwrap_err();
        assert_eq!(err.to_string(), "input size -1 is not positive");

        let err = RunConfig::from_sizes(&[500]).unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn only_supported_sizes_are_accepted() {
        assert!(matches!(
            RunConfig::from_sizes(&[100, 500]),
            Err(ConfigError::UnsupportedSize { size: 500, .. })
        ));
        assert_eq!(RunConfig::from_sizes(&[]), Err(ConfigError::NoSizes));

        let config = RunConfig::from_sizes(&[10_000, 100]).unwrap();
        let sizes: Vec<usize> = config.sizes().iter().map(|s| s.get()).collect();
        assert_eq!(sizes, vec![10_000, 100]);
    }

    #[test]
    fn default_covers_every_supported_size() {
        let config = RunConfig::default();
        let sizes: Vec<i64> = config.sizes().iter().map(|s| s.get() as i64).collect();
        assert_eq!(sizes, SUPPORTED_SIZES.to_vec());
    }

    #[test]
    fn iteration_count_follows_element_budget() {
        let config = RunConfig::default();
        let small = InputSize::new(100).unwrap();
        let large = InputSize::new(1_000_000).unwrap();
        assert_eq!(config.iterations_for(small), 100_000);
        assert_eq!(config.iterations_for(large), 50);

        let pinned = config.with_iterations(3);
        assert_eq!(pinned.iterations_for(large), 3);
    }
}
