//! Tuning thresholds
//!
//! These decide when work fans out across threads and when whole-vocabulary
//! metrics stand in for exact ones.

/// Default vocabulary size above which the matrix is built in parallel
pub const DEFAULT_PARALLEL_BUILD_THRESHOLD: usize = 100;

/// Default target/vocabulary ratio at or above which cached metrics are used
pub const DEFAULT_FULL_CACHE_RATIO: f64 = 0.8;

/// Default candidate count at or above which selection runs in parallel
pub const DEFAULT_PARALLEL_QUERY_THRESHOLD: usize = 100;

/// Thresholds shared by the matrix builder and the metric engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Build the matrix in parallel when N exceeds this
    pub parallel_build_threshold: usize,
    /// Read whole-vocabulary metrics when `|targets| / N` reaches this
    pub full_cache_ratio: f64,
    /// Score candidates in parallel when there are at least this many
    pub parallel_query_threshold: usize,
}

impl SolverConfig {
    /// Create a config with the default thresholds
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parallel_build_threshold: DEFAULT_PARALLEL_BUILD_THRESHOLD,
            full_cache_ratio: DEFAULT_FULL_CACHE_RATIO,
            parallel_query_threshold: DEFAULT_PARALLEL_QUERY_THRESHOLD,
        }
    }

    #[must_use]
    pub const fn with_parallel_build_threshold(mut self, threshold: usize) -> Self {
        self.parallel_build_threshold = threshold;
        self
    }

    /// Values above 1.0 disable the cached path entirely
    #[must_use]
    pub const fn with_full_cache_ratio(mut self, ratio: f64) -> Self {
        self.full_cache_ratio = ratio;
        self
    }

    #[must_use]
    pub const fn with_parallel_query_threshold(mut self, threshold: usize) -> Self {
        self.parallel_query_threshold = threshold;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let config = SolverConfig::default();
        assert_eq!(config.parallel_build_threshold, 100);
        assert!((config.full_cache_ratio - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.parallel_query_threshold, 100);
    }

    #[test]
    fn builders_override_one_field() {
        let config = SolverConfig::new()
            .with_parallel_build_threshold(10)
            .with_full_cache_ratio(2.0);
        assert_eq!(config.parallel_build_threshold, 10);
        assert!((config.full_cache_ratio - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.parallel_query_threshold, 100);
    }
}
