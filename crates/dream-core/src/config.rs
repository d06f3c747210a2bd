//! Tracker Configuration
//!
//! Compile-time defaults; nothing is read from the environment.

use log::LevelFilter;

use crate::domain::{Category, PROGRESS_MAX};
use crate::error::{DreamError, DreamResult};

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Percentage added or removed by one press of +/-
    pub progress_step: i32,
    /// Category preselected in a fresh creation draft
    pub default_category: Category,
    /// Start with the demo dreams instead of an empty board
    pub seed_samples: bool,
    pub log_level: LevelFilter,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            progress_step: 10,
            default_category: Category::Personal,
            seed_samples: true,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> DreamResult<()> {
        if !(1..=i32::from(PROGRESS_MAX)).contains(&self.progress_step) {
            return Err(DreamError::InvalidConfig(format!(
                "progress_step must be within 1..={}, got {}",
                PROGRESS_MAX, self.progress_step
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TrackerConfig::default();
        assert_eq!(config.progress_step, 10);
        assert_eq!(config.default_category, Category::Personal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_step() {
        for step in [0, -10, 101] {
            let config = TrackerConfig { progress_step: step, ..Default::default() };
            assert!(matches!(config.validate(), Err(DreamError::InvalidConfig(_))));
        }
    }
}
