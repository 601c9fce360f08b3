use thiserror::Error;

/// Search strategy used by [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMode {
    /// Depth-first descent into the best candidate, stopping at the first
    /// path found. Uses hinted neighbours far from the goal.
    #[default]
    DepthFirst,
    /// Global open-set A* over unit-step neighbours. Slower on large open
    /// maps, but returns a cheapest path.
    BestFirst,
}

/// Tuning knobs of the path search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathfinderConfig {
    /// Distance to the goal above which hinted neighbours are tried.
    pub hint_threshold: f32,
    /// Cell stride of hinted neighbours.
    pub hint_step: i32,
    pub mode: SearchMode,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            hint_threshold: 25.0,
            hint_step: 10,
            mode: SearchMode::DepthFirst,
        }
    }
}

impl PathfinderConfig {
    pub fn with_hint_threshold(mut self, threshold: f32) -> Self {
        self.hint_threshold = threshold;
        self
    }

    pub fn with_hint_step(mut self, step: i32) -> Self {
        self.hint_step = step;
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check that the hint parameters are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hint_step < 1 {
            return Err(ConfigError::InvalidHintStep(self.hint_step));
        }
        if !self.hint_threshold.is_finite() || self.hint_threshold < 0.0 {
            return Err(ConfigError::InvalidHintThreshold(self.hint_threshold));
        }
        Ok(())
    }
}

/// Rejected [`PathfinderConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("hint step must be at least 1, got {0}")]
    InvalidHintStep(i32),
    #[error("hint threshold must be finite and non-negative, got {0}")]
    InvalidHintThreshold(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = PathfinderConfig::default();
        assert_eq!(c.hint_threshold, 25.0);
        assert_eq!(c.hint_step, 10);
        assert_eq!(c.mode, SearchMode::DepthFirst);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builders() {
        let c = PathfinderConfig::default()
            .with_hint_threshold(40.0)
            .with_hint_step(4)
            .with_mode(SearchMode::BestFirst);
        assert_eq!(c.hint_threshold, 40.0);
        assert_eq!(c.hint_step, 4);
        assert_eq!(c.mode, SearchMode::BestFirst);
    }

    #[test]
    fn rejects_bad_values() {
        let c = PathfinderConfig::default().with_hint_step(0);
        assert_eq!(c.validate(), Err(ConfigError::InvalidHintStep(0)));
        let c = PathfinderConfig::default().with_hint_threshold(-1.0);
        assert_eq!(c.validate(), Err(ConfigError::InvalidHintThreshold(-1.0)));
        assert!(PathfinderConfig::default().with_hint_threshold(f32::NAN).validate().is_err());
        let c = PathfinderConfig::default().with_hint_threshold(f32::INFINITY);
        assert!(c.validate().is_err());
        // Zero tries hints on every expansion.
        assert!(PathfinderConfig::default().with_hint_threshold(0.0).validate().is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::InvalidHintStep(-2).to_string(),
            "hint step must be at least 1, got -2"
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let c: PathfinderConfig = serde_json::from_str(r#"{"hint_step": 5}"#).unwrap();
        assert_eq!(c.hint_step, 5);
        assert_eq!(c.hint_threshold, 25.0);
        assert_eq!(c.mode, SearchMode::DepthFirst);
    }

    #[test]
    fn mode_by_name() {
        let c: PathfinderConfig = serde_json::from_str(r#"{"mode": "BestFirst"}"#).unwrap();
        assert_eq!(c.mode, SearchMode::BestFirst);
        let json = serde_json::to_string(&c).unwrap();
        let back: PathfinderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
