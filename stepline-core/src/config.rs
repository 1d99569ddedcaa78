//! Construction-time configuration for a step indicator.

use crate::style::StepStyle;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Violations of the documented configuration invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_indicator must be at least 1")]
    NoSteps,

    #[error("displayed_indicator must be at least 1")]
    EmptyWindow,

    #[error("displayed_indicator ({displayed}) exceeds max_indicator ({max})")]
    WindowExceedsSteps { displayed: usize, max: usize },
}

/// Step count, window size, and style for one indicator.
///
/// Both counts are fixed for the widget's lifetime. The documented invariants
/// (`max_indicator >= 1`, `1 <= displayed_indicator <= max_indicator`) are
/// the caller's responsibility: construction accepts any values and a
/// degenerate configuration draws a degenerate layout without panicking.
/// Call [`validate`](Self::validate) to check them up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepIndicatorConfig {
    /// Total number of steps.
    pub max_indicator: usize,
    /// Number of steps visible at once.
    pub displayed_indicator: usize,
    /// Colors and dimensions.
    pub style: StepStyle,
}

impl Default for StepIndicatorConfig {
    fn default() -> Self {
        Self {
            max_indicator: 8,
            displayed_indicator: 5,
            style: StepStyle::default(),
        }
    }
}

impl StepIndicatorConfig {
    pub fn new(max_indicator: usize, displayed_indicator: usize) -> Self {
        Self {
            max_indicator,
            displayed_indicator,
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: StepStyle) -> Self {
        self.style = style;
        self
    }

    /// Checks the documented invariants. Opt-in: the widget itself never
    /// calls this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_indicator == 0 {
            return Err(ConfigError::NoSteps);
        }
        if self.displayed_indicator == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if self.displayed_indicator > self.max_indicator {
            return Err(ConfigError::WindowExceedsSteps {
                displayed: self.displayed_indicator,
                max: self.max_indicator,
            });
        }
        Ok(())
    }
}
