//! Configuration management and validation.
//!
//! Provides the reader configuration: refinement density, title marker
//! location and the section failure policy.

use crate::constants::{DEFAULT_REFINE_POINTS, TITLE_SPAN};
use crate::error::{ConturError, Result};
use serde::{Deserialize, Serialize};

/// Settings for report reconstruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Samples per refined contour segment, endpoints included
    pub refine_points: usize,

    /// Character span of the first line that holds the section title marker
    pub title_span: (usize, usize),

    /// Fail the whole parse on the first section that cannot be reconstructed
    pub strict_sections: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            refine_points: DEFAULT_REFINE_POINTS,
            title_span: TITLE_SPAN,
            strict_sections: false,
        }
    }
}

impl ReaderConfig {
    /// Set the refinement density
    pub fn with_refine_points(mut self, points: usize) -> Self {
        self.refine_points = points;
        self
    }

    /// Set the title marker span
    pub fn with_title_span(mut self, start: usize, end: usize) -> Self {
        self.title_span = (start, end);
        self
    }

    /// Enable strict section handling
    pub fn with_strict_sections(mut self) -> Self {
        self.strict_sections = true;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.refine_points < 2 {
            return Err(ConturError::configuration(format!(
                "refine_points must be at least 2, got {}",
                self.refine_points
            )));
        }

        let (start, end) = self.title_span;
        if end <= start {
            return Err(ConturError::configuration(format!(
                "title_span must be non-empty, got {}..{}",
                start, end
            )));
        }

        Ok(())
    }
}
