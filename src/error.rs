//! Error handling for CONTUR report reconstruction.
//!
//! Provides error types with context for section classification, table
//! reconstruction, column lookup and contour refinement failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConturError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Report has no title marker in its first line")]
    MissingTitle,

    #[error("No known section kind matches title '{title}'")]
    UnknownSection { title: String },

    #[error("Section title '{title}' is ambiguous: matches {matches}")]
    AmbiguousSection { title: String, matches: String },

    #[error("Section {kind} has no table at index {index}")]
    MissingTable { kind: String, index: usize },

    #[error("Line {index} is out of range for a section of {len} lines")]
    LineOutOfRange { index: usize, len: usize },

    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    #[error("Malformed table: {reason}")]
    MalformedTable { reason: String },

    #[error("Refinement needs at least 2 points per segment, got {count}")]
    InvalidPointCount { count: usize },

    #[error("Cubic segment {index} cannot be solved: knot positions coincide")]
    SingularSegment { index: usize },

    #[error("Report has no coordinate table to refine")]
    EmptyCoordinates,

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ConturError {
    pub fn unknown_section(title: impl Into<String>) -> Self {
        Self::UnknownSection {
            title: title.into(),
        }
    }

    pub fn ambiguous_section(title: impl Into<String>, matches: &[&str]) -> Self {
        Self::AmbiguousSection {
            title: title.into(),
            matches: matches.join(", "),
        }
    }

    pub fn missing_table(kind: impl Into<String>, index: usize) -> Self {
        Self::MissingTable {
            kind: kind.into(),
            index,
        }
    }

    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    pub fn malformed_table(reason: impl Into<String>) -> Self {
        Self::MalformedTable {
            reason: reason.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConturError>;
