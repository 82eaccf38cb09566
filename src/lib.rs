//! CONTUR Reader Library
//!
//! A Rust library for reconstructing structured data from the text report
//! written by the CONTUR supersonic nozzle design program.
//!
//! This library provides tools for:
//! - Splitting a report into its titled computational sections
//! - Recovering labeled numeric tables from column-aligned text
//! - Extracting `name = value` scalar annotations
//! - Merging the coordinate sections and deriving nozzle length and design Mach
//! - Refining the sparse contour knots into a dense piecewise cubic curve
//! - Exporting tables and the refined contour to CSV

pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod geometry;
pub mod models;
pub mod parser;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::ReaderConfig;
pub use error::{ConturError, Result};
pub use geometry::{GeometryRefiner, Knot};
pub use models::{CurvePoint, Parameter, ParameterGroup, SectionKind};
pub use parser::{Diagnostic, DiagnosticKind, Report, Section, Table};
