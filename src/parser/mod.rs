//! CONTUR report parser
//!
//! This module reconstructs structured data from the column-aligned text
//! report written by the CONTUR nozzle design program. The report has no
//! formal grammar: tables are recovered by detecting runs of numeric lines,
//! headers by slicing the text above each run against the column layout of
//! its data, and scalar annotations by scanning `name = value` pairs.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`classifier`] - Decides whether a single line is a numeric table row
//! - [`segmenter`] - Groups numeric rows into table blocks
//! - [`header`] - Recovers raw column headers above a block
//! - [`sanitizer`] - Turns raw header text into unique identifiers
//! - [`params`] - Extracts `name = value` annotations
//! - [`table`] - Labeled numeric tables with by-name column access
//! - [`diagnostics`] - Non-fatal warnings collected during a parse
//! - [`section`] - Section classification and kind-specific reconstruction
//! - [`report`] - Whole-report aggregation and derived scalars
//!
//! ## Usage
//!
//! ```rust
//! use contur_reader::{ReaderConfig, Report};
//!
//! # fn example(text: &str) -> contur_reader::Result<()> {
//! let report = Report::from_text(text, &ReaderConfig::default())?;
//!
//! println!("{} sections, design Mach {:?}", report.sections.len(), report.design_mach);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod diagnostics;
pub mod header;
pub mod params;
pub mod report;
pub mod sanitizer;
pub mod section;
pub mod segmenter;
pub mod table;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classifier::classify_line;
pub use diagnostics::{Diagnostic, DiagnosticKind, ParseContext};
pub use params::scan_parameters;
pub use report::Report;
pub use section::Section;
pub use segmenter::{BlockMap, classify_run};
pub use table::Table;
