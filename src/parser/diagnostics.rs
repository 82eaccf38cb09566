//! Non-fatal parse diagnostics
//!
//! Reconstruction problems that degrade the report instead of aborting it
//! (dropped sections, unresolved headers, skipped rows) are collected here
//! and returned alongside the report. Each one is also logged as a warning.

use crate::parser::sanitizer::UntitledNames;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Category of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A section could not be classified or reconstructed and was left out
    SectionDropped,
    /// A table header did not match its data and was replaced by placeholders
    HeaderMismatch,
    /// Boundary layer rows were skipped because their extra values were unreadable
    MalformedRow,
    /// The report holds no coordinate section
    MissingCoordinates,
    /// A grouped view skipped a section holding more than one table
    AmbiguousView,
}

/// One recorded problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Report line the problem was found on, when known
    pub line: Option<usize>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{:?} (line {}): {}", self.kind, line, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

/// Mutable state threaded through one report parse
#[derive(Debug, Default)]
pub struct ParseContext {
    untitled: UntitledNames,
    diagnostics: Vec<Diagnostic>,
    line_offset: usize,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report line of the section being reconstructed
    pub fn enter_section(&mut self, line_offset: usize) {
        self.line_offset = line_offset;
    }

    /// Record a diagnostic at a section-relative line
    pub fn warn_at(&mut self, kind: DiagnosticKind, line: usize, message: impl Into<String>) {
        self.push(kind, Some(self.line_offset + line), message.into());
    }

    /// Record a diagnostic with no line
    pub fn warn(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.push(kind, None, message.into());
    }

    fn push(&mut self, kind: DiagnosticKind, line: Option<usize>, message: String) {
        let diagnostic = Diagnostic {
            kind,
            line,
            message,
        };
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Placeholder name source for table headers
    pub fn untitled_names(&mut self) -> &mut UntitledNames {
        &mut self.untitled
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
