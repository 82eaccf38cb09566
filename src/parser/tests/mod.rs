//! Test utilities and shared fixtures for report parser testing
//!
//! The fixture report mirrors the layout of a CONTUR run: a throat
//! characteristic, nozzle, upstream and inviscid contours, boundary layer
//! calculations, a coordinate table printed in two pieces and one section
//! heading the parser does not know.

// Test modules
mod classifier_tests;
mod section_tests;

/// Title marker of the fixture: characters 10 to 20 of its first line
pub const FIXTURE_TITLE: &str = " MACH 4 NO";

/// Full fixture report text
pub const FIXTURE_REPORT: &str = include_str!("../../../tests/data/nozzle_run.out");

/// Fixture report split into lines
pub fn fixture_lines() -> Vec<String> {
    FIXTURE_REPORT.lines().map(str::to_string).collect()
}

/// Lines `range` of the fixture report
pub fn fixture_section(range: std::ops::Range<usize>) -> Vec<String> {
    fixture_lines()[range].to_vec()
}

/// Owned lines from string literals
pub fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}

/// Section heading line as CONTUR prints it
pub fn heading(title: &str) -> String {
    format!(" CONTUR    MACH 4 NOZ  {}", title)
}
