//! Whole-report aggregation
//!
//! Splits the report into sections at every line holding the run title,
//! reconstructs each section independently, merges the coordinate sections
//! that CONTUR prints in several pieces, and derives the nozzle length and
//! design Mach number.

use crate::config::ReaderConfig;
use crate::constants::MACH_COLUMN;
use crate::error::{ConturError, Result};
use crate::geometry::GeometryRefiner;
use crate::models::{CurvePoint, SectionKind};
use crate::parser::diagnostics::{Diagnostic, DiagnosticKind, ParseContext};
use crate::parser::section::{Section, dispatch_section};
use crate::parser::table::Table;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{debug, info};

/// A fully parsed CONTUR report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Run title repeated at the top of every section
    pub title: String,
    /// Reconstructed sections; the merged coordinate section is always last
    pub sections: Vec<Section>,
    /// Nozzle length from the coordinate section, if present
    pub nozzle_length: Option<f64>,
    /// First Mach number of the first contour table, if present
    pub design_mach: Option<f64>,
    /// Problems that degraded the report
    pub diagnostics: Vec<Diagnostic>,
    /// Number of input lines
    pub line_count: usize,
    /// Default samples per refined contour segment
    pub refine_points: usize,
}

impl Report {
    /// Parse report text already split into lines
    pub fn parse(lines: &[String], config: &ReaderConfig) -> Result<Self> {
        config.validate()?;

        let first = lines.first().ok_or(ConturError::MissingTitle)?;
        let title = report_title(first, config.title_span).ok_or(ConturError::MissingTitle)?;
        let boundaries = section_boundaries(lines, &title);
        debug!("Report '{}': {} sections", title.trim(), boundaries.len());

        let mut ctx = ParseContext::new();
        let mut sections = Vec::with_capacity(boundaries.len());
        for range in boundaries {
            let start = range.start;
            ctx.enter_section(start);
            match dispatch_section(&lines[range], start, &title, &mut ctx) {
                Ok(section) => sections.push(section),
                Err(e) if config.strict_sections => return Err(e),
                Err(e) => ctx.warn_at(
                    DiagnosticKind::SectionDropped,
                    0,
                    format!("unable to parse section: {}", e),
                ),
            }
        }

        let sections = consolidate_coordinates(sections, &mut ctx)?;
        let nozzle_length = sections
            .iter()
            .find(|s| s.kind == SectionKind::CoordinatesAndDerivatives)
            .and_then(Section::first_parameter)
            .and_then(|p| p.value);
        let design_mach = sections
            .iter()
            .find(|s| s.kind.is_contour())
            .and_then(|s| s.tables.first())
            .and_then(|t| t.column(MACH_COLUMN).ok())
            .and_then(|mach| mach.first().copied());

        let report = Self {
            title,
            sections,
            nozzle_length,
            design_mach,
            diagnostics: Vec::new(),
            line_count: lines.len(),
            refine_points: config.refine_points,
        };
        report.check_views(&mut ctx);

        info!(
            "Parsed {} sections from {} lines ({} diagnostics)",
            report.sections.len(),
            report.line_count,
            ctx.diagnostics().len()
        );
        Ok(Self {
            diagnostics: ctx.into_diagnostics(),
            ..report
        })
    }

    /// Parse report text
    pub fn from_text(text: &str, config: &ReaderConfig) -> Result<Self> {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        Self::parse(&lines, config)
    }

    /// Sections of characteristic kinds
    pub fn characteristics(&self) -> Vec<&Section> {
        self.view(SectionKind::is_characteristic)
    }

    /// Sections of contour kinds
    pub fn contours(&self) -> Vec<&Section> {
        self.view(SectionKind::is_contour)
    }

    /// Boundary layer sections
    pub fn boundary_layers(&self) -> Vec<&Section> {
        self.view(SectionKind::is_boundary_layer)
    }

    pub fn characteristic_tables(&self) -> Vec<&Table> {
        sole_tables(self.characteristics())
    }

    pub fn contour_tables(&self) -> Vec<&Table> {
        sole_tables(self.contours())
    }

    pub fn boundary_layer_tables(&self) -> Vec<&Table> {
        sole_tables(self.boundary_layers())
    }

    /// Merged coordinate section
    pub fn coordinate_section(&self) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.kind == SectionKind::CoordinatesAndDerivatives)
    }

    /// Merged coordinate table, when it holds data
    pub fn coordinates(&self) -> Option<&Table> {
        self.coordinate_section()?
            .tables
            .first()
            .filter(|t| !t.is_empty())
    }

    /// Refine the coordinate table with `points` samples per segment
    pub fn refined_coordinates(&self, points: usize) -> Result<Vec<CurvePoint>> {
        let table = self.coordinates().ok_or(ConturError::EmptyCoordinates)?;
        GeometryRefiner::from_table(table)?.refine(points)
    }

    /// Refine the coordinate table at the configured density
    pub fn refine(&self) -> Result<Vec<CurvePoint>> {
        self.refined_coordinates(self.refine_points)
    }

    fn view(&self, keep: fn(&SectionKind) -> bool) -> Vec<&Section> {
        self.sections.iter().filter(|s| keep(&s.kind)).collect()
    }

    /// Record sections that the table views have to leave out
    fn check_views(&self, ctx: &mut ParseContext) {
        let views: [(&str, Vec<&Section>); 3] = [
            ("characteristic", self.characteristics()),
            ("contour", self.contours()),
            ("boundary layer", self.boundary_layers()),
        ];
        for (label, sections) in views {
            for section in sections.into_iter().filter(|s| s.tables.len() > 1) {
                ctx.warn(
                    DiagnosticKind::AmbiguousView,
                    format!(
                        "too many {} tables in '{}' ({}): none imported for this section",
                        label,
                        section.title,
                        section.tables.len()
                    ),
                );
            }
        }
    }
}

fn sole_tables(sections: Vec<&Section>) -> Vec<&Table> {
    sections
        .into_iter()
        .filter_map(|s| match s.tables.as_slice() {
            [table] => Some(table),
            _ => None,
        })
        .collect()
}

/// Title marker taken from a fixed character span of the first line
pub fn report_title(first_line: &str, (start, end): (usize, usize)) -> Option<String> {
    let title: String = first_line
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect();
    if title.trim().is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Line ranges of all sections: each starts at a line containing the title
/// and runs to the next such line or the end of the report
pub fn section_boundaries(lines: &[String], title: &str) -> Vec<Range<usize>> {
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(title))
        .map(|(idx, _)| idx)
        .collect();

    starts
        .iter()
        .zip(starts.iter().skip(1).copied().chain(std::iter::once(lines.len())))
        .map(|(&start, end)| start..end)
        .collect()
}

/// Replace all coordinate sections with a single merged one at the end
///
/// Rows of every first table are stacked under the first table's header and
/// the parameter groups are concatenated. When the report has no coordinate
/// section an empty one is appended.
pub fn consolidate_coordinates(sections: Vec<Section>, ctx: &mut ParseContext) -> Result<Vec<Section>> {
    let (coordinates, mut others): (Vec<Section>, Vec<Section>) = sections
        .into_iter()
        .partition(|s| s.kind == SectionKind::CoordinatesAndDerivatives);

    if coordinates.is_empty() {
        ctx.warn(
            DiagnosticKind::MissingCoordinates,
            "no coordinate section found: unable to post-process contour",
        );
        others.push(Section {
            kind: SectionKind::CoordinatesAndDerivatives,
            title: String::new(),
            line_ranges: Vec::new(),
            parameters: Vec::new(),
            tables: Vec::new(),
        });
        return Ok(others);
    }

    let title = coordinates[0].title.clone();
    let headers = coordinates
        .iter()
        .find_map(|s| s.tables.first())
        .map(|t| t.headers().to_vec());

    let mut line_ranges = Vec::new();
    let mut parameters = Vec::new();
    let mut rows = Vec::new();
    for section in coordinates {
        line_ranges.extend(section.line_ranges);
        parameters.extend(section.parameters);

        let Some(table) = section.tables.into_iter().next() else {
            continue;
        };
        let width = headers.as_ref().map_or(0, Vec::len);
        if table.width() != width {
            ctx.warn(
                DiagnosticKind::HeaderMismatch,
                format!(
                    "coordinate table of width {} does not stack under {} columns",
                    table.width(),
                    width
                ),
            );
            continue;
        }
        rows.extend(table.into_rows());
    }

    let tables = match headers {
        Some(headers) => vec![Table::from_parts(headers, rows)?],
        None => Vec::new(),
    };
    debug!(
        "Merged coordinate section: {} rows from {} line ranges",
        tables.first().map_or(0, Table::len),
        line_ranges.len()
    );

    others.push(Section {
        kind: SectionKind::CoordinatesAndDerivatives,
        title,
        line_ranges,
        parameters,
        tables,
    });
    Ok(others)
}
