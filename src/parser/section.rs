//! Section classification and reconstruction
//!
//! Every CONTUR section starts with a line holding the run title followed by
//! a heading such as `INVISCID CONTOUR` or `BOUNDARY LAYER CALCULATIONS`.
//! The heading selects a [`SectionKind`]; each kind shares the generic table
//! and parameter reconstruction and then applies its own repairs for the
//! layout quirks CONTUR prints for that stage.

use crate::constants::{
    INVISCID_MERGED_HEADER, INVISCID_SPLIT_MARKER, INVISCID_SPLIT_MARKER_LINE, POINT_COLUMN,
    POSITION_COLUMN, STATION_MARKER, STATION_MARKER_LINE, TRAILING_POINT_COLUMN, titles,
};
use crate::error::{ConturError, Result};
use crate::models::{Parameter, ParameterGroup, SectionKind};
use crate::parser::classifier::classify_line;
use crate::parser::diagnostics::{DiagnosticKind, ParseContext};
use crate::parser::header::{HEADER_OFFSET, block_header};
use crate::parser::params::scan_parameters;
use crate::parser::segmenter::{BlockMap, classify_run};
use crate::parser::table::Table;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::debug;

/// One titled region of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    /// Heading with the run title removed
    pub title: String,
    /// Report lines this section was built from
    pub line_ranges: Vec<Range<usize>>,
    /// Annotations and table markers in line order
    pub parameters: Vec<ParameterGroup>,
    pub tables: Vec<Table>,
}

impl Section {
    /// Number of report lines covered
    pub fn line_count(&self) -> usize {
        self.line_ranges.iter().map(|r| r.len()).sum()
    }

    /// First value-carrying parameter of the section
    pub fn first_parameter(&self) -> Option<&Parameter> {
        self.parameters.first()?.parameters().first()
    }
}

/// Determine the kind of a section from its first line
///
/// Returns the kind and the heading with the run title removed. A heading
/// matching several kinds is only accepted for the compound
/// "inviscid contour from throat characteristic" heading.
pub fn classify_title(first_line: &str, report_title: &str) -> Result<(SectionKind, String)> {
    let heading = first_line.replace(report_title, "").trim().to_string();

    let matches: Vec<SectionKind> = SectionKind::ALL
        .into_iter()
        .filter(|kind| heading.contains(kind.title()))
        .collect();

    let kind = match matches.as_slice() {
        [] => return Err(ConturError::unknown_section(heading)),
        [kind] => *kind,
        _ if heading.contains(titles::FROM_THROAT_CHARACTERISTIC)
            && heading.contains(titles::INVISCID_CONTOUR) =>
        {
            SectionKind::InviscidContour
        }
        several => {
            let names: Vec<&str> = several.iter().map(|k| k.title()).collect();
            return Err(ConturError::ambiguous_section(heading, &names));
        }
    };
    Ok((kind, heading))
}

/// Classify a section and reconstruct it with its kind's handler
///
/// `lines` is the section slice and `offset` its first line in the report.
pub fn dispatch_section(
    lines: &[String],
    offset: usize,
    report_title: &str,
    ctx: &mut ParseContext,
) -> Result<Section> {
    let first = lines
        .first()
        .ok_or(ConturError::LineOutOfRange { index: 0, len: 0 })?;
    let (kind, title) = classify_title(first, report_title)?;
    debug!("Line {}: '{}' dispatched as {}", offset, title, kind);

    ctx.enter_section(offset);
    let raw = RawSection::analyze(lines);
    let tables = match kind {
        SectionKind::UpstreamContour => raw.upstream_contour_tables(kind, ctx)?,
        SectionKind::InviscidContour => raw.inviscid_contour_tables(ctx)?,
        SectionKind::BoundaryLayerCalculations => {
            if raw.line(STATION_MARKER_LINE)?.contains(STATION_MARKER) {
                raw.generic_tables(ctx)
            } else {
                raw.boundary_layer_tables(kind, ctx)?
            }
        }
        SectionKind::IntermediateLeftCharacteristic
        | SectionKind::IntermediateRightCharacteristic
        | SectionKind::ThroatCharacteristic => raw.characteristic_tables(kind, ctx)?,
        SectionKind::NozzleContour
        | SectionKind::ThroatVelocityDistribution
        | SectionKind::CoordinatesAndDerivatives => raw.generic_tables(ctx),
    };

    Ok(Section {
        kind,
        title,
        line_ranges: vec![offset..offset + lines.len()],
        parameters: raw.parameters,
        tables,
    })
}

/// Line classification shared by all section handlers
struct RawSection<'a> {
    lines: &'a [String],
    rows: Vec<Option<Vec<f64>>>,
    blocks: BlockMap,
    parameters: Vec<ParameterGroup>,
}

impl<'a> RawSection<'a> {
    fn analyze(lines: &'a [String]) -> Self {
        let rows: Vec<Option<Vec<f64>>> = lines.iter().map(|l| classify_line(l)).collect();
        let blocks = classify_run(&rows);

        let mut parameters = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            match blocks.block_of(idx) {
                0 => {
                    let found = scan_parameters(line);
                    if !found.is_empty() {
                        parameters.push(ParameterGroup::Values(found));
                    }
                }
                block if blocks.start_of(block) == Some(idx) && !blocks.is_interruption(block) => {
                    parameters.push(ParameterGroup::TableMarker(block));
                }
                _ => {}
            }
        }

        Self {
            lines,
            rows,
            blocks,
            parameters,
        }
    }

    fn line(&self, index: usize) -> Result<&'a str> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(ConturError::LineOutOfRange {
                index,
                len: self.lines.len(),
            })
    }

    fn block_rows(&self, block: usize) -> Vec<Vec<f64>> {
        self.blocks
            .lines_of(block)
            .filter_map(|idx| self.rows[idx].clone())
            .collect()
    }

    fn block_start(&self, block: usize) -> usize {
        self.blocks.start_of(block).unwrap_or(0)
    }

    fn block_header(&self, block: usize) -> Option<Vec<String>> {
        block_header(self.lines, self.block_start(block))
    }

    fn first_block(&self, kind: SectionKind) -> Result<usize> {
        if self.blocks.count() == 0 {
            return Err(ConturError::missing_table(kind.name(), 0));
        }
        Ok(1)
    }

    /// Blocks that hold a table; stray short rows inside a table are skipped
    fn table_blocks(&self, ctx: &mut ParseContext) -> Vec<usize> {
        (1..=self.blocks.count())
            .filter(|&block| {
                if !self.blocks.is_interruption(block) {
                    return true;
                }
                ctx.warn_at(
                    DiagnosticKind::MalformedRow,
                    self.block_start(block),
                    "short row inside a table skipped",
                );
                false
            })
            .collect()
    }

    fn generic_tables(&self, ctx: &mut ParseContext) -> Vec<Table> {
        self.table_blocks(ctx)
            .into_iter()
            .map(|block| {
                let header = self.block_header(block);
                Table::build(self.block_rows(block), header.as_deref(), ctx)
            })
            .collect()
    }

    /// Upstream contour headers are rebuilt around the detected middle columns
    fn upstream_contour_tables(&self, kind: SectionKind, ctx: &mut ParseContext) -> Result<Vec<Table>> {
        let block = self.first_block(kind)?;
        let detected = self.block_header(block).ok_or_else(|| {
            ConturError::malformed_table("upstream contour table has no header line")
        })?;

        let middle = detected.get(1..detected.len().min(5)).unwrap_or(&[]);
        let header: Vec<String> = std::iter::once(POINT_COLUMN.to_string())
            .chain(middle.iter().cloned())
            .chain(std::iter::once(TRAILING_POINT_COLUMN.to_string()))
            .collect();

        Ok(vec![Table::build(self.block_rows(block), Some(&header), ctx)])
    }

    /// Inviscid contour headers fall back to plain whitespace splitting, and a
    /// leading one-row table is folded into the main table
    fn inviscid_contour_tables(&self, ctx: &mut ParseContext) -> Result<Vec<Table>> {
        let blocks = self.table_blocks(ctx);
        let mut tables = Vec::with_capacity(blocks.len());
        for block in blocks {
            let rows = self.block_rows(block);
            let width = rows.first().map_or(0, Vec::len);

            let header = match self.block_header(block) {
                Some(header) if header.len() == width => Some(header),
                _ => self.split_header(block),
            };
            tables.push(Table::build(rows, header.as_deref(), ctx));
        }

        let split = self
            .lines
            .get(INVISCID_SPLIT_MARKER_LINE)
            .is_some_and(|line| line.contains(INVISCID_SPLIT_MARKER));
        if tables.len() != 2 || !split {
            return Ok(tables);
        }

        let leading = tables.remove(0);
        let main = tables.remove(0);
        let width = main.width();
        let [first] = leading.rows() else {
            return Err(ConturError::malformed_table(format!(
                "leading inviscid contour table has {} rows, expected 1",
                leading.len()
            )));
        };
        if first.len() > width {
            return Err(ConturError::malformed_table(format!(
                "leading inviscid contour row has {} values for {} columns",
                first.len(),
                width
            )));
        }

        let mut padded = first.clone();
        padded.resize(width, f64::NAN);
        let mut rows = Vec::with_capacity(main.len() + 1);
        rows.push(padded);
        rows.extend(main.into_rows());

        let header: Vec<String> = INVISCID_MERGED_HEADER.iter().map(|s| s.to_string()).collect();
        Ok(vec![Table::build(rows, Some(&header), ctx)])
    }

    fn split_header(&self, block: usize) -> Option<Vec<String>> {
        let start = self.block_start(block);
        let text = self.lines.get(start.checked_sub(HEADER_OFFSET)?)?;
        Some(text.split_whitespace().map(str::to_string).collect())
    }

    /// Boundary layer rows are each followed by a line of extra scalars that
    /// become additional columns of the table
    fn boundary_layer_tables(&self, kind: SectionKind, ctx: &mut ParseContext) -> Result<Vec<Table>> {
        let block = self.first_block(kind)?;
        let header = self.block_header(block);

        let mut extra_names: Option<Vec<String>> = None;
        let mut rows = Vec::new();
        let mut skipped = 0;
        let mut first_skipped = None;

        for idx in self.blocks.lines_of(block) {
            let Some(row) = &self.rows[idx] else {
                continue;
            };
            let group = self.next_parameter_group(idx);
            let names =
                extra_names.get_or_insert_with(|| group.iter().map(|p| p.name.clone()).collect());

            let values: Option<Vec<f64>> = if group.len() == names.len() {
                group.iter().map(|p| p.value).collect()
            } else {
                None
            };

            match values {
                Some(values) => {
                    let mut augmented = row.clone();
                    augmented.extend(values);
                    rows.push(augmented);
                }
                None => {
                    skipped += 1;
                    first_skipped.get_or_insert(idx);
                }
            }
        }

        if let Some(line) = first_skipped {
            ctx.warn_at(
                DiagnosticKind::MalformedRow,
                line,
                format!(
                    "boundary layer: {} rows with unreadable extra values skipped",
                    skipped
                ),
            );
        }

        let extra_names = extra_names.unwrap_or_default();
        let header = header.map(|mut header| {
            header.extend(extra_names);
            header
        });
        Ok(vec![Table::build(rows, header.as_deref(), ctx)])
    }

    /// First non-empty annotation group on the lines after `idx`
    fn next_parameter_group(&self, idx: usize) -> Vec<Parameter> {
        self.lines
            .iter()
            .skip(idx + 1)
            .map(|line| scan_parameters(line))
            .find(|group| !group.is_empty())
            .unwrap_or_default()
    }

    /// Characteristic tables get canonical point and position column names
    fn characteristic_tables(&self, kind: SectionKind, ctx: &mut ParseContext) -> Result<Vec<Table>> {
        let mut tables = self.generic_tables(ctx);
        let first = tables
            .first_mut()
            .ok_or_else(|| ConturError::missing_table(kind.name(), 0))?;
        first.relabel(&[(0, POINT_COLUMN), (1, POSITION_COLUMN)], ctx)?;
        Ok(tables)
    }
}
