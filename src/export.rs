//! CSV export of parsed reports
//!
//! Writes every table of a report to its own CSV file, named after the
//! section kind and the section's position among sections of that kind,
//! plus the refined contour.

use crate::error::Result;
use crate::models::{CurvePoint, SectionKind};
use crate::parser::report::Report;
use crate::parser::table::Table;
use polars::prelude::{Column, CsvWriter, DataFrame, SerWriter};
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Write all tables of `report` into `directory`, returning the written paths
pub fn write_tables(report: &Report, directory: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(directory)?;

    let mut kind_counts: HashMap<SectionKind, usize> = HashMap::new();
    let mut written = Vec::new();
    for section in &report.sections {
        let section_index = kind_counts.entry(section.kind).or_default();
        let multiple = section.tables.len() > 1;

        for (table_index, table) in section.tables.iter().enumerate() {
            let file_name = if multiple {
                format!("{}_{}_{}.csv", section.kind.name(), section_index, table_index)
            } else {
                format!("{}_{}.csv", section.kind.name(), section_index)
            };
            let path = directory.join(file_name);
            write_table(table, &path)?;
            written.push(path);
        }
        *section_index += 1;
    }

    info!("Wrote {} tables to {}", written.len(), directory.display());
    Ok(written)
}

/// Write one table as CSV with its sanitized headers
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let mut df = table.to_dataframe()?;
    write_frame(&mut df, path)
}

/// Write a refined curve as CSV with `X` and `Y` columns
pub fn write_curve(points: &[CurvePoint], path: &Path) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = DataFrame::new(vec![
        Column::new("X".into(), xs),
        Column::new("Y".into(), ys),
    ])?;
    write_frame(&mut df, path)
}

fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    debug!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}
