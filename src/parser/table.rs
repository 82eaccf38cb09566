//! Labeled numeric tables
//!
//! A [`Table`] holds the rows of one table block under sanitized, unique
//! column names. Columns are looked up by their sanitized name.

use crate::error::{ConturError, Result};
use crate::parser::diagnostics::{DiagnosticKind, ParseContext};
use crate::parser::sanitizer::{make_unique, sanitize_headers};
use polars::prelude::{Column, DataFrame};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Numeric rows of fixed width under unique column names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableParts")]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<f64>>,
}

/// Serialized form of a [`Table`], checked by [`Table::from_parts`] on load
#[derive(Deserialize)]
struct TableParts {
    headers: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TryFrom<TableParts> for Table {
    type Error = ConturError;

    fn try_from(parts: TableParts) -> Result<Self> {
        Self::from_parts(parts.headers, parts.rows)
    }
}

impl Table {
    /// Build a table from block rows and the raw header found above them
    ///
    /// A missing header, or one whose length differs from the row width, is
    /// replaced by placeholder names so the data is kept.
    pub fn build(rows: Vec<Vec<f64>>, raw_headers: Option<&[String]>, ctx: &mut ParseContext) -> Self {
        let Some(width) = rows.first().map(Vec::len) else {
            if raw_headers.is_some_and(|h| !h.is_empty()) {
                ctx.warn(
                    DiagnosticKind::HeaderMismatch,
                    "table has a header but no data rows",
                );
            }
            return Self::default();
        };

        let blank = vec![String::new(); width];
        let raw = match raw_headers {
            Some(raw) if raw.len() == width => raw,
            Some(raw) => {
                ctx.warn(
                    DiagnosticKind::HeaderMismatch,
                    format!(
                        "header has {} names for {} columns: {:?}",
                        raw.len(),
                        width,
                        raw
                    ),
                );
                &blank[..]
            }
            None => {
                debug!("Table of width {} has no header line", width);
                &blank[..]
            }
        };

        let headers = sanitize_headers(raw, ctx.untitled_names());
        Self { headers, rows }
    }

    /// Assemble a table from already sanitized parts
    pub fn from_parts(headers: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        if let Some(row) = rows.iter().find(|row| row.len() != headers.len()) {
            return Err(ConturError::malformed_table(format!(
                "row of width {} under {} columns",
                row.len(),
                headers.len()
            )));
        }
        Ok(Self { headers, rows })
    }

    /// Rename columns by position, then restore name uniqueness
    pub fn relabel(&mut self, renames: &[(usize, &str)], ctx: &mut ParseContext) -> Result<()> {
        let mut headers = self.headers.clone();
        for &(index, name) in renames {
            let slot = headers.get_mut(index).ok_or_else(|| {
                ConturError::malformed_table(format!(
                    "cannot rename column {} of a {}-column table",
                    index,
                    self.headers.len()
                ))
            })?;
            *slot = name.to_string();
        }
        self.headers = make_unique(headers, ctx.untitled_names());
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Values of the column with this exact sanitized name
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let index = self
            .column_index(name)
            .ok_or_else(|| ConturError::column_not_found(name))?;
        Ok(self.rows.iter().map(|row| row[index]).collect())
    }

    /// Convert to a polars DataFrame with one Float64 column per header
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let columns = self
            .headers
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let values: Vec<f64> = self.rows.iter().map(|row| row[index]).collect();
                Column::new(name.as_str().into(), values)
            })
            .collect();
        Ok(DataFrame::new(columns)?)
    }
}
