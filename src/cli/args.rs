//! Command-line argument definitions for the CONTUR reader
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ReaderConfig;
use crate::constants::DEFAULT_REFINE_POINTS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the CONTUR report reader
///
/// Reads the text report of a CONTUR nozzle design run and reconstructs its
/// tables, scalar parameters and wall contour.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "contur-reader",
    version,
    about = "Reconstruct tables and the nozzle contour from CONTUR output reports"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Fail on the first section that cannot be parsed
    #[arg(long, global = true)]
    pub strict: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print sections, derived scalars and diagnostics of a report
    Summary(ReportArgs),
    /// Write every table and the refined contour to CSV files
    Export(ExportArgs),
    /// Print the refined contour as x,y lines
    Refine(RefineArgs),
}

/// Arguments shared by commands that read one report
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// CONTUR output report
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,
}

#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: ReportArgs,

    /// Directory for the CSV files (created if missing)
    #[arg(short = 'o', long = "output", value_name = "DIR", default_value = "contur_tables")]
    pub output: PathBuf,

    /// Samples per refined contour segment
    #[arg(short = 'n', long = "points", default_value_t = DEFAULT_REFINE_POINTS)]
    pub points: usize,
}

#[derive(Debug, Clone, Parser)]
pub struct RefineArgs {
    #[command(flatten)]
    pub input: ReportArgs,

    /// Samples per refined contour segment
    #[arg(short = 'n', long = "points", default_value_t = DEFAULT_REFINE_POINTS)]
    pub points: usize,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Reader configuration with CLI overrides applied
    pub fn reader_config(&self) -> ReaderConfig {
        let mut config = ReaderConfig::default();
        match &self.command {
            Some(Commands::Export(args)) => config = config.with_refine_points(args.points),
            Some(Commands::Refine(args)) => config = config.with_refine_points(args.points),
            _ => {}
        }
        if self.strict {
            config = config.with_strict_sections();
        }
        config
    }
}
