//! Command implementations for the CONTUR reader CLI

use crate::cli::args::{Args, Commands, ExportArgs, RefineArgs, ReportArgs};
use crate::config::ReaderConfig;
use crate::export::{write_curve, write_tables};
use crate::geometry::GeometryRefiner;
use crate::parser::report::Report;
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use tracing::{debug, info, warn};

/// Name of the refined contour file written by `export`
pub const REFINED_CURVE_FILE: &str = "RefinedCoordinates.csv";

/// Run the selected command
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    let config = args.reader_config();
    config.validate()?;

    match &args.command {
        Some(Commands::Summary(cmd)) => run_summary(cmd, &config),
        Some(Commands::Export(cmd)) => run_export(cmd, &config),
        Some(Commands::Refine(cmd)) => run_refine(cmd, &config),
        None => Ok(()),
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("contur_reader={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Read and parse a report file
pub fn load_report(path: &Path, config: &ReaderConfig) -> Result<Report> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read report '{}'", path.display()))?;
    let report = Report::from_text(&text, config)
        .with_context(|| format!("Failed to parse report '{}'", path.display()))?;
    info!("Loaded {}", path.display());
    Ok(report)
}

fn run_summary(cmd: &ReportArgs, config: &ReaderConfig) -> Result<()> {
    let report = load_report(&cmd.report, config)?;

    println!("{} {}", "Report:".bright_green().bold(), report.title.trim());
    println!("  {} lines", report.line_count);
    println!(
        "  Nozzle length: {}",
        format_optional(report.nozzle_length).bright_cyan()
    );
    println!(
        "  Design Mach:   {}",
        format_optional(report.design_mach).bright_cyan()
    );
    println!("  Contour:       {}", describe_contour(&report).bright_cyan());
    println!();

    println!("{}", "Sections:".bright_green().bold());
    for (idx, section) in report.sections.iter().enumerate() {
        let shapes: Vec<String> = section
            .tables
            .iter()
            .map(|t| format!("{}x{}", t.len(), t.width()))
            .collect();
        println!(
            "  {}. {} {}",
            (idx + 1).to_string().bright_yellow().bold(),
            section.kind.name().bright_cyan(),
            format!(
                "({} lines, {} parameter groups, tables [{}])",
                section.line_count(),
                section.parameters.len(),
                shapes.join(", ")
            )
            .bright_black()
        );
    }

    if !report.diagnostics.is_empty() {
        println!();
        println!("{}", "Diagnostics:".bright_yellow().bold());
        for diagnostic in &report.diagnostics {
            println!("  - {}", diagnostic);
        }
    }
    Ok(())
}

fn run_export(cmd: &ExportArgs, config: &ReaderConfig) -> Result<()> {
    let report = load_report(&cmd.input.report, config)?;

    let written = write_tables(&report, &cmd.output)
        .with_context(|| format!("Failed to export tables to '{}'", cmd.output.display()))?;

    match report.refine() {
        Ok(curve) => {
            let path = cmd.output.join(REFINED_CURVE_FILE);
            write_curve(&curve, &path)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            info!("Refined contour: {} samples", curve.len());
        }
        Err(e) => warn!("Refined contour not written: {}", e),
    }

    println!(
        "{} {} tables written to {}",
        "Done:".bright_green().bold(),
        written.len(),
        cmd.output.display()
    );
    Ok(())
}

fn run_refine(cmd: &RefineArgs, config: &ReaderConfig) -> Result<()> {
    let report = load_report(&cmd.input.report, config)?;
    let curve = report
        .refine()
        .context("Failed to refine the coordinate table")?;

    for point in curve {
        println!("{},{}", point.x, point.y);
    }
    Ok(())
}

/// Knot count and axial span of the merged coordinate table
fn describe_contour(report: &Report) -> String {
    let Some(table) = report.coordinates() else {
        return "n/a".to_string();
    };
    match GeometryRefiner::from_table(table) {
        Ok(refiner) => match refiner.knots() {
            [first, .., last] => format!(
                "{} knots, x {} to {}",
                refiner.knots().len(),
                first.x,
                last.x
            ),
            _ => "n/a".to_string(),
        },
        Err(e) => {
            warn!("Coordinate table is not a contour: {}", e);
            "n/a".to_string()
        }
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.6}", v))
}
