use clap::Parser;
use contur_reader::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("CONTUR Reader - Nozzle Design Report Parser");
    println!("===========================================");
    println!();
    println!("Reconstruct tables, scalar parameters and the wall contour from the");
    println!("text report of a CONTUR nozzle design run.");
    println!();
    println!("USAGE:");
    println!("    contur-reader <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summary     Print sections, derived scalars and diagnostics");
    println!("    export      Write every table and the refined contour to CSV");
    println!("    refine      Print the refined contour as x,y lines");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    contur-reader summary run.out");
    println!("    contur-reader export run.out --output tables --points 41");
    println!("    contur-reader refine run.out -n 11 > contour.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    contur-reader <COMMAND> --help");
}
