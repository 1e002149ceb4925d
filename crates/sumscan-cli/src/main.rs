use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args as ClapArgs, Parser, Subcommand};
use sumscan_core::scan_text;
use sumscan_report::{csv_string, render_histogram_svg, render_table, write_csv, FigureConfig};

#[derive(Parser, Debug)]
#[command(name = "sumscan", about = "Subset-sum explorer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank subsets whose sum meets the threshold and print the table.
    Rank(RankArgs),
    /// Export the ranked subsets as CSV.
    Export(ExportArgs),
    /// Render the subset-sum distribution as an SVG histogram.
    Histogram(HistogramArgs),
}

#[derive(ClapArgs, Debug)]
struct ScanArgs {
    /// Comma or whitespace separated positive integers (at most 22).
    #[arg(long)]
    values: String,
    /// Minimum sum a subset must reach to be listed.
    #[arg(long)]
    threshold: String,
}

#[derive(ClapArgs, Debug)]
struct RankArgs {
    #[command(flatten)]
    scan: ScanArgs,
    /// Emit the ranked rows as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(ClapArgs, Debug)]
struct ExportArgs {
    #[command(flatten)]
    scan: ScanArgs,
    /// Output path for the CSV; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct HistogramArgs {
    #[command(flatten)]
    scan: ScanArgs,
    /// Output path for the SVG.
    #[arg(long)]
    out: PathBuf,
    /// Figure width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,
    /// Figure height in pixels.
    #[arg(long, default_value_t = 240)]
    height: u32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Export(args) => run_export(args),
        Command::Histogram(args) => run_histogram(args),
    };
    if let Err(err) = result {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_rank(args: RankArgs) -> Result<(), Box<dyn Error>> {
    let outcome = scan_text(&args.scan.values, &args.scan.threshold)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.rows)?);
    } else {
        println!("{}", render_table(&outcome));
        println!("{}", outcome.summary());
    }
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<(), Box<dyn Error>> {
    let outcome = scan_text(&args.scan.values, &args.scan.threshold)?;
    match &args.out {
        Some(path) => write_csv(&outcome.rows, path)?,
        None => print!("{}", csv_string(&outcome.rows)?),
    }
    Ok(())
}

fn run_histogram(args: HistogramArgs) -> Result<(), Box<dyn Error>> {
    let outcome = scan_text(&args.scan.values, &args.scan.threshold)?;
    let config = FigureConfig {
        width: args.width,
        height: args.height,
    };
    fs::write(&args.out, render_histogram_svg(&outcome, &config))?;
    Ok(())
}
