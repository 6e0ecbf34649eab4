use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use ride_ev::core::RideError;
use ride_ev::ride::{EnumerationResult, EvCalculator, Paytable};
use tracing::{event, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Human readable summary
    Text,
    /// The whole result as JSON
    Json,
    /// Export rows as key,value lines
    Csv,
}

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Exact EV of three hole cards and one shared card")]
struct Cli {
    /// First hole card, e.g. Ah
    hole1: String,
    /// Second hole card
    hole2: String,
    /// Third hole card
    hole3: String,
    /// The revealed shared card
    shared: String,

    /// JSON paytable keyed by category name
    #[arg(short, long)]
    paytable: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// List every candidate card in text output
    #[arg(short, long)]
    breakdown: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let paytable = match &cli.paytable {
        Some(path) => load_paytable(path)?,
        None => Paytable::default(),
    };
    let calculator = EvCalculator::new(paytable);

    let result = calculator.evaluate_codes(
        [&cli.hole1, &cli.hole2, &cli.hole3].map(String::as_str),
        &cli.shared,
    )?;

    match cli.format {
        Format::Text => print_text(&result, cli.breakdown),
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Format::Csv => {
            for (key, value) in result.export_rows() {
                println!("{},{}", key, value);
            }
        }
    }
    Ok(())
}

fn load_paytable(path: &Path) -> Result<Paytable, RideError> {
    event!(Level::DEBUG, path = %path.display(), "Loading paytable");
    let json = std::fs::read_to_string(path)
        .map_err(|e| RideError::InvalidPaytable(format!("{}: {}", path.display(), e)))?;
    Paytable::from_json(&json)
}

fn print_text(result: &EnumerationResult, breakdown: bool) {
    println!("EV: {:+.6}", result.ev);
    println!();
    for (category, count) in result.counts.iter() {
        println!(
            "{:<18} {:>3} / {:<3} {:>8.4}%",
            category.name(),
            count,
            result.total,
            result.probability(category) * 100.0
        );
    }

    if breakdown {
        println!();
        for outcome in &result.breakdown {
            println!(
                "{}  {:<18} {:+}",
                outcome.card, outcome.category.name(), outcome.payout
            );
        }
    }
}
