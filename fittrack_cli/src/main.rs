use clap::{Parser, Subcommand};
use fittrack_core::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Workout summary calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Emit reports as JSON lines instead of formatted text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a JSONL file of sensor packages
    Batch {
        /// Packages file (overrides the configured default)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Compute one session from command-line readings
    Session {
        /// Workout-type code (SWM, RUN, WLK)
        code: String,

        /// Positional readings, in declared order
        #[arg(required = true)]
        readings: Vec<f64>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    fittrack_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let json = cli.json || config.report.json;

    match cli.command {
        Some(Commands::Batch { input }) => cmd_batch(input, &config, json),
        Some(Commands::Session { code, readings }) => cmd_session(&code, readings, json),
        None => {
            // Default to the built-in demo packages
            cmd_demo(json)
        }
    }
}

fn cmd_batch(input: Option<PathBuf>, config: &Config, json: bool) -> Result<()> {
    let path = input
        .or_else(|| config.input.packages_file.clone())
        .ok_or_else(|| Error::Config("no packages file given and none configured".into()))?;

    let file = File::open(&path)?;
    let reader = BufReader::new(file);

    let mut count = 0usize;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let package: SensorPackage = serde_json::from_str(&line)?;
        print_report(&package, json)?;
        count += 1;
    }

    tracing::info!("Processed {} packages from {:?}", count, path);
    Ok(())
}

fn cmd_session(code: &str, readings: Vec<f64>, json: bool) -> Result<()> {
    print_report(&SensorPackage::new(code, readings), json)
}

fn cmd_demo(json: bool) -> Result<()> {
    for package in sample_packages() {
        print_report(package, json)?;
    }
    Ok(())
}

fn print_report(package: &SensorPackage, json: bool) -> Result<()> {
    let session = build_session(package)?;
    let report = session.summary()?;

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report.message());
    }
    Ok(())
}
