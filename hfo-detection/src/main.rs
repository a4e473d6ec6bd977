//! # HFO Detection
//!
//! The HFO Detection component performs the following functions:
//! * Reads one or more signals from text files of whitespace separated samples.
//! * Applies the user specified detection algorithm to each signal in parallel.
//! * Writes the detected events to stdout as CSV rows, one row per event, headed by the record schema.
//!
use clap::Parser;
use hfo_detection::{
    detection::{EventRecord, FIELDS, Real},
    method::{Method, bind_method},
    parameters::Mode,
};
use itertools::Itertools;
use miette::{IntoDiagnostic, WrapErr};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// [clap] derived struct to handle command line parameters.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Sampling frequency of the input signals, in samples per second
    #[clap(long, default_value = "5000")]
    fs: Real,

    /// Files containing the signals to analyse, as whitespace separated samples
    #[clap(long, required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    #[command(subcommand)]
    mode: Mode,
}

fn main() -> miette::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let method = bind_method(args.fs, &args.mode);
    info!(
        "Running {} version {} at {} Hz on {} input(s)",
        method.name(),
        method.version(),
        args.fs,
        args.input.len()
    );

    let results = args
        .input
        .par_iter()
        .map(|path| process_file(method.as_ref(), path).map(|records| (path, records)))
        .collect::<miette::Result<Vec<_>>>()?;

    println!(
        "input,{}",
        FIELDS.iter().map(|(name, _)| name).join(",")
    );
    for (path, records) in results {
        if records.is_empty() {
            warn!("No events found in {}", path.display());
        }
        for record in records {
            println!("{},{record}", path.display());
        }
    }
    Ok(())
}

/// Reads the signal stored at the given path and runs the detection method on it.
/// # Parameters
/// - method: the detection method with its parameters bound.
/// - path: the file containing the signal.
#[instrument(skip_all, fields(path = %path.display(), num_events))]
fn process_file(
    method: &(dyn Method + Send + Sync),
    path: &Path,
) -> miette::Result<Vec<EventRecord>> {
    let samples = read_signal(path)?;
    let records = method
        .run_records(&samples)
        .into_diagnostic()
        .wrap_err_with(|| format!("Detection failed for {}", path.display()))?;
    tracing::Span::current().record("num_events", records.len());
    Ok(records)
}

/// Parses whitespace separated samples from the given file.
fn read_signal(path: &Path) -> miette::Result<Vec<Real>> {
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Cannot read {}", path.display()))?
        .split_whitespace()
        .map(|token| {
            token
                .parse::<Real>()
                .into_diagnostic()
                .wrap_err_with(|| format!("Invalid sample {token:?} in {}", path.display()))
        })
        .collect()
}
