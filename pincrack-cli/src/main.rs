mod error;

use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pincrack::{Algorithm, Cracker, Digest, PasswordLength, RunConfig, compute_digest};
use tracing_subscriber::EnvFilter;

use crate::error::Error;

/// Environment variable consulted for the worker count when `--workers` is absent.
const WORKERS_ENV: &str = "PINCRACK_WORKERS";

#[derive(Parser, Debug)]
#[command(name = "pincrack")]
#[command(about = "Recover a fixed-length numeric password from its hash by parallel brute force")]
struct Args {
    /// Target digest as hex
    #[arg(long, conflicts_with = "password")]
    hash: Option<String>,

    /// Hash this plaintext and use the result as the target
    #[arg(long)]
    password: Option<String>,

    /// Number of digits in the password
    #[arg(short, long, default_value_t = 8)]
    length: u32,

    /// Number of parallel workers (default: $PINCRACK_WORKERS, else one per CPU)
    #[arg(short = 'j', long)]
    workers: Option<usize>,

    /// Hash algorithm: sha256 or sha1
    #[arg(short, long, default_value_t = Algorithm::Sha256)]
    algorithm: Algorithm,

    /// Disable progress spinner
    #[arg(long)]
    no_progress: bool,

    /// Log per-chunk progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Parses the raw value of `PINCRACK_WORKERS`. Unset means autodetect.
fn parse_workers_env(value: Option<String>) -> Result<Option<usize>, Error> {
    match value {
        Some(value) => value
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&n| n > 0)
            .map(Some)
            .ok_or(Error::InvalidEnv { name: WORKERS_ENV, value }),
        None => Ok(None),
    }
}

/// `--workers` wins; otherwise fall back to the environment.
fn worker_count(flag: Option<usize>, env: Option<String>) -> Result<Option<usize>, Error> {
    match flag {
        Some(workers) => Ok(Some(workers)),
        None => parse_workers_env(env),
    }
}

fn target_digest(args: &Args) -> Result<Digest, Error> {
    match (&args.hash, &args.password) {
        (Some(hash), None) => Ok(Digest::from_hex(hash)?),
        (None, Some(password)) => Ok(compute_digest(args.algorithm, password)),
        _ => Err(Error::InvalidArgs),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let target = target_digest(args)?;
    let length = PasswordLength::try_from(args.length)?;

    let mut config = RunConfig::new(target, length).with_algorithm(args.algorithm);
    if let Some(workers) = worker_count(args.workers, std::env::var(WORKERS_ENV).ok())? {
        config = config.with_workers(workers);
    }
    let cracker = Cracker::new(config);

    println!("Starting brute-force password cracking");
    println!("Using {} workers", cracker.resolve_workers()?);

    let spinner = if !args.no_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("Invalid progress bar template"),
        );
        pb.set_message(format!("searching {} candidates", length.keyspace_size()));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let outcome = cracker.run();

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let outcome = outcome?;
    match outcome.password() {
        Some(password) => println!("PASSWORD CRACKED: {password}"),
        None => println!("Password not found in given range."),
    }
    println!("Time taken: {:.2} seconds", outcome.elapsed_secs());

    Ok(())
}
