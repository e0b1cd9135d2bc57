//! Prints a left rotation of a small integer sequence.
//!
//! With no arguments it rotates `[1, 2, ..., 9]` left by 1200 and prints
//! `[4, 5, 6, 7, 8, 9, 1, 2, 3]`.
//!
//! ```bash
//! cargo run --bin rotate_demo
//! cargo run --bin rotate_demo -- --shift -2 --values 10,20,30
//! cargo run --bin rotate_demo -- --shift -2 --strict   # rejected
//! ```

use std::process::ExitCode;

use array_rotate::{OpRotateLeft, RotateError, checked_shift, rotate_left};
use clap::Parser;
use env_logger::Env;
use log::{LevelFilter, debug, error};

#[derive(Parser, Debug)]
#[command(name = "rotate_demo", about = "Rotate a sequence left by k positions", version)]
struct Cli {
    /// Number of left-rotation steps. Negative values rotate right unless --strict.
    #[arg(long, default_value_t = 1200, allow_negative_numbers = true)]
    shift: i64,
    /// Comma-separated sequence to rotate.
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
    )]
    values: Vec<i64>,
    /// Reject negative shifts instead of normalizing them.
    #[arg(long)]
    strict: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn run(cli: &Cli) -> Result<Vec<i64>, RotateError> {
    if cli.strict {
        let shift = checked_shift(cli.shift)?;
        debug!("strict rotation by {shift} over {} values", cli.values.len());
        return Ok(rotate_left(&cli.values, shift));
    }
    let op = OpRotateLeft::with_signed_shift(cli.shift);
    debug!(
        "rotation by {} over {} values (effective {})",
        cli.shift,
        cli.values.len(),
        op.effective_shift(cli.values.len())
    );
    Ok(op.apply(&cli.values))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(rotated) => {
            println!("{rotated:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
