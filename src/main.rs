//! Worked examples of the scalar triple product.
//!
//! Prints the unit cube volume, shows that only the height of the third
//! vector matters over a unit square, and that shearing the third vector
//! along the plane of the first two keeps the volume. Example vectors come
//! from a seedable random source; pass `--seed` to replay a run.

mod walkthrough;

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vecalg::{RandomSource, VectorError};

/// Random trials per demonstration when `--trials` is not given
const DEFAULT_TRIALS: usize = 10;
/// Decimal places used for printed values
const PRECISION: usize = 4;

#[derive(Parser, Debug)]
#[command(name = "vecalg", about = "Worked examples of the scalar triple product")]
struct Args {
    /// Seed for the example vectors (defaults to the system clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Random trials per demonstration
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_pause: bool,
}

#[derive(Error, Debug)]
enum RunError {
    #[error(transparent)]
    Vector(#[from] VectorError),
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// Runs every demonstration and writes the results to `out`.
///
/// # Arguments
///
/// * `out` - Destination for the human-readable report
/// * `rng` - Source of the example vectors
/// * `trials` - Random trials per demonstration
fn report<W: Write>(out: &mut W, rng: &mut RandomSource, trials: usize) -> Result<(), RunError> {
    let p = PRECISION;

    let cube = walkthrough::unit_cube();
    if cube.holds {
        writeln!(out, "The volume of the unit cube is {:.*}.", p, cube.volume)?;
    }

    for trial in walkthrough::height_only(rng, trials)? {
        if trial.holds {
            writeln!(out, "c = {:.*}, yet volume is still {:.*}.", p, trial.vector, p, trial.volume)?;
        }
    }

    let shear = walkthrough::shear(rng, trials)?;
    writeln!(
        out,
        "a = {:.*}, b = {:.*}, and c = {:.*}\n giving Cross(a, b) = {:.*} and volume = {:.*}",
        p, shear.a, p, shear.b, p, shear.c, p, shear.a_cross_b, p, shear.volume
    )?;
    for trial in &shear.trials {
        if trial.holds {
            writeln!(out, "c' = {:.*}, yet volume is still {:.*}.", p, trial.vector, p, shear.volume)?;
        }
    }
    Ok(())
}

fn pause() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "Press Enter to continue . . . ")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}

fn run(args: &Args) -> Result<(), RunError> {
    let mut rng = match args.seed {
        Some(seed) => RandomSource::from_seed(seed),
        None => RandomSource::from_clock(),
    };
    info!(seed = rng.seed(), trials = args.trials, "running scalar triple product examples");

    report(&mut io::stdout().lock(), &mut rng, args.trials)?;

    if !args.no_pause {
        pause()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
