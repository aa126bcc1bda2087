use std::io;
use std::io::BufRead;
use std::io::Write;
use std::time::Duration;

use log::debug;
use owo_colors::OwoColorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use workload_generator_algo::Summary;
use workload_types::Field;

pub const BASIC_OUTPUT: &str = "basic-random.in";

pub const RANDOM_OUTPUT: &str = "random.in";

/// Returns a random source, reproducible when `seed` is given.
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("seeding random source with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Asks the operator for `field`, returning the raw answer.
///
/// An exhausted input yields an empty answer.
pub fn prompt<R, W>(
    field: Field,
    input: &mut R,
    output: &mut W,
) -> io::Result<String>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    output.write_all(field.prompt().as_bytes())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer)
}

/// Prints what a generation run produced on stderr.
pub fn report(summary: &Summary, elapsed: Duration) {
    eprintln!(
        "{:>12} {} order(s)",
        "Created".bold().green(),
        summary.created
    );
    eprintln!(
        "{:>12} {} order(s)",
        "Cancelled".bold().green(),
        summary.cancelled
    );
    if summary.skipped > 0 {
        eprintln!(
            "{:>12} {} cancel(s) without active order",
            "Skipped".bold().yellow(),
            summary.skipped
        );
    }
    if summary.fallbacks > 0 {
        eprintln!(
            "{:>12} {} cancel(s) without active order",
            "Bought".bold().yellow(),
            summary.fallbacks
        );
    }
    eprintln!(
        "{:>12} {} order(s)",
        "Active".bold().green(),
        summary.active
    );
    eprintln!(
        "{:>12} {:.2}s",
        "Elapsed".bold().green(),
        elapsed.as_secs_f64()
    );
}
