use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use workload_generator::report;
use workload_generator::BASIC_OUTPUT;
use workload_generator_algo::Basic;
use workload_generator_algo::Generator;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Generates a single-client workload script over five tickers.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    #[clap(short, long, help = "Seed of the random source")]
    seed: Option<u64>,
    #[clap(short, long, default_value = BASIC_OUTPUT, help = "Script destination")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let Args { seed, output } = Args::parse();

    let mut rng = workload_generator::rng(seed);
    let mut generator = Generator::new(Basic::default());

    let begin = Instant::now();
    let summary =
        workload_generator_rt::write_file(&output, &mut generator, &mut rng)?;
    let elapsed = begin.elapsed();

    println!("Test case generated");
    report(&summary, elapsed);

    Ok(())
}
