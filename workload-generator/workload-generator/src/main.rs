use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use workload_generator::prompt;
use workload_generator::report;
use workload_generator::RANDOM_OUTPUT;
use workload_generator_algo::Generator;
use workload_generator_algo::Parameterized;
use workload_types::error::ConfigError;
use workload_types::Config;
use workload_types::Field;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Generates a multi-client workload script. Any count not given as a flag
/// is asked for on stdin.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    #[clap(
        short = 'c',
        long = "clients",
        allow_negative_numbers = true,
        help = "Number of clients (1-40)"
    )]
    clients: Option<i64>,
    #[clap(
        short = 'i',
        long = "instruments",
        allow_negative_numbers = true,
        help = "Number of instruments"
    )]
    instruments: Option<i64>,
    #[clap(
        short = 'n',
        long = "orders",
        allow_negative_numbers = true,
        help = "Number of orders"
    )]
    orders: Option<i64>,
    #[clap(short, long, help = "Seed of the random source")]
    seed: Option<u64>,
    #[clap(short, long, default_value = RANDOM_OUTPUT, help = "Script destination")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = match read_config(&args) {
        Ok(config) => config,
        Err(error) => match error.downcast_ref::<ConfigError>() {
            Some(error) => {
                eprintln!("{} {error}", "Invalid input:".bold().red());
                return Ok(());
            }
            None => return Err(error),
        },
    };

    let mut rng = workload_generator::rng(args.seed);
    let mut generator = Generator::new(Parameterized::new(&config));

    let begin = Instant::now();
    let summary = workload_generator_rt::write_file(
        &args.output,
        &mut generator,
        &mut rng,
    )?;
    let elapsed = begin.elapsed();

    println!("Test case generated: {}", args.output.display());
    report(&summary, elapsed);

    Ok(())
}

/// Reads every count, from the flags or interactively, validating each one
/// as soon as it is known.
fn read_config(args: &Args) -> Result<Config> {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    Config::read(|field| -> Result<i64> {
        let flag = match field {
            Field::Clients => args.clients,
            Field::Instruments => args.instruments,
            Field::Orders => args.orders,
        };
        match flag {
            Some(value) => Ok(value),
            None => Ok(field.parse(&prompt(field, &mut stdin, &mut stdout)?)?),
        }
    })
}
