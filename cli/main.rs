#![deny(unused_variables)]
#![deny(dead_code)]
#![deny(unused_imports)]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use lesson08::config::RunConfig;
use lesson08::table::{Table, demo_table, hadamard, load_table, row_max_indicator};
use lesson08::tdist::run_sampling;

#[derive(Args, Default)]
pub struct SamplingArgs {
    /// TOML file overriding the default seed, sample size and degrees of freedom
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for the random generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of values to draw
    #[arg(long, value_name = "N")]
    pub size: Option<usize>,

    /// Degrees of freedom of the sampled distribution
    #[arg(long, value_name = "DF")]
    pub df: Option<f64>,
}

#[derive(Args, Default)]
pub struct RowMaxArgs {
    /// Tab-separated table with a header row (defaults to the built-in A/B/c table)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

#[derive(Parser)]
#[command(
    name = "lesson08",
    about = "Row-max indicator tables and Student's t sampling statistics"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark each row's maximum and isolate it with an element-wise product
    #[command(about = "Print a table, its row-max indicator and their product")]
    Rowmax(RowMaxArgs),

    /// Sample Student's t and print descriptive and theoretical statistics
    #[command(about = "Print sample mean, variance, min, max and the moment tuple")]
    Tstats(SamplingArgs),

    /// Run both demonstrations in order
    #[command(about = "Run rowmax on the built-in table, then tstats")]
    Demo(SamplingArgs),
}

fn print_table(table: &Table) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", table.to_frame()?);
    Ok(())
}

fn run_rowmax(args: RowMaxArgs) -> Result<(), Box<dyn std::error::Error>> {
    let table = match args.input {
        Some(path) => load_table(&path)?,
        None => demo_table(),
    };
    print_table(&table)?;

    let indicator = row_max_indicator(&table);
    let product = hadamard(&table, &indicator)?;

    print_table(&indicator)?;
    print_table(&product)?;
    Ok(())
}

fn resolve_config(args: SamplingArgs) -> Result<RunConfig, Box<dyn std::error::Error>> {
    let mut config = match args.config {
        Some(path) => {
            log::info!("Loading run config from '{}'", path.display());
            RunConfig::load(&path)?
        }
        None => RunConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(size) = args.size {
        config.sample_size = size;
    }
    if let Some(df) = args.df {
        config.sample_df = df;
    }
    config.validate()?;
    Ok(config)
}

fn run_tstats(args: SamplingArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(args)?;
    let report = run_sampling(&config)?;

    println!("{}", report.summary);
    println!("{}", report.reported_moments());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Some(Commands::Rowmax(args)) => run_rowmax(args),
        Some(Commands::Tstats(args)) => run_tstats(args),
        Some(Commands::Demo(args)) => {
            run_rowmax(RowMaxArgs::default()).and_then(|()| run_tstats(args))
        }
        None => run_rowmax(RowMaxArgs::default())
            .and_then(|()| run_tstats(SamplingArgs::default())),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
