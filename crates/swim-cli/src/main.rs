use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use swim_cli::commands::{describe, score, sort, stroke, time};
use swim_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so piped output stays clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Some(Commands::Time(args)) => time::run(&mut stdout, args)?,
        Some(Commands::Score(args)) => score::run(&mut stdout, args)?,
        Some(Commands::Sort(args)) => sort::run(&mut stdout, args)?,
        Some(Commands::Stroke(args)) => stroke::run(&mut stdout, args)?,
        Some(Commands::Describe(args)) => {
            let config =
                Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
            tracing::debug!(?config, "loaded configuration");

            match &args.input {
                Some(path) => {
                    let file = File::open(path)
                        .with_context(|| format!("failed to open {}", path.display()))?;
                    describe::run(BufReader::new(file), &mut stdout, args, &config)?;
                }
                None => describe::run(io::stdin().lock(), &mut stdout, args, &config)?,
            }
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
