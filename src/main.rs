use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

use name_normalizer::cli::{commands::execute, Cli};
use name_normalizer::utils::config::{Config, ConfigSource};

fn init_logger(verbose: u8, config: &Config) -> Result<()> {
    let level = match verbose {
        0 => config.logging.level_filter()?,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG still wins over the config and -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .context("Failed to init the logger")?;

    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode> {
    let (config, source) = Config::resolve(cli.config.as_deref())?;
    init_logger(cli.verbose, &config)?;

    match &source {
        ConfigSource::File(path) => log::info!("Loaded config from {}", path.display()),
        ConfigSource::Defaults => log::info!("No config file found, using defaults."),
    }

    let class = cli.word_class.unwrap_or(config.normalizer.word_class);
    log::debug!("Word class: {:?}", class);

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    Ok(execute(cli.command, stdin, &mut stdout, &mut stderr, class))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
