use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use blockexpr::cache::{self, DEFAULT_CACHE_PATH};
use blockexpr::solver::constants::DEFAULT_MAX_BLOCKS;
use blockexpr::{BlockGenerator, Digits, ExpressionSolver, SearchConfig, parse_target};
use clap::{Parser, ValueEnum};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Blockexpr - Find expressions over repeated digit blocks
#[derive(Parser, Debug)]
#[command(name = "blockexpr")]
#[command(about = "Find an expression built from repeated digit blocks that evaluates to a target value")]
#[command(version)]
pub struct CliArgs {
    /// Target value to match (read from standard input when omitted)
    #[arg(allow_negative_numbers = true)]
    pub target: Option<String>,

    /// Regenerate the block cache and exit without searching
    #[arg(long)]
    pub regenerate_cache: bool,

    /// Path of the block cache file
    #[arg(short, long, default_value = DEFAULT_CACHE_PATH)]
    pub cache: PathBuf,

    /// Highest number of blocks to try
    #[arg(short, long, default_value_t = DEFAULT_MAX_BLOCKS)]
    pub max_blocks: usize,

    /// The four digits making up one block
    #[arg(short, long, default_value = "9178")]
    pub digits: String,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: Option<String>,
    pub regenerate_cache: bool,
    pub cache: PathBuf,
    pub search: SearchConfig,
    pub digits: Digits,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let digits: Digits = args.digits.parse().context("Invalid digit string")?;

    let search = SearchConfig::default().with_max_blocks(args.max_blocks);
    search.validate().context("Invalid search configuration")?;

    Ok(CliConfig {
        target: args.target,
        regenerate_cache: args.regenerate_cache,
        cache: args.cache,
        search,
        digits,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Message printed when every block count has been tried
pub fn not_found_message(max_blocks: usize) -> String {
    format!(
        "No expression found within {} blocks (with current operators).",
        max_blocks
    )
}

/// Turn raw input into a target; anything unusable means there is nothing to do
fn target_from_text(text: &str) -> Option<f64> {
    match parse_target(text) {
        Ok(target) => Some(target),
        Err(err) => {
            info!("Nothing to search for: {}", err);
            None
        }
    }
}

fn read_target(arg: Option<String>) -> Result<Option<f64>> {
    match arg {
        Some(text) => Ok(target_from_text(&text)),
        None => read_target_from(io::stdin().lock()),
    }
}

/// Read the first line of `reader` as a target. Bytes that are not UTF-8
/// become replacement characters and then fail to parse like any other text.
fn read_target_from<R: BufRead>(mut reader: R) -> Result<Option<f64>> {
    let mut line = Vec::new();
    reader
        .read_until(b'\n', &mut line)
        .context("Failed to read target from standard input")?;
    Ok(target_from_text(&String::from_utf8_lossy(&line)))
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let generator = BlockGenerator::new(config.digits);

    if config.regenerate_cache {
        let base = generator.generate();
        cache::store(&config.cache, config.digits, &base).with_context(|| {
            format!("Failed to write cache to {}", config.cache.display())
        })?;
        info!(
            "Regenerated cache with {} block values at {}",
            base.len(),
            config.cache.display()
        );
        return Ok(());
    }

    let Some(target) = read_target(config.target)? else {
        return Ok(());
    };

    let base = cache::load_or_generate(&config.cache, &generator);
    let solver = ExpressionSolver::new(&base, config.search)?;

    info!(
        "Searching for an expression over blocks of {} that equals {}",
        config.digits, target
    );

    match solver.solve(target)? {
        Some(solution) => {
            println!("{}", solution);
            Ok(())
        }
        None => {
            warn!("No matching expression found");
            println!("{}", not_found_message(solver.config().max_blocks));
            Ok(())
        }
    }
}
