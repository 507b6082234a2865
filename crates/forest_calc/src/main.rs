mod config;
mod error;
mod export;
mod report;

use crate::config::Settings;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use forest_core::{
    Config, OptimizeRequest, PatternQuery, RawInputs, SearchRequest, ValidatedInputs,
    analyze_number, optimize, search, sequence_preview, solve, validate_inputs,
};
use log::{debug, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Day reachability and beautiful-number calculator",
    long_about = None
)]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "config/default.toml", global = true)]
    config: PathBuf,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether the target day can be reached exactly
    Reach(DayArgs),
    /// List the nearest beautiful days reachable with the current configuration
    Search {
        #[command(flatten)]
        day: DayArgs,
        #[command(flatten)]
        pattern: PatternArgs,
        /// Write the results to a CSV file, optionally into DIR
        #[arg(long, value_name = "DIR", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },
    /// Rank children/beds configurations
    Optimize {
        #[command(flatten)]
        day: DayArgs,
        #[command(flatten)]
        pattern: PatternArgs,
        /// Write the results to a CSV file, optionally into DIR
        #[arg(long, value_name = "DIR", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },
    /// Show the patterns and properties of a single number
    Analyze { value: u64 },
    /// Show the first days on the way to the target with their patterns
    Preview(DayArgs),
}

#[derive(Args)]
struct DayArgs {
    /// Current day
    #[arg(short = 'd', long = "day", allow_negative_numbers = true)]
    day: i64,

    /// Number of children
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    children: i64,

    /// Number of beds
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    beds: i64,

    /// Target day
    #[arg(short = 't', long = "target", allow_negative_numbers = true)]
    target: Option<i64>,

    /// Maximum steps to search (100-10000); defaults to the config value
    #[arg(short = 'm', long = "max-steps", allow_negative_numbers = true)]
    max_steps: Option<i64>,
}

#[derive(Args)]
struct PatternArgs {
    /// Pattern to look for: all, custom, or a pattern id such as palindrome
    #[arg(short = 'p', long = "pattern")]
    pattern: Option<String>,

    /// Regular expression used with --pattern custom
    #[arg(long = "custom")]
    custom: Option<String>,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match &cli.command {
        Command::Reach(args) => {
            let inputs = validate(args, &config)?;
            let target = inputs
                .target_day
                .context("Enter a target day (--target) to check reachability")?;
            let outcome = solve(inputs.current_day, target, inputs.configuration.stride);
            emit(cli.json, &outcome, || report::reachability(&outcome, target))?;
        }
        Command::Search {
            day,
            pattern,
            export,
        } => {
            let inputs = validate(day, &config)?;
            let (query, custom) = resolve_pattern(pattern, &config)?;
            let mut request =
                SearchRequest::new(inputs.current_day, inputs.configuration.stride, query)
                    .with_max_steps(inputs.max_steps);
            request.custom_pattern = custom;

            let results = search(&request);
            emit(cli.json, &results, || report::matches(&results))?;
            if let Some(dir) = export {
                let settings = Settings::resolve(dir.as_deref())?;
                let path = export::export_matches(&results, &settings)?;
                info!("Results saved to: {}", path.display());
            }
        }
        Command::Optimize {
            day,
            pattern,
            export,
        } => {
            let inputs = validate(day, &config)?;
            let (query, custom) = resolve_pattern(pattern, &config)?;
            let request = OptimizeRequest::new(inputs.current_day, inputs.target_day)
                .with_max_steps(inputs.max_steps)
                .with_query(query, custom)
                .with_grid(config.grid);

            let results = optimize(&request);
            emit(cli.json, &results, || {
                report::candidates(&results, inputs.target_day)
            })?;
            if let Some(dir) = export {
                let settings = Settings::resolve(dir.as_deref())?;
                let path = export::export_candidates(&results, &settings)?;
                info!("Results saved to: {}", path.display());
            }
        }
        Command::Analyze { value } => {
            let profile = analyze_number(*value);
            emit(cli.json, &profile, || report::profile(&profile))?;
        }
        Command::Preview(args) => {
            let inputs = validate(args, &config)?;
            let target = inputs
                .target_day
                .context("Enter a target day (--target) to preview the sequence")?;
            let stride = inputs.configuration.stride;
            let steps = target.saturating_sub(inputs.current_day) / stride.max(1);
            let preview = sequence_preview(inputs.current_day, target, stride, steps);
            emit(cli.json, &preview, || report::preview(&preview))?;
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        let config = Config::load_from_file(path)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    } else {
        warn!(
            "Config file not found: {}, using default settings",
            path.display()
        );
        Ok(Config::default())
    }
}

fn validate(args: &DayArgs, config: &Config) -> Result<ValidatedInputs> {
    let raw = RawInputs {
        current_day: args.day,
        children: args.children,
        beds: args.beds,
        target_day: args.target,
        max_steps: args
            .max_steps
            .unwrap_or(i64::try_from(config.search.max_steps).unwrap_or(i64::MAX)),
    };
    let inputs = validate_inputs(&raw, &config.grid).map_err(forest_core::CalcError::from)?;
    debug!(
        "Effective step: base({}) + children({}) + beds({}) = {}",
        config.grid.base_step,
        inputs.configuration.children,
        inputs.configuration.beds,
        inputs.configuration.stride
    );
    Ok(inputs)
}

fn resolve_pattern(args: &PatternArgs, config: &Config) -> Result<(PatternQuery, Option<String>)> {
    let query = match &args.pattern {
        Some(name) => name.parse()?,
        None => config.query()?,
    };
    let custom = args
        .custom
        .clone()
        .or_else(|| config.search.custom_pattern.clone());
    if query == PatternQuery::Custom && custom.as_deref().is_none_or(str::is_empty) {
        warn!("Pattern 'custom' selected without --custom; nothing will match");
    }
    Ok((query, custom))
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(value).map_err(error::CliError::from)?
        );
    } else {
        print!("{}", text());
    }
    Ok(())
}
