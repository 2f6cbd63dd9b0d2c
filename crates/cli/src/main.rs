//! OneGallon CLI - daily water-intake tracker.

mod input;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use onegallon_core::TrackerConfig;
use onegallon_progress::{DailyIntakeTracker, IntakeTracker};
use onegallon_storage::{JsonStorage, Storage};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use input::{parse_line, Command};

const DEFAULT_CONFIG_FILE: &str = "onegallon.toml";

#[derive(Parser)]
#[command(name = "onegallon")]
#[command(about = "Daily water-intake tracker", long_about = None)]
struct Cli {
    /// Config file (defaults to ./onegallon.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// State file location
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Daily target in ml
    #[arg(long, global = true)]
    target_ml: Option<f64>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive tracking session (default)
    Session {
        /// Continue from the saved state instead of clearing it
        #[arg(long)]
        resume: bool,
    },
    /// Print a saved state file without modifying it
    Inspect {
        /// State file (defaults to the configured data file)
        file: Option<PathBuf>,
        /// Print the raw JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    debug!(?config, "configuration resolved");

    match cli.command.unwrap_or(Commands::Session { resume: false }) {
        Commands::Session { resume } => run_session(config, resume).await,
        Commands::Inspect { file, json } => {
            let path = file.unwrap_or_else(|| config.data_file.clone());
            inspect(&path, config, json).await
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<TrackerConfig> {
    let mut config = match &cli.config {
        Some(path) => TrackerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => TrackerConfig::load(DEFAULT_CONFIG_FILE)
            .with_context(|| format!("loading config {DEFAULT_CONFIG_FILE}"))?,
        None => TrackerConfig::default(),
    };

    if let Some(data_file) = &cli.data_file {
        config.data_file = data_file.clone();
    }
    if let Some(target_ml) = cli.target_ml {
        config.target_ml = target_ml;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

async fn run_session(config: TrackerConfig, resume: bool) -> Result<()> {
    let storage = JsonStorage::new(&config.data_file);
    let mut tracker = DailyIntakeTracker::new(storage, config)?;

    if resume {
        if !tracker.load().await.context("loading saved state")? {
            println!("No saved state found, starting fresh.");
        }
    } else {
        let report = tracker.initialize().await.context("clearing previous state")?;
        if report.cleared_previous {
            println!("Application started with cleared data (previous records removed).");
        }
    }
    info!(data_file = %tracker.storage().path().display(), "session started");

    println!("{}\n", render::render_dashboard(&tracker.snapshot()));
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_line(&line) {
            Ok(c) => c,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Add(amount) => add(&mut tracker, amount).await,
            Command::Status => println!("{}", render::render_dashboard(&tracker.snapshot())),
            Command::History => println!("{}", render::render_history(&tracker.snapshot())),
            Command::Help => println!("{}", render::HELP),
            Command::Quit => break,
        }
    }

    info!("session ended");
    Ok(())
}

async fn add<S: Storage + 'static>(tracker: &mut DailyIntakeTracker<S>, amount: Option<f64>) {
    let amount = amount.unwrap_or(tracker.config().default_amount);
    let step = tracker.config().input_step;
    if amount > 0.0 && !input::on_step(amount, step) {
        println!("Note: {amount} ml is not a multiple of {step} ml.");
    }

    let result = tracker.add_amount(amount).await;
    if !result.accepted {
        println!("Amount must be greater than 0.");
        return;
    }
    if let Some(e) = &result.save_error {
        // The in-memory total is kept; the next successful save catches up.
        println!("Failed to save: {e}");
    }

    if result.goal_reached {
        println!("\n★ Goal Achieved! Well done! ★");
        if let Some(total) = result.achieved_ml {
            println!("{total} ml logged today. Counter reset.\n");
        }
        tokio::time::sleep(tracker.config().celebration_delay()).await;
    }
    println!("{}", render::render_dashboard(&tracker.snapshot()));
}

async fn inspect(path: &Path, config: TrackerConfig, json: bool) -> Result<()> {
    let storage = JsonStorage::new(path);
    let mut tracker = DailyIntakeTracker::new(storage, config)?;
    if !tracker
        .load()
        .await
        .with_context(|| format!("reading {}", path.display()))?
    {
        println!("No saved state at {}", path.display());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&tracker.state().to_persisted())?);
    } else {
        println!("{}", render::render_saved(tracker.state()));
    }
    Ok(())
}
