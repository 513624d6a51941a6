use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use skystrike_app::bridge::Services;
use skystrike_app::game_loop::{spawn_game_loop, LoopOptions};
use skystrike_app::state::{parse_command_line, shared_snapshot, LoopCommand};
use skystrike_core::config::SimSettings;
use skystrike_sim::SimConfig;

/// Headless runner for the SKYSTRIKE flight-combat simulation.
///
/// Without `--frames`, control intents and session commands are read from
/// stdin, one JSON object per line. `quit` or end of input stops the run.
#[derive(Debug, Parser)]
#[command(name = "skystrike", version)]
struct Cli {
    /// JSON settings file; missing keys keep their defaults.
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Seed for every random draw.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Run this many ticks and exit.
    #[arg(long)]
    frames: Option<u64>,

    /// Apply the lower entity caps and simplified collision.
    #[arg(long)]
    reduced_fidelity: bool,

    /// Fly the scripted pattern instead of reading intents.
    #[arg(long)]
    autopilot: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Report the audio service as unavailable.
    #[arg(long)]
    no_audio: bool,
}

fn load_settings(cli: &Cli) -> Result<SimSettings> {
    let mut settings = match &cli.settings {
        Some(path) => SimSettings::from_json_file(path)
            .with_context(|| format!("failed to load settings: {}", path.display()))?,
        None => SimSettings::default(),
    };
    if cli.reduced_fidelity {
        settings = settings.with_reduced_fidelity();
    }
    settings.validate().context("invalid settings")?;
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid --log-level filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = load_settings(&cli)?;
    let latest = shared_snapshot();
    let (tx, handle) = spawn_game_loop(
        LoopOptions {
            config: SimConfig {
                seed: cli.seed,
                settings,
            },
            max_frames: cli.frames,
            autopilot: cli.autopilot,
        },
        latest.clone(),
        Services::logging(!cli.no_audio),
    )
    .context("failed to start game loop")?;

    if cli.frames.is_none() {
        for line in std::io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            let Some(command) = parse_command_line(&line) else {
                if !line.trim().is_empty() {
                    warn!(%line, "ignoring unrecognised input");
                }
                continue;
            };
            let quit = matches!(command, LoopCommand::Shutdown);
            if tx.send(command).is_err() || quit {
                break;
            }
        }
        // The loop may already be gone; nothing to report then.
        let _ = tx.send(LoopCommand::Shutdown);
    }

    let summary = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    info!(
        frames = summary.frames,
        score = summary.score,
        session = ?summary.session,
        "run finished"
    );

    let snapshot = latest
        .lock()
        .map_err(|_| anyhow!("snapshot lock poisoned"))?
        .take();
    if let Some(snapshot) = snapshot {
        let json = serde_json::to_string_pretty(&snapshot).context("failed to encode snapshot")?;
        println!("{json}");
    }
    Ok(())
}
