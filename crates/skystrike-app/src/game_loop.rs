//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread so it is owned there. Commands
//! arrive via an `mpsc` channel; the latest snapshot is stored in shared state
//! for polling, and each tick's events go to the collaborators.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use skystrike_core::constants::TICK_RATE;
use skystrike_core::enums::SessionState;
use skystrike_core::input::ControlIntent;
use skystrike_sim::engine::{SimConfig, SimulationEngine};

use crate::autopilot;
use crate::bridge::Services;
use crate::state::{LoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How a game loop should run.
pub struct LoopOptions {
    pub config: SimConfig,
    /// Stop after this many ticks. Runs until shutdown when `None`.
    pub max_frames: Option<u64>,
    /// Drive the aircraft with the scripted pattern instead of received intents.
    pub autopilot: bool,
}

/// Final state of a finished loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames: u64,
    pub score: u32,
    pub session: SessionState,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle that yields the loop summary.
pub fn spawn_game_loop(
    options: LoopOptions,
    latest_snapshot: SharedSnapshot,
    services: Services,
) -> std::io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<LoopSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skystrike-game-loop".into())
        .spawn(move || run_game_loop(options, cmd_rx, &latest_snapshot, services))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect, or the frame limit.
fn run_game_loop(
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &SharedSnapshot,
    mut services: Services,
) -> LoopSummary {
    let mut engine = SimulationEngine::new(options.config);
    let mut held_intent = ControlIntent::default();
    let mut frames = 0u64;
    let started = Instant::now();
    let mut next_tick_time = started;

    let summary = |engine: &SimulationEngine, frames| LoopSummary {
        frames,
        score: engine.score(),
        session: engine.session_state(),
    };

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Intent(intent)) => held_intent = intent,
                Ok(LoopCommand::Session(command)) => engine.queue_command(command),
                Ok(LoopCommand::Shutdown) => {
                    info!(frames, "game loop shut down");
                    return summary(&engine, frames);
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("command channel closed");
                    return summary(&engine, frames);
                }
            }
        }

        // 2. Advance one tick
        let intent = if options.autopilot {
            autopilot::intent(frames)
        } else {
            held_intent
        };
        let now_ms = started.elapsed().as_secs_f64() * 1000.0;
        let snapshot = engine.tick(&intent, now_ms);
        frames += 1;

        // 3. Hand events to the collaborators
        services.dispatch(&snapshot.events);

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if options.max_frames.is_some_and(|max| frames >= max) {
            info!(frames, "frame limit reached");
            return summary(&engine, frames);
        }

        // 5. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset instead of spiralling to catch up.
            next_tick_time = now;
        }
    }
}
