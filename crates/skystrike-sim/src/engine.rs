//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the world, processes session commands, runs all
//! systems once per tick, and produces `SimSnapshot`s. Completely headless,
//! so tests can drive it with explicit timestamps and seeds.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace};

use skystrike_core::commands::SessionCommand;
use skystrike_core::config::SimSettings;
use skystrike_core::enums::{HoverClock, SessionState};
use skystrike_core::events::SimEvent;
use skystrike_core::input::ControlIntent;
use skystrike_core::state::SimSnapshot;
use skystrike_core::types::SimTime;

use crate::camera::{Camera, Viewpoint};
use crate::session::Session;
use crate::store::IdAllocator;
use crate::systems;
use crate::systems::effects::EffectScheduler;
use crate::systems::lock_on::LockOn;
use crate::systems::projectiles::FireControl;
use crate::systems::targets::TargetSpawner;
use crate::world::World;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and timestamps = same simulation.
    pub seed: u64,
    pub settings: SimSettings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            settings: SimSettings::default(),
        }
    }
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    settings: SimSettings,
    world: World,
    time: SimTime,
    session: Session,
    rng: ChaCha8Rng,
    ids: IdAllocator,
    command_queue: VecDeque<SessionCommand>,
    events: Vec<SimEvent>,

    // --- Subsystem state ---
    camera: Camera,
    fire_control: FireControl,
    lock: LockOn,
    effects: EffectScheduler,
    target_spawner: TargetSpawner,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. Play starts immediately.
    pub fn new(config: SimConfig) -> Self {
        info!(
            seed = config.seed,
            assist = config.settings.assist_mode,
            collision = ?config.settings.collision_mode(),
            "simulation started"
        );
        Self {
            settings: config.settings,
            world: World::default(),
            time: SimTime::default(),
            session: Session::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ids: IdAllocator::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            camera: Camera::default(),
            fire_control: FireControl::default(),
            lock: LockOn::default(),
            effects: EffectScheduler::default(),
            target_spawner: TargetSpawner::default(),
        }
    }

    /// Queue a session command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick at host time `now_ms` and return the
    /// resulting snapshot. After game over only commands and timed effects are
    /// processed until a restart.
    pub fn tick(&mut self, intent: &ControlIntent, now_ms: f64) -> SimSnapshot {
        self.process_commands();
        self.effects.run(now_ms);

        if self.session.is_playing() {
            self.run_systems(intent, now_ms);
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.session,
            &self.viewpoint(),
            &self.lock,
            &self.effects,
            now_ms,
            events,
        )
    }

    /// Clear every entity, reset the aircraft, score, lock, cooldown and effects,
    /// and resume play. Camera mode is kept.
    pub fn restart(&mut self) {
        let previous = self.session.score();
        self.world.reset(&mut self.events);
        self.session.reset(&mut self.events);
        self.lock.reset();
        self.fire_control = FireControl::default();
        self.effects.clear();
        self.target_spawner = TargetSpawner::default();
        self.time = SimTime::default();
        self.events.push(SimEvent::Restarted);
        info!(previous_score = previous, "session restarted");
    }

    pub fn set_assist_mode(&mut self, enabled: bool) {
        if self.settings.assist_mode != enabled {
            info!(enabled, "assist mode changed");
        }
        self.settings.assist_mode = enabled;
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    /// Read-only access to the entity world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn lock(&self) -> &LockOn {
        &self.lock
    }

    /// Mutable world access for scenario tests.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[cfg(test)]
    pub fn settings_mut(&mut self) -> &mut SimSettings {
        &mut self.settings
    }

    #[cfg(test)]
    pub fn allocate_id(&mut self) -> skystrike_core::types::EntityId {
        self.ids.allocate()
    }

    fn viewpoint(&self) -> Viewpoint {
        self.camera
            .viewpoint(&self.world.aircraft, self.settings.viewport_aspect)
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                SessionCommand::Restart => self.restart(),
                SessionCommand::SetAssistMode { enabled } => self.set_assist_mode(enabled),
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, intent: &ControlIntent, now_ms: f64) {
        // 1. Flight
        self.camera.update(intent);
        self.world.aircraft.fly(intent, &self.settings);

        // 2. Aim assist
        let viewpoint = self.viewpoint();
        self.lock.update(
            &viewpoint,
            &self.world.targets,
            &self.settings,
            now_ms,
            &mut self.events,
        );

        // 3. Guns and projectiles
        if intent.fire {
            if let Some(shot) = self.fire_control.fire(
                &self.world.aircraft,
                &self.settings,
                now_ms,
                &mut self.ids,
                &mut self.world.projectiles,
                &mut self.events,
                &mut self.rng,
            ) {
                self.effects.flash_muzzle(shot.gun, now_ms);
            }
        }
        systems::projectiles::run(
            &mut self.world.projectiles,
            &mut self.world.targets,
            &mut self.session,
            &self.settings,
            now_ms,
            &mut self.events,
        );

        // 4. Targets
        systems::targets::spawn(
            &mut self.world.targets,
            &mut self.target_spawner,
            &mut self.ids,
            &self.settings,
            &mut self.events,
            &mut self.rng,
        );
        let hover_clock = match self.settings.hover_clock {
            HoverClock::Wall => now_ms,
            HoverClock::Simulation => self.time.elapsed_ms,
        };
        systems::targets::run(&mut self.world.targets, &self.settings, hover_clock);

        // 5. Scenery
        systems::scenery::run(
            &mut self.world.obstacles,
            &mut self.world.clouds,
            &mut self.ids,
            &self.settings,
            &mut self.events,
            &mut self.rng,
        );

        // 6. Collision and session
        systems::collision::run(
            &self.world.aircraft,
            &self.world.obstacles,
            &mut self.world.targets,
            &mut self.session,
            &self.settings,
            &mut self.events,
        );

        // A target destroyed this tick must not stay locked.
        self.lock.release_if_gone(&self.world.targets);

        trace!(
            tick = self.time.tick,
            projectiles = self.world.projectiles.len(),
            targets = self.world.targets.len(),
            score = self.session.score(),
            "tick"
        );
    }
}
