//! Forwards simulation events to the external collaborators.
//!
//! Collaborator failures stop at this boundary: they are logged and dropped,
//! never fed back into the simulation.

use tracing::{debug, info};

use skystrike_core::enums::{EntityKind, SoundCue};
use skystrike_core::error::ServiceError;
use skystrike_core::events::SimEvent;
use skystrike_core::services::{AudioService, SceneService, ScoreDisplay};
use skystrike_core::types::{EntityId, Vec3};

/// The set of collaborators one game loop talks to.
pub struct Services {
    pub scene: Box<dyn SceneService + Send>,
    pub audio: Box<dyn AudioService + Send>,
    pub score: Box<dyn ScoreDisplay + Send>,
}

impl Services {
    /// Logging collaborators for headless runs. With `audio_enabled` off the
    /// audio service reports itself unsupported.
    pub fn logging(audio_enabled: bool) -> Self {
        Self {
            scene: Box::new(LogScene::default()),
            audio: Box::new(LogAudio {
                enabled: audio_enabled,
            }),
            score: Box::new(LogScore),
        }
    }

    /// Deliver one tick's events in order.
    pub fn dispatch(&mut self, events: &[SimEvent]) {
        for event in events {
            let result = match event {
                SimEvent::VisualAdded { kind, id, position } => {
                    self.scene.add_visual(*kind, *id, *position)
                }
                SimEvent::VisualRemoved { kind, id } => self.scene.remove_visual(*kind, *id),
                SimEvent::Sound { cue } => self.audio.play(*cue),
                SimEvent::ScoreChanged { score } => {
                    self.score.show_score(*score);
                    Ok(())
                }
                SimEvent::Explosion { position } => {
                    debug!(x = position.x, y = position.y, z = position.z, "explosion");
                    Ok(())
                }
                SimEvent::LockAcquired { target } => {
                    debug!(target = target.0, "lock acquired");
                    Ok(())
                }
                SimEvent::GameOver { score } => {
                    info!(score, "game over");
                    Ok(())
                }
                SimEvent::Restarted => {
                    info!("restarted");
                    Ok(())
                }
            };
            if let Err(err) = result {
                debug!(error = %err, "collaborator call failed; ignored");
            }
        }
    }
}

/// Scene stand-in that tracks how many visuals are live.
#[derive(Debug, Default)]
pub struct LogScene {
    live: usize,
}

impl SceneService for LogScene {
    fn add_visual(&mut self, kind: EntityKind, id: EntityId, position: Vec3) -> Result<(), ServiceError> {
        self.live += 1;
        debug!(?kind, id = id.0, x = position.x, y = position.y, z = position.z, live = self.live, "add visual");
        Ok(())
    }

    fn remove_visual(&mut self, kind: EntityKind, id: EntityId) -> Result<(), ServiceError> {
        self.live = self.live.saturating_sub(1);
        debug!(?kind, id = id.0, live = self.live, "remove visual");
        Ok(())
    }
}

#[derive(Debug)]
pub struct LogAudio {
    pub enabled: bool,
}

impl AudioService for LogAudio {
    fn play(&mut self, cue: SoundCue) -> Result<(), ServiceError> {
        if !self.enabled {
            return Err(ServiceError::Unsupported {
                service: "audio",
                reason: "no output device".into(),
            });
        }
        debug!(?cue, "play sound");
        Ok(())
    }
}

#[derive(Debug)]
pub struct LogScore;

impl ScoreDisplay for LogScore {
    fn show_score(&mut self, score: u32) {
        info!(score, "score");
    }
}
