//! Contracts for the collaborators that sit outside the simulation.
//!
//! The simulation never calls these directly; it emits `SimEvent`s and the host
//! forwards them. Implementations may fail, and the host drops those failures.

use crate::enums::{EntityKind, SoundCue};
use crate::error::ServiceError;
use crate::types::{EntityId, Vec3};

/// Owns the visual representation of entities.
pub trait SceneService {
    fn add_visual(&mut self, kind: EntityKind, id: EntityId, position: Vec3)
        -> Result<(), ServiceError>;
    fn remove_visual(&mut self, kind: EntityKind, id: EntityId) -> Result<(), ServiceError>;
}

/// Plays sound cues.
pub trait AudioService {
    fn play(&mut self, cue: SoundCue) -> Result<(), ServiceError>;
}

/// Shows the current score. Receives every change; never answers back.
pub trait ScoreDisplay {
    fn show_score(&mut self, score: u32);
}
