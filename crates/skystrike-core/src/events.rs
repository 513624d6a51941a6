//! Events emitted by the simulation for the scene, audio and score collaborators.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, SoundCue};
use crate::types::{EntityId, Vec3};

/// Something the host should react to. Collected during a tick and handed
/// out with that tick's snapshot, in the order they happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// An entity was created and needs a visual.
    VisualAdded {
        kind: EntityKind,
        id: EntityId,
        position: Vec3,
    },
    /// An entity was destroyed; drop its visual.
    VisualRemoved { kind: EntityKind, id: EntityId },
    /// Fire-and-forget audio cue.
    Sound { cue: SoundCue },
    /// A target was destroyed at this position.
    Explosion { position: Vec3 },
    /// Score changed to the given value.
    ScoreChanged { score: u32 },
    /// A target came into sight after none was.
    LockAcquired { target: EntityId },
    /// The aircraft hit an obstacle.
    GameOver { score: u32 },
    /// The session was reset and play resumed.
    Restarted,
}
