//! Session commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// Clear every entity collection, reset the aircraft and score, resume play.
    Restart,
    /// Switch the reduced-fidelity assist mode on or off.
    SetAssistMode { enabled: bool },
}
