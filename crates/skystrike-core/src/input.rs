//! Normalized control intent consumed once per tick.
//!
//! Produced by keyboard, touch, or gyroscope front ends; the simulation does
//! not care which.

use serde::{Deserialize, Serialize};

/// Control snapshot for a single tick. Keys are camelCase (`thrustForward`);
/// missing fields deserialize as released and unknown keys are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ControlIntent {
    pub thrust_forward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub climb: bool,
    pub descend: bool,
    pub fire: bool,
    pub toggle_view: bool,
}

/// Resolved turn direction. Left wins when both are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    None,
}

/// Resolved vertical direction. Climb wins when both are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Climb,
    Descend,
    None,
}

impl ControlIntent {
    pub fn turn(&self) -> Turn {
        if self.turn_left {
            Turn::Left
        } else if self.turn_right {
            Turn::Right
        } else {
            Turn::None
        }
    }

    pub fn vertical(&self) -> Vertical {
        if self.climb {
            Vertical::Climb
        } else if self.descend {
            Vertical::Descend
        } else {
            Vertical::None
        }
    }
}
