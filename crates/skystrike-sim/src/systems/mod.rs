//! Per-tick systems.
//!
//! Systems are free functions over the stores they touch. Cross-subsystem
//! effects (a hit removing a target and scoring) happen as direct calls within
//! the same tick.

pub mod collision;
pub mod effects;
pub mod lock_on;
pub mod projectiles;
pub mod scenery;
pub mod snapshot;
pub mod targets;
