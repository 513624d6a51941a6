//! Simulation engine for SKYSTRIKE.
//!
//! Owns the entity world and subsystems, runs them once per host frame, and
//! produces `SimSnapshot`s for the renderer.

pub mod aircraft;
pub mod camera;
pub mod engine;
pub mod entities;
pub mod geometry;
pub mod session;
pub mod store;
pub mod systems;
pub mod world;

pub use engine::{SimConfig, SimulationEngine};
pub use skystrike_core as core;

#[cfg(test)]
mod tests;
