//! Headless host for the SKYSTRIKE simulation.
//!
//! Runs the engine on a fixed-rate thread, feeds it control intent, and
//! forwards simulation events to the scene, audio and score collaborators.

pub mod autopilot;
pub mod bridge;
pub mod game_loop;
pub mod state;
