//! Core types and definitions for the SKYSTRIKE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry types, tunable settings, control intent, session commands,
//! events, snapshots, constants, and the collaborator service traits.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod services;
pub mod state;
pub mod types;
