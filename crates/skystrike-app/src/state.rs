//! State shared between the host front end and the game loop thread.

use std::sync::{Arc, Mutex};

use skystrike_core::commands::SessionCommand;
use skystrike_core::input::ControlIntent;
use skystrike_core::state::SimSnapshot;

/// Commands sent from the front end to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// Replace the held control intent. It stays in effect until the next one.
    Intent(ControlIntent),
    /// A session command to forward to the simulation engine.
    Session(SessionCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<SimSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

/// Interpret one line of front-end input.
///
/// `quit` shuts down; otherwise the line is read as a JSON session command
/// (`{"type":"Restart"}`) or, failing that, a JSON control intent.
pub fn parse_command_line(line: &str) -> Option<LoopCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line.eq_ignore_ascii_case("quit") {
        return Some(LoopCommand::Shutdown);
    }
    if let Ok(command) = serde_json::from_str::<SessionCommand>(line) {
        return Some(LoopCommand::Session(command));
    }
    serde_json::from_str::<ControlIntent>(line)
        .ok()
        .map(LoopCommand::Intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = shared_snapshot();
        assert!(shared.lock().unwrap().is_none());
    }

    #[test]
    fn test_parse_command_lines() {
        assert!(matches!(parse_command_line("quit"), Some(LoopCommand::Shutdown)));
        assert!(matches!(
            parse_command_line(r#"{"type":"Restart"}"#),
            Some(LoopCommand::Session(SessionCommand::Restart))
        ));
        assert!(matches!(
            parse_command_line(r#"{"type":"SetAssistMode","enabled":true}"#),
            Some(LoopCommand::Session(SessionCommand::SetAssistMode { enabled: true }))
        ));
        match parse_command_line(r#"{"thrustForward":true,"turnLeft":false,"turnRight":false,"climb":false,"descend":false,"fire":true,"toggleView":false}"#) {
            Some(LoopCommand::Intent(intent)) => {
                assert!(intent.thrust_forward);
                assert!(intent.fire);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(parse_command_line("   ").is_none());
        assert!(parse_command_line("nonsense").is_none());
    }

    #[test]
    fn test_partial_intent_keeps_named_keys() {
        match parse_command_line(r#"{"thrustForward":true,"fire":true}"#) {
            Some(LoopCommand::Intent(intent)) => {
                assert!(intent.thrust_forward);
                assert!(intent.fire);
                assert!(!intent.turn_left);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unrecognised_json_is_rejected() {
        // Neither a known command nor a valid intent; must not become an idle intent.
        assert!(parse_command_line(r#"{"type":"Restrat"}"#).is_none());
        assert!(parse_command_line(r#"{"thrust_forward":true}"#).is_none());
        assert!(parse_command_line(r#"{"thrustForward":true,"boost":true}"#).is_none());
    }
}
