//! Scripted control intent for unattended runs.

use skystrike_core::input::ControlIntent;

/// Length of one full manoeuvre cycle in frames.
const CYCLE: u64 = 360;

/// Intent for `frame`: constant thrust, a left turn then a right turn each
/// cycle, a climb and a descent, and short bursts of fire.
pub fn intent(frame: u64) -> ControlIntent {
    let phase = frame % CYCLE;
    ControlIntent {
        thrust_forward: true,
        turn_left: (60..120).contains(&phase),
        turn_right: (240..300).contains(&phase),
        climb: (0..40).contains(&phase),
        descend: (180..220).contains(&phase),
        fire: frame % 30 < 12,
        toggle_view: false,
    }
}
