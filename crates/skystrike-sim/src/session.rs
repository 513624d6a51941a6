//! Score and session state.

use tracing::info;

use skystrike_core::enums::SessionState;
use skystrike_core::events::SimEvent;

/// Score accumulator and Playing/GameOver state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
    score: u32,
    /// Targets destroyed this session, by projectile or by ramming.
    pub targets_destroyed: u32,
}

impl Session {
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    /// Credit a destroyed target.
    pub fn award(&mut self, points: u32, events: &mut Vec<SimEvent>) {
        self.score = self.score.saturating_add(points);
        self.targets_destroyed += 1;
        events.push(SimEvent::ScoreChanged { score: self.score });
    }

    /// Playing -> GameOver. Ignored when already over.
    pub fn end(&mut self, events: &mut Vec<SimEvent>) {
        if self.state == SessionState::GameOver {
            return;
        }
        self.state = SessionState::GameOver;
        info!(score = self.score, targets = self.targets_destroyed, "game over");
        events.push(SimEvent::GameOver { score: self.score });
    }

    /// Zero the score and resume play.
    pub fn reset(&mut self, events: &mut Vec<SimEvent>) {
        *self = Self::default();
        events.push(SimEvent::ScoreChanged { score: 0 });
    }

    #[cfg(test)]
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
