//! Run state and the events the simulation reports outward

use serde::{Deserialize, Serialize};

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first activation; simulation paused
    #[default]
    Idle,
    /// Simulation active
    Running,
    /// Hit an obstacle; frozen until the next activation resets
    Ended,
}

/// Per-run counters (reset with the run)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub obstacles_spawned: u32,
    /// Obstacles that scrolled off the left edge
    pub obstacles_cleared: u32,
    pub pickups_spawned: u32,
    pub pickups_collected: u32,
    pub jumps: u32,
}

/// Global run state owned by the game loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub phase: GamePhase,
    pub score: f32,
    /// Best whole score this session; survives resets
    pub best: u64,
    pub speed: f32,
    /// Elapsed time in delta units since the run started
    pub elapsed: f32,
    /// Completed runs this session
    pub runs: u32,
    pub stats: RunStats,
}

impl RunState {
    pub fn new(base_speed: f32) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0.0,
            best: 0,
            speed: base_speed,
            elapsed: 0.0,
            runs: 0,
            stats: RunStats::default(),
        }
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Score as shown to the player
    #[inline]
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }
}

/// Something the frontend may want to react to (status text, sound)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    Jumped { impulse: f32 },
    PickupCollected { bonus: f32 },
    RunEnded { score: u64, best: u64, new_best: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_idle() {
        let state = RunState::new(1.7);
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(!state.running());
        assert_eq!(state.speed, 1.7);
        assert_eq!(state.best, 0);
    }

    #[test]
    fn test_display_score_floors() {
        let mut state = RunState::new(1.7);
        state.score = 41.99;
        assert_eq!(state.display_score(), 41);
    }
}
