//! Score and status presentation
//!
//! The HUD only reads state and events; nothing here feeds back into the
//! simulation.

use crate::sim::{Dice, Game, GameEvent, GamePhase};

pub const STATUS_IDLE: &str = "Tap, click, or press space to start.";
pub const STATUS_RUNNING: &str = "Snack time!";
pub const STATUS_PICKUP: &str = "Chomp!";
pub const STATUS_ENDED: &str = "Ouch! Tap to restart.";

/// What the score display shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudSnapshot {
    pub score: u64,
    pub best: u64,
    pub status: &'static str,
}

/// Status line that sticks until the next event replaces it
#[derive(Debug, Clone)]
pub struct Hud {
    status: &'static str,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            status: STATUS_IDLE,
        }
    }
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the status line from this frame's events
    pub fn observe(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::RunStarted => self.status = STATUS_RUNNING,
                GameEvent::PickupCollected { .. } => self.status = STATUS_PICKUP,
                GameEvent::RunEnded { .. } => self.status = STATUS_ENDED,
                GameEvent::Jumped { .. } => {}
            }
        }
    }

    pub fn snapshot<D: Dice>(&self, game: &Game<D>) -> HudSnapshot {
        let status = match game.phase() {
            GamePhase::Idle => STATUS_IDLE,
            _ => self.status,
        };
        HudSnapshot {
            score: game.run.display_score(),
            best: game.run.best,
            status,
        }
    }
}
