//! Attract-mode driver
//!
//! Plays the game by pressing when the nearest obstacle ahead of the runner
//! enters a lookahead window sized from the current scroll speed. Good enough
//! to keep a demo alive; it does not chase pickups.

use super::game::Game;
use super::rng::Dice;

/// Ticks of warning the autopilot wants before an obstacle reaches the runner
const LEAD_TICKS: f32 = 9.0;
/// Hold used for charged jumps; comfortably clears the tallest obstacle
const CHARGE_HOLD_MS: u32 = 250;

/// What the autopilot wants to do this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Wait,
    /// Press now (jump, or restart a finished run)
    Press,
    /// Release after holding this long (charged model)
    Hold { ms: u32 },
}

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Restart automatically after a crash
    pub restart: bool,
}

impl Autopilot {
    pub fn new(restart: bool) -> Self {
        Self { restart }
    }

    pub fn decide<D: Dice>(&self, game: &Game<D>) -> Decision {
        if !game.is_running() {
            return if self.restart {
                Decision::Press
            } else {
                Decision::Wait
            };
        }
        if game.player.airborne || game.is_charging() {
            return Decision::Wait;
        }

        let player_right = game.player.x + game.player.width;
        let closing = game.run.speed * game.config.obstacle_scroll;
        let threat = game
            .obstacles
            .iter()
            .find(|o| o.x + o.width > game.player.x)
            .map(|o| o.x - player_right);

        match threat {
            Some(gap) if gap <= closing * LEAD_TICKS => {
                if game.config.jump.is_charged() {
                    Decision::Hold { ms: CHARGE_HOLD_MS }
                } else {
                    Decision::Press
                }
            }
            _ => Decision::Wait,
        }
    }

    /// Decide and apply the decision at time `now_ms`
    pub fn drive<D: Dice>(&self, game: &mut Game<D>, now_ms: f64) -> Decision {
        let decision = self.decide(game);
        match decision {
            Decision::Wait => {}
            Decision::Press => {
                game.press(now_ms);
                game.release(now_ms);
            }
            Decision::Hold { ms } => {
                game.press(now_ms);
                game.release(now_ms + ms as f64);
            }
        }
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SimConfig, Variant};
    use crate::sim::{GamePhase, Obstacle, ObstacleKind, ScriptedDice};

    #[test]
    fn test_waits_without_threat() {
        let mut game = Game::with_seed(SimConfig::default(), 1).unwrap();
        let pilot = Autopilot::new(false);
        assert_eq!(pilot.decide(&game), Decision::Wait);
        game.on_activation_input();
        assert_eq!(pilot.decide(&game), Decision::Wait);
    }

    #[test]
    fn test_restarts_when_enabled() {
        let game = Game::with_seed(SimConfig::default(), 1).unwrap();
        assert_eq!(Autopilot::new(true).decide(&game), Decision::Press);
    }

    #[test]
    fn test_clears_a_course() {
        let config = SimConfig::default();
        let floor = config.floor_y();
        // Spawner never fires; the course is laid out by hand
        let mut game = Game::new(config, ScriptedDice::constant(0.999)).unwrap();
        game.on_activation_input();
        for (x, size, kind) in [
            (500.0, 40.0, ObstacleKind::Box),
            (1400.0, 48.0, ObstacleKind::Crate),
            (2300.0, 50.0, ObstacleKind::Box),
        ] {
            game.obstacles.push_back(Obstacle::on_floor(x, floor, size, kind));
        }

        let pilot = Autopilot::new(false);
        let mut now = 0.0;
        for _ in 0..600 {
            pilot.drive(&mut game, now);
            game.tick(1.0);
            now += 16.6667;
        }
        assert_eq!(
            game.phase(),
            GamePhase::Running,
            "crashed at t={}",
            game.run.elapsed
        );
        assert_eq!(game.run.stats.obstacles_cleared, 3);
        assert_eq!(game.run.stats.jumps, 3);
    }

    #[test]
    fn test_holds_under_charged_model() {
        let mut game = Game::new(Variant::Garden.config(), ScriptedDice::constant(0.999)).unwrap();
        game.on_activation_input();
        let x = game.player.x + game.player.width + 1.0;
        let floor = game.config.floor_y();
        game.obstacles
            .push_back(Obstacle::on_floor(x, floor, 40.0, ObstacleKind::Box));

        let pilot = Autopilot::new(false);
        assert_eq!(pilot.decide(&game), Decision::Hold { ms: CHARGE_HOLD_MS });
        pilot.drive(&mut game, 1000.0);
        assert!(game.player.airborne);
        assert!(!game.is_charging());
    }
}
