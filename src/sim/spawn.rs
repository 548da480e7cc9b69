//! Procedural spawning just past the right edge of the viewport
//!
//! Each kind runs an independent Bernoulli trial per tick once its elapsed-time
//! gate has opened. Pickups open earlier than obstacles so the first seconds of
//! a run are free snacks.

use std::collections::VecDeque;

use super::entity::{Obstacle, ObstacleKind, Pickup};
use super::rng::Dice;
use crate::config::SimConfig;

/// What a single spawn pass produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub obstacle: bool,
    pub pickup: bool,
}

/// Run both spawn trials for this tick
pub fn spawn_tick(
    config: &SimConfig,
    elapsed: f32,
    dice: &mut impl Dice,
    obstacles: &mut VecDeque<Obstacle>,
    pickups: &mut VecDeque<Pickup>,
) -> SpawnReport {
    let mut report = SpawnReport::default();

    if elapsed > config.obstacle_gate && dice.roll() < config.obstacle_chance {
        let obstacle = spawn_obstacle(config, dice);
        log::debug!(
            "Spawned {:?} obstacle size {:.1} at t={:.1}",
            obstacle.kind,
            obstacle.width,
            elapsed
        );
        obstacles.push_back(obstacle);
        report.obstacle = true;
    }

    if elapsed > config.pickup_gate && dice.roll() < config.pickup_chance {
        let pickup = spawn_pickup(config, dice);
        log::debug!("Spawned pickup at y={:.1} t={:.1}", pickup.y, elapsed);
        pickups.push_back(pickup);
        report.pickup = true;
    }

    report
}

/// A square obstacle at the spawn line, sitting on the floor
pub fn spawn_obstacle(config: &SimConfig, dice: &mut impl Dice) -> Obstacle {
    let size = config.obstacle_min_size + dice.roll() * config.obstacle_size_range;
    let kind = if dice.roll() > 0.5 {
        ObstacleKind::Crate
    } else {
        ObstacleKind::Box
    };
    Obstacle::on_floor(spawn_x(config), config.floor_y(), size, kind)
}

/// A pickup at the spawn line, high or low
pub fn spawn_pickup(config: &SimConfig, dice: &mut impl Dice) -> Pickup {
    let offset = if dice.roll() > 1.0 - config.pickup_high_chance {
        config.pickup_high_offset
    } else {
        config.pickup_low_offset
    };
    Pickup::new(
        spawn_x(config),
        config.ground_y + offset,
        config.pickup_width,
        config.pickup_height,
    )
}

#[inline]
fn spawn_x(config: &SimConfig) -> f32 {
    config.view_width + config.spawn_margin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedDice, seeded};

    #[test]
    fn test_gates_hold_before_threshold() {
        let config = SimConfig::default();
        let mut dice = ScriptedDice::constant(0.0);
        let mut obstacles = VecDeque::new();
        let mut pickups = VecDeque::new();

        let report = spawn_tick(&config, 10.0, &mut dice, &mut obstacles, &mut pickups);
        assert_eq!(report, SpawnReport::default());
        assert!(obstacles.is_empty() && pickups.is_empty());

        // Pickups open first
        let report = spawn_tick(&config, 40.0, &mut dice, &mut obstacles, &mut pickups);
        assert!(!report.obstacle && report.pickup);

        let report = spawn_tick(&config, 60.0, &mut dice, &mut obstacles, &mut pickups);
        assert!(report.obstacle && report.pickup);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(pickups.len(), 2);
    }

    #[test]
    fn test_rolls_above_chance_spawn_nothing() {
        let config = SimConfig::default();
        let mut dice = ScriptedDice::constant(0.5);
        let mut obstacles = VecDeque::new();
        let mut pickups = VecDeque::new();
        for _ in 0..50 {
            spawn_tick(&config, 100.0, &mut dice, &mut obstacles, &mut pickups);
        }
        assert!(obstacles.is_empty() && pickups.is_empty());
    }

    #[test]
    fn test_obstacle_shape_from_rolls() {
        let config = SimConfig::default();
        // trial, size, kind
        let mut dice = ScriptedDice::new([0.0, 0.5, 0.9], 0.99);
        let mut obstacles = VecDeque::new();
        let mut pickups = VecDeque::new();
        spawn_tick(&config, 100.0, &mut dice, &mut obstacles, &mut pickups);

        let obstacle = &obstacles[0];
        assert_eq!(obstacle.width, 43.0);
        assert_eq!(obstacle.kind, ObstacleKind::Crate);
        assert_eq!(obstacle.y + obstacle.height, config.floor_y());
        assert_eq!(obstacle.x, config.view_width + config.spawn_margin);
        assert!(pickups.is_empty());
    }

    #[test]
    fn test_pickup_heights() {
        let config = SimConfig::default();
        let high = spawn_pickup(&config, &mut ScriptedDice::constant(0.95));
        let low = spawn_pickup(&config, &mut ScriptedDice::constant(0.2));
        assert_eq!(high.y, config.ground_y + config.pickup_high_offset);
        assert_eq!(low.y, config.ground_y + config.pickup_low_offset);
        assert!(high.y < low.y);
        assert!(!high.collected);
    }

    #[test]
    fn test_sizes_stay_in_range() {
        let config = SimConfig::default();
        let mut dice = seeded(7);
        for _ in 0..500 {
            let o = spawn_obstacle(&config, &mut dice);
            assert!(o.width >= config.obstacle_min_size);
            assert!(o.width < config.obstacle_min_size + config.obstacle_size_range + 1e-3);
        }
    }
}
