//! Collision detection between the runner and the world
//!
//! Everything is an axis-aligned box, so a single strict overlap test covers
//! both pickups and obstacles. Touching edges do not count as a hit.

use std::collections::VecDeque;

use glam::Vec2;

use super::entity::{Obstacle, Pickup, Player};

/// Axis-aligned bounding box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min, self.max());
        let (b_min, b_max) = (other.min, other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

/// Mark every uncollected pickup the player overlaps. Returns how many were taken.
pub fn collect_pickups(player: &Player, pickups: &mut VecDeque<Pickup>) -> u32 {
    let bounds = player.bounds();
    let mut taken = 0;
    for pickup in pickups.iter_mut().filter(|p| !p.collected) {
        if bounds.overlaps(&pickup.bounds()) {
            pickup.collected = true;
            taken += 1;
        }
    }
    taken
}

/// True if the player overlaps any obstacle
pub fn hits_obstacle(player: &Player, obstacles: &VecDeque<Obstacle>) -> bool {
    let bounds = player.bounds();
    obstacles.iter().any(|o| bounds.overlaps(&o.bounds()))
}
