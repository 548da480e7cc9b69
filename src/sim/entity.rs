//! Entity model: the runner, obstacles and pickups
//!
//! Pure data. Behaviour lives in the physics/spawn/scroll/collision modules.

use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::config::SimConfig;

/// The runner. Horizontal position is fixed; the world scrolls past it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Negative is upward
    pub vertical_velocity: f32,
    /// Set by a jump before the player leaves the ground line. Between a jump
    /// and the next tick, `y` can equal the ground line while this is true
    /// and `vertical_velocity` is negative; every tick restores
    /// `airborne == (y != ground_y)`.
    pub airborne: bool,
}

impl Player {
    /// A grounded player at the configured position
    pub fn new(config: &SimConfig) -> Self {
        Self {
            x: config.player_x,
            y: config.ground_y,
            width: config.player_width,
            height: config.player_height,
            vertical_velocity: 0.0,
            airborne: false,
        }
    }

    /// Put the player back on the ground at rest
    pub fn land(&mut self, ground_y: f32) {
        self.y = ground_y;
        self.vertical_velocity = 0.0;
        self.airborne = false;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// Obstacle decoration; has no gameplay effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Horizontal stripe
    Crate,
    /// Vertical stripe
    Box,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// A square obstacle of side `size` whose base rests on `floor_y`
    pub fn on_floor(x: f32, floor_y: f32, size: f32, kind: ObstacleKind) -> Self {
        Self {
            x,
            y: floor_y - size,
            width: size,
            height: size,
            kind,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// A collectible (cheese)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Set once when the player touches it, never cleared
    pub collected: bool,
}

impl Pickup {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            collected: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// Anything the scroller moves and prunes
pub trait Scrolling {
    fn x(&self) -> f32;
    fn width(&self) -> f32;
    fn shift(&mut self, dx: f32);

    /// Fully past the left edge of the viewport
    fn off_screen(&self) -> bool {
        self.x() + self.width() < 0.0
    }
}

impl Scrolling for Obstacle {
    fn x(&self) -> f32 {
        self.x
    }
    fn width(&self) -> f32 {
        self.width
    }
    fn shift(&mut self, dx: f32) {
        self.x -= dx;
    }
}

impl Scrolling for Pickup {
    fn x(&self) -> f32 {
        self.x
    }
    fn width(&self) -> f32 {
        self.width
    }
    fn shift(&mut self, dx: f32) {
        self.x -= dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_grounded() {
        let config = SimConfig::default();
        let player = Player::new(&config);
        assert_eq!(player.y, config.ground_y);
        assert!(!player.airborne);
        assert_eq!(player.vertical_velocity, 0.0);
    }

    #[test]
    fn test_obstacle_base_on_floor() {
        let obstacle = Obstacle::on_floor(500.0, 308.0, 40.0, ObstacleKind::Crate);
        assert_eq!(obstacle.y + obstacle.height, 308.0);
        assert_eq!(obstacle.width, obstacle.height);
    }

    #[test]
    fn test_off_screen_requires_full_exit() {
        let mut pickup = Pickup::new(0.0, 200.0, 30.0, 22.0);
        pickup.shift(30.0);
        assert!(!pickup.off_screen(), "right edge exactly at 0 is still visible");
        pickup.shift(0.5);
        assert!(pickup.off_screen());
    }
}
