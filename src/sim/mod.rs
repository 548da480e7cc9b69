//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Injected, seeded randomness only
//! - Stable iteration order (entities kept sorted by x)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod game;
pub mod physics;
pub mod rng;
pub mod scroll;
pub mod spawn;
pub mod state;

pub use autopilot::{Autopilot, Decision};
pub use collision::{Aabb, collect_pickups, hits_obstacle};
pub use entity::{Obstacle, ObstacleKind, Pickup, Player};
pub use game::Game;
pub use rng::{Dice, ScriptedDice};
pub use state::{GameEvent, GamePhase, RunState, RunStats};
