//! Snack Run - A single-screen endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, scrolling, collisions)
//! - `config`: Tunable simulation parameters and variant presets
//! - `renderer`: Draw list generation from simulation state
//! - `platform`: Frame timing and input translation
//! - `hud`: Score/status presentation

pub mod best;
pub mod config;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use best::BestScore;
pub use config::{ConfigError, JumpModel, SimConfig, Variant};

/// Game configuration constants
pub mod consts {
    /// Nominal frame duration in milliseconds (one delta unit)
    pub const NOMINAL_FRAME_MS: f64 = 16.6667;

    /// Viewport dimensions
    pub const VIEW_WIDTH: f32 = 960.0;
    pub const VIEW_HEIGHT: f32 = 360.0;
    /// Player rest line (top edge of the player when grounded)
    pub const GROUND_Y: f32 = VIEW_HEIGHT - 72.0;
    /// Visual floor line, obstacles rest here
    pub const FLOOR_OFFSET: f32 = 20.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 120.0;
    pub const PLAYER_WIDTH: f32 = 56.0;
    pub const PLAYER_HEIGHT: f32 = 42.0;

    /// Pickup defaults
    pub const PICKUP_WIDTH: f32 = 30.0;
    pub const PICKUP_HEIGHT: f32 = 22.0;

    /// Entities appear this far past the right edge
    pub const SPAWN_MARGIN: f32 = 40.0;
}
