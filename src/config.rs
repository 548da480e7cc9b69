//! Simulation configuration and variant presets
//!
//! Every tunable number the simulation reads lives in [`SimConfig`]. The four
//! shipped variants differ only in jump model and speed ramp; visuals are
//! chosen separately by the renderer theme.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Shipped game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    #[default]
    Kitchen,
    Garden,
    Rooftop,
    Night,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Kitchen,
        Variant::Garden,
        Variant::Rooftop,
        Variant::Night,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Kitchen => "Kitchen",
            Variant::Garden => "Garden",
            Variant::Rooftop => "Rooftop",
            Variant::Night => "Night",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kitchen" => Some(Variant::Kitchen),
            "garden" => Some(Variant::Garden),
            "rooftop" | "roof" => Some(Variant::Rooftop),
            "night" => Some(Variant::Night),
            _ => None,
        }
    }

    /// Simulation parameters for this variant
    pub fn config(&self) -> SimConfig {
        let base = SimConfig::default();
        let charged = JumpModel::Charged {
            min: 11.0,
            max: 19.0,
            max_charge_ms: 450.0,
        };
        match self {
            Variant::Kitchen => SimConfig {
                variant: *self,
                ..base
            },
            Variant::Garden => SimConfig {
                variant: *self,
                jump: charged,
                ..base
            },
            Variant::Rooftop => SimConfig {
                variant: *self,
                speed_cap: 3.0,
                speed_divisor: 200.0,
                ..base
            },
            Variant::Night => SimConfig {
                variant: *self,
                jump: charged,
                speed_cap: 3.0,
                speed_divisor: 200.0,
                ..base
            },
        }
    }
}

/// How activation input turns into a jump
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum JumpModel {
    /// Jump immediately on press with a fixed upward velocity
    Fixed(f32),
    /// Jump on release; impulse scales linearly with how long the press was held
    Charged { min: f32, max: f32, max_charge_ms: f32 },
}

impl JumpModel {
    /// Impulse for a press held `held_ms` milliseconds.
    ///
    /// Fixed jumps ignore the hold time. Charged jumps clamp the hold to
    /// `[0, max_charge_ms]` and interpolate so both endpoints are exact.
    pub fn impulse(&self, held_ms: f32) -> f32 {
        match *self {
            JumpModel::Fixed(v) => v,
            JumpModel::Charged {
                min,
                max,
                max_charge_ms,
            } => {
                let held = if held_ms.is_nan() {
                    0.0
                } else {
                    held_ms.clamp(0.0, max_charge_ms)
                };
                let ratio = held / max_charge_ms;
                min * (1.0 - ratio) + max * ratio
            }
        }
    }

    pub fn is_charged(&self) -> bool {
        matches!(self, JumpModel::Charged { .. })
    }
}

/// Rejected configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A value that must be strictly positive and finite was not
    NotPositive { field: &'static str, value: f32 },
    /// A probability outside [0, 1]
    Probability { field: &'static str, value: f32 },
    /// Charged jump with min impulse above max
    InvertedImpulse { min: f32, max: f32 },
    /// JSON override failed to parse
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPositive { field, value } => {
                write!(f, "{} must be positive and finite, got {}", field, value)
            }
            ConfigError::Probability { field, value } => {
                write!(f, "{} must be within [0, 1], got {}", field, value)
            }
            ConfigError::InvertedImpulse { min, max } => {
                write!(f, "charged jump min impulse {} exceeds max {}", min, max)
            }
            ConfigError::Parse(msg) => write!(f, "config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Which preset this config started from (drives the theme)
    pub variant: Variant,

    // === Physics ===
    /// Downward acceleration per tick
    pub gravity: f32,
    pub jump: JumpModel,
    pub ground_y: f32,
    /// Obstacles rest on `ground_y + floor_offset`
    pub floor_offset: f32,

    // === Speed ramp ===
    pub base_speed: f32,
    /// Maximum amount the ramp adds on top of `base_speed`
    pub speed_cap: f32,
    pub speed_divisor: f32,
    /// Score gained per delta unit
    pub score_rate: f32,

    // === Viewport ===
    pub view_width: f32,
    pub view_height: f32,
    pub spawn_margin: f32,

    // === Player ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,

    // === Obstacles ===
    /// Elapsed time before obstacles may spawn
    pub obstacle_gate: f32,
    /// Per-tick spawn probability once gated in
    pub obstacle_chance: f32,
    pub obstacle_min_size: f32,
    pub obstacle_size_range: f32,
    /// Scroll multiplier applied to `speed`
    pub obstacle_scroll: f32,

    // === Pickups ===
    pub pickup_gate: f32,
    pub pickup_chance: f32,
    pub pickup_width: f32,
    pub pickup_height: f32,
    /// Offsets from `ground_y` (negative is up)
    pub pickup_low_offset: f32,
    pub pickup_high_offset: f32,
    pub pickup_high_chance: f32,
    pub pickup_scroll: f32,
    pub pickup_bonus: f32,

    // === Session ===
    /// Store the best score in LocalStorage (wasm only)
    pub persist_best: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Kitchen,

            gravity: 0.45,
            jump: JumpModel::Fixed(17.0),
            ground_y: GROUND_Y,
            floor_offset: FLOOR_OFFSET,

            base_speed: 1.7,
            speed_cap: 1.5,
            speed_divisor: 400.0,
            score_rate: 6.0,

            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
            spawn_margin: SPAWN_MARGIN,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,

            obstacle_gate: 50.0,
            obstacle_chance: 0.02,
            obstacle_min_size: 36.0,
            obstacle_size_range: 14.0,
            obstacle_scroll: 2.1,

            pickup_gate: 30.0,
            pickup_chance: 0.03,
            pickup_width: PICKUP_WIDTH,
            pickup_height: PICKUP_HEIGHT,
            pickup_low_offset: -40.0,
            pickup_high_offset: -80.0,
            pickup_high_chance: 0.4,
            pickup_scroll: 1.8,
            pickup_bonus: 20.0,

            persist_best: false,
        }
    }
}

impl SimConfig {
    /// Parse a JSON override (missing fields take defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Speed for a given score: base plus a linear ramp that saturates at the cap
    pub fn speed_for_score(&self, score: f32) -> f32 {
        self.base_speed + self.speed_cap.min(score / self.speed_divisor)
    }

    /// Floor line obstacles rest on
    pub fn floor_y(&self) -> f32 {
        self.ground_y + self.floor_offset
    }

    /// Reject configurations that would produce undefined runtime ratios
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("gravity", self.gravity),
            ("base_speed", self.base_speed),
            ("speed_divisor", self.speed_divisor),
            ("view_width", self.view_width),
            ("view_height", self.view_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("obstacle_min_size", self.obstacle_min_size),
            ("pickup_width", self.pickup_width),
            ("pickup_height", self.pickup_height),
        ];
        for (field, value) in positive {
            check_positive(field, value)?;
        }

        let non_negative = [
            ("speed_cap", self.speed_cap),
            ("score_rate", self.score_rate),
            ("obstacle_size_range", self.obstacle_size_range),
            ("obstacle_scroll", self.obstacle_scroll),
            ("pickup_scroll", self.pickup_scroll),
            ("pickup_bonus", self.pickup_bonus),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let probabilities = [
            ("obstacle_chance", self.obstacle_chance),
            ("pickup_chance", self.pickup_chance),
            ("pickup_high_chance", self.pickup_high_chance),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { field, value });
            }
        }

        match self.jump {
            JumpModel::Fixed(v) => check_positive("jump", v)?,
            JumpModel::Charged {
                min,
                max,
                max_charge_ms,
            } => {
                check_positive("max_charge_ms", max_charge_ms)?;
                check_positive("jump.min", min)?;
                check_positive("jump.max", max)?;
                if min > max {
                    return Err(ConfigError::InvertedImpulse { min, max });
                }
            }
        }

        Ok(())
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
