//! Color palettes, one per variant

use serde::{Deserialize, Serialize};

use crate::config::Variant;

/// `0xRRGGBB` to linear-ish RGBA floats
pub const fn hex(rgb: u32) -> [f32; 4] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
        1.0,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub sky: [f32; 4],
    pub wall: [f32; 4],
    pub wall_shadow: [f32; 4],
    pub window: [f32; 4],
    pub window_frame: [f32; 4],
    pub floor: [f32; 4],
    pub floor_stripe: [f32; 4],
    pub tile_highlight: [f32; 4],
    pub outline: [f32; 4],
    pub player: [f32; 4],
    pub player_shadow: [f32; 4],
    pub player_eyes: [f32; 4],
    pub pickup: [f32; 4],
    pub pickup_shadow: [f32; 4],
    pub pickup_spot: [f32; 4],
    pub obstacle: [f32; 4],
    pub obstacle_shadow: [f32; 4],
    pub obstacle_stripe: [f32; 4],
}

impl Theme {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Kitchen => Self::KITCHEN,
            Variant::Garden => Self::GARDEN,
            Variant::Rooftop => Self::ROOFTOP,
            Variant::Night => Self::NIGHT,
        }
    }

    pub const KITCHEN: Theme = Theme {
        sky: hex(0xc7d5f2),
        wall: hex(0xaeb7d8),
        wall_shadow: hex(0x97a2c7),
        window: hex(0x7da3ff),
        window_frame: hex(0xfef7e3),
        floor: hex(0xe6d2b8),
        floor_stripe: hex(0xd1b792),
        tile_highlight: hex(0xf2e4cf),
        outline: hex(0x1c1b24),
        player: hex(0xc9c7de),
        player_shadow: hex(0xa8a6bf),
        player_eyes: hex(0x1b1b1f),
        pickup: hex(0xf4c84c),
        pickup_shadow: hex(0xd79f2b),
        pickup_spot: hex(0xf5f2e7),
        obstacle: hex(0x8f5a3c),
        obstacle_shadow: hex(0x6a3f28),
        obstacle_stripe: hex(0xc9c6b8),
    };

    pub const GARDEN: Theme = Theme {
        sky: hex(0xbfe6f5),
        wall: hex(0x9ccc8a),
        wall_shadow: hex(0x7eae6d),
        window: hex(0xf7d6e0),
        window_frame: hex(0xfff8e8),
        floor: hex(0xb08a5a),
        floor_stripe: hex(0x946f44),
        tile_highlight: hex(0xc49e6c),
        ..Self::KITCHEN
    };

    pub const ROOFTOP: Theme = Theme {
        sky: hex(0xf6c7a1),
        wall: hex(0x8d8fa6),
        wall_shadow: hex(0x70728a),
        window: hex(0xffe29a),
        floor: hex(0x6b6470),
        floor_stripe: hex(0x57515c),
        tile_highlight: hex(0x7d7682),
        obstacle: hex(0x5c6b8f),
        obstacle_shadow: hex(0x414e6e),
        ..Self::KITCHEN
    };

    pub const NIGHT: Theme = Theme {
        sky: hex(0x1d2340),
        wall: hex(0x2c3357),
        wall_shadow: hex(0x222845),
        window: hex(0xf4e27a),
        window_frame: hex(0x3c4470),
        floor: hex(0x3a3550),
        floor_stripe: hex(0x2e2a42),
        tile_highlight: hex(0x4a4563),
        player: hex(0x9a98b8),
        player_shadow: hex(0x7b7999),
        ..Self::KITCHEN
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::KITCHEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(hex(0xff0000), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(hex(0x000000), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_variants_have_distinct_skies() {
        let skies: Vec<_> = Variant::ALL
            .iter()
            .map(|v| Theme::for_variant(*v).sky)
            .collect();
        for (i, a) in skies.iter().enumerate() {
            for b in &skies[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
