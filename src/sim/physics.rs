//! Vertical motion of the runner
//!
//! Constant gravity per tick with a hard ground clamp. There is no terminal
//! velocity and no horizontal motion.

use super::entity::Player;

/// Advance one tick of free fall, clamping to the ground line
pub fn apply_gravity(player: &mut Player, gravity: f32, ground_y: f32) {
    player.vertical_velocity += gravity;
    player.y += player.vertical_velocity;

    if player.y >= ground_y {
        player.land(ground_y);
    }
}

/// Launch upward with `impulse` if grounded. Returns whether the jump happened.
///
/// Only velocity and `airborne` change; the next [`apply_gravity`] moves `y`.
pub fn jump(player: &mut Player, impulse: f32) -> bool {
    if player.airborne {
        return false;
    }
    player.vertical_velocity = -impulse;
    player.airborne = true;
    true
}

/// Upper bound on ticks for a body at rest `height` above ground to land
pub fn ticks_to_fall(height: f32, gravity: f32) -> u32 {
    // After n ticks the body has dropped g * n(n+1)/2
    let n = ((2.0 * height / gravity + 0.25).sqrt() - 0.5).ceil();
    n.max(0.0) as u32 + 1
}
