//! World scrolling and off-screen pruning
//!
//! Sequences are appended at the back by the spawner and all members move by
//! the same amount each tick, so x order never changes and pruning only ever
//! needs to look at the front.

use std::collections::VecDeque;

use super::entity::{Obstacle, Pickup, Scrolling};
use crate::config::SimConfig;

/// Entities removed this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub obstacles: usize,
    pub pickups: usize,
}

/// Move everything left by its kind's share of `speed`, then prefix-trim
pub fn scroll_tick(
    config: &SimConfig,
    speed: f32,
    obstacles: &mut VecDeque<Obstacle>,
    pickups: &mut VecDeque<Pickup>,
) -> PruneReport {
    advance(obstacles, speed * config.obstacle_scroll);
    advance(pickups, speed * config.pickup_scroll);

    PruneReport {
        obstacles: prune_front(obstacles),
        pickups: prune_front(pickups),
    }
}

/// Shift every entity left by `dx`
pub fn advance<T: Scrolling>(entities: &mut VecDeque<T>, dx: f32) {
    for entity in entities.iter_mut() {
        entity.shift(dx);
    }
}

/// Pop from the front while the head is fully off-screen
pub fn prune_front<T: Scrolling>(entities: &mut VecDeque<T>) -> usize {
    let mut removed = 0;
    while entities.front().is_some_and(|e| e.off_screen()) {
        entities.pop_front();
        removed += 1;
    }
    removed
}
