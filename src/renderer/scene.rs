//! Draw list generation
//!
//! Background, pickups, obstacles, then the runner, back to front. All
//! rectangles are snapped to whole pixels for the chunky look.

use glam::Vec2;

use super::theme::Theme;
use crate::sim::{Dice, Game, Obstacle, ObstacleKind, Pickup, Player};

/// Backdrop decoration repeats every this many pixels
const BACKDROP_PERIOD: f32 = 240.0;
const TILE_PERIOD: f32 = 48.0;

/// A filled, axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
}

/// Pixel-snapped rectangle
fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Quad {
    Quad {
        pos: Vec2::new(x, y).round(),
        size: Vec2::new(w, h).round(),
        color,
    }
}

/// Build the full frame. Reads state only.
pub fn build_scene<D: Dice>(game: &Game<D>, theme: &Theme) -> Vec<Quad> {
    let mut quads = Vec::with_capacity(64 + game.obstacles.len() * 3 + game.pickups.len() * 4);

    background(&mut quads, game, theme);
    for pickup in game.pickups.iter().filter(|p| !p.collected) {
        pickup_quads(&mut quads, pickup, theme);
    }
    for obstacle in &game.obstacles {
        obstacle_quads(&mut quads, obstacle, theme);
    }
    player_quads(&mut quads, &game.player, theme);

    quads
}

fn background<D: Dice>(quads: &mut Vec<Quad>, game: &Game<D>, theme: &Theme) {
    let width = game.config.view_width;
    let height = game.config.view_height;
    let floor_y = game.config.floor_y();
    let scroll = game.background_offset();

    quads.push(rect(0.0, 0.0, width, height, theme.sky));
    quads.push(rect(0.0, 0.0, width, floor_y, theme.wall));

    // Windows, drifting left with the run
    let mut x = -scroll;
    while x < width + BACKDROP_PERIOD {
        quads.push(rect(x + 12.0, 36.0, 50.0, 40.0, theme.window_frame));
        quads.push(rect(x + 16.0, 40.0, 42.0, 32.0, theme.window));
        quads.push(rect(x + 68.0, 42.0, 70.0, 36.0, theme.window_frame));
        quads.push(rect(x + 72.0, 46.0, 62.0, 28.0, theme.window));
        x += BACKDROP_PERIOD;
    }

    quads.push(rect(0.0, floor_y, width, height - floor_y, theme.floor));
    let mut x = -scroll;
    while x < width + TILE_PERIOD {
        quads.push(rect(x + 6.0, floor_y + 8.0, 36.0, 10.0, theme.tile_highlight));
        quads.push(rect(x + 8.0, floor_y + 14.0, 32.0, 4.0, theme.floor_stripe));
        x += TILE_PERIOD;
    }
    quads.push(rect(0.0, floor_y, width, 4.0, theme.wall_shadow));
}

fn pickup_quads(quads: &mut Vec<Quad>, p: &Pickup, theme: &Theme) {
    quads.push(rect(p.x, p.y, p.width, p.height, theme.pickup));
    quads.push(rect(
        p.x + 4.0,
        p.y + 4.0,
        p.width - 8.0,
        p.height - 8.0,
        theme.pickup_shadow,
    ));
    quads.push(rect(p.x + 6.0, p.y + 6.0, 4.0, 4.0, theme.pickup_spot));
    quads.push(rect(p.x + 16.0, p.y + 8.0, 4.0, 4.0, theme.pickup_spot));
}

fn obstacle_quads(quads: &mut Vec<Quad>, o: &Obstacle, theme: &Theme) {
    quads.push(rect(o.x, o.y, o.width, o.height, theme.obstacle));
    quads.push(rect(
        o.x + 4.0,
        o.y + 4.0,
        o.width - 8.0,
        o.height - 8.0,
        theme.obstacle_shadow,
    ));
    let stripe = match o.kind {
        ObstacleKind::Crate => rect(
            o.x + 2.0,
            o.y + o.height / 2.0 - 2.0,
            o.width - 4.0,
            4.0,
            theme.obstacle_stripe,
        ),
        ObstacleKind::Box => rect(
            o.x + o.width / 2.0 - 2.0,
            o.y + 2.0,
            4.0,
            o.height - 4.0,
            theme.obstacle_stripe,
        ),
    };
    quads.push(stripe);
}

fn player_quads(quads: &mut Vec<Quad>, p: &Player, theme: &Theme) {
    let (x, y) = (p.x, p.y + 2.0);
    // Outline, body, ears
    quads.push(rect(x - 6.0, y + 4.0, p.width + 12.0, p.height - 2.0, theme.outline));
    quads.push(rect(x, y + 6.0, p.width, p.height - 6.0, theme.player));
    quads.push(rect(x + 6.0, y - 6.0, 10.0, 10.0, theme.player));
    quads.push(rect(x + 28.0, y - 6.0, 10.0, 10.0, theme.player));
    // Tail
    quads.push(rect(x + 56.0, y - 16.0, 8.0, 18.0, theme.player));
    quads.push(rect(x + 4.0, y + 10.0, 12.0, 10.0, theme.player_shadow));
    quads.push(rect(x + 22.0, y + 10.0, 12.0, 10.0, theme.player_shadow));
    quads.push(rect(x + 12.0, y + 14.0, 4.0, 4.0, theme.player_eyes));
    quads.push(rect(x + 26.0, y + 14.0, 4.0, 4.0, theme.player_eyes));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::ScriptedDice;

    fn game() -> Game<ScriptedDice> {
        let mut game = Game::new(SimConfig::default(), ScriptedDice::constant(0.999)).unwrap();
        game.on_activation_input();
        game
    }

    #[test]
    fn test_collected_pickups_not_drawn() {
        let theme = Theme::default();
        let mut game = game();
        game.pickups.push_back(Pickup::new(600.0, 200.0, 30.0, 22.0));
        let with_pickup = build_scene(&game, &theme);

        game.pickups[0].collected = true;
        let without = build_scene(&game, &theme);
        assert_eq!(with_pickup.len(), without.len() + 4);
        assert!(!without.iter().any(|q| q.color == theme.pickup));
    }

    #[test]
    fn test_stripe_orientation_follows_kind() {
        let theme = Theme::default();
        let mut quads = Vec::new();
        let crate_ = Obstacle::on_floor(100.0, 300.0, 40.0, ObstacleKind::Crate);
        obstacle_quads(&mut quads, &crate_, &theme);
        let stripe = quads[2];
        assert!(stripe.size.x > stripe.size.y);

        quads.clear();
        let box_ = Obstacle::on_floor(100.0, 300.0, 40.0, ObstacleKind::Box);
        obstacle_quads(&mut quads, &box_, &theme);
        let stripe = quads[2];
        assert!(stripe.size.y > stripe.size.x);
    }

    #[test]
    fn test_scene_is_pure() {
        let theme = Theme::default();
        let mut game = game();
        for _ in 0..30 {
            game.tick(1.0);
        }
        let before = (game.run.clone(), game.player.clone());
        let a = build_scene(&game, &theme);
        let b = build_scene(&game, &theme);
        assert_eq!(a, b);
        assert_eq!((game.run.clone(), game.player.clone()), before);
        // Player drawn last
        assert_eq!(a.last().map(|q| q.color), Some(theme.player_eyes));
    }

    #[test]
    fn test_rects_snap_to_pixels() {
        let q = rect(10.4, 10.6, 3.5, 2.2, [0.0; 4]);
        assert_eq!(q.pos, Vec2::new(10.0, 11.0));
        assert_eq!(q.size, Vec2::new(4.0, 2.0));
    }
}
