//! The game loop and run state machine
//!
//! `Game` owns everything the simulation touches. Each tick runs the stages in
//! a fixed order: score/speed, physics, spawn, scroll, collide.

use std::collections::VecDeque;

use rand_pcg::Pcg32;

use super::collision::{collect_pickups, hits_obstacle};
use super::entity::{Obstacle, Pickup, Player};
use super::physics;
use super::rng::{self, Dice};
use super::scroll::scroll_tick;
use super::spawn::spawn_tick;
use super::state::{GameEvent, GamePhase, RunState};
use crate::config::{ConfigError, JumpModel, SimConfig};

/// Background parallax factor relative to `speed`
const BACKGROUND_SCROLL: f32 = 14.0;

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct Game<D: Dice = Pcg32> {
    pub config: SimConfig,
    pub run: RunState,
    pub player: Player,
    /// Sorted by x, oldest (leftmost) first
    pub obstacles: VecDeque<Obstacle>,
    /// Sorted by x, oldest (leftmost) first
    pub pickups: VecDeque<Pickup>,
    /// Press timestamp (ms) of a charge in progress
    charge_started_ms: Option<f64>,
    events: Vec<GameEvent>,
    dice: D,
}

impl Game<Pcg32> {
    /// Game driven by a seeded PCG stream
    pub fn with_seed(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, rng::seeded(seed))
    }
}

impl<D: Dice> Game<D> {
    /// Validate `config` and build an idle game
    pub fn new(config: SimConfig, dice: D) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "{} config: gravity={} base_speed={} ramp=score/{} cap {} jump={:?}",
            config.variant.as_str(),
            config.gravity,
            config.base_speed,
            config.speed_divisor,
            config.speed_cap,
            config.jump
        );
        Ok(Self {
            run: RunState::new(config.base_speed),
            player: Player::new(&config),
            obstacles: VecDeque::new(),
            pickups: VecDeque::new(),
            charge_started_ms: None,
            events: Vec::new(),
            dice,
            config,
        })
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.run.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.run.running()
    }

    pub fn is_charging(&self) -> bool {
        self.charge_started_ms.is_some()
    }

    /// Events since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a fresh run. `best` and the run counter survive.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.pickups.clear();
        self.player = Player::new(&self.config);
        self.charge_started_ms = None;

        self.run.score = 0.0;
        self.run.elapsed = 0.0;
        self.run.speed = self.config.base_speed;
        self.run.stats = Default::default();
        self.run.phase = GamePhase::Running;

        log::info!("Run {} started (best {})", self.run.runs + 1, self.run.best);
        self.events.push(GameEvent::RunStarted);
    }

    /// Primary control pressed (fixed-impulse model)
    ///
    /// Outside a run this resets; inside a run it jumps if grounded. Under the
    /// charged model the impulse used here is the minimum.
    pub fn on_activation_input(&mut self) {
        if !self.is_running() {
            self.reset();
            return;
        }
        let impulse = self.config.jump.impulse(0.0);
        self.try_jump(impulse);
    }

    /// Press half of a charged jump
    pub fn begin_charge(&mut self, now_ms: f64) {
        if !self.is_running() {
            self.reset();
            return;
        }
        if self.player.airborne {
            return;
        }
        self.charge_started_ms = Some(now_ms);
    }

    /// Release half of a charged jump. Returns the impulse applied, if any.
    pub fn end_charge(&mut self, now_ms: f64) -> Option<f32> {
        let started = self.charge_started_ms.take()?;
        if !self.is_running() {
            return None;
        }
        let held_ms = (now_ms - started) as f32;
        let impulse = self.config.jump.impulse(held_ms);
        self.try_jump(impulse).then_some(impulse)
    }

    /// Raw press, dispatched by jump model
    pub fn press(&mut self, now_ms: f64) {
        match self.config.jump {
            JumpModel::Fixed(_) => self.on_activation_input(),
            JumpModel::Charged { .. } => self.begin_charge(now_ms),
        }
    }

    /// Raw release, dispatched by jump model
    pub fn release(&mut self, now_ms: f64) {
        if self.config.jump.is_charged() {
            self.end_charge(now_ms);
        }
    }

    fn try_jump(&mut self, impulse: f32) -> bool {
        let jumped = physics::jump(&mut self.player, impulse);
        if jumped {
            self.run.stats.jumps += 1;
            self.events.push(GameEvent::Jumped { impulse });
        }
        jumped
    }

    /// Advance the simulation by `dt` delta units (1.0 = one nominal frame)
    ///
    /// Non-positive or non-finite deltas are dropped without touching state.
    pub fn tick(&mut self, dt: f32) {
        if !self.is_running() {
            return;
        }
        if !dt.is_finite() || dt <= 0.0 {
            log::warn!("Ignoring tick with delta {}", dt);
            return;
        }

        self.run.elapsed += dt;
        self.run.score += dt * self.config.score_rate;
        self.run.speed = self.config.speed_for_score(self.run.score);

        physics::apply_gravity(&mut self.player, self.config.gravity, self.config.ground_y);

        let spawned = spawn_tick(
            &self.config,
            self.run.elapsed,
            &mut self.dice,
            &mut self.obstacles,
            &mut self.pickups,
        );
        self.run.stats.obstacles_spawned += spawned.obstacle as u32;
        self.run.stats.pickups_spawned += spawned.pickup as u32;

        let pruned = scroll_tick(
            &self.config,
            self.run.speed,
            &mut self.obstacles,
            &mut self.pickups,
        );
        self.run.stats.obstacles_cleared += pruned.obstacles as u32;
        if pruned.obstacles + pruned.pickups > 0 {
            log::debug!(
                "Pruned {} obstacles, {} pickups",
                pruned.obstacles,
                pruned.pickups
            );
        }

        let taken = collect_pickups(&self.player, &mut self.pickups);
        for _ in 0..taken {
            self.run.score += self.config.pickup_bonus;
            self.run.stats.pickups_collected += 1;
            self.events.push(GameEvent::PickupCollected {
                bonus: self.config.pickup_bonus,
            });
        }

        if hits_obstacle(&self.player, &self.obstacles) {
            self.end_run();
        }
    }

    fn end_run(&mut self) {
        let score = self.run.display_score();
        let new_best = score > self.run.best;
        self.run.best = self.run.best.max(score);
        self.run.phase = GamePhase::Ended;
        self.run.runs += 1;
        self.charge_started_ms = None;

        log::info!(
            "Run {} ended: score {} best {}{} ({} pickups, {} obstacles cleared)",
            self.run.runs,
            score,
            self.run.best,
            if new_best { " (new best)" } else { "" },
            self.run.stats.pickups_collected,
            self.run.stats.obstacles_cleared
        );
        self.events.push(GameEvent::RunEnded {
            score,
            best: self.run.best,
            new_best,
        });
    }

    /// Horizontal offset for the scrolling backdrop, in `[0, view_width)`
    pub fn background_offset(&self) -> f32 {
        (self.run.elapsed * self.run.speed * BACKGROUND_SCROLL).rem_euclid(self.config.view_width)
    }
}
