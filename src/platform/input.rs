//! Input translation
//!
//! Raw keyboard/pointer events become logical press/release events. Auto-repeat
//! key-downs are swallowed so holding the key does not restart a charge.

use crate::sim::{Dice, Game};

/// Keys that act as the primary control
pub const PRIMARY_KEYS: [&str; 2] = ["Space", "ArrowUp"];

/// Platform event, already stripped of platform types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    KeyDown { code: String, repeat: bool },
    KeyUp { code: String },
    PointerDown,
    PointerUp,
}

/// Logical event the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Press,
    Release,
}

/// Tracks whether the primary control is currently held
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    held: bool,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_primary_key(code: &str) -> bool {
        PRIMARY_KEYS.contains(&code)
    }

    /// Translate one raw event. Returns `None` for events the game ignores.
    pub fn map(&mut self, raw: &RawInput) -> Option<InputEvent> {
        let pressed = match raw {
            RawInput::KeyDown { code, repeat } => {
                if !Self::is_primary_key(code) || *repeat {
                    return None;
                }
                true
            }
            RawInput::KeyUp { code } => {
                if !Self::is_primary_key(code) {
                    return None;
                }
                false
            }
            RawInput::PointerDown => true,
            RawInput::PointerUp => false,
        };

        if pressed == self.held {
            return None;
        }
        self.held = pressed;
        Some(if pressed {
            InputEvent::Press
        } else {
            InputEvent::Release
        })
    }

    /// Map and forward to the game. Returns the logical event, if any.
    pub fn apply<D: Dice>(
        &mut self,
        raw: &RawInput,
        game: &mut Game<D>,
        now_ms: f64,
    ) -> Option<InputEvent> {
        let event = self.map(raw)?;
        match event {
            InputEvent::Press => game.press(now_ms),
            InputEvent::Release => game.release(now_ms),
        }
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JumpModel, SimConfig};
    use crate::sim::GamePhase;

    fn key_down(code: &str) -> RawInput {
        RawInput::KeyDown {
            code: code.to_string(),
            repeat: false,
        }
    }

    #[test]
    fn test_primary_keys_only() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.map(&key_down("KeyA")), None);
        assert_eq!(mapper.map(&key_down("Space")), Some(InputEvent::Press));
        assert_eq!(
            mapper.map(&RawInput::KeyUp {
                code: "Space".into()
            }),
            Some(InputEvent::Release)
        );
        assert_eq!(mapper.map(&key_down("ArrowUp")), Some(InputEvent::Press));
    }

    #[test]
    fn test_repeat_and_double_press_swallowed() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.map(&RawInput::PointerDown), Some(InputEvent::Press));
        assert_eq!(
            mapper.map(&RawInput::KeyDown {
                code: "Space".into(),
                repeat: true
            }),
            None
        );
        assert_eq!(mapper.map(&key_down("Space")), None);
        assert_eq!(mapper.map(&RawInput::PointerUp), Some(InputEvent::Release));
        assert_eq!(mapper.map(&RawInput::PointerUp), None);
    }

    #[test]
    fn test_apply_drives_charged_jump() {
        let config = SimConfig {
            jump: JumpModel::Charged {
                min: 10.0,
                max: 20.0,
                max_charge_ms: 400.0,
            },
            ..Default::default()
        };
        let mut game = Game::with_seed(config, 5).unwrap();
        let mut mapper = InputMapper::new();

        // First tap starts the run
        mapper.apply(&RawInput::PointerDown, &mut game, 0.0);
        mapper.apply(&RawInput::PointerUp, &mut game, 30.0);
        assert_eq!(game.phase(), GamePhase::Running);
        assert!(!game.player.airborne);

        mapper.apply(&key_down("Space"), &mut game, 100.0);
        mapper.apply(
            &RawInput::KeyDown {
                code: "Space".into(),
                repeat: true,
            },
            &mut game,
            200.0,
        );
        mapper.apply(
            &RawInput::KeyUp {
                code: "Space".into(),
            },
            &mut game,
            500.0,
        );
        assert_eq!(game.player.vertical_velocity, -20.0);
    }
}
