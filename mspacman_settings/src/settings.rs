//! Interface between game settings, the host emulator and the learning harness.
use std::fmt::Display;
use std::fmt::Formatter;

use anyhow::Result;
use strum::IntoEnumIterator;

use crate::common::action::Action;
use crate::common::control::Environment;
use crate::common::memory::Memory;
use crate::common::serializer::Deserializer;
use crate::common::serializer::Serializer;
use crate::common::serializer::StreamValue;

/// Identifier of a game variant as selected through the console SELECT switch.
pub type GameMode = u32;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// The requested mode is not one of the modes returned by `available_modes`.
    InvalidMode(GameMode),
    /// A checkpoint stream ran out of values. Holds the number of values read.
    StreamExhausted(usize),
    /// A checkpoint stream contained a value of the wrong kind.
    StreamMismatch {
        expected: &'static str,
        found: StreamValue,
    },
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::InvalidMode(mode) => {
                write!(f, "Mode {mode} doesn't currently exist for this game")
            }
            SettingsError::StreamExhausted(read) => {
                write!(f, "State stream exhausted after {read} values")
            }
            SettingsError::StreamMismatch { expected, found } => {
                write!(f, "Expected {expected} in state stream, found {found:?}")
            }
        }
    }
}

impl std::error::Error for SettingsError {}

/// Per-game settings driven by the host emulator once per frame.
pub trait GameSettings {
    /// Resets all bookkeeping to the start of an episode.
    fn reset(&mut self);

    /// Advances the settings by one frame using the current console memory.
    fn step(&mut self, memory: &dyn Memory);

    fn is_terminal(&self) -> bool;

    /// Reward of the most recent frame.
    fn reward(&self) -> i32;

    fn lives(&self) -> i32;

    fn score(&self) -> i32;

    fn is_minimal_action(&self, action: Action) -> bool;

    fn available_modes(&self) -> Vec<GameMode>;

    /// Drives the console into `mode` and soft-resets it.
    ///
    /// Fails without issuing any input if `mode` is not in `available_modes`.
    fn set_mode(&self, mode: GameMode, environment: &mut dyn Environment) -> Result<()>;

    fn save_state(&self, serializer: &mut dyn Serializer);

    fn load_state(&mut self, deserializer: &mut dyn Deserializer) -> Result<()>;

    fn minimal_action_set(&self) -> Vec<Action> {
        Action::iter()
            .filter(|action| self.is_minimal_action(*action))
            .collect()
    }

    fn default_mode(&self) -> GameMode {
        0
    }

    fn is_mode_supported(&self, mode: GameMode) -> bool {
        self.available_modes().contains(&mode)
    }
}
