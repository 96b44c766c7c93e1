//! Game settings for Ms. Pac-Man.
use anyhow::Result;
use log::debug;
use log::trace;

use crate::common::action::Action;
use crate::common::control::Environment;
use crate::common::memory::Memory;
use crate::common::serializer::Deserializer;
use crate::common::serializer::Serializer;
use crate::common::serializer::StateStream;
use crate::components::extractor::ExtractedState;
use crate::components::mode_select;
use crate::components::reward::compute_reward;
use crate::components::reward::is_terminal;
use crate::components::reward::PreviousFrame;
use crate::settings::GameMode;
use crate::settings::GameSettings;

const STARTING_LIVES: i32 = 3;

/// Bookkeeping of a single Ms. Pac-Man episode.
///
/// `previous_lives` and `previous_pellets_cleared` always describe the frame before the last
/// one passed to `step`. Only reward, score, terminal, lives and previous_lives are part of
/// the saved state, `previous_pellets_cleared` restarts from whatever the instance held
/// before `load_state`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsPacmanSettings {
    reward: i32,
    /// Never updated by `step`, carried through save states.
    score: i32,
    terminal: bool,
    lives: i32,
    previous_lives: i32,
    previous_pellets_cleared: i32,
}

impl MsPacmanSettings {
    pub fn new() -> Self {
        Self {
            reward: 0,
            score: 0,
            terminal: false,
            lives: STARTING_LIVES,
            previous_lives: STARTING_LIVES,
            previous_pellets_cleared: 0,
        }
    }

    pub fn previous_lives(&self) -> i32 {
        self.previous_lives
    }

    pub fn previous_pellets_cleared(&self) -> i32 {
        self.previous_pellets_cleared
    }

    /// Encodes the saved state into bytes, see [GameSettings::save_state].
    pub fn save_state_bytes(&self) -> Vec<u8> {
        let mut stream = StateStream::new();
        self.save_state(&mut stream);
        stream.to_bytes()
    }

    pub fn load_state_bytes(&mut self, encoded: &[u8]) -> Result<()> {
        self.load_state(&mut StateStream::from_bytes(encoded)?)
    }
}

impl Default for MsPacmanSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSettings for MsPacmanSettings {
    fn reset(&mut self) {
        *self = Self::new();
        debug!("Reset to {STARTING_LIVES} lives");
    }

    fn step(&mut self, memory: &dyn Memory) {
        let current = ExtractedState::read(memory);
        #[cfg(feature = "debug_log")]
        trace!(target: "extractor", "{current}");

        self.lives = current.lives;
        self.terminal = is_terminal(current.lives_nibble, current.death_timer);
        let reward = compute_reward(
            &current,
            PreviousFrame {
                lives: self.previous_lives,
                pellets_cleared: self.previous_pellets_cleared,
            },
            self.terminal,
        );
        self.reward = reward.total();
        trace!(target: "reward", "{reward}");

        self.previous_lives = self.lives;
        self.previous_pellets_cleared = current.pellets_cleared;
        if self.terminal {
            debug!("Game over, last reward {}", self.reward);
        }
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn reward(&self) -> i32 {
        self.reward
    }

    fn lives(&self) -> i32 {
        self.lives
    }

    fn score(&self) -> i32 {
        self.score
    }

    fn is_minimal_action(&self, action: Action) -> bool {
        matches!(
            action,
            Action::Noop
                | Action::Up
                | Action::Right
                | Action::Left
                | Action::Down
                | Action::UpRight
                | Action::UpLeft
                | Action::DownRight
                | Action::DownLeft
        )
    }

    fn available_modes(&self) -> Vec<GameMode> {
        mode_select::available_modes()
    }

    fn set_mode(&self, mode: GameMode, environment: &mut dyn Environment) -> Result<()> {
        mode_select::select_mode(mode, environment)
    }

    fn save_state(&self, serializer: &mut dyn Serializer) {
        serializer.put_int(self.reward);
        serializer.put_int(self.score);
        serializer.put_bool(self.terminal);
        serializer.put_int(self.lives);
        serializer.put_int(self.previous_lives);
    }

    fn load_state(&mut self, deserializer: &mut dyn Deserializer) -> Result<()> {
        self.reward = deserializer.get_int()?;
        self.score = deserializer.get_int()?;
        self.terminal = deserializer.get_bool()?;
        self.lives = deserializer.get_int()?;
        self.previous_lives = deserializer.get_int()?;
        debug!(
            "Loaded state: reward:{} lives:{} terminal:{}",
            self.reward, self.lives, self.terminal
        );
        Ok(())
    }
}
