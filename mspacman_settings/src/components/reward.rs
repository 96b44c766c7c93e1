//! Reward and terminal policies computed from two consecutive frames.
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use super::extractor::ExtractedState;
use super::extractor::DEATH_TIMER_SENTINEL;

pub const LIFE_LOSS_PENALTY: i32 = -10;
pub const GHOST_EATEN_BONUS: i32 = 5;
pub const SURVIVAL_BONUS: i32 = 1;

/// The game is over once the last life is gone and the death animation reached its final
/// frame. Neither condition alone ends the game.
pub fn is_terminal(lives_nibble: u8, death_timer: u8) -> bool {
    lives_nibble == 0 && death_timer == DEATH_TIMER_SENTINEL
}

/// Quantities retained from the frame before the one being evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviousFrame {
    pub lives: i32,
    pub pellets_cleared: i32,
}

/// Reward of a single frame, split up by the signal that contributed it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    pub life_loss: i32,
    pub pellet_progress: i32,
    pub ghosts_eaten: i32,
    pub survival: i32,
}

impl RewardBreakdown {
    pub fn total(&self) -> i32 {
        self.life_loss + self.pellet_progress + self.ghosts_eaten + self.survival
    }
}

impl Display for RewardBreakdown {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "reward:{} (life:{} pellets:{} ghosts:{} survival:{})",
            self.total(),
            self.life_loss,
            self.pellet_progress,
            self.ghosts_eaten,
            self.survival
        )
    }
}

/// Computes the reward of `current` from scratch.
///
/// Losing a life suppresses the pellet reward of the same frame. Ghost and survival bonuses
/// apply regardless. `terminal` must be the terminal flag of `current`, not of the previous
/// frame.
pub fn compute_reward(
    current: &ExtractedState,
    previous: PreviousFrame,
    terminal: bool,
) -> RewardBreakdown {
    let mut reward = RewardBreakdown::default();
    if current.lives < previous.lives {
        reward.life_loss = LIFE_LOSS_PENALTY;
    } else if current.pellets_cleared > previous.pellets_cleared {
        reward.pellet_progress = current.pellets_cleared - previous.pellets_cleared;
    }
    reward.ghosts_eaten = GHOST_EATEN_BONUS * current.ghosts_eaten() as i32;
    if !terminal {
        reward.survival = SURVIVAL_BONUS;
    }
    reward
}
