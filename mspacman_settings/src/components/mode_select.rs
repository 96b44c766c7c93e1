//! Selects a game variant by cycling through the game menu with the SELECT switch.
use anyhow::Result;
use log::debug;
use log::warn;

use super::extractor::extract_mode;
use crate::common::control::Environment;
use crate::settings::GameMode;
use crate::settings::SettingsError;

pub const NUM_MODES: GameMode = 4;

/// Number of frames the SELECT switch is held for each menu step.
pub const SELECT_HOLD_FRAMES: u32 = 10;

pub fn available_modes() -> Vec<GameMode> {
    (0..NUM_MODES).collect()
}

/// Returns the (mode, variation) pair the game menu shows once `mode` is active.
///
/// The standard game is encoded as mode 1 in variation 1, all other modes use variation 0.
pub fn target_discriminators(mode: GameMode) -> (u8, u8) {
    if mode == 0 {
        (1, 1)
    } else {
        (mode as u8, 0)
    }
}

/// Presses SELECT until the menu shows `mode`, then soft-resets to start the game in it.
///
/// There is no upper bound on the number of presses. The game menu cycles through all
/// variants, so a correctly emulated game reaches every target. If the menu never shows the
/// target pair this call does not return.
pub fn select_mode<E: Environment + ?Sized>(mode: GameMode, environment: &mut E) -> Result<()> {
    if mode >= NUM_MODES {
        warn!("Rejecting mode {mode}, supported modes are 0..{NUM_MODES}");
        return Err(SettingsError::InvalidMode(mode).into());
    }

    let target = target_discriminators(mode);
    let mut presses: u64 = 0;
    let mut current = extract_mode(&*environment);
    while current != target {
        environment.press_select(SELECT_HOLD_FRAMES);
        presses += 1;
        current = extract_mode(&*environment);
        debug!("Select #{presses}: menu at {current:?}, waiting for {target:?}");
    }

    environment.soft_reset();
    debug!("Mode {mode} active after {presses} select presses");
    Ok(())
}
