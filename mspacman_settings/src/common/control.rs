//! Synthetic console input issued to the host emulator.
use packed_struct::prelude::*;

use crate::common::memory::Memory;

/// Console switches bit layout:
///    SWCHB
///    $0282
///  7  bit  0
///  ---- ----
///  RL.. C.SR
///  ||   | ||
///  ||   | |+- Game reset
///  ||   | +-- Game select
///  ||   +---- Color / B&W
///  ++-------- Right/left difficulty
///
/// Fields describe which switches are engaged. Translating this into the active-low register
/// value is left to the host.
#[derive(PackedStruct, Clone, Default, Debug, Copy, PartialEq, Eq)]
#[packed_struct(bit_numbering = "msb0")]
pub struct ConsoleSwitches {
    pub right_difficulty: bool,
    pub left_difficulty: bool,
    pub unused5: bool,
    pub unused4: bool,
    pub color: bool,
    pub unused2: bool,
    pub select: bool,
    pub reset: bool,
}

impl ConsoleSwitches {
    pub fn select() -> Self {
        Self {
            select: true,
            ..Default::default()
        }
    }

    pub fn reset() -> Self {
        Self {
            reset: true,
            ..Default::default()
        }
    }

    pub fn to_u8(&self) -> u8 {
        // Packing a struct of bools into its own size cannot fail.
        u8::from_be_bytes(self.pack().unwrap_or_default())
    }
}

/// Control handle into the host emulator.
///
/// Memory reads reflect the emulator state after all previously issued input has been applied.
pub trait Environment: Memory {
    /// Holds `switches` engaged while emulating `frames` frames.
    fn hold_switches(&mut self, switches: ConsoleSwitches, frames: u32);

    /// Resets the game through the console reset switch without resetting the console.
    fn soft_reset(&mut self);

    fn press_select(&mut self, frames: u32) {
        self.hold_switches(ConsoleSwitches::select(), frames);
    }
}
