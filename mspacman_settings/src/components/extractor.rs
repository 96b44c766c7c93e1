//! Decodes Ms. Pac-Man game state from fixed memory offsets.
//!
//! All offsets are tied to the memory layout of the Ms. Pac-Man cartridge and are read without
//! bounds checks.
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::RangeInclusive;

use intbits::Bits;
use serde::Deserialize;
use serde::Serialize;

use crate::common::memory::Memory;

/// Low nibble holds the number of spare lives.
pub const LIVES_ADDR: u16 = 0xFB;
/// Counts down while the death animation plays.
pub const DEATH_TIMER_ADDR: u16 = 0xA7;
/// One byte per maze cell. A cell reads 0 once its pellet has been eaten.
pub const PELLET_GRID: RangeInclusive<u16> = 0x4000..=0x43FF;
pub const GHOST_STATE_ADDRS: [u16; NUM_GHOSTS] = [0x4EF0, 0x4EF1, 0x4EF2, 0x4EF3];
/// Menu discriminators of the active game variant.
pub const MODE_ADDR: u16 = 0x99;
pub const VARIATION_ADDR: u16 = 0xA1;

/// Death timer value of the frame in which the last life is gone.
pub const DEATH_TIMER_SENTINEL: u8 = 0x53;
/// Ghost state code of a ghost that has just been eaten.
pub const GHOST_EATEN_STATE: u8 = 0x02;

pub const NUM_GHOSTS: usize = 4;

pub type GhostStates = [u8; NUM_GHOSTS];

/// Raw lives nibble, before it is converted into a life count.
pub fn extract_lives_nibble<M: Memory + ?Sized>(memory: &M) -> u8 {
    memory.peek_u8(LIVES_ADDR).bits(0..4)
}

pub fn extract_lives<M: Memory + ?Sized>(memory: &M) -> i32 {
    lives_from_nibble(extract_lives_nibble(memory))
}

pub fn lives_from_nibble(nibble: u8) -> i32 {
    i32::from(nibble & 0x7) + 1
}

pub fn extract_death_timer<M: Memory + ?Sized>(memory: &M) -> u8 {
    memory.peek_u8(DEATH_TIMER_ADDR)
}

/// Number of maze cells whose pellet has been eaten. Rescans the whole grid on every call.
pub fn extract_pellets_cleared<M: Memory + ?Sized>(memory: &M) -> i32 {
    PELLET_GRID
        .filter(|addr| memory.peek_u8(*addr) == 0)
        .count() as i32
}

pub fn extract_ghost_states<M: Memory + ?Sized>(memory: &M) -> GhostStates {
    GHOST_STATE_ADDRS.map(|addr| memory.peek_u8(addr))
}

/// Returns the (mode, variation) discriminator pair of the active game variant.
pub fn extract_mode<M: Memory + ?Sized>(memory: &M) -> (u8, u8) {
    (memory.peek_u8(MODE_ADDR), memory.peek_u8(VARIATION_ADDR))
}

/// Everything the reward and terminal policies need from a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedState {
    pub lives_nibble: u8,
    pub lives: i32,
    pub death_timer: u8,
    pub pellets_cleared: i32,
    pub ghost_states: GhostStates,
}

impl ExtractedState {
    pub fn read<M: Memory + ?Sized>(memory: &M) -> Self {
        let lives_nibble = extract_lives_nibble(memory);
        Self {
            lives_nibble,
            lives: lives_from_nibble(lives_nibble),
            death_timer: extract_death_timer(memory),
            pellets_cleared: extract_pellets_cleared(memory),
            ghost_states: extract_ghost_states(memory),
        }
    }

    pub fn ghosts_eaten(&self) -> usize {
        self.ghost_states
            .iter()
            .filter(|state| **state == GHOST_EATEN_STATE)
            .count()
    }
}

impl Display for ExtractedState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lives:{} (${:X}) death_timer:${:02X} pellets:{} ghosts:{:02X?}",
            self.lives, self.lives_nibble, self.death_timer, self.pellets_cleared, self.ghost_states
        )
    }
}
