//! Read access to the memory of the host console.
use std::ops::RangeInclusive;

use itertools::Itertools;

/// Size of the RIOT RAM of the Atari 2600.
pub const RAM_SIZE: usize = 128;

/// Base address of the RIOT RAM on the console bus.
pub const RAM_BASE: u16 = 0x80;

/// Read-only view of console memory as provided by the host emulator.
///
/// Addresses are not bounds checked by the settings. The host is expected to provide a memory
/// view that can be read at every address the game settings use.
pub trait Memory {
    fn peek_u8(&self, addr: u16) -> u8;

    fn peek_range(&self, range: RangeInclusive<u16>) -> Vec<u8> {
        range.map(|addr| self.peek_u8(addr)).collect()
    }
}

/// A flat memory image where the index into the slice is the address.
impl Memory for [u8] {
    #[inline]
    fn peek_u8(&self, addr: u16) -> u8 {
        self[addr as usize]
    }
}

impl Memory for Vec<u8> {
    #[inline]
    fn peek_u8(&self, addr: u16) -> u8 {
        self.as_slice().peek_u8(addr)
    }
}

impl<const N: usize> Memory for [u8; N] {
    #[inline]
    fn peek_u8(&self, addr: u16) -> u8 {
        self.as_slice().peek_u8(addr)
    }
}

/// The 128 bytes of RIOT RAM.
///
/// Every address is mirrored onto RAM using its lower 7 bits, which is how the host reads
/// RAM for game settings. This makes every offset used by the settings a valid address.
#[derive(Clone, PartialEq, Eq)]
pub struct AtariRam {
    ram: [u8; RAM_SIZE],
}

impl AtariRam {
    pub fn new() -> Self {
        Self { ram: [0; RAM_SIZE] }
    }

    pub fn from_bytes(ram: [u8; RAM_SIZE]) -> Self {
        Self { ram }
    }

    pub fn poke_u8(&mut self, addr: u16, value: u8) {
        self.ram[Self::index(addr)] = value;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.ram
    }

    /// Bus address of the RAM cell that `addr` is mirrored onto.
    pub fn bus_address(addr: u16) -> u16 {
        RAM_BASE + (addr & 0x7F)
    }

    #[inline]
    fn index(addr: u16) -> usize {
        (addr & 0x7F) as usize
    }
}

impl Default for AtariRam {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory for AtariRam {
    #[inline]
    fn peek_u8(&self, addr: u16) -> u8 {
        self.ram[Self::index(addr)]
    }
}

impl std::fmt::Debug for AtariRam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AtariRam")?;
        write!(f, "{}", format_memory(&self.ram))
    }
}

/// Formats memory as rows of 16 hex bytes.
pub fn format_memory(memory: &[u8]) -> String {
    memory
        .chunks(16)
        .map(|row| row.iter().map(|value| format!("{value:02X}")).join(" "))
        .map(|row| row + "\n")
        .collect()
}
