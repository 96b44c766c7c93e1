use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;

use mspacman_settings::components::extractor::MODE_ADDR;
use mspacman_settings::components::extractor::VARIATION_ADDR;
use mspacman_settings::ConsoleSwitches;
use mspacman_settings::Environment;
use mspacman_settings::Memory;

/// A test implementation of the host `Environment`.
///
/// Holds a flat 64k memory image and records all input issued by the settings. SELECT presses
/// step through a scripted game menu, which is written to the mode/variation bytes.
pub struct TestEnv {
    pub memory: Vec<u8>,
    pub menu: Vec<(u8, u8)>,
    pub menu_position: usize,
    pub inputs: Vec<Input>,
}

impl TestEnv {
    pub fn new(fill: u8) -> Self {
        Self {
            memory: vec![fill; 0x10000],
            menu: Vec::new(),
            menu_position: 0,
            inputs: Vec::new(),
        }
    }

    pub fn with_menu(mut self, menu: &[(u8, u8)]) -> Self {
        self.menu = menu.to_vec();
        self.write_menu();
        self
    }

    pub fn poke(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn write_menu(&mut self) {
        if let Some((mode, variation)) = self.menu.get(self.menu_position).copied() {
            self.poke(MODE_ADDR, mode);
            self.poke(VARIATION_ADDR, variation);
        }
    }
}

impl Memory for TestEnv {
    fn peek_u8(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }
}

impl Environment for TestEnv {
    fn hold_switches(&mut self, switches: ConsoleSwitches, frames: u32) {
        self.inputs.push(Input::Hold(switches, frames));
        if switches.select && !self.menu.is_empty() {
            self.menu_position = (self.menu_position + 1) % self.menu.len();
            self.write_menu();
        }
    }

    fn soft_reset(&mut self) {
        self.inputs.push(Input::SoftReset);
    }
}

/// Input issued to the test environment
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum Input {
    /// Switches held for a number of frames
    Hold(ConsoleSwitches, u32),
    SoftReset,
}

impl Debug for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Input::Hold(switches, frames) => write!(f, "H({:08b})x{}", switches.to_u8(), frames),
            Input::SoftReset => write!(f, "R"),
        }
    }
}
