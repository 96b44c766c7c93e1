//! Traits and types shared with the host emulator and the learning harness.

pub mod action;
pub mod control;
pub mod logging;
pub mod memory;
pub mod serializer;
