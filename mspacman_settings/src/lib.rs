//! Ms. Pac-Man settings for an Atari 2600 reinforcement learning environment.
//!
//! The host emulator calls [GameSettings::step] once per frame with read access to console
//! memory. The settings decode lives, pellets and ghost states from fixed memory offsets and
//! turn them into a reward and a terminal flag. [GameSettings::set_mode] drives the console
//! SELECT switch until the requested game variant is active.
pub mod common;
pub mod components;
pub mod mspacman;
pub mod settings;

pub use common::action::Action;
pub use common::control::ConsoleSwitches;
pub use common::control::Environment;
pub use common::memory::AtariRam;
pub use common::memory::Memory;
pub use common::serializer::Deserializer;
pub use common::serializer::Serializer;
pub use common::serializer::StateStream;
pub use mspacman::MsPacmanSettings;
pub use settings::GameMode;
pub use settings::GameSettings;
pub use settings::SettingsError;
