//! High level testing of the settings as driven by a host emulator.
//!
//! Reward scenarios are described in tests/data/scenarios.json as a sequence of memory writes
//! per frame and the expected lives, reward and terminal flag after stepping that frame.
mod util;

use std::path::PathBuf;

use mspacman_settings::common::logging;
use mspacman_settings::components::extractor::PELLET_GRID;
use mspacman_settings::components::mode_select::SELECT_HOLD_FRAMES;
use mspacman_settings::ConsoleSwitches;
use mspacman_settings::GameSettings;
use mspacman_settings::MsPacmanSettings;
use mspacman_settings::SettingsError;
use mspacman_settings::StateStream;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use util::test_env::Input;
use util::test_env::TestEnv;

/// Menu of the game as it cycles on SELECT, starting from power on.
const MENU: &[(u8, u8)] = &[(0, 0), (1, 0), (1, 1), (2, 0), (3, 0)];

#[derive(Deserialize)]
struct Scenario {
    name: String,
    /// Value every memory cell starts out with
    fill: u8,
    frames: Vec<ScenarioFrame>,
}

#[derive(Deserialize)]
struct ScenarioFrame {
    /// (address, value) pairs written before the frame is stepped
    writes: Vec<(u16, u8)>,
    /// Rewrites the pellet grid so that this many cells are cleared
    pellets_cleared: Option<usize>,
    lives: i32,
    reward: i32,
    terminal: bool,
}

fn load_scenarios() -> Vec<Scenario> {
    let root_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let data = std::fs::read_to_string(root_dir.join("tests/data/scenarios.json")).unwrap();
    serde_json::from_str(&data).unwrap()
}

fn apply_frame(env: &mut TestEnv, frame: &ScenarioFrame) {
    for (addr, value) in &frame.writes {
        env.poke(*addr, *value);
    }
    if let Some(cleared) = frame.pellets_cleared {
        for (index, addr) in PELLET_GRID.enumerate() {
            env.poke(addr, if index < cleared { 0 } else { 1 });
        }
    }
}

#[test]
pub fn test_reward_scenarios() {
    logging::test_init(false);
    for scenario in load_scenarios() {
        let mut env = TestEnv::new(scenario.fill);
        let mut settings = MsPacmanSettings::new();
        settings.reset();
        for (i, frame) in scenario.frames.iter().enumerate() {
            apply_frame(&mut env, frame);
            settings.step(&env);
            assert_eq!(
                (settings.lives(), settings.reward(), settings.is_terminal()),
                (frame.lives, frame.reward, frame.terminal),
                "{} frame {i}",
                scenario.name
            );
        }
    }
}

#[test]
pub fn test_settings_as_trait_object() {
    logging::test_init(false);
    let mut env = TestEnv::new(0xFF);
    env.poke(0xFB, 0x02);
    let mut settings: Box<dyn GameSettings> = Box::new(MsPacmanSettings::new());
    settings.step(&env);
    assert_eq!(settings.reward(), 1);
    assert_eq!(settings.minimal_action_set().len(), 9);
}

#[test]
pub fn test_set_mode() {
    logging::test_init(false);
    let settings = MsPacmanSettings::new();
    let select = Input::Hold(ConsoleSwitches::select(), SELECT_HOLD_FRAMES);
    for (mode, presses, expected_pair) in [(0, 2, (1, 1)), (1, 1, (1, 0)), (3, 4, (3, 0))] {
        let mut env = TestEnv::new(0).with_menu(MENU);
        settings.set_mode(mode, &mut env).unwrap();

        let mut expected_inputs = vec![select; presses];
        expected_inputs.push(Input::SoftReset);
        assert_eq!(env.inputs, expected_inputs, "mode {mode}");
        assert_eq!((env.memory[0x99], env.memory[0xA1]), expected_pair);
    }
}

#[test]
pub fn test_set_invalid_mode() {
    logging::test_init(false);
    let settings = MsPacmanSettings::new();
    let mut env = TestEnv::new(0).with_menu(MENU);
    let error = settings.set_mode(4, &mut env).unwrap_err();
    assert_eq!(
        error.downcast_ref::<SettingsError>(),
        Some(&SettingsError::InvalidMode(4))
    );
    assert_eq!(
        error.to_string(),
        "Mode 4 doesn't currently exist for this game"
    );
    assert!(env.inputs.is_empty());
}

#[test]
pub fn test_checkpoint_file() {
    logging::test_init(false);
    let mut env = TestEnv::new(0xFF);
    env.poke(0xFB, 0x02);
    env.poke(0x4000, 0);
    let mut settings = MsPacmanSettings::new();
    settings.step(&env);
    env.poke(0xFB, 0x01);
    settings.step(&env);
    assert_eq!(settings.reward(), -9);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.state");
    std::fs::write(&path, settings.save_state_bytes()).unwrap();

    let mut stream = StateStream::from_bytes(&std::fs::read(&path).unwrap()).unwrap();
    let mut restored = MsPacmanSettings::new();
    restored.load_state(&mut stream).unwrap();
    assert_eq!(stream.remaining(), 0);
    assert_eq!(restored.reward(), -9);
    assert_eq!(restored.lives(), 2);
    assert_eq!(restored.previous_lives(), 2);
    assert!(!restored.is_terminal());

    // The pellet count is not saved: the restored settings reward the already cleared cell
    // again on the next frame.
    settings.step(&env);
    restored.step(&env);
    assert_eq!(settings.reward(), 1);
    assert_eq!(restored.reward(), 2);
}
