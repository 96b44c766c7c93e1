//! The joystick actions available to a single player.
use serde::Deserialize;
use serde::Serialize;

/// Full action domain of player A. Games filter this down to their minimal set.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
    strum::FromRepr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum Action {
    Noop = 0,
    Fire = 1,
    Up = 2,
    Right = 3,
    Left = 4,
    Down = 5,
    UpRight = 6,
    UpLeft = 7,
    DownRight = 8,
    DownLeft = 9,
    UpFire = 10,
    RightFire = 11,
    LeftFire = 12,
    DownFire = 13,
    UpRightFire = 14,
    UpLeftFire = 15,
    DownRightFire = 16,
    DownLeftFire = 17,
}

impl Action {
    pub fn is_fire(self) -> bool {
        matches!(
            self,
            Action::Fire
                | Action::UpFire
                | Action::RightFire
                | Action::LeftFire
                | Action::DownFire
                | Action::UpRightFire
                | Action::UpLeftFire
                | Action::DownRightFire
                | Action::DownLeftFire
        )
    }
}
