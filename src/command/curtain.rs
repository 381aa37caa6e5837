// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Curtain and blind tilt commands.

use crate::command::Command;
use crate::types::SlidePosition;

/// Motor mode used by [`CurtainCommand::SetPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurtainMode {
    /// Let the device decide.
    #[default]
    Default,
    /// Fast and loud.
    Performance,
    /// Slow and quiet.
    Silent,
}

impl CurtainMode {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "ff",
            Self::Performance => "0",
            Self::Silent => "1",
        }
    }
}

/// Command to move a curtain.
///
/// # Examples
///
/// ```
/// use switchbot_lib::command::{Command, CurtainCommand, CurtainMode};
///
/// let cmd = CurtainCommand::set_position(1, CurtainMode::Default, 100);
/// assert_eq!(cmd.parameter(), "1,ff,100");
///
/// // Out-of-range positions are clamped.
/// let cmd = CurtainCommand::set_position(1, CurtainMode::Silent, -20);
/// assert_eq!(cmd.parameter(), "1,1,0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurtainCommand {
    /// Move to a position (0 open, 100 closed).
    SetPosition {
        /// Curtain index within a group, starting at 0.
        index: u32,
        /// Motor mode.
        mode: CurtainMode,
        /// Target position.
        position: SlidePosition,
    },
}

impl CurtainCommand {
    /// Creates a set position command, clamping `position` to 0-100.
    #[must_use]
    pub const fn set_position(index: u32, mode: CurtainMode, position: i64) -> Self {
        Self::SetPosition {
            index,
            mode,
            position: SlidePosition::clamped(position),
        }
    }
}

impl Command for CurtainCommand {
    fn name(&self) -> String {
        match self {
            Self::SetPosition { .. } => "setPosition".to_string(),
        }
    }

    fn parameter(&self) -> String {
        match self {
            Self::SetPosition {
                index,
                mode,
                position,
            } => format!("{index},{},{position}", mode.as_str()),
        }
    }
}

/// Tilt direction used by [`BlindTiltCommand::SetPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlindTiltDirection {
    /// Slats tilt upward.
    Up,
    /// Slats tilt downward.
    Down,
}

impl BlindTiltDirection {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Command to move a blind tilt.
///
/// `FullyOpen` has the same effect as `up;100` or `down;100`, `CloseUp` as
/// `up;0` and `CloseDown` as `down;0`, but they are distinct commands.
///
/// # Examples
///
/// ```
/// use switchbot_lib::command::{BlindTiltCommand, BlindTiltDirection, Command};
///
/// let cmd = BlindTiltCommand::set_position(BlindTiltDirection::Up, 60);
/// assert_eq!(cmd.name(), "setPosition");
/// assert_eq!(cmd.parameter(), "up;60");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlindTiltCommand {
    /// Tilt to a position in a direction.
    SetPosition {
        /// Tilt direction.
        direction: BlindTiltDirection,
        /// Target position.
        position: SlidePosition,
    },
    /// Open fully.
    FullyOpen,
    /// Close with slats up.
    CloseUp,
    /// Close with slats down.
    CloseDown,
}

impl BlindTiltCommand {
    /// Creates a set position command, clamping `position` to 0-100.
    #[must_use]
    pub const fn set_position(direction: BlindTiltDirection, position: i64) -> Self {
        Self::SetPosition {
            direction,
            position: SlidePosition::clamped(position),
        }
    }
}

impl Command for BlindTiltCommand {
    fn name(&self) -> String {
        match self {
            Self::SetPosition { .. } => "setPosition",
            Self::FullyOpen => "fullyOpen",
            Self::CloseUp => "closeUp",
            Self::CloseDown => "closeDown",
        }
        .to_string()
    }

    fn parameter(&self) -> String {
        match self {
            Self::SetPosition {
                direction,
                position,
            } => format!("{};{position}", direction.as_str()),
            _ => super::DEFAULT_PARAMETER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curtain_position_is_clamped() {
        assert_eq!(
            CurtainCommand::set_position(1, CurtainMode::Default, 150).parameter(),
            "1,ff,100"
        );
        assert_eq!(
            CurtainCommand::set_position(1, CurtainMode::Default, -5).parameter(),
            "1,ff,0"
        );
    }

    #[test]
    fn curtain_modes() {
        assert_eq!(
            CurtainCommand::set_position(0, CurtainMode::Performance, 30).parameter(),
            "0,0,30"
        );
        assert_eq!(
            CurtainCommand::set_position(2, CurtainMode::Silent, 30).parameter(),
            "2,1,30"
        );
    }

    #[test]
    fn blind_tilt_commands() {
        let cmd = BlindTiltCommand::set_position(BlindTiltDirection::Down, 200);
        assert_eq!(cmd.parameter(), "down;100");

        for (cmd, name) in [
            (BlindTiltCommand::FullyOpen, "fullyOpen"),
            (BlindTiltCommand::CloseUp, "closeUp"),
            (BlindTiltCommand::CloseDown, "closeDown"),
        ] {
            assert_eq!(cmd.name(), name);
            assert_eq!(cmd.parameter(), "default");
        }
    }
}
