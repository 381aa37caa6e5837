// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands for virtual infrared remotes.

use crate::command::{Command, CommandType};
use crate::types::PowerState;

/// Air conditioner operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcMode {
    /// Auto (1).
    Auto,
    /// Cool (2).
    Cool,
    /// Dry (3).
    Dry,
    /// Fan only (4).
    Fan,
    /// Heat (5).
    Heat,
}

impl AcMode {
    const fn code(self) -> u8 {
        match self {
            Self::Auto => 1,
            Self::Cool => 2,
            Self::Dry => 3,
            Self::Fan => 4,
            Self::Heat => 5,
        }
    }
}

/// Air conditioner fan speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcFanSpeed {
    /// Auto (1).
    Auto,
    /// Low (2).
    Low,
    /// Medium (3).
    Medium,
    /// High (4).
    High,
}

impl AcFanSpeed {
    const fn code(self) -> u8 {
        match self {
            Self::Auto => 1,
            Self::Low => 2,
            Self::Medium => 3,
            Self::High => 4,
        }
    }
}

/// Command to set every air conditioner setting at once.
///
/// # Examples
///
/// ```
/// use switchbot_lib::command::{AcFanSpeed, AcMode, AirConditionerCommand, Command};
/// use switchbot_lib::types::PowerState;
///
/// let cmd = AirConditionerCommand::SetAll {
///     temperature: 26,
///     mode: AcMode::Cool,
///     fan_speed: AcFanSpeed::Auto,
///     power: PowerState::On,
/// };
/// assert_eq!(cmd.name(), "setAll");
/// assert_eq!(cmd.parameter(), "26,2,1,on");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirConditionerCommand {
    /// Set temperature, mode, fan speed and power.
    SetAll {
        /// Target temperature in degrees Celsius.
        temperature: i32,
        /// Operating mode.
        mode: AcMode,
        /// Fan speed.
        fan_speed: AcFanSpeed,
        /// Power state.
        power: PowerState,
    },
}

impl Command for AirConditionerCommand {
    fn name(&self) -> String {
        "setAll".to_string()
    }

    fn parameter(&self) -> String {
        match self {
            Self::SetAll {
                temperature,
                mode,
                fan_speed,
                power,
            } => format!(
                "{temperature},{},{},{}",
                mode.code(),
                fan_speed.code(),
                power.as_param()
            ),
        }
    }
}

/// Command for TV and set-top box remotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TvCommand {
    /// Switch to a channel number.
    SetChannel(u32),
    /// Volume up.
    VolumeAdd,
    /// Volume down.
    VolumeSub,
    /// Next channel.
    ChannelAdd,
    /// Previous channel.
    ChannelSub,
}

impl Command for TvCommand {
    fn name(&self) -> String {
        match self {
            Self::SetChannel(_) => "SetChannel",
            Self::VolumeAdd => "volumeAdd",
            Self::VolumeSub => "volumeSub",
            Self::ChannelAdd => "channelAdd",
            Self::ChannelSub => "channelSub",
        }
        .to_string()
    }

    fn parameter(&self) -> String {
        match self {
            Self::SetChannel(channel) => channel.to_string(),
            _ => super::DEFAULT_PARAMETER.to_string(),
        }
    }
}

/// Command for DVD player and speaker remotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaCommand {
    /// Mute or unmute.
    SetMute,
    /// Fast forward.
    FastForward,
    /// Rewind.
    Rewind,
    /// Next track.
    Next,
    /// Previous track.
    Previous,
    /// Pause.
    Pause,
    /// Play.
    Play,
    /// Stop playback.
    Stop,
}

impl Command for MediaCommand {
    fn name(&self) -> String {
        match self {
            Self::SetMute => "setMute",
            Self::FastForward => "FastForward",
            Self::Rewind => "Rewind",
            Self::Next => "Next",
            Self::Previous => "Previous",
            Self::Pause => "Pause",
            Self::Play => "Play",
            Self::Stop => "Stop",
        }
        .to_string()
    }
}

/// Command for fan remotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FanCommand {
    /// Toggle oscillation.
    Swing,
    /// Set the timer.
    Timer,
    /// Low speed.
    LowSpeed,
    /// Middle speed.
    MiddleSpeed,
    /// High speed.
    HighSpeed,
}

impl Command for FanCommand {
    fn name(&self) -> String {
        match self {
            Self::Swing => "swing",
            Self::Timer => "timer",
            Self::LowSpeed => "lowSpeed",
            Self::MiddleSpeed => "middleSpeed",
            Self::HighSpeed => "highSpeed",
        }
        .to_string()
    }
}

/// Command that presses a user-defined button of an infrared remote.
///
/// # Examples
///
/// ```
/// use switchbot_lib::command::{Command, CommandType, CustomizeCommand};
///
/// let request = CustomizeCommand::ButtonPush("Night Mode".to_string()).render();
/// assert_eq!(request.command, "Night Mode");
/// assert_eq!(request.parameter, "default");
/// assert_eq!(request.command_type, CommandType::Customize);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CustomizeCommand {
    /// Press the button with this name.
    ButtonPush(String),
}

impl CustomizeCommand {
    /// Creates a button push command.
    #[must_use]
    pub fn button_push(name: impl Into<String>) -> Self {
        Self::ButtonPush(name.into())
    }
}

impl Command for CustomizeCommand {
    fn name(&self) -> String {
        match self {
            Self::ButtonPush(name) => name.clone(),
        }
    }

    fn command_type(&self) -> CommandType {
        CommandType::Customize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_conditioner_off() {
        let cmd = AirConditionerCommand::SetAll {
            temperature: 18,
            mode: AcMode::Heat,
            fan_speed: AcFanSpeed::High,
            power: PowerState::Off,
        };
        assert_eq!(cmd.parameter(), "18,5,4,off");
    }

    #[test]
    fn tv_commands() {
        assert_eq!(TvCommand::SetChannel(15).name(), "SetChannel");
        assert_eq!(TvCommand::SetChannel(15).parameter(), "15");
        assert_eq!(TvCommand::VolumeSub.parameter(), "default");
    }

    #[test]
    fn media_names_keep_vendor_casing() {
        assert_eq!(MediaCommand::SetMute.name(), "setMute");
        assert_eq!(MediaCommand::FastForward.name(), "FastForward");
        assert_eq!(MediaCommand::Stop.name(), "Stop");
    }

    #[test]
    fn fan_commands() {
        assert_eq!(FanCommand::MiddleSpeed.name(), "middleSpeed");
        assert_eq!(FanCommand::Swing.render().command_type, CommandType::Command);
    }

    #[test]
    fn button_push_is_customize() {
        let cmd = CustomizeCommand::button_push("Boost");
        assert_eq!(cmd.command_type(), CommandType::Customize);
        assert_eq!(cmd.name(), "Boost");
    }
}
