// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SwitchBot command definitions.
//!
//! Every command renders into the same three-field request body sent to
//! `POST /v1.1/devices/{id}/commands`:
//!
//! ```json
//! {"command": "setPosition", "parameter": "0,ff,50", "commandType": "command"}
//! ```
//!
//! # Available Commands
//!
//! | Command Type | Devices | Example |
//! |-------------|---------|---------|
//! | [`PowerCommand`] | Bot, plugs, lights, humidifier, infrared remotes | On, Off, Toggle, Press |
//! | [`CurtainCommand`] | Curtain | Set position |
//! | [`BlindTiltCommand`] | Blind Tilt | Set position, fully open |
//! | [`LockCommand`] | Lock | Lock, Unlock |
//! | [`KeypadCommand`] | Keypad | Create or delete a passcode |
//! | [`HumidifierCommand`] | Humidifier | Set mode |
//! | [`SmartFanCommand`] | Smart Fan | Set all status |
//! | [`LightCommand`] | Color Bulb, Strip Light, Ceiling Light | Brightness, color |
//! | [`CleanerCommand`] | Robot vacuum cleaners | Start, dock |
//! | [`AirConditionerCommand`] | Infrared air conditioner | Set all |
//! | [`TvCommand`] | Infrared TV, set-top box | Channel, volume |
//! | [`MediaCommand`] | Infrared DVD, speaker | Play, pause |
//! | [`FanCommand`] | Infrared fan | Swing, speed |
//! | [`CustomizeCommand`] | Any infrared remote | Custom button |
//!
//! # Examples
//!
//! ```
//! use switchbot_lib::command::{Command, CommandType, CurtainCommand, CurtainMode};
//!
//! let cmd = CurtainCommand::set_position(0, CurtainMode::Default, 150);
//! let request = cmd.render();
//! assert_eq!(request.command, "setPosition");
//! assert_eq!(request.parameter, "0,ff,100");
//! assert_eq!(request.command_type, CommandType::Command);
//! ```

mod cleaner;
mod climate;
mod curtain;
mod infrared;
mod light;
mod lock;
mod power;

pub use cleaner::{CleanerCommand, VacuumPowerLevel};
pub use climate::{Efficiency, HumidifierCommand, HumidifierMode, SmartFanCommand, SmartFanMode};
pub use curtain::{BlindTiltCommand, BlindTiltDirection, CurtainCommand, CurtainMode};
pub use infrared::{
    AcFanSpeed, AcMode, AirConditionerCommand, CustomizeCommand, FanCommand, MediaCommand,
    TvCommand,
};
pub use light::LightCommand;
pub use lock::{CreateKey, KeypadCommand, LockCommand};
pub use power::PowerCommand;

use serde::{Deserialize, Serialize};

/// Parameter value for commands that take no argument.
pub const DEFAULT_PARAMETER: &str = "default";

/// Whether the command is a built-in command or a custom infrared button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    /// Built-in command.
    #[default]
    Command,
    /// User-defined button of an infrared remote.
    Customize,
}

/// The wire body of a device command.
///
/// All three fields are always serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    /// Command name.
    pub command: String,
    /// Command parameter, `"default"` when the command takes none.
    pub parameter: String,
    /// Command type.
    pub command_type: CommandType,
}

impl CommandRequest {
    /// Creates a request from raw parts.
    ///
    /// Useful for commands this library does not model yet.
    #[must_use]
    pub fn new(
        command: impl Into<String>,
        parameter: impl Into<String>,
        command_type: CommandType,
    ) -> Self {
        Self {
            command: command.into(),
            parameter: parameter.into(),
            command_type,
        }
    }
}

/// A command that can be sent to a SwitchBot device.
pub trait Command {
    /// Returns the command name, e.g. `"turnOn"` or `"setPosition"`.
    fn name(&self) -> String;

    /// Returns the command parameter.
    fn parameter(&self) -> String {
        DEFAULT_PARAMETER.to_string()
    }

    /// Returns the command type.
    fn command_type(&self) -> CommandType {
        CommandType::Command
    }

    /// Renders the request body.
    fn render(&self) -> CommandRequest {
        CommandRequest {
            command: self.name(),
            parameter: self.parameter(),
            command_type: self.command_type(),
        }
    }
}

impl Command for CommandRequest {
    fn name(&self) -> String {
        self.command.clone()
    }

    fn parameter(&self) -> String {
        self.parameter.clone()
    }

    fn command_type(&self) -> CommandType {
        self.command_type
    }

    fn render(&self) -> CommandRequest {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_always_has_three_fields() {
        let request = PowerCommand::TurnOn.render();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "command": "turnOn",
                "parameter": "default",
                "commandType": "command"
            })
        );
    }

    #[test]
    fn customize_type_serializes_lowercase() {
        let json = serde_json::to_string(&CommandType::Customize).unwrap();
        assert_eq!(json, "\"customize\"");
    }

    #[test]
    fn raw_request_renders_itself() {
        let raw = CommandRequest::new("setNightLightMode", "1", CommandType::Command);
        assert_eq!(raw.render(), raw);
        assert_eq!(raw.name(), "setNightLightMode");
    }
}
