// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power control commands.

use crate::command::Command;

/// Command to control device power.
///
/// Works for Bot, plugs, lights, humidifiers, fans and infrared remotes.
/// For curtains, turning on is the same as position 0 and turning off the
/// same as position 100.
///
/// # Examples
///
/// ```
/// use switchbot_lib::command::{Command, PowerCommand};
///
/// assert_eq!(PowerCommand::TurnOn.name(), "turnOn");
/// assert_eq!(PowerCommand::Press.parameter(), "default");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerCommand {
    /// Turn the device on.
    TurnOn,
    /// Turn the device off.
    TurnOff,
    /// Toggle color bulbs, strip lights and plug minis.
    Toggle,
    /// Trigger a Bot press.
    Press,
}

impl Command for PowerCommand {
    fn name(&self) -> String {
        match self {
            Self::TurnOn => "turnOn",
            Self::TurnOff => "turnOff",
            Self::Toggle => "toggle",
            Self::Press => "press",
        }
        .to_string()
    }
}
