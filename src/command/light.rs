// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light control commands.
//!
//! Covers color bulbs, strip lights and ceiling lights, as well as the
//! brightness buttons of infrared light remotes.

use crate::command::Command;
use crate::types::RgbColor;

/// Command to control a light.
///
/// # Examples
///
/// ```
/// use switchbot_lib::command::{Command, LightCommand};
/// use switchbot_lib::types::RgbColor;
///
/// let cmd = LightCommand::SetColor(RgbColor::new(255, 128, 0));
/// assert_eq!(cmd.name(), "setColor");
/// assert_eq!(cmd.parameter(), "255:128:0");
///
/// assert_eq!(LightCommand::SetBrightness(75).parameter(), "75");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightCommand {
    /// Set brightness, 1-100.
    SetBrightness(u8),
    /// Set RGB color (bulbs and strip lights).
    SetColor(RgbColor),
    /// Set color temperature in Kelvin, 2700-6500 (bulbs and ceiling lights).
    SetColorTemperature(u16),
    /// Infrared light remote brightness up.
    BrightnessUp,
    /// Infrared light remote brightness down.
    BrightnessDown,
}

impl Command for LightCommand {
    fn name(&self) -> String {
        match self {
            Self::SetBrightness(_) => "setBrightness",
            Self::SetColor(_) => "setColor",
            Self::SetColorTemperature(_) => "setColorTemperature",
            Self::BrightnessUp => "brightnessUp",
            Self::BrightnessDown => "brightnessDown",
        }
        .to_string()
    }

    fn parameter(&self) -> String {
        match self {
            Self::SetBrightness(value) => value.to_string(),
            Self::SetColor(color) => color.to_string(),
            Self::SetColorTemperature(kelvin) => kelvin.to_string(),
            Self::BrightnessUp | Self::BrightnessDown => super::DEFAULT_PARAMETER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_parameters() {
        assert_eq!(LightCommand::SetColorTemperature(2700).parameter(), "2700");
        assert_eq!(
            LightCommand::SetColor(RgbColor::new(0, 0, 0)).parameter(),
            "0:0:0"
        );
        assert_eq!(LightCommand::BrightnessUp.parameter(), "default");
        assert_eq!(LightCommand::BrightnessDown.name(), "brightnessDown");
    }
}
