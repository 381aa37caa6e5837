// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Humidifier and smart fan commands.

use crate::command::Command;
use crate::error::ValueError;
use crate::types::PowerState;

/// Humidifier atomization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HumidifierMode {
    /// Automatic.
    Auto,
    /// Low (101).
    Low,
    /// Medium (102).
    Medium,
    /// High (103).
    High,
    /// Explicit atomization efficiency, built by [`HumidifierMode::efficiency`].
    Efficiency(Efficiency),
}

/// Humidifier atomization efficiency in percent, always 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Efficiency(u8);

impl Efficiency {
    /// Returns the efficiency in percent.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl HumidifierMode {
    /// Creates an explicit efficiency mode.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidArgument`] if `percent` exceeds 100.
    pub fn efficiency(percent: u8) -> Result<Self, ValueError> {
        if percent > 100 {
            return Err(ValueError::InvalidArgument(format!(
                "humidifier efficiency must be 0 to 100 but was {percent}"
            )));
        }
        Ok(Self::Efficiency(Efficiency(percent)))
    }

    fn to_parameter(self) -> String {
        match self {
            Self::Auto => "auto".to_string(),
            Self::Low => "101".to_string(),
            Self::Medium => "102".to_string(),
            Self::High => "103".to_string(),
            Self::Efficiency(percent) => percent.value().to_string(),
        }
    }
}

/// Command to set the humidifier mode.
///
/// # Examples
///
/// ```
/// use switchbot_lib::command::{Command, HumidifierCommand, HumidifierMode};
///
/// assert_eq!(HumidifierCommand::SetMode(HumidifierMode::Auto).parameter(), "auto");
/// assert_eq!(HumidifierCommand::SetMode(HumidifierMode::High).parameter(), "103");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HumidifierCommand {
    /// Set the atomization mode.
    SetMode(HumidifierMode),
}

impl Command for HumidifierCommand {
    fn name(&self) -> String {
        "setMode".to_string()
    }

    fn parameter(&self) -> String {
        match self {
            Self::SetMode(mode) => mode.to_parameter(),
        }
    }
}

/// Smart fan airflow mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmartFanMode {
    /// Constant airflow.
    Standard,
    /// Varying airflow.
    Natural,
}

impl SmartFanMode {
    const fn code(self) -> u8 {
        match self {
            Self::Standard => 1,
            Self::Natural => 2,
        }
    }
}

/// Command to set every smart fan setting at once.
///
/// # Examples
///
/// ```
/// use switchbot_lib::command::{Command, SmartFanCommand, SmartFanMode};
/// use switchbot_lib::types::PowerState;
///
/// let cmd = SmartFanCommand::SetAllStatus {
///     power: PowerState::On,
///     mode: SmartFanMode::Natural,
///     speed: 3,
///     shake_range: 60,
/// };
/// assert_eq!(cmd.parameter(), "on,2,3,60");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmartFanCommand {
    /// Set power, mode, speed and oscillation range.
    SetAllStatus {
        /// Power state.
        power: PowerState,
        /// Airflow mode.
        mode: SmartFanMode,
        /// Fan speed, 1-4.
        speed: u8,
        /// Oscillation range in degrees, 0-120.
        shake_range: u8,
    },
}

impl Command for SmartFanCommand {
    fn name(&self) -> String {
        "setAllStatus".to_string()
    }

    fn parameter(&self) -> String {
        match self {
            Self::SetAllStatus {
                power,
                mode,
                speed,
                shake_range,
            } => format!(
                "{},{},{speed},{shake_range}",
                power.as_param(),
                mode.code()
            ),
        }
    }
}
