// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lock and keypad commands.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::command::Command;
use crate::error::ValueError;
use crate::types::PasscodeType;

/// Command to rotate a lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockCommand {
    /// Rotate to the locked position.
    Lock,
    /// Rotate to the unlocked position.
    Unlock,
}

impl Command for LockCommand {
    fn name(&self) -> String {
        match self {
            Self::Lock => "lock",
            Self::Unlock => "unlock",
        }
        .to_string()
    }
}

/// A validated request to add a passcode to a keypad.
///
/// Build it with [`KeypadCommand::create_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateKey {
    name: String,
    passcode_type: PasscodeType,
    password: String,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl CreateKey {
    /// Minimum passcode length.
    pub const MIN_PASSWORD_LEN: usize = 6;
    /// Maximum passcode length.
    pub const MAX_PASSWORD_LEN: usize = 12;

    /// Returns the passcode name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the passcode kind.
    #[must_use]
    pub fn passcode_type(&self) -> &PasscodeType {
        &self.passcode_type
    }

    /// Returns the start of the validity window.
    #[must_use]
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    /// Returns the end of the validity window.
    #[must_use]
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }
}

/// Command to manage keypad passcodes.
///
/// Created passcodes are stored on the device; the result arrives through
/// a webhook event rather than in the command response.
///
/// # Examples
///
/// ```
/// use switchbot_lib::command::{Command, KeypadCommand};
/// use switchbot_lib::types::PasscodeType;
///
/// let cmd = KeypadCommand::create_key("Guest", PasscodeType::PERMANENT, "123456", None, None).unwrap();
/// assert_eq!(cmd.name(), "createKey");
///
/// let param: serde_json::Value = serde_json::from_str(&cmd.parameter()).unwrap();
/// assert_eq!(param["password"], "123456");
/// assert_eq!(param["startTime"], 0);
///
/// assert!(KeypadCommand::create_key("Guest", PasscodeType::PERMANENT, "12345", None, None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypadCommand {
    /// Add a passcode.
    CreateKey(CreateKey),
    /// Remove a passcode by its key list id.
    DeleteKey {
        /// Passcode identifier from the device's key list.
        id: i64,
    },
}

impl KeypadCommand {
    /// Creates a validated create key command.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidArgument`] if the password is not 6 to 12
    /// characters long, or if a time-limited or disposable passcode lacks a
    /// non-zero start or end time.
    pub fn create_key(
        name: impl Into<String>,
        passcode_type: PasscodeType,
        password: impl Into<String>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, ValueError> {
        let password = password.into();
        let length = password.chars().count();
        if !(CreateKey::MIN_PASSWORD_LEN..=CreateKey::MAX_PASSWORD_LEN).contains(&length) {
            return Err(ValueError::InvalidArgument(format!(
                "the length of password must be {} to {} but was {length}",
                CreateKey::MIN_PASSWORD_LEN,
                CreateKey::MAX_PASSWORD_LEN
            )));
        }

        let is_set = |instant: Option<DateTime<Utc>>| instant.is_some_and(|t| t.timestamp() != 0);
        if passcode_type.requires_window() && !(is_set(start) && is_set(end)) {
            return Err(ValueError::InvalidArgument(format!(
                "passcode type {passcode_type} requires both a start time and an end time"
            )));
        }

        Ok(Self::CreateKey(CreateKey {
            name: name.into(),
            passcode_type,
            password,
            start,
            end,
        }))
    }

    /// Creates a delete key command.
    #[must_use]
    pub const fn delete_key(id: i64) -> Self {
        Self::DeleteKey { id }
    }
}

impl Command for KeypadCommand {
    fn name(&self) -> String {
        match self {
            Self::CreateKey(_) => "createKey",
            Self::DeleteKey { .. } => "deleteKey",
        }
        .to_string()
    }

    fn parameter(&self) -> String {
        match self {
            Self::CreateKey(key) => json!({
                "name": key.name,
                "type": key.passcode_type.as_str(),
                "password": key.password,
                "startTime": key.start.map_or(0, |t| t.timestamp()),
                "endTime": key.end.map_or(0, |t| t.timestamp()),
            })
            .to_string(),
            Self::DeleteKey { id } => json!({ "id": id }).to_string(),
        }
    }
}
