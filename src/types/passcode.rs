// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Keypad passcode tokens.

use super::token::open_token;

open_token! {
    /// Kind of keypad passcode.
    PasscodeType {
        /// Valid until deleted.
        PERMANENT = "permanent",
        /// Valid inside a start/end window.
        TIME_LIMIT = "timeLimit",
        /// Single use inside a start/end window.
        DISPOSABLE = "disposable",
        /// Emergency passcode.
        URGENT = "urgent",
    }
}

impl PasscodeType {
    /// Returns `true` for passcode kinds that need a validity window.
    #[must_use]
    pub fn requires_window(&self) -> bool {
        *self == Self::TIME_LIMIT || *self == Self::DISPOSABLE
    }
}

open_token! {
    /// Passcode validity.
    PasscodeStatus {
        /// Usable.
        NORMAL = "normal",
        /// Past its end time.
        EXPIRED = "expired",
    }
}
