// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tokens reported by status responses and webhooks.

use super::token::open_token;

open_token! {
    /// Contact sensor open state.
    OpenState {
        /// Door or window is open.
        OPEN = "open",
        /// Door or window is closed.
        CLOSE = "close",
        /// Left open longer than the configured timeout.
        TIMEOUT_NOT_CLOSE = "timeOutNotClose",
    }
}

open_token! {
    /// Lock motor state as reported by the status endpoint.
    LockState {
        /// Rotated to the locking position.
        LOCKED = "locked",
        /// Rotated to the unlocking position.
        UNLOCKED = "unlocked",
        /// Jammed while rotating.
        JAMMED = "jammed",
    }
}

open_token! {
    /// Lock motor state as reported by webhook events (uppercase on the wire).
    LockEventState {
        /// Rotated to the locking position.
        LOCKED = "LOCKED",
        /// Rotated to the unlocking position.
        UNLOCKED = "UNLOCKED",
        /// Jammed while rotating.
        JAMMED = "JAMMED",
    }
}

open_token! {
    /// Door state reported by locks.
    DoorState {
        /// Door is open.
        OPENED = "opened",
        /// Door is closed.
        CLOSED = "closed",
    }
}

open_token! {
    /// Robot vacuum cleaner activity.
    CleanerWorkingStatus {
        /// Idle.
        STAND_BY = "StandBy",
        /// Cleaning.
        CLEARING = "Clearing",
        /// Paused.
        PAUSED = "Paused",
        /// Returning to the dock.
        GOTO_CHARGE_BASE = "GotoChargeBase",
        /// Charging.
        CHARGING = "Charging",
        /// Fully charged.
        CHARGE_DONE = "ChargeDone",
        /// Dormant.
        DORMANT = "Dormant",
        /// Needs attention.
        IN_TROUBLE = "InTrouble",
        /// Under remote control.
        IN_REMOTE_CONTROL = "InRemoteControl",
        /// Emptying the bin.
        IN_DUST_COLLECTING = "InDustCollecting",
    }
}

open_token! {
    /// Robot vacuum cleaner connectivity.
    CleanerOnlineStatus {
        /// Connected.
        ONLINE = "online",
        /// Disconnected.
        OFFLINE = "offline",
    }
}

open_token! {
    /// Motion detection state carried by sensor and camera webhooks.
    DetectionState {
        /// Motion detected.
        DETECTED = "DETECTED",
        /// No motion for some time.
        NOT_DETECTED = "NOT_DETECTED",
    }
}

open_token! {
    /// Enter/exit mode reported by contact sensors.
    DoorMode {
        /// Someone came in.
        IN_DOOR = "IN_DOOR",
        /// Someone went out.
        OUT_DOOR = "OUT_DOOR",
    }
}

open_token! {
    /// Temperature scale.
    TemperatureScale {
        /// Degrees Celsius.
        CELSIUS = "CELSIUS",
        /// Degrees Fahrenheit.
        FAHRENHEIT = "FAHRENHEIT",
    }
}

open_token! {
    /// Bot operating mode.
    BotMode {
        /// Press once per command.
        PRESS = "pressMode",
        /// Toggle between on and off.
        SWITCH = "switchMode",
        /// Custom press sequence.
        CUSTOMIZE = "customizeMode",
    }
}
