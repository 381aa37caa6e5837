// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color in the `"r:g:b"` form used by bulbs and strip lights.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// RGB color with 8-bit channels (0-255).
///
/// Color bulbs and strip lights report and accept colors as three decimal
/// channels separated by colons, e.g. `"255:128:0"`. Hex notation is also
/// accepted when parsing.
///
/// # Examples
///
/// ```
/// use switchbot_lib::types::RgbColor;
///
/// let color: RgbColor = "255:128:0".parse().unwrap();
/// assert_eq!(color.green(), 128);
/// assert_eq!(color.to_string(), "255:128:0");
///
/// let red = RgbColor::from_hex("#FF0000").unwrap();
/// assert_eq!(red, RgbColor::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses the colon-separated wire form (`"r:g:b"`).
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidArgument`] unless the input holds exactly
    /// three decimal channels in 0-255.
    pub fn from_channels(value: &str) -> Result<Self, ValueError> {
        let invalid = || ValueError::InvalidArgument(format!("invalid RGB color: {value}"));

        let mut parts = value.split(':').map(|part| part.trim().parse::<u8>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Ok(Self::new(r, g, b)),
            _ => Err(invalid()),
        }
    }

    /// Parses an RGB color from a hex string (`#RRGGBB` or `RRGGBB`).
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidArgument`] if the hex string is invalid.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ValueError::InvalidArgument(format!("invalid hex color: {hex}")));
        }

        let r = parse_hex_pair(&digits[0..2], hex)?;
        let g = parse_hex_pair(&digits[2..4], hex)?;
        let b = parse_hex_pair(&digits[4..6], hex)?;
        Ok(Self::new(r, g, b))
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color as a hex string without the hash prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.red, self.green, self.blue)
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            Self::from_channels(s)
        } else {
            Self::from_hex(s)
        }
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

fn parse_hex_pair(pair: &str, input: &str) -> Result<u8, ValueError> {
    u8::from_str_radix(pair, 16)
        .map_err(|_| ValueError::InvalidArgument(format!("invalid hex color: {input}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_round_trip_through_display() {
        let color = RgbColor::from_channels("12:0:255").unwrap();
        assert_eq!(color, RgbColor::new(12, 0, 255));
        assert_eq!(color.to_string(), "12:0:255");
    }

    #[test]
    fn channels_reject_bad_input() {
        for raw in ["", "1:2", "1:2:3:4", "256:0:0", "a:b:c", "-1:0:0"] {
            assert!(RgbColor::from_channels(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(
            RgbColor::from_hex("#FF5733").unwrap(),
            RgbColor::new(255, 87, 51)
        );
        assert_eq!(RgbColor::from_hex("00ff00").unwrap().green(), 255);
        assert!(RgbColor::from_hex("#F00").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
    }

    #[test]
    fn from_str_picks_notation() {
        assert_eq!(
            "255:255:255".parse::<RgbColor>().unwrap(),
            RgbColor::new(255, 255, 255)
        );
        assert_eq!("#000080".parse::<RgbColor>().unwrap().blue(), 128);
    }

    #[test]
    fn to_hex() {
        assert_eq!(RgbColor::new(255, 128, 0).to_hex(), "FF8000");
    }
}
