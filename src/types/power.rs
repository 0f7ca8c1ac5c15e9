//! Power state for light control.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::errors::Error;
use crate::validate::validate_power;

/// Power state for a light, sent on the wire as `"on"` or `"off"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PowerState {
    /// Turn the light on
    On,
    /// Turn the light off
    Off,
}

impl PowerState {
    /// The wire form, `"on"` or `"off"`.
    pub fn as_str(self) -> &'static str {
        match self {
            PowerState::On => "on",
            PowerState::Off => "off",
        }
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            PowerState::On => PowerState::Off,
            PowerState::Off => PowerState::On,
        }
    }

    pub fn is_on(self) -> bool {
        self == PowerState::On
    }
}

impl From<bool> for PowerState {
    fn from(on: bool) -> Self {
        if on { PowerState::On } else { PowerState::Off }
    }
}

impl FromStr for PowerState {
    type Err = Error;

    /// Parse `"on"` or `"off"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Error> {
        validate_power(Some(s))
    }
}
