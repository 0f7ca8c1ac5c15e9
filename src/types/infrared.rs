//! Infrared channel control.

use serde::{Deserialize, Serialize};

/// Maximum infrared channel level from 0.0 to 1.0.
///
/// Only lights with infrared LEDs act on this value. It caps the infrared
/// output used in low light and does not turn the channel on by itself.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Infrared {
    pub(crate) value: f64,
}

impl Infrared {
    /// Infrared disabled (0.0).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns `None` if value is outside the valid range (0.0-1.0).
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx_cloud_rs::Infrared;
    ///
    /// assert!(Infrared::create(0.0).is_some());
    /// assert!(Infrared::create(1.0).is_some());
    /// assert!(Infrared::create(-0.1).is_none());
    /// ```
    pub fn create(value: f64) -> Option<Self> {
        if (0.0..=1.0).contains(&value) {
            Some(Infrared { value })
        } else {
            None
        }
    }
}
