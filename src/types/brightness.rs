//! Brightness control for LIFX lights.

use serde::{Deserialize, Serialize};

/// Brightness level from 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Brightness {
    pub(crate) value: f64,
}

impl Brightness {
    const MIN: f64 = 0.0;
    const MAX: f64 = 1.0;

    /// Full brightness.
    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns None if value is outside valid range (0.0-1.0).
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx_cloud_rs::Brightness;
    ///
    /// assert!(Brightness::create(0.0).is_some());
    /// assert!(Brightness::create(0.5).is_some());
    /// assert!(Brightness::create(1.01).is_none());
    /// assert!(Brightness::create(f64::NAN).is_none());
    /// ```
    pub fn create(value: f64) -> Option<Self> {
        if Self::is_valid(value) {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Create a brightness from a percentage (0-100).
    pub fn from_percent(percent: u8) -> Option<Self> {
        Self::create(f64::from(percent) / 100.0)
    }

    /// Returns full brightness if value is invalid.
    pub fn create_or(value: f64) -> Self {
        Self::create(value).unwrap_or_default()
    }

    fn is_valid(value: f64) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new()
    }
}
