//! LIFX color strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A color in the LIFX color string syntax.
///
/// The API accepts named colors (`red`), hex (`#ff8800`), RGB (`rgb:255,136,0`),
/// and HSBK components (`hue:120 saturation:1.0`, `kelvin:2700`), which can be
/// combined. The string is sent as-is and checked by the API.
///
/// # Examples
///
/// ```
/// use lifx_cloud_rs::Color;
///
/// assert_eq!(Color::rgb(255, 136, 0).as_str(), "rgb:255,136,0");
/// assert_eq!(Color::hex(255, 136, 0).as_str(), "#ff8800");
/// assert_eq!(Color::kelvin(2700).as_str(), "kelvin:2700");
/// assert_eq!(Color::named("blue").as_str(), "blue");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// A named color such as `white`, `red`, `orange`, `yellow`, `cyan`,
    /// `green`, `blue`, `purple` or `pink`.
    pub fn named(name: &str) -> Self {
        Color(name.to_string())
    }

    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color(format!("rgb:{red},{green},{blue}"))
    }

    pub fn hex(red: u8, green: u8, blue: u8) -> Self {
        Color(format!("#{red:02x}{green:02x}{blue:02x}"))
    }

    /// Hue in degrees (0-360) and saturation (0.0-1.0).
    pub fn hue_saturation(hue: f64, saturation: f64) -> Self {
        Color(format!("hue:{hue} saturation:{saturation}"))
    }

    /// White at the given color temperature (1500K-9000K on most lights).
    pub fn kelvin(kelvin: u16) -> Self {
        Color(format!("kelvin:{kelvin}"))
    }

    /// Combine two color strings, e.g. a hue with a kelvin value.
    pub fn with(&self, other: &Color) -> Self {
        Color(format!("{} {}", self.0, other.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = String;

    /// Take a color string as-is, rejecting only an empty one.
    fn from_str(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            Err("Expected a color string, e.g. red, #ff0000 or kelvin:2700".into())
        } else {
            Ok(Color(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_color() {
        let color = Color::hue_saturation(120.0, 1.0).with(&Color::kelvin(3500));
        assert_eq!(color.as_str(), "hue:120 saturation:1 kelvin:3500");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Color::hex(0, 0, 255)).unwrap();
        assert_eq!(json, r##""#0000ff""##);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Color::from_str(" red ").unwrap(), Color::named("red"));
        assert!(Color::from_str("").is_err());
    }
}
