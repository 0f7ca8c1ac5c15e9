//! Light selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::validate::validate_selector;

/// Identifies the lights an operation applies to.
///
/// See <https://api.developer.lifx.com/docs/selectors>. Any `&str` can be
/// passed to the client directly; this type builds the common forms.
///
/// # Examples
///
/// ```
/// use lifx_cloud_rs::Selector;
///
/// assert_eq!(Selector::all().as_ref(), "all");
/// assert_eq!(Selector::label("Kitchen").to_string(), "label:Kitchen");
/// assert_eq!(Selector::group_id("123").as_ref(), "group_id:123");
/// assert!("".parse::<Selector>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(String);

impl Selector {
    /// Every light on the account.
    pub fn all() -> Self {
        Selector("all".to_string())
    }

    /// A light by its serial number.
    pub fn id(id: &str) -> Self {
        Self::keyed("id", id)
    }

    /// Lights with this label.
    pub fn label(label: &str) -> Self {
        Self::keyed("label", label)
    }

    pub fn group_id(group_id: &str) -> Self {
        Self::keyed("group_id", group_id)
    }

    /// Lights in the group with this name.
    pub fn group(group: &str) -> Self {
        Self::keyed("group", group)
    }

    pub fn location_id(location_id: &str) -> Self {
        Self::keyed("location_id", location_id)
    }

    /// Lights in the location with this name.
    pub fn location(location: &str) -> Self {
        Self::keyed("location", location)
    }

    /// Lights that are part of a scene.
    pub fn scene_id(scene_id: &str) -> Self {
        Self::keyed("scene_id", scene_id)
    }

    /// Combine selectors; the API applies the operation to the union.
    pub fn and(&self, other: &Selector) -> Self {
        Selector(format!("{},{}", self.0, other.0))
    }

    fn keyed(key: &str, value: &str) -> Self {
        Selector(format!("{key}:{value}"))
    }
}

impl AsRef<str> for Selector {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        validate_selector(s)?;
        Ok(Selector(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_selectors() {
        assert_eq!(Selector::id("d073d5000001").as_ref(), "id:d073d5000001");
        assert_eq!(Selector::location("Home").as_ref(), "location:Home");
        assert_eq!(Selector::location_id("1").as_ref(), "location_id:1");
        assert_eq!(Selector::scene_id("abc").as_ref(), "scene_id:abc");
        assert_eq!(Selector::group("Upstairs").as_ref(), "group:Upstairs");
    }

    #[test]
    fn test_combined_selector() {
        let selector = Selector::label("Kitchen").and(&Selector::label("Hall"));
        assert_eq!(selector.as_ref(), "label:Kitchen,label:Hall");
    }

    #[test]
    fn test_parse_rejects_path_characters() {
        assert!(matches!(
            "all/state".parse::<Selector>(),
            Err(Error::InvalidSelector { .. })
        ));
        assert_eq!("all".parse::<Selector>().unwrap(), Selector::all());
    }
}
