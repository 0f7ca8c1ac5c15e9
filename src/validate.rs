//! Parameter checks run before any request is sent.

use crate::errors::Error;
use crate::types::PowerState;

type Result<T> = std::result::Result<T, Error>;

const SELECTOR_HELP: &str =
    "expected 'all', 'label:[value]', 'id:[value]', 'group_id:[value]', etc.";

/// Check that a selector is a usable selector string.
///
/// A selector must not be empty and must stay a single path segment of the
/// request: `/`, `\`, `?`, `#`, `%` and control characters are rejected, as
/// are the dot segments `.` and `..`.
///
/// # Examples
///
/// ```
/// use lifx_cloud_rs::validate_selector;
///
/// assert!(validate_selector("all").is_ok());
/// assert!(validate_selector("group_id:123").is_ok());
/// assert!(validate_selector("").is_err());
/// assert!(validate_selector("all/state").is_err());
/// assert!(validate_selector("..").is_err());
/// ```
pub fn validate_selector(selector: &str) -> Result<()> {
    if selector.trim().is_empty() {
        return Err(Error::invalid_selector(
            selector,
            &format!("selector is empty; {SELECTOR_HELP}"),
        ));
    }

    if let Some(c) = selector
        .chars()
        .find(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_control())
    {
        return Err(Error::invalid_selector(
            selector,
            &format!("selector contains {c:?}; {SELECTOR_HELP}"),
        ));
    }

    if matches!(selector.trim(), "." | "..") {
        return Err(Error::invalid_selector(
            selector,
            &format!("selector is a dot segment; {SELECTOR_HELP}"),
        ));
    }

    Ok(())
}

/// Check that a transition time is a finite, non-negative number of seconds.
///
/// # Examples
///
/// ```
/// use lifx_cloud_rs::validate_duration;
///
/// assert!(validate_duration(2.5).is_ok());
/// assert!(validate_duration(f64::NAN).is_err());
/// assert!(validate_duration(-1.0).is_err());
/// ```
pub fn validate_duration(seconds: f64) -> Result<()> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDuration(seconds))
    }
}

/// Check that a power state was given and is `on` or `off`.
///
/// A missing value (`None`) and an empty string are both rejected with
/// [`Error::MissingPowerState`].
///
/// # Examples
///
/// ```
/// use lifx_cloud_rs::{PowerState, validate_power};
///
/// assert_eq!(validate_power(Some("on")).unwrap(), PowerState::On);
/// assert!(validate_power(Some("")).is_err());
/// assert!(validate_power(None).is_err());
/// ```
pub fn validate_power(power: Option<&str>) -> Result<PowerState> {
    let Some(power) = power else {
        return Err(Error::MissingPowerState);
    };

    let power = power.trim();
    if power.is_empty() {
        return Err(Error::MissingPowerState);
    }

    if power.eq_ignore_ascii_case("on") {
        Ok(PowerState::On)
    } else if power.eq_ignore_ascii_case("off") {
        Ok(PowerState::Off)
    } else {
        Err(Error::InvalidPowerState(power.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selectors() {
        for selector in [
            "all",
            "label:Kitchen",
            "label:Living Room",
            "id:d073d5000001",
            "group_id:123",
            "location:Home",
            "scene_id:abc-123",
            "my-scene",
            "label:Kitchen,label:Hall",
        ] {
            assert!(validate_selector(selector).is_ok(), "{selector}");
        }
    }

    #[test]
    fn test_empty_selector() {
        for selector in ["", " ", "\t"] {
            let err = validate_selector(selector).unwrap_err();
            assert!(matches!(err, Error::InvalidSelector { .. }), "{selector:?}");
        }
    }

    #[test]
    fn test_selector_with_path_characters() {
        for selector in ["all/state", "all?x=1", "label:#1"] {
            let err = validate_selector(selector).unwrap_err();
            assert!(matches!(err, Error::InvalidSelector { .. }), "{selector:?}");
        }
    }

    #[test]
    fn test_selector_must_stay_one_path_segment() {
        for selector in [
            ".",
            "..",
            " .. ",
            "all\\..\\..",
            "%2e%2e",
            "label:%2F",
            "\t..",
            "label:\nKitchen",
        ] {
            let err = validate_selector(selector).unwrap_err();
            assert!(matches!(err, Error::InvalidSelector { .. }), "{selector:?}");
        }
    }

    #[test]
    fn test_dots_inside_a_selector_are_fine() {
        for selector in ["label:..", "label:v1.2", "...", "label:Mr. Light"] {
            assert!(validate_selector(selector).is_ok(), "{selector:?}");
        }
    }

    #[test]
    fn test_duration_values() {
        for seconds in [0.0, 1.0, 3600.5] {
            assert!(validate_duration(seconds).is_ok(), "{seconds}");
        }
        for seconds in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.5] {
            let err = validate_duration(seconds).unwrap_err();
            assert!(matches!(err, Error::InvalidDuration(_)), "{seconds}");
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_missing_and_empty_power_are_distinct_checks() {
        assert_eq!(validate_power(None).unwrap_err(), Error::MissingPowerState);
        assert_eq!(validate_power(Some("")).unwrap_err(), Error::MissingPowerState);
        assert_eq!(validate_power(Some("  ")).unwrap_err(), Error::MissingPowerState);
    }

    #[test]
    fn test_power_values() {
        assert_eq!(validate_power(Some("on")).unwrap(), PowerState::On);
        assert_eq!(validate_power(Some("OFF")).unwrap(), PowerState::Off);
        assert_eq!(
            validate_power(Some("dim")).unwrap_err(),
            Error::InvalidPowerState("dim".to_string())
        );
    }
}
