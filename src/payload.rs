//! Request bodies for the state, toggle and scene endpoints.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::types::{Brightness, Color, Infrared, PowerState};

const DEFAULT_DURATION: f64 = 1.0;

/// A state change to send to `PUT lights/{selector}/state`.
///
/// Unset attributes are left out of the request body, so the lights keep
/// their current value for them. `duration` defaults to 1 second and `fast`
/// to `false`.
///
/// # Creating State Changes
///
/// 1. **From a single attribute** using the [`From`] trait:
///    ```
///    use lifx_cloud_rs::{PowerState, StateChange};
///    let change = StateChange::from(PowerState::On);
///    ```
///
/// 2. **Builder pattern** for combining multiple attributes:
///    ```
///    use lifx_cloud_rs::{Brightness, Color, PowerState, StateChange};
///    let mut change = StateChange::new();
///    change.power(PowerState::On);
///    change.brightness(&Brightness::create(0.8).unwrap());
///    change.color(&Color::named("orange"));
///    ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    pub(crate) power: Option<PowerState>,
    pub(crate) color: Option<Color>,
    pub(crate) brightness: Option<Brightness>,
    pub(crate) duration: f64,
    pub(crate) infrared: Option<Infrared>,
    pub(crate) fast: bool,
}

impl Default for StateChange {
    fn default() -> Self {
        StateChange {
            power: None,
            color: None,
            brightness: None,
            duration: DEFAULT_DURATION,
            infrared: None,
            fast: false,
        }
    }
}

impl StateChange {
    /// Create a new state change with no attributes set.
    ///
    /// A power state must be set before it can be sent.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx_cloud_rs::StateChange;
    ///
    /// let change = StateChange::new();
    /// assert_eq!(change.get_power(), None);
    /// assert_eq!(change.get_duration(), 1.0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn power(&mut self, power: PowerState) {
        self.power = Some(power);
    }

    pub fn color(&mut self, color: &Color) {
        self.color = Some(color.clone());
    }

    pub fn brightness(&mut self, brightness: &Brightness) {
        self.brightness = Some(*brightness);
    }

    /// Set the transition time in seconds.
    ///
    /// Negative and non-finite values are refused by the client with
    /// [`Error::InvalidDuration`](crate::Error::InvalidDuration).
    pub fn duration(&mut self, seconds: f64) {
        self.duration = seconds;
    }

    pub fn infrared(&mut self, infrared: &Infrared) {
        self.infrared = Some(*infrared);
    }

    /// Skip the state check and answer without waiting for the lights.
    ///
    /// The API then replies `202 Accepted` with an empty body.
    pub fn fast(&mut self, fast: bool) {
        self.fast = fast;
    }

    pub fn get_power(&self) -> Option<PowerState> {
        self.power
    }

    pub fn get_duration(&self) -> f64 {
        self.duration
    }
}

impl From<PowerState> for StateChange {
    fn from(power: PowerState) -> Self {
        let mut change = StateChange::new();
        change.power(power);
        change
    }
}

impl From<&Color> for StateChange {
    fn from(color: &Color) -> Self {
        let mut change = StateChange::new();
        change.color(color);
        change
    }
}

impl From<&Brightness> for StateChange {
    fn from(brightness: &Brightness) -> Self {
        let mut change = StateChange::new();
        change.brightness(brightness);
        change
    }
}

/// Body of `POST lights/{selector}/toggle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toggle {
    pub(crate) duration: f64,
}

impl Default for Toggle {
    fn default() -> Self {
        Toggle {
            duration: DEFAULT_DURATION,
        }
    }
}

impl Toggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle with a transition time in seconds.
    ///
    /// Negative and non-finite values are refused by the client with
    /// [`Error::InvalidDuration`](crate::Error::InvalidDuration).
    pub fn with_duration(seconds: f64) -> Self {
        Toggle { duration: seconds }
    }

    pub fn get_duration(&self) -> f64 {
        self.duration
    }
}

/// A light property that scene activation can leave untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SceneProperty {
    Power,
    Infrared,
    Duration,
    Intensity,
    Hue,
    Saturation,
    Brightness,
    Kelvin,
}

/// Attributes applied on top of every light state of an activated scene.
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateOverrides {
    pub(crate) power: Option<PowerState>,
    pub(crate) color: Option<Color>,
    pub(crate) brightness: Option<Brightness>,
    pub(crate) infrared: Option<Infrared>,
}

impl StateOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn power(&mut self, power: PowerState) {
        self.power = Some(power);
    }

    pub fn color(&mut self, color: &Color) {
        self.color = Some(color.clone());
    }

    pub fn brightness(&mut self, brightness: &Brightness) {
        self.brightness = Some(*brightness);
    }

    pub fn infrared(&mut self, infrared: &Infrared) {
        self.infrared = Some(*infrared);
    }

    /// Check if no override is set.
    pub fn is_empty(&self) -> bool {
        self.power.is_none()
            && self.color.is_none()
            && self.brightness.is_none()
            && self.infrared.is_none()
    }
}

/// Body of `PUT scenes/{selector}/activate`.
///
/// # Examples
///
/// ```
/// use lifx_cloud_rs::{SceneActivation, SceneProperty};
///
/// let mut activation = SceneActivation::new();
/// activation.ignore(SceneProperty::Power);
/// activation.duration(5.0);
/// assert_eq!(activation.get_ignore(), &[SceneProperty::Power]);
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneActivation {
    pub(crate) ignore: Vec<SceneProperty>,
    pub(crate) duration: f64,
    pub(crate) overrides: Option<StateOverrides>,
    pub(crate) fast: bool,
}

impl Default for SceneActivation {
    fn default() -> Self {
        SceneActivation {
            ignore: Vec::new(),
            duration: DEFAULT_DURATION,
            overrides: None,
            fast: false,
        }
    }
}

impl SceneActivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave a property untouched when applying the scene.
    pub fn ignore(&mut self, property: SceneProperty) {
        if !self.ignore.contains(&property) {
            self.ignore.push(property);
        }
    }

    /// Set the transition time in seconds.
    ///
    /// Negative and non-finite values are refused by the client with
    /// [`Error::InvalidDuration`](crate::Error::InvalidDuration).
    pub fn duration(&mut self, seconds: f64) {
        self.duration = seconds;
    }

    /// Apply overrides to every state of the scene. Empty overrides are dropped.
    pub fn overrides(&mut self, overrides: &StateOverrides) {
        self.overrides = if overrides.is_empty() {
            None
        } else {
            Some(overrides.clone())
        };
    }

    pub fn fast(&mut self, fast: bool) {
        self.fast = fast;
    }

    pub fn get_ignore(&self) -> &[SceneProperty] {
        &self.ignore
    }

    pub fn get_duration(&self) -> f64 {
        self.duration
    }
}
