//! Typed views of LIFX API response bodies.
//!
//! The client hands back raw [`Response`](crate::Response)s; these types are
//! for callers that want to decode them with [`Response::json`](crate::Response::json).

use serde::{Deserialize, Serialize};

use crate::types::PowerState;

/// A light as returned by `GET lights/{selector}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub id: String,
    #[serde(default)]
    pub uuid: Option<String>,
    pub label: String,
    pub connected: bool,
    pub power: PowerState,
    pub color: Hsbk,
    pub brightness: f64,
    #[serde(default)]
    pub group: Option<Group>,
    #[serde(default)]
    pub location: Option<Group>,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub last_seen: Option<String>,
    #[serde(default)]
    pub seconds_since_seen: Option<f64>,
}

/// Hue, saturation and kelvin of a light's color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsbk {
    #[serde(default)]
    pub hue: f64,
    #[serde(default)]
    pub saturation: f64,
    #[serde(default)]
    pub kelvin: u16,
}

/// A group or location a light belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub capabilities: Capabilities,
}

/// Feature flags of a light product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub has_color: bool,
    pub has_variable_color_temp: bool,
    pub has_ir: bool,
    pub has_chain: bool,
    pub has_matrix: bool,
    pub has_multizone: bool,
}

/// A scene as returned by `GET scenes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub states: Vec<SceneState>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

/// The state a scene applies to one selector.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneState {
    pub selector: String,
    #[serde(default)]
    pub power: Option<PowerState>,
    #[serde(default)]
    pub brightness: Option<f64>,
    #[serde(default)]
    pub color: Option<Hsbk>,
}

/// Per-light outcome of a state, toggle or scene call (`207 Multi-Status`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResults {
    pub results: Vec<ActionResult>,
}

impl ActionResults {
    /// Check if every light reported `ok`.
    pub fn all_ok(&self) -> bool {
        self.results.iter().all(|r| r.status == ActionStatus::Ok)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    pub status: ActionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Ok,
    TimedOut,
    Offline,
    #[serde(other)]
    Unknown,
}

/// Body of an error answer from the API, e.g. `{"error": "Invalid token"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_light() {
        let body = json!([{
            "id": "d3b2f2d97452",
            "uuid": "8fa5f072-af97-44ed-ae54-e70fd7bd9d20",
            "label": "Left Lamp",
            "connected": true,
            "power": "on",
            "color": {"hue": 250.0, "saturation": 0.5, "kelvin": 3500},
            "brightness": 0.5,
            "group": {"id": "1c8de82b81f445e7cfaafae49b259c71", "name": "Lounge"},
            "location": {"id": "1d6fe8ef0fde4c6d77b0012dc736662c", "name": "Home"},
            "last_seen": "2015-03-02T08:53:02.867+00:00",
            "seconds_since_seen": 0.002869418,
            "product": {
                "name": "LIFX Original 1000",
                "identifier": "lifx_original_1000",
                "company": "LIFX",
                "capabilities": {
                    "has_color": true,
                    "has_variable_color_temp": true,
                    "has_ir": false,
                    "has_multizone": false
                }
            }
        }]);

        let lights: Vec<Light> = serde_json::from_value(body).unwrap();
        assert_eq!(lights.len(), 1);

        let light = &lights[0];
        assert_eq!(light.label, "Left Lamp");
        assert_eq!(light.power, PowerState::On);
        assert_eq!(light.color.kelvin, 3500);
        assert_eq!(light.group.as_ref().unwrap().name, "Lounge");

        let product = light.product.as_ref().unwrap();
        assert!(product.capabilities.has_color);
        assert!(!product.capabilities.has_chain);
    }

    #[test]
    fn test_decode_scene() {
        let body = json!([{
            "uuid": "5c6a9b6d-f0f4-4d4a-9f43-4f0f1a1e8b8e",
            "name": "Evening",
            "account": {"uuid": "8fa5f072-af97-44ed-ae54-e70fd7bd9d20"},
            "states": [
                {"selector": "id:d3b2f2d97452", "power": "on", "brightness": 0.4,
                 "color": {"hue": 30.0, "saturation": 0.8, "kelvin": 2700}},
                {"selector": "id:d073d5000002", "power": "off"}
            ],
            "created_at": 1439344720,
            "updated_at": 1439344720
        }]);

        let scenes: Vec<Scene> = serde_json::from_value(body).unwrap();
        assert_eq!(scenes[0].name, "Evening");
        assert_eq!(scenes[0].states.len(), 2);
        assert_eq!(scenes[0].states[1].power, Some(PowerState::Off));
        assert_eq!(scenes[0].states[1].color, None);
    }

    #[test]
    fn test_decode_action_results() {
        let body = json!({"results": [
            {"id": "d3b2f2d97452", "label": "Left Lamp", "status": "ok"},
            {"id": "d073d5000002", "label": "Hall", "status": "timed_out"},
            {"id": "d073d5000003", "status": "rebooting"}
        ]});

        let results: ActionResults = serde_json::from_value(body).unwrap();
        assert!(!results.all_ok());
        assert_eq!(results.results[1].status, ActionStatus::TimedOut);
        assert_eq!(results.results[2].status, ActionStatus::Unknown);
        assert_eq!(results.results[2].label, None);
    }
}
