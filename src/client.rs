//! The LIFX cloud API client.

use log::debug;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::errors::Error;
use crate::payload::{SceneActivation, StateChange, Toggle};
use crate::transport::{Headers, Response, Transport};
use crate::types::PowerState;
use crate::validate::{validate_duration, validate_power, validate_selector};

#[cfg(feature = "transport-reqwest")]
use crate::transport::ReqwestTransport;

type Result<T> = std::result::Result<T, Error>;

/// Client for the LIFX cloud HTTP API.
///
/// A `Lifx` holds one bearer token for its whole lifetime and sends every
/// request through its [`Transport`]. Each operation checks its parameters,
/// sends exactly one request, and returns the raw [`Response`] unchanged.
/// Failed requests come back as [`Error::Transport`] with the status and body
/// of the answer intact. Nothing is retried.
///
/// All operations take `&self`, so one client can serve many calls, including
/// concurrent ones.
///
/// # Example
///
/// ```no_run
/// use lifx_cloud_rs::{Lifx, PowerState, Selector, StateChange};
///
/// # async fn run() -> Result<(), lifx_cloud_rs::Error> {
/// let lifx = Lifx::new("my-token");
/// let response = lifx
///     .set_state(Selector::label("Kitchen"), &StateChange::from(PowerState::On))
///     .await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Lifx<T> {
    token: SecretString,
    transport: T,
}

#[cfg(feature = "transport-reqwest")]
impl Lifx<ReqwestTransport> {
    /// Create a client for the public LIFX API.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_transport(token, ReqwestTransport::new())
    }
}

impl<T: Transport> Lifx<T> {
    /// Create a client that sends its requests through `transport`.
    pub fn with_transport(token: impl Into<String>, transport: T) -> Self {
        Lifx {
            token: SecretString::from(token.into()),
            transport,
        }
    }

    /// The transport requests are sent through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET lights/{selector}`: list the lights matching `selector`.
    ///
    /// Decode the body as `Vec<`[`Light`](crate::Light)`>` if needed.
    pub async fn list_lights(&self, selector: impl AsRef<str>) -> Result<Response> {
        let selector = selector.as_ref();
        validate_selector(selector)?;

        self.get(&format!("lights/{selector}")).await
    }

    /// `PUT lights/{selector}/state`: change the state of the lights.
    ///
    /// The state change must carry a power state and a finite, non-negative
    /// duration.
    pub async fn set_state(
        &self,
        selector: impl AsRef<str>,
        state: &StateChange,
    ) -> Result<Response> {
        let selector = selector.as_ref();
        validate_selector(selector)?;
        validate_power(state.power.map(PowerState::as_str))?;
        validate_duration(state.duration)?;

        self.put(&format!("lights/{selector}/state"), state).await
    }

    /// `POST lights/{selector}/toggle`: turn lights that are on off, and the
    /// rest on.
    pub async fn toggle_power(
        &self,
        selector: impl AsRef<str>,
        toggle: &Toggle,
    ) -> Result<Response> {
        let selector = selector.as_ref();
        validate_selector(selector)?;
        validate_duration(toggle.duration)?;

        self.post(&format!("lights/{selector}/toggle"), toggle).await
    }

    /// Toggle power with the default 1 second transition.
    pub async fn toggle(&self, selector: impl AsRef<str>) -> Result<Response> {
        self.toggle_power(selector, &Toggle::new()).await
    }

    /// `GET scenes`: list the scenes of the account.
    ///
    /// Decode the body as `Vec<`[`Scene`](crate::Scene)`>` if needed.
    pub async fn list_scenes(&self) -> Result<Response> {
        self.get("scenes").await
    }

    /// `PUT scenes/{selector}/activate`: apply a scene.
    ///
    /// The selector names the scene, usually `scene_id:<uuid>`.
    pub async fn activate_scene(
        &self,
        selector: impl AsRef<str>,
        activation: &SceneActivation,
    ) -> Result<Response> {
        let selector = selector.as_ref();
        validate_selector(selector)?;
        validate_duration(activation.duration)?;

        self.put(&format!("scenes/{selector}/activate"), activation).await
    }

    /// Apply a scene with the default activation settings.
    pub async fn activate(&self, selector: impl AsRef<str>) -> Result<Response> {
        self.activate_scene(selector, &SceneActivation::new()).await
    }

    fn headers(&self, with_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert(
            "Authorization",
            &format!("Bearer {}", self.token.expose_secret()),
        );
        if with_body {
            headers.insert("Content-Type", "application/json");
        }
        headers
    }

    async fn get(&self, path: &str) -> Result<Response> {
        debug!("GET {path}");
        let response = self.transport.get(path, &self.headers(false)).await?;
        Ok(response)
    }

    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<Response> {
        let body = serde_json::to_value(body).map_err(Error::JsonDump)?;
        debug!("PUT {path} {body}");
        let response = self.transport.put(path, &body, &self.headers(true)).await?;
        Ok(response)
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<Response> {
        let body = serde_json::to_value(body).map_err(Error::JsonDump)?;
        debug!("POST {path} {body}");
        let response = self
            .transport
            .post(path, &body, &self.headers(true))
            .await?;
        Ok(response)
    }
}
