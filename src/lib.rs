//! # lifx_cloud_rs
//!
//! An async Rust client for the [LIFX cloud HTTP API](https://api.developer.lifx.com/).
//!
//! The client is a thin layer over the REST API: every operation checks its
//! parameters, sends one request with your bearer token, and hands back the raw
//! [`Response`], or the transport's error exactly as it happened. There are no
//! retries, no caching and no hidden state besides the token.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lifx_cloud_rs::{Brightness, Color, Light, Lifx, PowerState, Selector, StateChange};
//!
//! async fn control_lights() -> Result<(), Box<dyn std::error::Error>> {
//!     let lifx = Lifx::new("your-token");
//!
//!     // List every light on the account
//!     let lights: Vec<Light> = lifx.list_lights(Selector::all()).await?.json()?;
//!
//!     // Turn the kitchen on, in blue, at half brightness
//!     let mut change = StateChange::from(PowerState::On);
//!     change.color(&Color::named("blue"));
//!     change.brightness(&Brightness::create(0.5).unwrap());
//!     lifx.set_state(Selector::label("Kitchen"), &change).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Operations
//!
//! | Method | Request |
//! |---|---|
//! | [`Lifx::list_lights`] | `GET lights/{selector}` |
//! | [`Lifx::set_state`] | `PUT lights/{selector}/state` |
//! | [`Lifx::toggle_power`] | `POST lights/{selector}/toggle` |
//! | [`Lifx::list_scenes`] | `GET scenes` |
//! | [`Lifx::activate_scene`] | `PUT scenes/{selector}/activate` |
//!
//! ## Errors
//!
//! Bad parameters fail with a validation [`Error`] before anything is sent
//! ([`Error::is_validation`]). Network failures and non-success answers come
//! back as [`Error::Transport`], with the status, headers and body of the
//! answer kept in the [`Response`] ([`Error::response`]).
//!
//! ## Transports
//!
//! Requests go through a [`Transport`]. The default one uses reqwest; bring
//! your own with [`Lifx::with_transport`].
//!
//! ## Feature Flags
//!
//! - `transport-reqwest` (default): enable [`ReqwestTransport`] and [`Lifx::new`]

mod client;
mod errors;
pub mod models;
mod payload;
pub mod transport;
mod types;
mod validate;

// Re-export public API
pub use client::Lifx;
pub use errors::Error;
pub use models::{
    ActionResult, ActionResults, ActionStatus, ApiErrorBody, Capabilities, Group, Hsbk, Light,
    Product, Scene, SceneState,
};
pub use payload::{SceneActivation, SceneProperty, StateChange, StateOverrides, Toggle};
#[cfg(feature = "transport-reqwest")]
pub use transport::ReqwestTransport;
pub use transport::{DEFAULT_BASE_URL, Headers, Response, Transport, TransportError};
pub use types::{Brightness, Color, Infrared, PowerState, Selector};
pub use validate::{validate_duration, validate_power, validate_selector};
