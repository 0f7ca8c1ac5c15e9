use crate::transport::{Response, TransportError};

/// All error types that can occur when talking to the LIFX cloud API.
///
/// Validation errors are raised locally before any request is sent. Transport
/// errors come from the HTTP layer and are carried unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The selector is empty or is not a selector string.
    ///
    /// See <https://api.developer.lifx.com/docs/selectors> for the syntax
    /// (`all`, `label:[value]`, `id:[value]`, `group_id:[value]`, ...).
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A power state (`on` or `off`) is required but was missing or empty.
    #[error("power state not defined; expected \"on\" or \"off\"")]
    MissingPowerState,

    /// A power state was given that is neither `on` nor `off`.
    #[error("invalid power state {0:?}; expected \"on\" or \"off\"")]
    InvalidPowerState(String),

    /// A transition time is negative, infinite or NaN.
    #[error("invalid duration {0}; expected a finite number of seconds >= 0")]
    InvalidDuration(f64),

    /// Failed to serialize a request payload to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize a response body.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// The transport failed or the API answered with a non-success status.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// Create a new invalid selector error
    pub fn invalid_selector(selector: &str, reason: &str) -> Self {
        Error::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error was raised locally, before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidSelector { .. }
                | Error::MissingPowerState
                | Error::InvalidPowerState(_)
                | Error::InvalidDuration(_)
        )
    }

    /// Whether this error came from the transport or the remote API.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// The HTTP status code of a failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        self.response().map(Response::status)
    }

    /// The full response of a non-success API answer, if there was one.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Transport(TransportError::Status(response)) => Some(response),
            _ => None,
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_local() {
        assert!(Error::MissingPowerState.is_validation());
        assert!(Error::invalid_selector("", "selector is empty").is_validation());
        assert!(!Error::MissingPowerState.is_transport());
        assert_eq!(Error::MissingPowerState.status(), None);
    }

    #[test]
    fn test_status_error_keeps_response() {
        let response = Response::new(401, Vec::new(), br#"{"error":"Invalid token"}"#.to_vec());
        let err = Error::from(TransportError::Status(response));

        assert!(err.is_transport());
        assert!(!err.is_validation());
        assert_eq!(err.status(), Some(401));
        assert_eq!(
            err.response().map(Response::text).as_deref(),
            Some(r#"{"error":"Invalid token"}"#)
        );
    }

    #[test]
    fn test_invalid_selector_message() {
        let err = Error::invalid_selector("lights/all", "selector contains '/'");
        assert_eq!(
            err.to_string(),
            "invalid selector \"lights/all\": selector contains '/'"
        );
    }
}
