//! Errors for this crate.

use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum InvalidBridgeUrl {
    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),

    #[error("Given URL does not end with \"/\": {0}")]
    TrailingSlash(String),
}

aliri_braid::from_infallible!(InvalidBridgeUrl);

/// Errors representing failed interactions with the Bridge server.
#[derive(thiserror::Error, Debug)]
pub enum BridgeError {
    /// Error response with a status and message from the Bridge server.
    #[error("({status:?} {reason:?}): {text}")]
    Error {
        status: StatusCode,
        reason: &'static str,
        text: String,
        source: reqwest::Error,
    },

    /// Error response without explanation from the server.
    #[error(transparent)]
    Raw(#[from] reqwest::Error),

    /// Error from reqwest middleware function.
    #[error(transparent)]
    Middleware(anyhow::Error),

    /// A model was sent to the server without a server-assigned identifier,
    /// e.g. updating a survey that was never created.
    #[error("missing server-assigned field: {0}")]
    MissingIdentifier(&'static str),
}

impl BridgeError {
    /// Status code of the server's error response, if this error came from one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BridgeError::Error { status, .. } => Some(*status),
            BridgeError::Raw(e) => e.status(),
            _ => None,
        }
    }
}

pub(crate) async fn check(res: reqwest::Response) -> Result<reqwest::Response, BridgeError> {
    match res.error_for_status_ref() {
        Ok(_) => Ok(res),
        Err(source) => {
            let status = res.status();
            let reason = status.canonical_reason().unwrap_or("unknown reason");
            let text = res.text().await.map_err(BridgeError::Raw)?;
            Err(BridgeError::Error {
                status,
                reason,
                text,
                source,
            })
        }
    }
}

impl From<reqwest_middleware::Error> for BridgeError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(e) => BridgeError::Middleware(e),
            reqwest_middleware::Error::Reqwest(e) => BridgeError::Raw(e),
        }
    }
}
