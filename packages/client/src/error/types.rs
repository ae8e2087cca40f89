use std::fmt;

use super::BoxError;
use super::mapper::ApiError;
use crate::requests::RequestKind;

/// A Result alias where the Err case is `gotenberg_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Why an asset name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetNameError {
    /// The name is the empty string
    Empty,
    /// The name contains a path separator
    ContainsSlash,
    /// The final segment has no `.ext` component
    MissingExtension,
}

impl fmt::Display for AssetNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetNameError::Empty => f.write_str("name is empty"),
            AssetNameError::ContainsSlash => f.write_str("name must not contain a path separator"),
            AssetNameError::MissingExtension => f.write_str("name has no file extension"),
        }
    }
}

/// Every failure the client can produce.
///
/// Validation variants are raised synchronously before any network activity.
/// `Api` carries a remote rejection, `Cancelled` a cooperative cancellation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid asset name {name:?}: {reason}; asset names must be relative file names with extensions")]
    InvalidAssetName { name: String, reason: AssetNameError },

    #[error("asset {0:?} was already added to this request")]
    DuplicateAsset(String),

    #[error("no content supplied for {name:?}")]
    NullValue { name: String },

    #[error("asset collection is absent")]
    NullCollection,

    #[error("request is absent")]
    NullRequest,

    #[error("invalid value for {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("invalid {kind} request: {reason}")]
    InvalidRequest { kind: RequestKind, reason: String },

    #[error("client is misconfigured: {0}")]
    MisconfiguredClient(String),

    #[error("{0} request has no webhook configured; only call fire_webhook_and_forget for webhook requests")]
    NotWebhookRequest(RequestKind),

    #[error(transparent)]
    Api(Box<ApiError>),

    #[error("operation cancelled")]
    Cancelled,

    #[error("error sending request")]
    Transport(#[source] BoxError),

    #[error("request or response body error")]
    Body(#[source] BoxError),
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_request(kind: RequestKind, reason: impl Into<String>) -> Self {
        Error::InvalidRequest {
            kind,
            reason: reason.into(),
        }
    }

    pub(crate) fn transport<E: Into<BoxError>>(e: E) -> Self {
        Error::Transport(e.into())
    }

    pub(crate) fn body<E: Into<BoxError>>(e: E) -> Self {
        Error::Body(e.into())
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(Box::new(err))
    }
}
