use http::StatusCode;

use super::mapper::ApiError;
use super::types::Error;

impl Error {
    /// Returns true if the request was rejected locally, before any network activity.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidAssetName { .. }
                | Error::DuplicateAsset(_)
                | Error::NullValue { .. }
                | Error::NullCollection
                | Error::NullRequest
                | Error::InvalidArgument { .. }
                | Error::InvalidRequest { .. }
                | Error::MisconfiguredClient(_)
        )
    }

    /// Returns true if an operation was called on a request in the wrong state.
    #[must_use]
    pub fn is_protocol(&self) -> bool {
        matches!(self, Error::NotWebhookRequest(_))
    }

    /// Returns true if the remote service answered with a non-success status.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    /// Returns true if the caller's cancellation token was observed.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// Returns true if the transport failed to deliver the request or read the body.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Body(_))
    }

    /// The remote status code, if this is a remote error.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.api_error().map(ApiError::status)
    }

    /// The mapped remote error, if any.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(&**err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::AssetNameError;
    use crate::requests::RequestKind;

    #[test]
    fn validation_errors_are_not_remote() {
        let err = Error::InvalidAssetName {
            name: "a/b.css".into(),
            reason: AssetNameError::ContainsSlash,
        };
        assert!(err.is_validation());
        assert!(!err.is_remote());
        assert!(!err.is_cancelled());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn protocol_and_cancellation_are_distinct() {
        let not_webhook = Error::NotWebhookRequest(RequestKind::Html);
        assert!(not_webhook.is_protocol());
        assert!(!not_webhook.is_validation());

        assert!(Error::Cancelled.is_cancelled());
        assert!(!Error::Cancelled.is_remote());
    }

    #[test]
    fn display_names_the_rejected_asset() {
        let err = Error::InvalidAssetName {
            name: "noext".into(),
            reason: AssetNameError::MissingExtension,
        };
        let message = err.to_string();
        assert!(message.contains("\"noext\""));
        assert!(message.contains("no file extension"));
    }
}
