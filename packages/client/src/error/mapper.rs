//! Mapping of non-success responses into [`ApiError`]
//!
//! The mapper never fails: a body that cannot be read degrades to
//! [`ErrorBody::Unavailable`] so the remote status is never masked.

use std::fmt;

use bytes::Bytes;
use http::StatusCode;
use http_body_util::BodyExt;

use crate::requests::RequestContext;
use crate::transport::ResponseBody;

/// Longest text body echoed by `Display` before truncation
const DISPLAY_BODY_LIMIT: usize = 512;

/// Diagnostic payload returned by the service alongside a failure status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// Body decoded as UTF-8
    Text(String),
    /// Body that is not valid UTF-8, kept verbatim
    Binary(Bytes),
    /// The body could not be read; carries the read failure
    Unavailable(String),
}

impl ErrorBody {
    /// Decode bytes as text, keeping them raw when they are not UTF-8.
    #[must_use]
    pub fn from_bytes(bytes: Bytes) -> Self {
        match std::str::from_utf8(&bytes) {
            Ok(text) => ErrorBody::Text(text.to_owned()),
            Err(_) => ErrorBody::Binary(bytes),
        }
    }

    /// The body as text, when it decoded.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ErrorBody::Text(text) => Some(text),
            ErrorBody::Binary(_) | ErrorBody::Unavailable(_) => None,
        }
    }

    /// The raw body bytes, when the body was read.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ErrorBody::Text(text) => Some(text.as_bytes()),
            ErrorBody::Binary(bytes) => Some(bytes),
            ErrorBody::Unavailable(_) => None,
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorBody::Text(text) if text.len() > DISPLAY_BODY_LIMIT => {
                let cut = (0..=DISPLAY_BODY_LIMIT)
                    .rev()
                    .find(|i| text.is_char_boundary(*i))
                    .unwrap_or(0);
                write!(f, "{}...", &text[..cut])
            }
            ErrorBody::Text(text) => f.write_str(text),
            ErrorBody::Binary(bytes) => write!(f, "<{} bytes of binary content>", bytes.len()),
            ErrorBody::Unavailable(reason) => write!(f, "<body unavailable: {reason}>"),
        }
    }
}

/// A non-success answer from the conversion service.
///
/// Built only by [`map_error`]. Carries the status, the diagnostic body and
/// enough of the originating request to act on the failure.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
    context: RequestContext,
}

impl ApiError {
    /// HTTP status returned by the service
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Diagnostic body returned by the service
    #[must_use]
    pub fn body(&self) -> &ErrorBody {
        &self.body
    }

    /// The request the service rejected
    #[must_use]
    pub fn context(&self) -> &RequestContext {
        &self.context
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.status.is_client_error() {
            "conversion service rejected"
        } else {
            "conversion service failed"
        };
        write!(
            f,
            "{prefix} {} request to {} ({})",
            self.context.kind, self.context.path, self.status
        )?;
        if !self.context.asset_names.is_empty() {
            write!(f, " with assets [{}]", self.context.asset_names.join(", "))?;
        }
        if let Some(trace) = &self.context.trace {
            write!(f, " trace {trace}")?;
        }
        write!(f, ": {}", self.body)
    }
}

impl std::error::Error for ApiError {}

/// Turn a non-success response into an [`ApiError`].
///
/// Consumes the whole response body, which also releases the connection.
pub async fn map_error(context: RequestContext, response: http::Response<ResponseBody>) -> ApiError {
    let status = response.status();
    let body = match response.into_body().collect().await {
        Ok(collected) => ErrorBody::from_bytes(collected.to_bytes()),
        Err(e) => {
            tracing::warn!(
                "Could not read error body of {} response for {} request: {}",
                status,
                context.kind,
                e
            );
            ErrorBody::Unavailable(e.to_string())
        }
    };

    ApiError {
        status,
        body,
        context,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::RequestKind;
    use crate::transport::{BoxError, boxed_body};
    use http_body_util::{Full, StreamBody};

    fn context() -> RequestContext {
        RequestContext {
            kind: RequestKind::Html,
            path: RequestKind::Html.path(),
            asset_names: vec!["style.css".to_string()],
            trace: Some("trace-1".to_string()),
        }
    }

    fn response(status: u16, body: ResponseBody) -> http::Response<ResponseBody> {
        let mut response = http::Response::new(body);
        *response.status_mut() = StatusCode::from_u16(status).unwrap();
        response
    }

    #[tokio::test]
    async fn text_body_is_captured() {
        let body = boxed_body(Full::new(Bytes::from_static(b"boom")));
        let err = map_error(context(), response(500, body)).await;

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().as_text(), Some("boom"));
        let message = err.to_string();
        assert!(message.contains("failed html request"));
        assert!(message.contains("style.css"));
        assert!(message.contains("trace-1"));
    }

    #[tokio::test]
    async fn binary_body_falls_back_to_raw_bytes() {
        let raw = Bytes::from_static(&[0xff, 0xfe, 0x00]);
        let body = boxed_body(Full::new(raw.clone()));
        let err = map_error(context(), response(400, body)).await;

        assert_eq!(err.body(), &ErrorBody::Binary(raw));
        assert!(err.to_string().starts_with("conversion service rejected"));
    }

    #[tokio::test]
    async fn unreadable_body_degrades_to_placeholder() {
        let frames = futures::stream::iter(vec![Err::<http_body::Frame<Bytes>, BoxError>(
            "connection reset".into(),
        )]);
        let body = boxed_body(StreamBody::new(frames));
        let err = map_error(context(), response(503, body)).await;

        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(matches!(err.body(), ErrorBody::Unavailable(reason) if reason.contains("connection reset")));
    }

    #[test]
    fn long_text_is_truncated_for_display() {
        let body = ErrorBody::Text("x".repeat(DISPLAY_BODY_LIMIT + 10));
        let shown = body.to_string();
        assert_eq!(shown.len(), DISPLAY_BODY_LIMIT + 3);
        assert!(shown.ends_with("..."));
    }
}
