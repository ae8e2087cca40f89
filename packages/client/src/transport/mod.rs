//! Transport seam between the executor and the network
//!
//! The executor only needs a base address and a way to send one prepared
//! request and get back a response whose body can be read lazily. Anything
//! implementing [`Transport`] can be handed to the client; [`HyperTransport`]
//! is the bundled implementation.

mod pooled;

use bytes::Bytes;
use futures::future::BoxFuture;
use http_body::Body;
use http_body_util::BodyExt;
use http_body_util::combinators::UnsyncBoxBody;
use url::Url;

pub use pooled::HyperTransport;
pub use crate::error::BoxError;

/// Body type of outgoing requests
pub type RequestBody = UnsyncBoxBody<Bytes, BoxError>;

/// Body type of incoming responses
pub type ResponseBody = UnsyncBoxBody<Bytes, BoxError>;

/// Box any byte body into the transport's body type.
pub fn boxed_body<B>(body: B) -> UnsyncBoxBody<Bytes, BoxError>
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    body.map_err(Into::into).boxed_unsync()
}

/// When `send` completes relative to the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Completion {
    /// Return as soon as the status line and headers are read; the body streams lazily
    #[default]
    HeadersRead,
    /// Buffer the whole body before returning
    ContentRead,
}

/// A handle able to deliver prepared HTTP requests.
///
/// Implementations must be safe for concurrent use by independent requests.
/// Dropping the future returned by `send` must abandon the exchange.
pub trait Transport: Send + Sync {
    /// Address every request path is resolved against
    fn base_address(&self) -> Option<&Url>;

    /// Send one request with an absolute URI.
    fn send(
        &self,
        request: http::Request<RequestBody>,
        completion: Completion,
    ) -> BoxFuture<'_, Result<http::Response<ResponseBody>, BoxError>>;
}
