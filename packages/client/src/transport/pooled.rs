//! Transport over hyper's pooled client

use std::fmt;

use futures::future::BoxFuture;
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use url::Url;

use super::{BoxError, Completion, RequestBody, ResponseBody, Transport, boxed_body};
use crate::config::ClientConfig;

/// Pooled HTTP/1.1 transport bound to one base address.
///
/// Plain HTTP only; supply your own [`Transport`] to reach a TLS endpoint.
#[derive(Clone)]
pub struct HyperTransport {
    client: Client<HttpConnector, RequestBody>,
    base_address: Option<Url>,
}

impl HyperTransport {
    /// Build a transport from client configuration.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_nodelay(config.tcp_nodelay);
        connector.set_connect_timeout(config.connect_timeout);

        let client = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build(connector);

        Self {
            client,
            base_address: config.base_address.clone(),
        }
    }
}

impl fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HyperTransport")
            .field("base_address", &self.base_address.as_ref().map(Url::as_str))
            .finish_non_exhaustive()
    }
}

impl Transport for HyperTransport {
    fn base_address(&self) -> Option<&Url> {
        self.base_address.as_ref()
    }

    fn send(
        &self,
        request: http::Request<RequestBody>,
        completion: Completion,
    ) -> BoxFuture<'_, Result<http::Response<ResponseBody>, BoxError>> {
        Box::pin(async move {
            let response: http::Response<hyper::body::Incoming> =
                self.client.request(request).await?;
            let (parts, incoming) = response.into_parts();

            let body = match completion {
                Completion::HeadersRead => boxed_body(incoming),
                Completion::ContentRead => {
                    let bytes = incoming.collect().await?.to_bytes();
                    boxed_body(Full::new(bytes))
                }
            };

            Ok(http::Response::from_parts(parts, body))
        })
    }
}
