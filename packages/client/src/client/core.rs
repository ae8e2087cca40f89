//! Executor turning requests into documents

use std::fmt;
use std::sync::Arc;

use http::{HeaderMap, HeaderValue, header};
use tokio_util::sync::CancellationToken;
use url::Url;

use super::stats::{ClientStats, ClientStatsSnapshot};
use crate::config::{ClientConfig, ConfigValidator, DEFAULT_USER_AGENT, Validator};
use crate::error::{Error, Result, map_error};
use crate::http::headers::APPLICATION_PDF;
use crate::http::{ApiMessage, DocumentStream};
use crate::requests::{
    ApiRequest, HtmlRequest, IntoRequest, MergeOfficeRequest, MergeRequest, PdfConversionRequest,
    RequestContext, UrlRequest,
};
use crate::transport::{Completion, HyperTransport, ResponseBody, Transport};

/// Client for a conversion service at one fixed base address.
///
/// Cloning is cheap; clones share the transport and statistics.
#[derive(Clone)]
pub struct GotenbergClient {
    transport: Arc<dyn Transport>,
    base_address: Url,
    default_headers: HeaderMap,
    stats: Arc<ClientStats>,
}

impl GotenbergClient {
    /// Client over `transport` with the default user agent.
    ///
    /// # Errors
    ///
    /// Returns `MisconfiguredClient` if the transport has no usable base address.
    pub fn new<T>(transport: T) -> Result<Self>
    where
        T: Transport + 'static,
    {
        Self::from_shared(Arc::new(transport), DEFAULT_USER_AGENT)
    }

    /// Client over a shared transport sending `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns `MisconfiguredClient` if the transport has no usable base address
    /// or `user_agent` is not a valid header value.
    pub fn from_shared(transport: Arc<dyn Transport>, user_agent: &str) -> Result<Self> {
        let base_address = transport
            .base_address()
            .cloned()
            .ok_or_else(|| Error::MisconfiguredClient("transport has no base address".into()))?;
        ConfigValidator::validate_base_address(&base_address)?;
        ConfigValidator::validate_user_agent(user_agent)?;

        let mut default_headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(user_agent)
            .map_err(|e| Error::MisconfiguredClient(format!("invalid user agent: {e}")))?;
        default_headers.insert(header::USER_AGENT, user_agent);
        default_headers.insert(header::ACCEPT, HeaderValue::from_static(APPLICATION_PDF));

        tracing::debug!("Created conversion client for {}", base_address);
        Ok(Self {
            transport,
            base_address,
            default_headers,
            stats: Arc::new(ClientStats::new()),
        })
    }

    /// Client over the bundled pooled transport.
    ///
    /// # Errors
    ///
    /// Returns `MisconfiguredClient` if `config` does not validate.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Self::from_shared(Arc::new(HyperTransport::new(config)), &config.user_agent)
    }

    /// Client for the service at `address` with default settings.
    ///
    /// # Errors
    ///
    /// Returns `MisconfiguredClient` if `address` is not an http(s) URL.
    pub fn from_address(address: &str) -> Result<Self> {
        Self::from_config(&ClientConfig::new(address)?)
    }

    #[must_use]
    pub fn base_address(&self) -> &Url {
        &self.base_address
    }

    /// Headers sent with every request unless the request overrides them
    #[must_use]
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    #[must_use]
    pub fn stats(&self) -> ClientStatsSnapshot {
        self.stats.snapshot()
    }

    /// Render a remote page to PDF.
    ///
    /// # Errors
    ///
    /// See [`GotenbergClient::execute`].
    pub async fn url_to_pdf(
        &self,
        request: impl IntoRequest<Request = UrlRequest>,
        cancel: &CancellationToken,
    ) -> Result<DocumentStream> {
        self.execute(request, cancel).await
    }

    /// Render an HTML document to PDF.
    ///
    /// # Errors
    ///
    /// See [`GotenbergClient::execute`].
    pub async fn html_to_pdf(
        &self,
        request: impl IntoRequest<Request = HtmlRequest>,
        cancel: &CancellationToken,
    ) -> Result<DocumentStream> {
        self.execute(request, cancel).await
    }

    /// Merge PDFs into one document.
    ///
    /// # Errors
    ///
    /// See [`GotenbergClient::execute`].
    pub async fn merge_pdfs(
        &self,
        request: impl IntoRequest<Request = MergeRequest>,
        cancel: &CancellationToken,
    ) -> Result<DocumentStream> {
        self.execute(request, cancel).await
    }

    /// Convert office documents and merge them into one PDF.
    ///
    /// # Errors
    ///
    /// See [`GotenbergClient::execute`].
    pub async fn merge_office_docs(
        &self,
        request: impl IntoRequest<Request = MergeOfficeRequest>,
        cancel: &CancellationToken,
    ) -> Result<DocumentStream> {
        self.execute(request, cancel).await
    }

    /// Convert PDFs to an archival format.
    ///
    /// # Errors
    ///
    /// See [`GotenbergClient::execute`].
    pub async fn convert_pdf_documents(
        &self,
        request: impl IntoRequest<Request = PdfConversionRequest>,
        cancel: &CancellationToken,
    ) -> Result<DocumentStream> {
        self.execute(request, cancel).await
    }

    /// Send any request and hand back the produced document.
    ///
    /// # Errors
    ///
    /// - `NullRequest` when `request` is absent
    /// - validation errors from the request itself
    /// - `Cancelled` when `cancel` fires before the response is handed back
    /// - `Transport` when the exchange fails
    /// - `Api` when the service answers with a non-success status
    pub async fn execute<R>(&self, request: R, cancel: &CancellationToken) -> Result<DocumentStream>
    where
        R: IntoRequest,
    {
        let request = request.into_request().ok_or(Error::NullRequest)?;
        let context = request.context();
        let message = request.into_message()?;

        let response = self.send(message, &context, cancel).await?;
        if response.status().is_success() {
            self.stats.record_success();
            tracing::debug!(
                "{} request to {} succeeded with {}",
                context.kind,
                context.path,
                response.status()
            );
            return Ok(DocumentStream::new(response));
        }

        Err(self.reject(context, response, cancel).await)
    }

    /// Submit a webhook request; the document is delivered to the webhook
    /// and a successful response body is discarded unread.
    ///
    /// # Errors
    ///
    /// - `NullRequest` when `request` is absent
    /// - `NotWebhookRequest` when no webhook is configured; nothing is sent
    /// - validation, `Cancelled` and `Transport` errors as for [`GotenbergClient::execute`]
    /// - `Api` when the service refuses the submission
    pub async fn fire_webhook_and_forget<R>(
        &self,
        request: R,
        cancel: &CancellationToken,
    ) -> Result<()>
    where
        R: IntoRequest,
    {
        let request = request.into_request().ok_or(Error::NullRequest)?;
        if !request.is_webhook_request() {
            return Err(Error::NotWebhookRequest(request.kind()));
        }
        let context = request.context();
        let message = request.into_message()?;

        let response = self.send(message, &context, cancel).await?;
        self.stats.record_webhook();
        if !response.status().is_success() {
            return Err(self.reject(context, response, cancel).await);
        }
        self.stats.record_success();
        tracing::debug!(
            "{} webhook request to {} accepted with {}",
            context.kind,
            context.path,
            response.status()
        );
        Ok(())
    }

    /// Turn a non-success response into `Api`, unless `cancel` fires while
    /// the error body is read.
    async fn reject(
        &self,
        context: RequestContext,
        response: http::Response<ResponseBody>,
        cancel: &CancellationToken,
    ) -> Error {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                self.stats.record_cancelled();
                Error::Cancelled
            }
            api = map_error(context, response) => {
                self.stats.record_failure();
                tracing::warn!("{}", api);
                api.into()
            }
        }
    }

    async fn send(
        &self,
        message: ApiMessage,
        context: &RequestContext,
        cancel: &CancellationToken,
    ) -> Result<http::Response<ResponseBody>> {
        let request = message.into_http_request(&self.base_address, &self.default_headers)?;
        if cancel.is_cancelled() {
            self.stats.record_cancelled();
            return Err(Error::Cancelled);
        }

        self.stats.record_request();
        tracing::debug!(
            "Sending {} request to {} with assets {:?}",
            context.kind,
            request.uri(),
            context.asset_names
        );

        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                self.stats.record_cancelled();
                return Err(Error::Cancelled);
            }
            result = self.transport.send(request, Completion::HeadersRead) => {
                result.map_err(|e| {
                    self.stats.record_failure();
                    tracing::warn!("{} request to {} failed: {}", context.kind, context.path, e);
                    Error::transport(e)
                })?
            }
        };

        if cancel.is_cancelled() {
            drop(response);
            self.stats.record_cancelled();
            return Err(Error::Cancelled);
        }
        Ok(response)
    }
}

impl fmt::Debug for GotenbergClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GotenbergClient")
            .field("base_address", &self.base_address.as_str())
            .field("stats", &self.stats.snapshot())
            .finish_non_exhaustive()
    }
}
