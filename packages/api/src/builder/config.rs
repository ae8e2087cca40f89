//! Config and webhook facets: settings sent as request headers

use gotenberg_client::requests::{RequestConfig, Webhook, WebhookMethod};
use gotenberg_client::{Error, Result};
use url::Url;

use crate::builder::behaviors::header_pair;
use crate::builder::dimensions::non_blank;

/// Parse an absolute http(s) URL.
pub(crate) fn web_url(name: &'static str, value: &str) -> Result<Url> {
    let url = Url::parse(value).map_err(|e| Error::InvalidArgument {
        name,
        reason: format!("{value:?}: {e}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidArgument {
            name,
            reason: format!("{url} is not an http or https url"),
        });
    }
    Ok(url)
}

/// Sets the output file name and trace id.
#[derive(Debug)]
pub struct ConfigBuilder<'a> {
    config: &'a mut RequestConfig,
    debug_enabled: bool,
}

impl<'a> ConfigBuilder<'a> {
    pub fn new(config: &'a mut RequestConfig) -> Self {
        Self {
            config,
            debug_enabled: false,
        }
    }

    #[must_use]
    pub(crate) fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// File name the service gives the produced document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a blank name.
    pub fn result_file_name(self, name: impl Into<String>) -> Result<Self> {
        let name = non_blank("result file name", name.into())?;
        if self.debug_enabled {
            log::debug!("Gotenberg builder: result file name {name}");
        }
        self.config.result_file_name = Some(name);
        Ok(self)
    }

    /// Correlation id the service writes to its logs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a blank id.
    pub fn trace(self, trace: impl Into<String>) -> Result<Self> {
        let trace = non_blank("trace", trace.into())?;
        if self.debug_enabled {
            log::debug!("Gotenberg builder: trace {trace}");
        }
        self.config.trace = Some(trace);
        Ok(self)
    }
}

/// Configures webhook delivery of the result.
#[derive(Debug)]
pub struct WebhookBuilder<'a> {
    webhook: &'a mut Webhook,
    debug_enabled: bool,
}

impl<'a> WebhookBuilder<'a> {
    /// Start a webhook delivering to `target_url`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `target_url` is an absolute http(s) URL.
    pub fn new(config: &'a mut RequestConfig, target_url: &str) -> Result<Self> {
        let target = web_url("webhook url", target_url)?;
        Ok(Self {
            webhook: config.webhook.insert(Webhook::new(target)),
            debug_enabled: false,
        })
    }

    #[must_use]
    pub(crate) fn with_debug(self, enabled: bool) -> Self {
        if enabled {
            log::debug!("Gotenberg builder: webhook {}", self.webhook.target_url);
        }
        Self {
            debug_enabled: enabled,
            ..self
        }
    }

    #[must_use]
    pub fn target_method(self, method: WebhookMethod) -> Self {
        self.webhook.target_method = method;
        self
    }

    /// Where the service reports a failed conversion.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `error_url` is an absolute http(s) URL.
    pub fn error_url(self, error_url: &str) -> Result<Self> {
        let url = web_url("webhook error url", error_url)?;
        if self.debug_enabled {
            log::debug!("Gotenberg builder: webhook error url {url}");
        }
        self.webhook.error_url = Some(url);
        Ok(self)
    }

    #[must_use]
    pub fn error_method(self, method: WebhookMethod) -> Self {
        self.webhook.error_method = method;
        self
    }

    /// Header the service adds to its callbacks.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a malformed header name or value.
    pub fn extra_http_header(self, name: &str, value: &str) -> Result<Self> {
        let (name, value) = header_pair(name, value)?;
        self.webhook.extra_http_headers.insert(name, value);
        Ok(self)
    }
}
