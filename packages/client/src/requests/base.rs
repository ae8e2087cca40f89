//! State shared by every request: assets and cross-cutting configuration

use std::collections::BTreeMap;
use std::fmt;

use http::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use super::RequestKind;
use crate::assets::AssetDictionary;
use crate::error::{Error, Result};
use crate::http::headers;

/// HTTP method the service uses to call a webhook back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WebhookMethod {
    #[default]
    Post,
    Put,
    Patch,
}

impl WebhookMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WebhookMethod::Post => "POST",
            WebhookMethod::Put => "PUT",
            WebhookMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for WebhookMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the service delivers the result of a fire-and-forget request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webhook {
    /// Receives the produced document
    pub target_url: Url,
    pub target_method: WebhookMethod,
    /// Receives the failure report; required by the service
    pub error_url: Option<Url>,
    pub error_method: WebhookMethod,
    /// Extra headers the service sends along with each callback
    pub extra_http_headers: BTreeMap<String, String>,
}

impl Webhook {
    #[must_use]
    pub fn new(target_url: Url) -> Self {
        Self {
            target_url,
            target_method: WebhookMethod::default(),
            error_url: None,
            error_method: WebhookMethod::default(),
            extra_http_headers: BTreeMap::new(),
        }
    }
}

/// Cross-cutting request settings sent as headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    /// File name the service gives the produced document
    pub result_file_name: Option<String>,
    /// Correlation id echoed in the service's logs
    pub trace: Option<String>,
    pub webhook: Option<Webhook>,
}

impl RequestConfig {
    pub(crate) fn validate(&self, kind: RequestKind) -> Result<()> {
        if let Some(webhook) = &self.webhook
            && webhook.error_url.is_none()
        {
            return Err(Error::invalid_request(
                kind,
                "webhook requests need an error callback url",
            ));
        }
        Ok(())
    }

    pub(crate) fn apply_headers(&self, map: &mut HeaderMap) -> Result<()> {
        if let Some(name) = &self.result_file_name {
            insert(map, headers::OUTPUT_FILENAME, name)?;
        }
        if let Some(trace) = &self.trace {
            insert(map, headers::TRACE, trace)?;
        }
        if let Some(webhook) = &self.webhook {
            insert(map, headers::WEBHOOK_URL, webhook.target_url.as_str())?;
            insert(map, headers::WEBHOOK_METHOD, webhook.target_method.as_str())?;
            if let Some(error_url) = &webhook.error_url {
                insert(map, headers::WEBHOOK_ERROR_URL, error_url.as_str())?;
                insert(map, headers::WEBHOOK_ERROR_METHOD, webhook.error_method.as_str())?;
            }
            if !webhook.extra_http_headers.is_empty() {
                let json = serde_json::to_string(&webhook.extra_http_headers)
                    .map_err(|e| Error::invalid_argument("webhook extra headers", e.to_string()))?;
                insert(map, headers::WEBHOOK_EXTRA_HTTP_HEADERS, &json)?;
            }
        }
        Ok(())
    }
}

fn insert(map: &mut HeaderMap, name: &'static str, value: &str) -> Result<()> {
    let value = HeaderValue::from_str(value)
        .map_err(|e| Error::invalid_argument(name, format!("{value:?} is not a valid header value: {e}")))?;
    map.insert(HeaderName::from_static(name), value);
    Ok(())
}

/// Assets and configuration every request carries.
#[derive(Debug, Default)]
pub struct RequestBase {
    pub assets: AssetDictionary,
    pub config: RequestConfig,
}

/// Access to the [`RequestBase`] embedded in a request.
pub trait HasRequestBase {
    fn base(&self) -> &RequestBase;

    fn base_mut(&mut self) -> &mut RequestBase;
}

macro_rules! impl_has_request_base {
    ($($request:ty),+ $(,)?) => {
        $(
            impl $crate::requests::HasRequestBase for $request {
                fn base(&self) -> &$crate::requests::RequestBase {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut $crate::requests::RequestBase {
                    &mut self.base
                }
            }
        )+
    };
}

pub(crate) use impl_has_request_base;
