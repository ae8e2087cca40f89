//! Conversion request family
//!
//! One record per service route. Every record embeds a [`RequestBase`]
//! (assets plus cross-cutting config) and implements [`ApiRequest`], the
//! capability of turning itself into a wire message.

mod base;
mod chromium;
mod dimensions;
mod document;
pub mod fields;
mod html;
mod merge;
mod merge_office;
mod pdf;
mod pdf_conversion;
mod url_request;

use std::fmt;

use serde::Serialize;

pub use base::{HasRequestBase, RequestBase, RequestConfig, Webhook, WebhookMethod};
pub use chromium::{ChromiumBehaviors, HasChromiumOptions, MediaType};
pub use dimensions::{Dimensions, PaperSize};
pub use document::DocumentContent;
pub use html::HtmlRequest;
pub use merge::MergeRequest;
pub use merge_office::MergeOfficeRequest;
pub use pdf::{HasPdfOutput, OfficeOptions, PdfFormat, PdfOutput};
pub use pdf_conversion::PdfConversionRequest;
pub use url_request::UrlRequest;

use crate::error::Result;
use crate::http::ApiMessage;

/// Which service operation a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestKind {
    Url,
    Html,
    Merge,
    MergeOffice,
    PdfConversion,
}

impl RequestKind {
    /// Route of the operation, relative to the service base address
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            RequestKind::Url => "/forms/chromium/convert/url",
            RequestKind::Html => "/forms/chromium/convert/html",
            RequestKind::Merge => "/forms/pdfengines/merge",
            RequestKind::MergeOffice => "/forms/libreoffice/convert",
            RequestKind::PdfConversion => "/forms/pdfengines/convert",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::Url => "url",
            RequestKind::Html => "html",
            RequestKind::Merge => "merge",
            RequestKind::MergeOffice => "merge-office",
            RequestKind::PdfConversion => "pdf-conversion",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of a request kept for diagnostics once it has been sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestContext {
    pub kind: RequestKind,
    pub path: &'static str,
    pub asset_names: Vec<String>,
    pub trace: Option<String>,
}

/// A request the client can execute.
///
/// `validate` holds the whole-request shape checks the builders leave out;
/// `into_message` runs it before encoding.
pub trait ApiRequest: HasRequestBase + Send {
    /// Operation this request targets
    fn kind(&self) -> RequestKind;

    /// Check cross-field consistency of the finished request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` or `DuplicateAsset` describing the first problem found.
    fn validate(&self) -> Result<()>;

    /// Validate and encode into a wire message.
    ///
    /// # Errors
    ///
    /// Propagates `validate` failures and header encoding failures.
    fn into_message(self) -> Result<ApiMessage>;

    /// Whether the result is delivered to a webhook instead of the response
    fn is_webhook_request(&self) -> bool {
        self.base().config.webhook.is_some()
    }

    /// Diagnostic snapshot of this request
    fn context(&self) -> RequestContext {
        let base = self.base();
        RequestContext {
            kind: self.kind(),
            path: self.kind().path(),
            asset_names: base.assets.names().map(str::to_owned).collect(),
            trace: base.config.trace.clone(),
        }
    }
}

/// A request handle that may be absent.
///
/// Implemented for every request type and for `Option` of it, so client
/// operations accept both; `None` is rejected with `NullRequest`.
pub trait IntoRequest {
    type Request: ApiRequest;

    fn into_request(self) -> Option<Self::Request>;
}

macro_rules! impl_into_request {
    ($($request:ty),+ $(,)?) => {
        $(
            impl IntoRequest for $request {
                type Request = $request;

                fn into_request(self) -> Option<Self::Request> {
                    Some(self)
                }
            }

            impl IntoRequest for Option<$request> {
                type Request = $request;

                fn into_request(self) -> Option<Self::Request> {
                    self
                }
            }
        )+
    };
}

impl_into_request!(
    UrlRequest,
    HtmlRequest,
    MergeRequest,
    MergeOfficeRequest,
    PdfConversionRequest,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_relative_to_the_base() {
        for kind in [
            RequestKind::Url,
            RequestKind::Html,
            RequestKind::Merge,
            RequestKind::MergeOffice,
            RequestKind::PdfConversion,
        ] {
            assert!(kind.path().starts_with("/forms/"), "{kind}");
        }
    }

    #[test]
    fn context_lists_assets_in_order() {
        let mut request = MergeRequest::default();
        request.base.assets.insert("z.pdf", b"%PDF".to_vec()).unwrap();
        request.base.assets.insert("a.pdf", b"%PDF".to_vec()).unwrap();
        request.base.config.trace = Some("t-9".into());

        let context = request.context();
        assert_eq!(context.kind, RequestKind::Merge);
        assert_eq!(context.path, "/forms/pdfengines/merge");
        assert_eq!(context.asset_names, ["z.pdf", "a.pdf"]);
        assert_eq!(context.trace.as_deref(), Some("t-9"));
    }

    #[test]
    fn kinds_serialize_like_they_display() {
        let json = serde_json::to_value(RequestKind::MergeOffice).unwrap();
        assert_eq!(json, RequestKind::MergeOffice.as_str());
    }

    #[test]
    fn option_requests_convert() {
        assert!(None::<HtmlRequest>.into_request().is_none());
        assert!(Some(HtmlRequest::default()).into_request().is_some());
        assert!(HtmlRequest::default().into_request().is_some());
    }
}
