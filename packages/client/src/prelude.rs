//! Types needed to build and send conversion requests

pub use crate::assets::AssetDictionary;
pub use crate::client::GotenbergClient;
pub use crate::config::ClientConfig;
pub use crate::content::{ContentItem, IntoContentItem};
pub use crate::error::{ApiError, Error, ErrorBody, Result};
pub use crate::http::DocumentStream;
pub use crate::requests::{
    ApiRequest, ChromiumBehaviors, Dimensions, DocumentContent, HasChromiumOptions,
    HasPdfOutput, HasRequestBase, HtmlRequest, IntoRequest, MediaType, MergeOfficeRequest, MergeRequest,
    OfficeOptions, PaperSize, PdfConversionRequest, PdfFormat, PdfOutput, RequestBase,
    RequestConfig, RequestKind, UrlRequest, Webhook, WebhookMethod,
};
pub use crate::transport::{Completion, HyperTransport, Transport};
pub use tokio_util::sync::CancellationToken;
