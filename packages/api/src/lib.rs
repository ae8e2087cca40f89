//! Gotenberg public API
//!
//! Fluent, faceted builders for Gotenberg conversion requests, on top of the
//! async client in [`gotenberg_client`].
//!
//! ```no_run
//! use gotenberg::{CancellationToken, Gotenberg, PaperSize};
//!
//! # async fn run() -> gotenberg::Result<()> {
//! let client = Gotenberg::client("http://localhost:3000")?;
//!
//! let pdf = Gotenberg::html()
//!     .html("<h1>Quarterly report</h1>")?
//!     .assets(|a| a.add_item("style.css", "h1 { font-size: 3em }"))?
//!     .dimensions(|d| d.paper_size(PaperSize::A4).margins(0.5))?
//!     .config(|c| c.result_file_name("q3-report"))?
//!     .send(&client, &CancellationToken::new())
//!     .await?
//!     .bytes()
//!     .await?;
//! # let _ = pdf;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::{
    AssetBuilder, BehaviorsBuilder, ConfigBuilder, DimensionsBuilder, DocumentBuilder,
    OfficeOptionsBuilder, RequestBuilder, WebhookBuilder,
};

pub use gotenberg_client::requests::{
    HtmlRequest, MediaType, MergeOfficeRequest, MergeRequest, PaperSize, PdfConversionRequest,
    PdfFormat, UrlRequest, WebhookMethod,
};
pub use gotenberg_client::{
    ApiError, AssetDictionary, CancellationToken, ClientConfig, ContentItem, DocumentStream,
    Error, GotenbergClient, IntoContentItem, Result,
};

/// Re-export of the client crate
pub use gotenberg_client as client;

/// Entry point creating one builder per conversion route
pub struct Gotenberg;

impl Gotenberg {
    /// HTML document to PDF through Chromium
    #[must_use]
    pub fn html() -> RequestBuilder<HtmlRequest> {
        RequestBuilder::new()
    }

    /// Remote page to PDF through Chromium
    #[must_use]
    pub fn url() -> RequestBuilder<UrlRequest> {
        RequestBuilder::new()
    }

    /// PDFs merged into one document
    #[must_use]
    pub fn merge() -> RequestBuilder<MergeRequest> {
        RequestBuilder::new()
    }

    /// Office documents converted and merged through LibreOffice
    #[must_use]
    pub fn merge_office() -> RequestBuilder<MergeOfficeRequest> {
        RequestBuilder::new()
    }

    /// PDFs converted to an archival format
    #[must_use]
    pub fn pdf_conversion() -> RequestBuilder<PdfConversionRequest> {
        RequestBuilder::new()
    }

    /// Client for the service at `address`.
    ///
    /// # Errors
    ///
    /// Returns `MisconfiguredClient` if `address` is not an http(s) URL.
    pub fn client(address: &str) -> Result<GotenbergClient> {
        GotenbergClient::from_address(address)
    }
}
