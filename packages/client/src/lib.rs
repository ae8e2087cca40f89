//! # Gotenberg client
//!
//! Async client for a Gotenberg document-conversion service: render HTML or a
//! remote page through Chromium, merge PDFs, convert office documents through
//! LibreOffice, and convert PDFs to archival formats.
//!
//! Requests are plain records ([`requests`]) holding an ordered
//! [`AssetDictionary`] of named content plus per-route options. A
//! [`GotenbergClient`] encodes them as `multipart/form-data`, sends them
//! through a [`Transport`] and hands back the produced document as a
//! [`DocumentStream`].
//!
//! ```no_run
//! use gotenberg_client::prelude::*;
//!
//! # async fn run() -> gotenberg_client::Result<()> {
//! let client = GotenbergClient::from_address("http://localhost:3000")?;
//!
//! let mut request = HtmlRequest::default();
//! request.document.body = Some(ContentItem::text("<h1>Invoice</h1>"));
//! request.base.assets.insert("style.css", "h1 { color: navy }")?;
//!
//! let pdf = client
//!     .html_to_pdf(request, &CancellationToken::new())
//!     .await?
//!     .bytes()
//!     .await?;
//! # let _ = pdf;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod assets;
pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod http;
pub mod multipart;
pub mod requests;
pub mod transport;

pub mod prelude;

pub use crate::assets::AssetDictionary;
pub use crate::client::{ClientStatsSnapshot, GotenbergClient};
pub use crate::config::ClientConfig;
pub use crate::content::{ContentItem, IntoContentItem};
pub use crate::error::{ApiError, Error, Result};
pub use crate::http::DocumentStream;
pub use crate::transport::{HyperTransport, Transport};
pub use tokio_util::sync::CancellationToken;
