//! Core `RequestBuilder` structure and the facets every request shares

use std::fmt;

use gotenberg_client::Result;
use gotenberg_client::requests::{ApiRequest, HasRequestBase};

use crate::builder::assets::AssetBuilder;
use crate::builder::config::{ConfigBuilder, WebhookBuilder};

/// Builder owning one request of type `R` while it is assembled.
///
/// Setters return the builder by value; setters that validate their argument
/// return `Result<Self>`. Consistency of the request as a whole is checked when
/// it is sent, or earlier through [`RequestBuilder::validate`].
pub struct RequestBuilder<R> {
    pub(crate) request: R,
    pub(crate) debug_enabled: bool,
}

impl<R: ApiRequest + Default> RequestBuilder<R> {
    /// Start from an empty request
    #[must_use]
    pub fn new() -> Self {
        Self::from_request(R::default())
    }
}

impl<R: ApiRequest + Default> Default for RequestBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ApiRequest> RequestBuilder<R> {
    /// Continue building an existing request
    #[must_use]
    pub fn from_request(request: R) -> Self {
        Self {
            request,
            debug_enabled: false,
        }
    }

    /// Enable debug logging for this builder
    ///
    /// Every facet mutation is then logged through `log::debug!`.
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// The request as assembled so far
    #[must_use]
    pub fn request(&self) -> &R {
        &self.request
    }

    /// Check the request as a whole without sending it.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency the request reports.
    pub fn validate(&self) -> Result<()> {
        self.request.validate()
    }

    /// Finish building and take the request
    #[must_use]
    pub fn build(self) -> R {
        tracing::trace!(
            "Built {} request with {} assets",
            self.request.kind(),
            self.request.base().assets.len()
        );
        self.request
    }

    /// Edit the request's assets.
    ///
    /// # Errors
    ///
    /// Returns the first error the closure returns; assets added before it stay.
    ///
    /// # Examples
    /// ```
    /// use gotenberg::Gotenberg;
    ///
    /// let request = Gotenberg::merge()
    ///     .assets(|a| a.add_item("first.pdf", b"%PDF-1")?.add_item("second.pdf", b"%PDF-2"))
    ///     .unwrap()
    ///     .build();
    /// assert_eq!(request.base.assets.names().collect::<Vec<_>>(), ["first.pdf", "second.pdf"]);
    /// ```
    pub fn assets<F>(mut self, f: F) -> Result<Self>
    where
        F: FnOnce(AssetBuilder<'_>) -> Result<AssetBuilder<'_>>,
    {
        let debug = self.debug_enabled;
        f(AssetBuilder::new(&mut self.request.base_mut().assets).with_debug(debug))?;
        Ok(self)
    }

    /// Add a single asset.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAssetName`, `DuplicateAsset` or `NullValue`.
    pub fn add_asset(
        self,
        name: impl Into<String>,
        value: impl gotenberg_client::IntoContentItem,
    ) -> Result<Self> {
        self.assets(|a| a.add_item(name, value))
    }

    /// Edit the output file name and trace id.
    ///
    /// # Errors
    ///
    /// Returns the first error the closure returns.
    pub fn config<F>(mut self, f: F) -> Result<Self>
    where
        F: FnOnce(ConfigBuilder<'_>) -> Result<ConfigBuilder<'_>>,
    {
        let debug = self.debug_enabled;
        f(ConfigBuilder::new(&mut self.request.base_mut().config).with_debug(debug))?;
        Ok(self)
    }

    /// Deliver the result to `target_url` instead of the response.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `target_url` is not an absolute http(s)
    /// URL, or the first error the closure returns.
    pub fn webhook<F>(mut self, target_url: &str, f: F) -> Result<Self>
    where
        F: FnOnce(WebhookBuilder<'_>) -> Result<WebhookBuilder<'_>>,
    {
        let debug = self.debug_enabled;
        let config = &mut self.request.base_mut().config;
        f(WebhookBuilder::new(config, target_url)?.with_debug(debug))?;
        Ok(self)
    }
}

impl<R: ApiRequest + fmt::Debug> fmt::Debug for RequestBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("request", &self.request)
            .field("debug_enabled", &self.debug_enabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gotenberg_client::requests::{HtmlRequest, MergeRequest};
    use gotenberg_client::{ContentItem, Error};

    #[test]
    fn facets_mutate_the_owned_request() {
        let request = RequestBuilder::<MergeRequest>::new()
            .add_asset("b.pdf", b"%PDF-b")
            .unwrap()
            .add_asset("a.pdf", b"%PDF-a")
            .unwrap()
            .config(|c| c.trace("job-7"))
            .unwrap()
            .build();

        assert_eq!(request.base.assets.names().collect::<Vec<_>>(), ["b.pdf", "a.pdf"]);
        assert_eq!(request.base.config.trace.as_deref(), Some("job-7"));
    }

    #[test]
    fn failing_facet_surfaces_the_first_error() {
        let builder = RequestBuilder::<MergeRequest>::new()
            .add_asset("ok.pdf", b"%PDF")
            .unwrap();
        let err = builder
            .assets(|a| a.add_item("also-ok.pdf", b"%PDF")?.add_item("bad", b"%PDF"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAssetName { .. }));
    }

    #[test]
    fn validate_runs_whole_request_checks() {
        let builder = RequestBuilder::<HtmlRequest>::new();
        assert!(builder.validate().is_err());

        let mut request = builder.build();
        request.document.body = Some(ContentItem::text("<p/>"));
        assert!(RequestBuilder::from_request(request).validate().is_ok());
    }
}
