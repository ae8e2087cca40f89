//! Kind-specific setters and terminal methods
//!
//! Terminal methods hand the finished request to a [`GotenbergClient`].

use gotenberg_client::requests::{ApiRequest, HtmlRequest, IntoRequest, UrlRequest};
use gotenberg_client::{CancellationToken, DocumentStream, GotenbergClient, IntoContentItem, Result};

use crate::builder::config::web_url;
use crate::builder::core::RequestBuilder;

impl RequestBuilder<UrlRequest> {
    /// Page the service loads and prints.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `url` is an absolute http(s) URL.
    pub fn url(mut self, url: &str) -> Result<Self> {
        let url = web_url("url", url)?;
        if self.debug_enabled {
            log::debug!("Gotenberg builder: url {url}");
        }
        self.request.url = Some(url);
        Ok(self)
    }
}

impl RequestBuilder<HtmlRequest> {
    /// Shortcut for setting the body document.
    ///
    /// # Errors
    ///
    /// Returns `NullValue` when `body` is absent.
    pub fn html(self, body: impl IntoContentItem) -> Result<Self> {
        self.document(|d| d.body(body))
    }
}

impl<R> RequestBuilder<R>
where
    R: ApiRequest + IntoRequest<Request = R>,
{
    /// Send the request and wait for the produced document.
    ///
    /// # Errors
    ///
    /// See [`GotenbergClient::execute`].
    pub async fn send(self, client: &GotenbergClient, cancel: &CancellationToken) -> Result<DocumentStream> {
        if self.debug_enabled {
            log::debug!("Gotenberg builder: sending {} request", self.request.kind());
        }
        client.execute(self.build(), cancel).await
    }

    /// Submit a webhook request; the result goes to the configured webhook.
    ///
    /// # Errors
    ///
    /// See [`GotenbergClient::fire_webhook_and_forget`].
    pub async fn fire_and_forget(self, client: &GotenbergClient, cancel: &CancellationToken) -> Result<()> {
        if self.debug_enabled {
            log::debug!("Gotenberg builder: submitting {} webhook request", self.request.kind());
        }
        client.fire_webhook_and_forget(self.build(), cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gotenberg_client::Error;

    #[test]
    fn url_must_be_absolute_web_url() {
        assert!(RequestBuilder::<UrlRequest>::new().url("/relative").is_err());
        assert!(RequestBuilder::<UrlRequest>::new().url("file:///tmp/a.html").is_err());

        let request = RequestBuilder::<UrlRequest>::new()
            .url("https://example.com/invoice/42")
            .unwrap()
            .build();
        assert_eq!(request.url.unwrap().path(), "/invoice/42");
    }

    #[test]
    fn html_shortcut_sets_the_body() {
        let request = RequestBuilder::<HtmlRequest>::new()
            .html("<h1>Report</h1>")
            .unwrap()
            .build();
        assert!(request.document.body.is_some());

        let err = RequestBuilder::<HtmlRequest>::new().html(None::<&str>).unwrap_err();
        assert!(matches!(err, Error::NullValue { .. }));
    }
}
