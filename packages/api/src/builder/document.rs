//! Document facet: the HTML body, header and footer of Chromium conversions

use gotenberg_client::content::require_content;
use gotenberg_client::requests::{ApiRequest, DocumentContent, HasChromiumOptions};
use gotenberg_client::{IntoContentItem, Result};

use crate::builder::core::RequestBuilder;

/// Sets the documents of an HTML or URL conversion.
#[derive(Debug)]
pub struct DocumentBuilder<'a> {
    document: &'a mut DocumentContent,
    debug_enabled: bool,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(document: &'a mut DocumentContent) -> Self {
        Self {
            document,
            debug_enabled: false,
        }
    }

    #[must_use]
    pub(crate) fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// Main document, sent as `index.html`.
    ///
    /// # Errors
    ///
    /// Returns `NullValue` when `value` is absent.
    pub fn body(self, value: impl IntoContentItem) -> Result<Self> {
        let item = require_content("index.html", value)?;
        if self.debug_enabled {
            log::debug!("Gotenberg builder: body document ({:?})", item.kind());
        }
        self.document.body = Some(item);
        Ok(self)
    }

    /// Repeated page header, sent as `header.html`.
    ///
    /// # Errors
    ///
    /// Returns `NullValue` when `value` is absent.
    pub fn header(self, value: impl IntoContentItem) -> Result<Self> {
        let item = require_content("header.html", value)?;
        if self.debug_enabled {
            log::debug!("Gotenberg builder: header document ({:?})", item.kind());
        }
        self.document.header = Some(item);
        Ok(self)
    }

    /// Repeated page footer, sent as `footer.html`.
    ///
    /// # Errors
    ///
    /// Returns `NullValue` when `value` is absent.
    pub fn footer(self, value: impl IntoContentItem) -> Result<Self> {
        let item = require_content("footer.html", value)?;
        if self.debug_enabled {
            log::debug!("Gotenberg builder: footer document ({:?})", item.kind());
        }
        self.document.footer = Some(item);
        Ok(self)
    }
}

impl<R: ApiRequest + HasChromiumOptions> RequestBuilder<R> {
    /// Edit the HTML documents.
    ///
    /// # Errors
    ///
    /// Returns the first error the closure returns.
    pub fn document<F>(mut self, f: F) -> Result<Self>
    where
        F: FnOnce(DocumentBuilder<'_>) -> Result<DocumentBuilder<'_>>,
    {
        let debug = self.debug_enabled;
        f(DocumentBuilder::new(self.request.document_mut()).with_debug(debug))?;
        Ok(self)
    }
}
