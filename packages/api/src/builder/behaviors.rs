//! Behaviours facet: how Chromium loads a page before printing

use std::time::Duration;

use gotenberg_client::requests::{ApiRequest, ChromiumBehaviors, HasChromiumOptions, MediaType};
use gotenberg_client::{Error, Result};
use http::{HeaderName, HeaderValue};

use crate::builder::core::RequestBuilder;
use crate::builder::dimensions::non_blank;

/// Sets Chromium rendering behaviours.
#[derive(Debug)]
pub struct BehaviorsBuilder<'a> {
    behaviors: &'a mut ChromiumBehaviors,
    debug_enabled: bool,
}

impl<'a> BehaviorsBuilder<'a> {
    pub fn new(behaviors: &'a mut ChromiumBehaviors) -> Self {
        Self {
            behaviors,
            debug_enabled: false,
        }
    }

    #[must_use]
    pub(crate) fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// Wait a fixed delay before printing
    #[must_use]
    pub fn wait_delay(self, delay: Duration) -> Self {
        if self.debug_enabled {
            log::debug!("Gotenberg builder: wait delay {delay:?}");
        }
        self.behaviors.wait_delay = Some(delay);
        self
    }

    /// Wait until a JavaScript expression becomes truthy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a blank expression.
    pub fn wait_for_expression(self, expression: impl Into<String>) -> Result<Self> {
        let expression = non_blank("wait for expression", expression.into())?;
        if self.debug_enabled {
            log::debug!("Gotenberg builder: wait for {expression}");
        }
        self.behaviors.wait_for_expression = Some(expression);
        Ok(self)
    }

    /// Override the User-Agent Chromium sends while loading the page.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a value that cannot be sent as a header.
    pub fn user_agent(self, user_agent: impl Into<String>) -> Result<Self> {
        let user_agent = non_blank("user agent", user_agent.into())?;
        HeaderValue::from_str(&user_agent).map_err(|e| Error::InvalidArgument {
            name: "user agent",
            reason: e.to_string(),
        })?;
        self.behaviors.user_agent = Some(user_agent);
        Ok(self)
    }

    /// Add a header to every request the page makes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a malformed header name or value.
    pub fn extra_http_header(self, name: &str, value: &str) -> Result<Self> {
        let (name, value) = header_pair(name, value)?;
        if self.debug_enabled {
            log::debug!("Gotenberg builder: page header {name}");
        }
        self.behaviors.extra_http_headers.insert(name, value);
        Ok(self)
    }

    #[must_use]
    pub fn emulated_media_type(self, media: MediaType) -> Self {
        self.behaviors.emulated_media_type = Some(media);
        self
    }

    /// Fail the conversion when the page logs an uncaught exception
    #[must_use]
    pub fn fail_on_console_exceptions(self, fail: bool) -> Self {
        self.behaviors.fail_on_console_exceptions = Some(fail);
        self
    }
}

/// Check a header pair, returning the name in its canonical lower-case form.
pub(crate) fn header_pair(name: &str, value: &str) -> Result<(String, String)> {
    let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| Error::InvalidArgument {
        name: "header name",
        reason: format!("{name:?}: {e}"),
    })?;
    HeaderValue::from_str(value).map_err(|e| Error::InvalidArgument {
        name: "header value",
        reason: format!("{value:?}: {e}"),
    })?;
    Ok((name.as_str().to_owned(), value.to_owned()))
}

impl<R: ApiRequest + HasChromiumOptions> RequestBuilder<R> {
    /// Edit the rendering behaviours.
    ///
    /// # Errors
    ///
    /// Returns the first error the closure returns.
    pub fn behaviors<F>(mut self, f: F) -> Result<Self>
    where
        F: FnOnce(BehaviorsBuilder<'_>) -> Result<BehaviorsBuilder<'_>>,
    {
        let debug = self.debug_enabled;
        f(BehaviorsBuilder::new(self.request.behaviors_mut()).with_debug(debug))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_page_headers() {
        let mut behaviors = ChromiumBehaviors::default();
        let _builder = BehaviorsBuilder::new(&mut behaviors)
            .extra_http_header("X-Tenant", "acme")
            .unwrap()
            .wait_delay(Duration::from_millis(500))
            .emulated_media_type(MediaType::Screen);

        assert_eq!(behaviors.extra_http_headers.get("x-tenant").map(String::as_str), Some("acme"));
        assert_eq!(behaviors.wait_delay, Some(Duration::from_millis(500)));
        assert_eq!(behaviors.emulated_media_type, Some(MediaType::Screen));
    }

    #[test]
    fn rejects_malformed_headers() {
        let mut behaviors = ChromiumBehaviors::default();
        assert!(BehaviorsBuilder::new(&mut behaviors).extra_http_header("bad name", "x").is_err());
        assert!(BehaviorsBuilder::new(&mut behaviors).extra_http_header("x-ok", "line\nbreak").is_err());
        assert!(behaviors.extra_http_headers.is_empty());
    }

    #[test]
    fn blank_expression_is_rejected() {
        let mut behaviors = ChromiumBehaviors::default();
        assert!(BehaviorsBuilder::new(&mut behaviors).wait_for_expression("").is_err());
    }
}
