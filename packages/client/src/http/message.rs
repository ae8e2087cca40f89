//! The wire message a request encodes into

use std::borrow::Cow;

use http::{HeaderMap, HeaderValue, Method, header};
use url::Url;

use crate::assets::AssetDictionary;
use crate::content::ContentItem;
use crate::error::{Error, Result};
use crate::multipart::{Form, Part};
use crate::requests::{RequestConfig, RequestKind};
use crate::transport::RequestBody;

/// A fully encoded request: method, route, headers and multipart body.
#[derive(Debug)]
pub struct ApiMessage {
    kind: RequestKind,
    method: Method,
    headers: HeaderMap,
    form: Form,
}

impl ApiMessage {
    /// Empty message for `kind`, with a fresh multipart boundary.
    #[must_use]
    pub fn new(kind: RequestKind) -> Self {
        Self::with_form(kind, Form::new())
    }

    /// Empty message for `kind` writing into `form`.
    #[must_use]
    pub fn with_form(kind: RequestKind, form: Form) -> Self {
        Self {
            kind,
            method: Method::POST,
            headers: HeaderMap::new(),
            form,
        }
    }

    #[must_use]
    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Route relative to the base address
    #[must_use]
    pub fn path(&self) -> &'static str {
        self.kind.path()
    }

    /// Headers contributed by the request itself
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn form(&self) -> &Form {
        &self.form
    }

    pub(crate) fn apply_config(&mut self, config: &RequestConfig) -> Result<()> {
        config.apply_headers(&mut self.headers)
    }

    pub(crate) fn push_fields<I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        for (name, value) in fields {
            self.form.fields.push((Cow::Borrowed(name), Part::text(value)));
        }
    }

    pub(crate) fn push_file(&mut self, name: impl Into<Cow<'static, str>>, item: ContentItem) {
        let name = name.into();
        let part = Part::file(name.clone(), item);
        self.form.fields.push((name, part));
    }

    pub(crate) fn push_assets(&mut self, assets: AssetDictionary) {
        for (name, item) in assets {
            self.push_file(name, item);
        }
    }

    /// Build the transport request against `base`, layering the request's
    /// own headers over `default_headers`.
    ///
    /// # Errors
    ///
    /// Returns `MisconfiguredClient` if the route cannot be resolved against `base`.
    pub fn into_http_request(
        self,
        base: &Url,
        default_headers: &HeaderMap,
    ) -> Result<http::Request<RequestBody>> {
        let url = resolve(base, self.path())?;
        let uri = http::Uri::try_from(url.as_str())
            .map_err(|e| Error::MisconfiguredClient(format!("{url} is not a valid request uri: {e}")))?;

        let mut headers = default_headers.clone();
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
        let content_type = HeaderValue::from_str(&self.form.content_type())
            .map_err(|e| Error::invalid_argument("boundary", e.to_string()))?;
        headers.insert(header::CONTENT_TYPE, content_type);
        if let Some(length) = self.form.content_length() {
            headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));
        }

        let mut request = http::Request::new(self.form.into_body());
        *request.method_mut() = self.method;
        *request.uri_mut() = uri;
        *request.headers_mut() = headers;
        Ok(request)
    }
}

/// Resolve a route against a base address, keeping any path prefix the base carries.
///
/// # Errors
///
/// Returns `MisconfiguredClient` if the join fails.
///
/// # Examples
/// ```
/// use gotenberg_client::http::resolve;
/// use url::Url;
///
/// let base = Url::parse("http://pdf.internal/gotenberg").unwrap();
/// let url = resolve(&base, "/forms/pdfengines/merge").unwrap();
/// assert_eq!(url.as_str(), "http://pdf.internal/gotenberg/forms/pdfengines/merge");
/// ```
pub fn resolve(base: &Url, path: &str) -> Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path.trim_start_matches('/'))
        .map_err(|e| Error::MisconfiguredClient(format!("cannot resolve {path} against {base}: {e}")))
}
