//! Form construction and streaming body encoding

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;
use futures::{StreamExt, TryStreamExt};
use http_body::Frame;
use http_body_util::StreamBody;

use super::types::{Form, Part};
use crate::content::ByteStream;
use crate::transport::{RequestBody, boxed_body};

const CRLF: &[u8] = b"\r\n";

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Creates a new Form without any content, with a random boundary.
    #[must_use]
    pub fn new() -> Form {
        Form::with_boundary(format!("----formdata-gotenberg-{:016x}", fastrand::u64(..)))
    }

    /// Creates a new Form with a fixed boundary.
    pub fn with_boundary(boundary: impl Into<String>) -> Form {
        Form {
            boundary: boundary.into(),
            fields: Vec::new(),
        }
    }

    /// Add a data field with supplied name and value.
    ///
    /// # Examples
    ///
    /// ```
    /// use gotenberg_client::multipart::Form;
    ///
    /// let form = Form::new()
    ///     .text("landscape", "true")
    ///     .text("scale", "0.8");
    /// assert_eq!(form.field_names().collect::<Vec<_>>(), ["landscape", "scale"]);
    /// ```
    #[must_use]
    pub fn text<T, U>(self, name: T, value: U) -> Form
    where
        T: Into<Cow<'static, str>>,
        U: Into<String>,
    {
        self.part(name, Part::text(value))
    }

    /// Adds a customized Part.
    #[must_use]
    pub fn part<T>(mut self, name: T, part: Part) -> Form
    where
        T: Into<Cow<'static, str>>,
    {
        self.fields.push((name.into(), part));
        self
    }

    /// The boundary separating parts
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request's Content-Type header
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Part names in encoding order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_ref())
    }

    /// Whether the form has no parts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Exact encoded length, when every part's length is known up front.
    #[must_use]
    pub fn content_length(&self) -> Option<u64> {
        let mut total = 0u64;
        for (name, part) in &self.fields {
            let header = part.header_bytes(&self.boundary, name).len();
            let value = part.value.len_hint()?;
            total += (header + value + CRLF.len()) as u64;
        }
        Some(total + self.closing().len() as u64)
    }

    fn closing(&self) -> Bytes {
        Bytes::from(format!("--{}--\r\n", self.boundary))
    }

    /// Consume the form as a stream of encoded chunks.
    pub fn into_stream(self) -> ByteStream {
        let closing = self.closing();
        let boundary = self.boundary;

        let parts = futures::stream::iter(self.fields).flat_map(move |(name, part)| {
            let header = part.header_bytes(&boundary, &name);
            futures::stream::once(async move { Ok(header) })
                .chain(part.value.into_stream())
                .chain(futures::stream::once(async { Ok(Bytes::from_static(CRLF)) }))
                .boxed()
        });

        Box::pin(parts.chain(futures::stream::once(async move { Ok(closing) })))
    }

    /// Consume the form as a request body.
    pub fn into_body(self) -> RequestBody {
        boxed_body(StreamBody::new(self.into_stream().map_ok(Frame::data)))
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("boundary", &self.boundary)
            .field("parts", &self.fields)
            .finish()
    }
}
