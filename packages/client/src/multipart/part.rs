//! Part construction and per-part header encoding

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;
use mime_guess::Mime;

use super::types::{Part, PartMetadata};
use crate::content::ContentItem;
use crate::error::{Error, Result};

impl Part {
    /// Makes a text parameter.
    pub fn text<T>(value: T) -> Part
    where
        T: Into<String>,
    {
        Part::content(ContentItem::Text(value.into()))
    }

    /// Makes a new parameter from arbitrary bytes.
    pub fn bytes<T>(value: T) -> Part
    where
        T: Into<Bytes>,
    {
        Part::content(ContentItem::Bytes(value.into()))
    }

    /// Makes a new parameter from any content item.
    pub fn content(value: ContentItem) -> Part {
        Part {
            meta: PartMetadata::default(),
            value,
        }
    }

    /// Makes a file part named `file_name`, with a content type guessed from its extension.
    pub fn file<T>(file_name: T, value: ContentItem) -> Part
    where
        T: Into<Cow<'static, str>>,
    {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(file_name.as_ref()).first_or_octet_stream();
        Part::content(value).mime(mime).file_name(file_name)
    }

    /// Tries to set the mime of this part.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `mime` is not a valid media type.
    pub fn mime_str(self, mime: &str) -> Result<Part> {
        let mime = mime
            .parse::<Mime>()
            .map_err(|e| Error::invalid_argument("mime", e.to_string()))?;
        Ok(self.mime(mime))
    }

    fn mime(self, mime: Mime) -> Part {
        self.with_inner(move |inner| inner.mime(mime))
    }

    /// Sets the filename, builder style.
    pub fn file_name<T>(self, filename: T) -> Part
    where
        T: Into<Cow<'static, str>>,
    {
        self.with_inner(move |inner| inner.file_name(filename))
    }

    fn with_inner<F>(self, func: F) -> Self
    where
        F: FnOnce(PartMetadata) -> PartMetadata,
    {
        Part {
            meta: func(self.meta),
            value: self.value,
        }
    }

    pub(crate) fn header_bytes(&self, boundary: &str, name: &str) -> Bytes {
        let mut header = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{}\"",
            escape_quoted(name)
        );
        if let Some(file_name) = &self.meta.file_name {
            header.push_str("; filename=\"");
            header.push_str(&escape_quoted(file_name));
            header.push('"');
        }
        header.push_str("\r\n");
        if let Some(mime) = &self.meta.mime {
            header.push_str("Content-Type: ");
            header.push_str(mime.as_ref());
            header.push_str("\r\n");
        }
        header.push_str("\r\n");
        Bytes::from(header)
    }
}

/// Percent-encode the characters that would break a quoted header parameter.
fn escape_quoted(value: &str) -> Cow<'_, str> {
    if !value.contains(['"', '\r', '\n']) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .replace('"', "%22")
            .replace('\r', "%0D")
            .replace('\n', "%0A"),
    )
}

impl fmt::Debug for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Part")
            .field("value", &self.value)
            .field("mime", &self.meta.mime)
            .field("file_name", &self.meta.file_name)
            .finish()
    }
}
