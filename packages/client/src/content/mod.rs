//! Content of one named asset or document part
//!
//! A [`ContentItem`] holds exactly one of inline text, raw bytes or a byte
//! stream. The variant is fixed at construction and the item is consumed
//! once, when its request is encoded onto the wire.

use std::fmt;
use std::io;
use std::path::Path;
use std::pin::Pin;

use bytes::Bytes;
use futures::Stream;
use futures::StreamExt;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

use crate::error::{Error, Result};

/// Readable byte source backing a [`ContentItem::Stream`]
pub type ByteStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send>>;

/// Which variant a [`ContentItem`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Bytes,
    Stream,
}

/// Content of an asset or document part.
pub enum ContentItem {
    /// Inline text
    Text(String),
    /// Raw bytes
    Bytes(Bytes),
    /// Lazily read byte source
    Stream(ByteStream),
}

impl ContentItem {
    /// Inline text content.
    pub fn text(value: impl Into<String>) -> Self {
        ContentItem::Text(value.into())
    }

    /// Raw byte content.
    pub fn bytes(value: impl Into<Bytes>) -> Self {
        ContentItem::Bytes(value.into())
    }

    /// Content read from an arbitrary byte stream.
    pub fn stream<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Bytes>> + Send + 'static,
    {
        ContentItem::Stream(Box::pin(stream))
    }

    /// Content read from an async reader.
    pub fn reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + 'static,
    {
        ContentItem::stream(ReaderStream::new(reader))
    }

    /// Content streamed from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::Body` if the file cannot be opened.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|e| Error::body(io::Error::new(e.kind(), format!("{}: {e}", path.display()))))?;
        Ok(ContentItem::reader(file))
    }

    /// Which variant this item holds
    #[must_use]
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Text(_) => ContentKind::Text,
            ContentItem::Bytes(_) => ContentKind::Bytes,
            ContentItem::Stream(_) => ContentKind::Stream,
        }
    }

    /// Length in bytes when known without reading
    #[must_use]
    pub fn len_hint(&self) -> Option<usize> {
        match self {
            ContentItem::Text(text) => Some(text.len()),
            ContentItem::Bytes(bytes) => Some(bytes.len()),
            ContentItem::Stream(_) => None,
        }
    }

    /// Consume the item as a stream of chunks.
    pub fn into_stream(self) -> ByteStream {
        match self {
            ContentItem::Text(text) => Box::pin(futures::stream::once(async move {
                Ok(Bytes::from(text))
            })),
            ContentItem::Bytes(bytes) => Box::pin(futures::stream::once(async move { Ok(bytes) })),
            ContentItem::Stream(stream) => stream,
        }
    }

    /// Read the whole item into memory.
    ///
    /// # Errors
    ///
    /// Returns `Error::Body` if the underlying stream fails.
    pub async fn into_bytes(self) -> Result<Bytes> {
        match self {
            ContentItem::Text(text) => Ok(Bytes::from(text)),
            ContentItem::Bytes(bytes) => Ok(bytes),
            ContentItem::Stream(mut stream) => {
                let mut buf = Vec::new();
                while let Some(chunk) = stream.next().await {
                    buf.extend_from_slice(&chunk.map_err(Error::body)?);
                }
                Ok(Bytes::from(buf))
            }
        }
    }
}

impl fmt::Debug for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentItem::Text(text) => f
                .debug_tuple("Text")
                .field(&format!("{} chars", text.len()))
                .finish(),
            ContentItem::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("{} bytes", bytes.len()))
                .finish(),
            ContentItem::Stream(_) => f.debug_tuple("Stream").field(&"<ByteStream>").finish(),
        }
    }
}

/// Conversion of a supported source shape into a [`ContentItem`].
///
/// `Option<T>` maps `None` to the absent value, which is rejected with
/// [`Error::NullValue`].
pub trait IntoContentItem {
    /// Convert, or return `None` when the value is absent.
    fn into_content_item(self) -> Option<ContentItem>;
}

impl IntoContentItem for ContentItem {
    fn into_content_item(self) -> Option<ContentItem> {
        Some(self)
    }
}

impl IntoContentItem for String {
    fn into_content_item(self) -> Option<ContentItem> {
        Some(ContentItem::Text(self))
    }
}

impl IntoContentItem for &str {
    fn into_content_item(self) -> Option<ContentItem> {
        Some(ContentItem::Text(self.to_owned()))
    }
}

impl IntoContentItem for &String {
    fn into_content_item(self) -> Option<ContentItem> {
        Some(ContentItem::Text(self.clone()))
    }
}

impl IntoContentItem for Bytes {
    fn into_content_item(self) -> Option<ContentItem> {
        Some(ContentItem::Bytes(self))
    }
}

impl IntoContentItem for Vec<u8> {
    fn into_content_item(self) -> Option<ContentItem> {
        Some(ContentItem::Bytes(Bytes::from(self)))
    }
}

impl IntoContentItem for &[u8] {
    fn into_content_item(self) -> Option<ContentItem> {
        Some(ContentItem::Bytes(Bytes::copy_from_slice(self)))
    }
}

impl<const N: usize> IntoContentItem for &[u8; N] {
    fn into_content_item(self) -> Option<ContentItem> {
        Some(ContentItem::Bytes(Bytes::copy_from_slice(self)))
    }
}

impl IntoContentItem for ByteStream {
    fn into_content_item(self) -> Option<ContentItem> {
        Some(ContentItem::Stream(self))
    }
}

impl<T: IntoContentItem> IntoContentItem for Option<T> {
    fn into_content_item(self) -> Option<ContentItem> {
        self.and_then(IntoContentItem::into_content_item)
    }
}

/// Convert `value`, failing with `NullValue` for `name` when it is absent.
///
/// # Errors
///
/// Returns `NullValue` when `value` converts to nothing.
pub fn require_content(name: &str, value: impl IntoContentItem) -> Result<ContentItem> {
    value.into_content_item().ok_or_else(|| Error::NullValue {
        name: name.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn each_shape_keeps_its_variant() {
        assert_eq!("<p/>".into_content_item().unwrap().kind(), ContentKind::Text);
        assert_eq!(vec![1u8, 2].into_content_item().unwrap().kind(), ContentKind::Bytes);
        assert_eq!(b"%PDF".into_content_item().unwrap().kind(), ContentKind::Bytes);

        let chunks = futures::stream::iter(vec![Ok(Bytes::from_static(b"ab")), Ok(Bytes::from_static(b"c"))]);
        let item = ContentItem::stream(chunks);
        assert_eq!(item.kind(), ContentKind::Stream);
        assert_eq!(item.len_hint(), None);
        assert_eq!(item.into_bytes().await.unwrap(), Bytes::from_static(b"abc"));
    }

    #[test]
    fn absent_value_is_rejected() {
        let err = require_content("logo.png", None::<Vec<u8>>).unwrap_err();
        assert!(matches!(err, Error::NullValue { ref name } if name == "logo.png"));
    }

    #[tokio::test]
    async fn reader_is_streamed() {
        let item = ContentItem::reader(&b"body { color: red }"[..]);
        assert_eq!(item.kind(), ContentKind::Stream);
        assert_eq!(item.into_bytes().await.unwrap(), Bytes::from_static(b"body { color: red }"));
    }

    #[tokio::test]
    async fn missing_file_is_a_body_error() {
        let err = ContentItem::open("/definitely/not/here.html").await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("body error"));
    }
}
