//! Streaming access to a produced document

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt, TryStreamExt};
use http::{HeaderMap, StatusCode, header};
use http_body_util::BodyDataStream;
use pin_project_lite::pin_project;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio_util::io::StreamReader;

use crate::error::{Error, Result};
use crate::transport::ResponseBody;

pin_project! {
    /// The body of a successful conversion, read lazily from the connection.
    ///
    /// Dropping the stream releases the underlying connection.
    pub struct DocumentStream {
        status: StatusCode,
        headers: HeaderMap,
        #[pin]
        body: BodyDataStream<ResponseBody>,
    }
}

impl DocumentStream {
    pub(crate) fn new(response: http::Response<ResponseBody>) -> Self {
        let (parts, body) = response.into_parts();
        Self {
            status: parts.status,
            headers: parts.headers,
            body: BodyDataStream::new(body),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Media type reported by the service
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// Declared length of the document, when the service sent one
    #[must_use]
    pub fn content_length(&self) -> Option<u64> {
        self.headers
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
    }

    /// Read the whole document into memory.
    ///
    /// # Errors
    ///
    /// Returns `Body` if the connection fails mid-read.
    pub async fn bytes(self) -> Result<Bytes> {
        let capacity = self
            .content_length()
            .and_then(|len| usize::try_from(len).ok())
            .unwrap_or(0);
        let buf = self
            .try_fold(BytesMut::with_capacity(capacity), |mut buf, chunk| async move {
                buf.extend_from_slice(&chunk);
                Ok(buf)
            })
            .await?;
        Ok(buf.freeze())
    }

    /// Adapt the document into an [`AsyncRead`].
    pub fn into_async_read(self) -> impl AsyncRead + Send + Unpin {
        StreamReader::new(self.map_err(io::Error::other))
    }

    /// Copy the document into `writer`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `Body` if reading the response or writing to `writer` fails.
    pub async fn write_to<W>(mut self, writer: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut written = 0u64;
        while let Some(chunk) = self.next().await {
            let chunk = chunk?;
            writer.write_all(&chunk).await.map_err(Error::body)?;
            written += chunk.len() as u64;
        }
        writer.flush().await.map_err(Error::body)?;
        Ok(written)
    }
}

impl Stream for DocumentStream {
    type Item = Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project()
            .body
            .poll_next(cx)
            .map(|item| item.map(|chunk| chunk.map_err(Error::body)))
    }
}

impl std::fmt::Debug for DocumentStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStream")
            .field("status", &self.status)
            .field("content_type", &self.content_type())
            .field("content_length", &self.content_length())
            .finish_non_exhaustive()
    }
}
