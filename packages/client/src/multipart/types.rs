//! Core types for multipart/form-data handling

use std::borrow::Cow;

use mime_guess::Mime;

use crate::content::ContentItem;

/// A multipart/form-data body under construction.
pub struct Form {
    pub(crate) boundary: String,
    pub(crate) fields: Vec<(Cow<'static, str>, Part)>,
}

/// A field in a multipart form.
pub struct Part {
    pub(crate) meta: PartMetadata,
    pub(crate) value: ContentItem,
}

#[derive(Debug, Default)]
pub(crate) struct PartMetadata {
    pub(crate) mime: Option<Mime>,
    pub(crate) file_name: Option<Cow<'static, str>>,
}

impl PartMetadata {
    pub(crate) fn mime(mut self, mime: Mime) -> Self {
        self.mime = Some(mime);
        self
    }

    pub(crate) fn file_name<T>(mut self, filename: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.file_name = Some(filename.into());
        self
    }
}
