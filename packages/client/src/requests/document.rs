//! The HTML documents of a Chromium conversion

use super::fields;
use crate::assets::AssetDictionary;
use crate::content::ContentItem;
use crate::error::{Error, Result};

/// Body, header and footer documents, sent as `index.html`,
/// `header.html` and `footer.html`.
#[derive(Debug, Default)]
pub struct DocumentContent {
    pub body: Option<ContentItem>,
    pub header: Option<ContentItem>,
    pub footer: Option<ContentItem>,
}

impl DocumentContent {
    /// Part names of the documents that are set, in encoding order
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        [
            (fields::INDEX_HTML, self.body.is_some()),
            (fields::HEADER_HTML, self.header.is_some()),
            (fields::FOOTER_HTML, self.footer.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
    }

    /// Documents and assets share one multipart namespace.
    pub(crate) fn check_collisions(&self, assets: &AssetDictionary) -> Result<()> {
        match self.names().find(|name| assets.contains(name)) {
            Some(name) => Err(Error::DuplicateAsset(name.to_string())),
            None => Ok(()),
        }
    }

    pub(crate) fn into_parts(self) -> impl Iterator<Item = (&'static str, ContentItem)> {
        [
            (fields::INDEX_HTML, self.body),
            (fields::HEADER_HTML, self.header),
            (fields::FOOTER_HTML, self.footer),
        ]
        .into_iter()
        .filter_map(|(name, item)| item.map(|item| (name, item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_encoding_order() {
        let document = DocumentContent {
            footer: Some(ContentItem::text("<p>1</p>")),
            body: Some(ContentItem::text("<h1>hi</h1>")),
            header: None,
        };
        assert_eq!(document.names().collect::<Vec<_>>(), ["index.html", "footer.html"]);
    }

    #[test]
    fn asset_named_like_a_document_collides() {
        let document = DocumentContent {
            header: Some(ContentItem::text("<header/>")),
            ..DocumentContent::default()
        };
        let mut assets = AssetDictionary::new();
        assets.insert("header.html", "<p>shadow</p>").unwrap();

        let err = document.check_collisions(&assets).unwrap_err();
        assert!(matches!(err, Error::DuplicateAsset(name) if name == "header.html"));
    }
}
