//! Asset facet: named content sent alongside the request

use std::path::Path;

use gotenberg_client::requests::ApiRequest;
use gotenberg_client::{AssetDictionary, ContentItem, Error, IntoContentItem, Result};

use crate::builder::core::RequestBuilder;

/// Adds assets to the dictionary of one request.
///
/// Every addition goes through [`AssetDictionary::insert`], so name checks
/// and duplicate detection are the dictionary's own.
#[derive(Debug)]
pub struct AssetBuilder<'a> {
    assets: &'a mut AssetDictionary,
    debug_enabled: bool,
}

impl<'a> AssetBuilder<'a> {
    /// Builder over `assets`
    pub fn new(assets: &'a mut AssetDictionary) -> Self {
        Self {
            assets,
            debug_enabled: false,
        }
    }

    #[must_use]
    pub(crate) fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// Add one named item.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAssetName` for a malformed name, `DuplicateAsset` when
    /// the name is taken and `NullValue` when `value` is absent.
    pub fn add_item(self, name: impl Into<String>, value: impl IntoContentItem) -> Result<Self> {
        let name = name.into();
        if self.debug_enabled {
            log::debug!("Gotenberg builder: asset {name}");
        }
        self.assets.insert(name, value)?;
        Ok(self)
    }

    /// Add items in iteration order. An empty collection adds nothing.
    ///
    /// # Errors
    ///
    /// Returns the first error [`add_item`](Self::add_item) reports; items
    /// before it stay added.
    pub fn add_items<I, K, V>(self, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoContentItem,
    {
        items
            .into_iter()
            .try_fold(self, |builder, (name, value)| builder.add_item(name, value))
    }

    /// Like [`add_items`](Self::add_items), for a collection that may be absent.
    ///
    /// # Errors
    ///
    /// Returns `NullCollection` when `items` is `None`, before anything is added.
    pub fn add_optional_items<I, K, V>(self, items: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoContentItem,
    {
        match items {
            Some(items) => self.add_items(items),
            None => Err(Error::NullCollection),
        }
    }

    /// Add a file from disk, named by its file name and streamed when sent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the path has no UTF-8 file name, `Body`
    /// when the file cannot be opened and any [`add_item`](Self::add_item) error.
    pub async fn add_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = file_name(path)?;
        let item = ContentItem::open(path).await?;
        self.add_item(name, item)
    }
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .ok_or_else(|| Error::InvalidArgument {
            name: "path",
            reason: format!("{} has no usable file name", path.display()),
        })
}

impl<R: ApiRequest> RequestBuilder<R> {
    /// Add a file from disk as an asset.
    ///
    /// # Errors
    ///
    /// See [`AssetBuilder::add_file`].
    pub async fn add_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let debug = self.debug_enabled;
        AssetBuilder::new(&mut self.request.base_mut().assets)
            .with_debug(debug)
            .add_file(path)
            .await?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_a_no_op() {
        let mut assets = AssetDictionary::new();
        AssetBuilder::new(&mut assets)
            .add_items(Vec::<(String, Vec<u8>)>::new())
            .unwrap();
        assert!(assets.is_empty());
    }

    #[test]
    fn absent_collection_fails_before_anything_is_added() {
        let mut assets = AssetDictionary::new();
        let err = AssetBuilder::new(&mut assets)
            .add_optional_items(None::<Vec<(&str, &str)>>)
            .unwrap_err();
        assert!(matches!(err, Error::NullCollection));
        assert!(assets.is_empty());
    }

    #[test]
    fn items_keep_source_order() {
        let mut assets = AssetDictionary::new();
        AssetBuilder::new(&mut assets)
            .add_items([("b.txt", "second letter"), ("a.txt", "first letter")])
            .unwrap();
        assert_eq!(assets.names().collect::<Vec<_>>(), ["b.txt", "a.txt"]);
    }

    #[test]
    fn absent_value_is_rejected() {
        let mut assets = AssetDictionary::new();
        let err = AssetBuilder::new(&mut assets)
            .add_item("logo.png", None::<Vec<u8>>)
            .unwrap_err();
        assert!(matches!(err, Error::NullValue { .. }));
    }

    #[test]
    fn file_name_comes_from_the_path() {
        assert_eq!(file_name(Path::new("/tmp/reports/q3.docx")).unwrap(), "q3.docx");
        assert!(file_name(Path::new("/")).is_err());
    }
}
