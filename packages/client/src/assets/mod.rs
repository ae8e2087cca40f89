//! Ordered, validated collection of named request assets
//!
//! Asset names become multipart file names on the wire, so the service
//! requires them to be flat, relative file names carrying an extension.

use std::slice;
use std::vec;

use crate::content::{ContentItem, IntoContentItem, require_content};
use crate::error::{AssetNameError, Error, Result};

/// Check that `name` is a single-segment relative file name with an extension.
///
/// # Errors
///
/// Returns the first rule the name breaks.
///
/// # Examples
/// ```
/// use gotenberg_client::assets::validate_asset_name;
///
/// assert!(validate_asset_name("logo.png").is_ok());
/// assert!(validate_asset_name("img/logo.png").is_err());
/// assert!(validate_asset_name("README").is_err());
/// ```
pub fn validate_asset_name(name: &str) -> std::result::Result<(), AssetNameError> {
    if name.is_empty() {
        return Err(AssetNameError::Empty);
    }

    if name.contains(['/', '\\']) {
        return Err(AssetNameError::ContainsSlash);
    }

    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => Ok(()),
        _ => Err(AssetNameError::MissingExtension),
    }
}

/// Name-to-content mapping that keeps insertion order.
///
/// Order is what the multipart body is encoded in, which keeps the wire
/// output reproducible. Names are unique.
#[derive(Debug, Default)]
pub struct AssetDictionary {
    entries: Vec<(String, ContentItem)>,
}

impl AssetDictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one asset.
    ///
    /// # Errors
    ///
    /// - `InvalidAssetName` if `name` breaks a naming rule
    /// - `NullValue` if `value` is absent
    /// - `DuplicateAsset` if `name` is already present
    pub fn insert(&mut self, name: impl Into<String>, value: impl IntoContentItem) -> Result<()> {
        let name = name.into();
        if let Err(reason) = validate_asset_name(&name) {
            return Err(Error::InvalidAssetName { name, reason });
        }

        let item = require_content(&name, value)?;

        if self.contains(&name) {
            return Err(Error::DuplicateAsset(name));
        }

        tracing::trace!("Added asset {} ({:?})", name, item.kind());
        self.entries.push((name, item));
        Ok(())
    }

    /// Insert every entry of `items`, in iteration order.
    ///
    /// Stops at the first failing entry. Entries inserted before it stay.
    ///
    /// # Errors
    ///
    /// Returns the error of the first entry [`insert`](Self::insert) rejects.
    pub fn insert_many<I, K, V>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoContentItem,
    {
        for (name, value) in items {
            self.insert(name, value)?;
        }
        Ok(())
    }

    /// Whether an asset named `name` is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Content stored under `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ContentItem> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, item)| item)
    }

    /// Asset names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of assets
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no assets were added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate assets in insertion order
    pub fn iter(&self) -> slice::Iter<'_, (String, ContentItem)> {
        self.entries.iter()
    }
}

impl IntoIterator for AssetDictionary {
    type Item = (String, ContentItem);
    type IntoIter = vec::IntoIter<(String, ContentItem)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AssetDictionary {
    type Item = &'a (String, ContentItem);
    type IntoIter = slice::Iter<'a, (String, ContentItem)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_names() {
        for (name, reason) in [
            ("", AssetNameError::Empty),
            ("css/site.css", AssetNameError::ContainsSlash),
            ("/abs.css", AssetNameError::ContainsSlash),
            ("dir\\img.png", AssetNameError::ContainsSlash),
            ("noextension", AssetNameError::MissingExtension),
            ("trailing.", AssetNameError::MissingExtension),
        ] {
            let mut assets = AssetDictionary::new();
            let err = assets.insert(name, "x").unwrap_err();
            assert!(
                matches!(err, Error::InvalidAssetName { reason: r, .. } if r == reason),
                "{name:?} should fail with {reason:?}"
            );
            assert!(assets.is_empty());
        }
    }

    #[test]
    fn accepts_flat_names_with_extensions() {
        let mut assets = AssetDictionary::new();
        for name in ["style.css", "logo.PNG", "font.woff2", "archive.tar.gz", ".htaccess"] {
            assets.insert(name, "x").unwrap();
        }
        assert_eq!(assets.len(), 5);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut assets = AssetDictionary::new();
        assets.insert("b.txt", "second letter").unwrap();
        assets.insert("a.txt", "first letter").unwrap();

        let names: Vec<_> = assets.names().collect();
        assert_eq!(names, ["b.txt", "a.txt"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut assets = AssetDictionary::new();
        assets.insert("chart.svg", "<svg/>").unwrap();
        let err = assets.insert("chart.svg", "<svg></svg>").unwrap_err();

        assert!(matches!(err, Error::DuplicateAsset(ref name) if name == "chart.svg"));
        assert!(matches!(assets.get("chart.svg"), Some(ContentItem::Text(t)) if t == "<svg/>"));
    }

    #[test]
    fn absent_value_is_rejected() {
        let mut assets = AssetDictionary::new();
        let err = assets.insert("logo.png", None::<Vec<u8>>).unwrap_err();
        assert!(matches!(err, Error::NullValue { .. }));
        assert!(assets.is_empty());
    }

    #[test]
    fn insert_many_keeps_entries_before_a_failure() {
        let mut assets = AssetDictionary::new();
        let err = assets
            .insert_many([("one.css", "a"), ("bad/two.css", "b"), ("three.css", "c")])
            .unwrap_err();

        assert!(matches!(err, Error::InvalidAssetName { .. }));
        assert_eq!(assets.names().collect::<Vec<_>>(), ["one.css"]);
    }
}
