//! Fluent request builders
//!
//! [`RequestBuilder`] owns one request while it is assembled. Each concern of
//! the request (assets, documents, page geometry, rendering behaviours,
//! headers, webhook, output options) is edited through its own facet builder,
//! handed to a closure that borrows just that part of the request.

pub mod assets;
pub mod behaviors;
pub mod config;
pub mod core;
pub mod dimensions;
pub mod document;
pub mod methods;
pub mod options;

pub use self::core::RequestBuilder;
pub use assets::AssetBuilder;
pub use behaviors::BehaviorsBuilder;
pub use config::{ConfigBuilder, WebhookBuilder};
pub use dimensions::DimensionsBuilder;
pub use document::DocumentBuilder;
pub use options::OfficeOptionsBuilder;
