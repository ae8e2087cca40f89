pub mod classification;
pub mod mapper;
pub mod types;

pub use mapper::{ApiError, ErrorBody, map_error};
pub use types::{AssetNameError, Error, Result};

/// Boxed error used for transport and body sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
