//! Wire-level types
//!
//! [`ApiMessage`] is what a request encodes into before it is sent and
//! [`DocumentStream`] is what a successful response is handed back as.

pub mod headers;
pub mod message;
pub mod response;

pub use message::{ApiMessage, resolve};
pub use response::DocumentStream;
