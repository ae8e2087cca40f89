//! multipart/form-data
//!
//! Streaming multipart encoding for request messages. Parts are written in
//! the order they were added and part content is forwarded chunk by chunk,
//! so stream-backed assets are never buffered.

mod form;
mod part;
mod types;

pub use types::{Form, Part};
