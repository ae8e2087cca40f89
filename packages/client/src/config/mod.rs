//! Client configuration
//!
//! [`ClientConfig`] describes where the conversion service lives and how the
//! bundled transport pools connections. Validation lives in [`validation`].

pub mod client;
pub mod validation;

pub use client::{ClientConfig, DEFAULT_USER_AGENT};
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
