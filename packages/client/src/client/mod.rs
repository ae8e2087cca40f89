//! The client executor
//!
//! [`GotenbergClient`] sends requests through a [`Transport`](crate::transport::Transport)
//! and turns responses into documents or errors.

pub mod core;
pub mod stats;

pub use self::core::GotenbergClient;
pub use stats::{ClientStats, ClientStatsSnapshot};
