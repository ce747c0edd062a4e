//! HTTP retrieval client for vendorscope.
//!
//! Talks to a channel relay service that fronts the messaging network and
//! implements [`vendorscope_core::PostSource`] on top of it.

pub mod client;
pub mod error;
pub mod types;

pub use client::FeedClient;
pub use error::FeedError;
