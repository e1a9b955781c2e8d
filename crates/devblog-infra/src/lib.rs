//! # DevBlog Infrastructure
//!
//! Concrete implementations of the ports defined in `devblog-core`.
//! Posts live in process memory; nothing survives a restart.

pub mod store;

pub use store::{InMemoryPostStore, new_store_with_samples};
