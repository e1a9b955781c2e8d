//! Post storage implementations.

mod memory;
mod samples;

pub use memory::InMemoryPostStore;
pub use samples::{new_store_with_samples, sample_posts};
