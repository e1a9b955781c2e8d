use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::DomainError;

/// Post storage - the single source of truth for posts in a running process.
///
/// Lookups signal a missing post with `None`; the only error is
/// [`DomainError::Validation`] for blank required fields.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a new post, assigning the next id and the creation timestamp.
    async fn create(&self, post: NewPost) -> Result<Post, DomainError>;

    /// Find a post by its id.
    async fn get_by_id(&self, id: u64) -> Option<Post>;

    /// All posts in creation order.
    async fn get_all(&self) -> Vec<Post>;

    /// At most `limit` posts, newest first.
    async fn get_recent(&self, limit: usize) -> Vec<Post>;

    /// Apply the provided fields to a post. `Ok(None)` if the id does not exist.
    async fn update(&self, id: u64, patch: PostPatch) -> Result<Option<Post>, DomainError>;

    /// Remove a post. Returns whether anything was removed.
    async fn delete(&self, id: u64) -> bool;

    /// Case-insensitive substring search over title and content, in creation order.
    async fn search(&self, query: &str) -> Vec<Post>;

    /// Number of stored posts.
    async fn count(&self) -> usize;
}
