//! In-memory post store.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use devblog_core::DomainError;
use devblog_core::domain::{NewPost, Post, PostPatch};
use devblog_core::ports::PostRepository;

#[derive(Default)]
struct StoreState {
    posts: Vec<Post>,
    /// Highest id ever handed out. Never decremented, so deleted ids are not reused.
    last_id: u64,
}

impl StoreState {
    fn insert(&mut self, new_post: NewPost) -> Result<Post, DomainError> {
        new_post.validate()?;

        self.last_id += 1;
        let author = new_post.resolved_author();
        let post = Post {
            id: self.last_id,
            title: new_post.title,
            content: new_post.content,
            author,
            created_at: Utc::now(),
        };
        self.posts.push(post.clone());

        Ok(post)
    }
}

/// Newest first; posts sharing a timestamp are ordered by descending id.
fn newest_first(a: &Post, b: &Post) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

/// In-memory post store using a `Vec` behind an async RwLock.
///
/// Every mutation, including id assignment, happens under the write lock,
/// so concurrent readers never observe a half-applied change.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    state: RwLock<StoreState>,
}

impl InMemoryPostStore {
    /// An empty store. The first created post gets id 1.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }

    /// A store pre-populated with `posts`, in order.
    pub fn seeded(posts: impl IntoIterator<Item = NewPost>) -> Result<Self, DomainError> {
        let mut state = StoreState::default();
        for post in posts {
            state.insert(post)?;
        }

        Ok(Self {
            state: RwLock::new(state),
        })
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        let mut state = self.state.write().await;
        let post = state.insert(post)?;

        tracing::debug!(post_id = post.id, "Post created");
        Ok(post)
    }

    async fn get_by_id(&self, id: u64) -> Option<Post> {
        let state = self.state.read().await;
        state.posts.iter().find(|post| post.id == id).cloned()
    }

    async fn get_all(&self) -> Vec<Post> {
        self.state.read().await.posts.clone()
    }

    async fn get_recent(&self, limit: usize) -> Vec<Post> {
        let mut posts = self.get_all().await;
        posts.sort_by(newest_first);
        posts.truncate(limit);
        posts
    }

    async fn update(&self, id: u64, patch: PostPatch) -> Result<Option<Post>, DomainError> {
        patch.validate()?;

        let mut state = self.state.write().await;
        let Some(post) = state.posts.iter_mut().find(|post| post.id == id) else {
            return Ok(None);
        };
        patch.apply(post);

        tracing::debug!(post_id = id, "Post updated");
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: u64) -> bool {
        let mut state = self.state.write().await;
        let before = state.posts.len();
        state.posts.retain(|post| post.id != id);
        let removed = state.posts.len() < before;

        if removed {
            tracing::debug!(post_id = id, "Post deleted");
        }
        removed
    }

    async fn search(&self, query: &str) -> Vec<Post> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let state = self.state.read().await;
        state
            .posts
            .iter()
            .filter(|post| {
                post.title.to_lowercase().contains(&needle)
                    || post.content.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    async fn count(&self) -> usize {
        self.state.read().await.posts.len()
    }
}
