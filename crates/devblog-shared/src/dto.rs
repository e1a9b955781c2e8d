//! Data Transfer Objects - request/response types for the API.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use devblog_core::domain::{NewPost, Post, PostPatch};

/// Request to create a post.
///
/// Fields are optional so a missing title or content is reported as a
/// validation message rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl CreatePostRequest {
    /// `None` when title or content is missing or blank.
    pub fn into_new_post(self) -> Option<NewPost> {
        let title = self.title.filter(|t| !t.trim().is_empty())?;
        let content = self.content.filter(|c| !c.trim().is_empty())?;
        Some(NewPost {
            title,
            content,
            author: self.author,
        })
    }
}

/// Request to update a post. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl From<UpdatePostRequest> for PostPatch {
    fn from(req: UpdatePostRequest) -> Self {
        PostPatch {
            title: req.title,
            content: req.content,
            author: req.author,
        }
    }
}

/// Query string of the search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    /// The trimmed query, or `None` when absent or blank.
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

/// Public representation of a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    pub summary: String,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            created_at: post.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            summary: post.summary(),
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_create_request_requires_title_and_content() {
        let missing_content = CreatePostRequest {
            title: Some("Solo título".to_string()),
            ..Default::default()
        };
        assert!(missing_content.into_new_post().is_none());

        let blank_title = CreatePostRequest {
            title: Some("  ".to_string()),
            content: Some("body".to_string()),
            author: None,
        };
        assert!(blank_title.into_new_post().is_none());

        let complete = CreatePostRequest {
            title: Some("Title".to_string()),
            content: Some("Body".to_string()),
            author: Some("API Tester".to_string()),
        };
        let post = complete.into_new_post().unwrap();
        assert_eq!(post.author.as_deref(), Some("API Tester"));
    }

    #[test]
    fn test_search_term_is_trimmed() {
        let query = SearchQuery {
            q: Some("  Docker ".to_string()),
        };
        assert_eq!(query.term(), Some("Docker"));
        assert_eq!(SearchQuery { q: Some(" ".to_string()) }.term(), None);
        assert_eq!(SearchQuery::default().term(), None);
    }

    #[test]
    fn test_post_response_carries_summary() {
        let post = Post {
            id: 7,
            title: "Title".to_string(),
            content: "Body".to_string(),
            author: "Ada".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(PostResponse::from(&post)).unwrap();

        for field in ["id", "title", "content", "author", "created_at", "summary"] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
        assert_eq!(json["id"], 7);
        assert_eq!(json["summary"], "Body");
    }
}
