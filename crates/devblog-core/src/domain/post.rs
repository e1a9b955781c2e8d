use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Author recorded when a post is created without one.
pub const DEFAULT_AUTHOR: &str = "Anónimo";

/// Number of characters of content kept in a summary.
pub const SUMMARY_LENGTH: usize = 150;

/// Validation message for a blank title.
pub const TITLE_REQUIRED: &str = "El título es requerido";

/// Validation message for blank content.
pub const CONTENT_REQUIRED: &str = "El contenido es requerido";

/// Post entity - a single blog entry.
///
/// `id` and `created_at` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Short preview of the content, computed on every call.
    ///
    /// Truncates to [`SUMMARY_LENGTH`] characters and appends `...` when
    /// anything was cut off.
    pub fn summary(&self) -> String {
        let content = self.content.trim();
        match content.char_indices().nth(SUMMARY_LENGTH) {
            Some((cut, _)) => format!("{}...", content[..cut].trim_end()),
            None => content.to_string(),
        }
    }

    /// Content split on blank lines, for paragraph-by-paragraph rendering.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

/// Input for creating a post.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Check that the required text fields are present.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text(TITLE_REQUIRED, &self.title)?;
        require_text(CONTENT_REQUIRED, &self.content)
    }

    /// Author to store, falling back to [`DEFAULT_AUTHOR`] when absent or blank.
    pub fn resolved_author(&self) -> String {
        resolve_author(self.author.as_deref())
    }
}

/// Partial update of a post. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }

    /// Reject explicitly provided fields that would leave a post without a title or content.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(title) = &self.title {
            require_text(TITLE_REQUIRED, title)?;
        }
        if let Some(content) = &self.content {
            require_text(CONTENT_REQUIRED, content)?;
        }
        Ok(())
    }

    /// Apply the provided fields. Call [`PostPatch::validate`] first.
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(author) = self.author {
            post.author = resolve_author(Some(&author));
        }
    }
}

fn require_text(message: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(message.to_string()));
    }
    Ok(())
}

fn resolve_author(author: Option<&str>) -> String {
    match author.map(str::trim) {
        Some(a) if !a.is_empty() => a.to_string(),
        _ => DEFAULT_AUTHOR.to_string(),
    }
}
