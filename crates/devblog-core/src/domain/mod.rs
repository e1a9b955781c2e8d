//! Domain entities - the core business objects.

mod post;

pub use post::{
    CONTENT_REQUIRED, DEFAULT_AUTHOR, NewPost, Post, PostPatch, SUMMARY_LENGTH, TITLE_REQUIRED,
};
