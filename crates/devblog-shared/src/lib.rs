//! # DevBlog Shared
//!
//! Request and response types of the JSON API.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
