//! # Domain Models
//!
//! These structs represent the core entities of Railpost. Identifiers are
//! small integers allocated by the store; the JSON shape below is the stable
//! encoding the presentation layer consumes (camelCase, ISO-8601 timestamps,
//! `image` omitted when absent).

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A user-authored feed entry with a comment thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: u64,
    /// Username of the creator; immutable after creation.
    pub author: String,
    pub title: String,
    pub content: String,
    /// Optional image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Creation instant; edits do not touch it.
    pub timestamp: DateTime<Utc>,
    /// Insertion-ordered, append-only from the outside.
    pub comments: Vec<Comment>,
    pub is_favorite: bool,
}

/// A single entry in a publication's comment thread.
/// Comment ids are unique within their parent publication, not globally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// The identity produced by the auth flow and held by the session.
/// No credential material; the platform performs no real authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}

impl Publication {
    /// Next comment id for this thread. Comments are append-only and never
    /// removed, so the last id is the high-water mark.
    pub fn next_comment_id(&self) -> u64 {
        self.comments.last().map(|c| c.id + 1).unwrap_or(1)
    }
}
