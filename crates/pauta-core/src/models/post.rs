//! Post model definition and related functionality.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ContentType, Pillar, PostStatus};
use crate::calendar::WeekId;

/// Engagement metrics recorded on a published post.
///
/// Updates replace the whole object; absent fields do not survive an
/// update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Metrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
}

/// Represents a single scheduled Instagram post within a weekly agenda.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// Opaque unique identifier for the post
    pub id: String,

    /// Instagram format of the post
    pub content_type: ContentType,

    /// Content pillar the post belongs to
    pub pillar: Pillar,

    /// Calendar date the post is scheduled for (no time component)
    pub date: Date,

    /// Caption text (at most 2200 characters)
    pub caption: String,

    /// Ordered hashtag list (1-30 entries)
    pub hashtags: Vec<String>,

    /// Free-form organizational tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Location string attached to the post
    pub location: String,

    /// Current lifecycle status
    pub status: PostStatus,

    /// Recorded engagement metrics, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,

    /// Timestamp when the post was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the post was marked posted (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<Timestamp>,

    /// Identifier of the week agenda owning this post
    pub week: WeekId,
}

impl Post {
    /// Total engagement recorded on the post (likes + comments).
    pub fn engagement(&self) -> u64 {
        self.metrics
            .map(|m| m.likes.unwrap_or(0) + m.comments.unwrap_or(0))
            .unwrap_or(0)
    }
}
