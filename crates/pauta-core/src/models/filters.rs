//! Filter types for querying posts.

use super::{ContentType, Pillar, Post, PostStatus};

/// Filter options for querying posts within a week.
///
/// All populated fields are AND-combined. Text matching is a
/// case-insensitive substring match over the caption and hashtags.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Free-text match against caption or hashtags
    pub query: Option<String>,

    /// Filter by content pillar
    pub pillar: Option<Pillar>,

    /// Filter by content type
    pub content_type: Option<ContentType>,

    /// Filter by lifecycle status
    pub status: Option<PostStatus>,
}

impl PostFilter {
    /// Returns whether a post satisfies every populated predicate.
    pub fn matches(&self, post: &Post) -> bool {
        if let Some(pillar) = self.pillar {
            if post.pillar != pillar {
                return false;
            }
        }
        if let Some(content_type) = self.content_type {
            if post.content_type != content_type {
                return false;
            }
        }
        if let Some(status) = self.status {
            if post.status != status {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let in_caption = post.caption.to_lowercase().contains(&needle);
            let in_hashtags = post
                .hashtags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle));
            if !in_caption && !in_hashtags {
                return false;
            }
        }
        true
    }
}
