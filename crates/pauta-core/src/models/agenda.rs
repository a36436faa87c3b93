//! Weekly agenda model definition.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Post;
use crate::calendar::WeekId;

/// One week's worth of planned posts plus a rotating set of tips.
///
/// There is at most one agenda per week identifier. Agendas are created
/// lazily the first time their week is referenced and are never deleted;
/// regeneration replaces posts and tips in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekAgenda {
    /// Identifier of the week this agenda covers
    pub week: WeekId,

    /// First calendar day of the week (a Monday)
    pub week_start: Date,

    /// Posts in the agenda. Manual additions are prepended (most recent
    /// first); generated posts are in chronological order.
    pub posts: Vec<Post>,

    /// Four tips drawn from the fixed tip catalog
    pub tips: Vec<String>,

    /// Timestamp when the agenda was first created (UTC)
    pub created_at: Timestamp,
}

impl WeekAgenda {
    /// Looks up a post by identifier.
    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// Looks up a post by identifier for mutation.
    pub fn post_mut(&mut self, post_id: &str) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == post_id)
    }

    /// Number of posts still in the planned state.
    pub fn planned_count(&self) -> usize {
        self.posts
            .iter()
            .filter(|p| p.status == super::PostStatus::Planned)
            .count()
    }
}
