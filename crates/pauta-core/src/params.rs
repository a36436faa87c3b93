//! Parameter structures for planner operations.
//!
//! These structures are shared across interfaces (CLI today, anything
//! else tomorrow) without framework-specific derives. Interface layers
//! define their own argument types and convert into these via `From`,
//! keeping clap concerns out of the core.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::calendar::WeekId;
use crate::models::{ContentType, Metrics, Pillar, PostStatus};

/// Parameters for operations that act on a whole week.
///
/// A missing week identifier means the current week, recomputed from
/// wall-clock time at the moment of the call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekRef {
    /// Week to operate on; defaults to the current week
    pub week: Option<WeekId>,
}

/// Parameters for adding a post manually to a week's agenda.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPost {
    /// Week agenda to add to; defaults to the current week
    pub week: Option<WeekId>,

    /// Instagram format of the post
    pub content_type: ContentType,

    /// Content pillar
    pub pillar: Pillar,

    /// Scheduled calendar date
    pub date: Date,

    /// Caption text (validated: non-empty, at most 2200 characters)
    pub caption: String,

    /// Hashtags (validated: 1-30 entries)
    pub hashtags: Vec<String>,

    /// Optional free-form tags
    pub tags: Vec<String>,
}

/// Parameters identifying one post within a week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRef {
    /// Week the post lives in; defaults to the current week
    pub week: Option<WeekId>,

    /// Identifier of the post
    pub post_id: String,
}

/// Parameters for replacing a post's metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMetrics {
    /// Week the post lives in; defaults to the current week
    pub week: Option<WeekId>,

    /// Identifier of the post
    pub post_id: String,

    /// New metrics object; replaces any previous metrics wholesale
    pub metrics: Metrics,
}

/// Parameters for querying posts within one week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPosts {
    /// Week to query; defaults to the current week
    pub week: Option<WeekId>,

    /// Free-text match against caption or hashtags
    pub query: Option<String>,

    /// Filter by pillar
    pub pillar: Option<Pillar>,

    /// Filter by content type
    pub content_type: Option<ContentType>,

    /// Filter by status
    pub status: Option<PostStatus>,
}

/// Parameters for restoring a snapshot backup.
///
/// Restoring is destructive to any edits made since the snapshot, so it
/// requires explicit confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestoreBackup {
    /// 1-based backup index as shown by the backup listing
    /// (1 = most recent)
    pub index: usize,

    /// Must be true for the restore to proceed
    pub confirmed: bool,
}

/// Parameters for marking an idea batch executed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkExecuted {
    /// Identifier of the batch (millisecond timestamp)
    pub batch_id: i64,

    /// Likes recorded for the executed content
    pub likes: Option<u64>,

    /// Comments recorded for the executed content
    pub comments: Option<u64>,
}

impl From<&ListPosts> for crate::models::PostFilter {
    fn from(params: &ListPosts) -> Self {
        Self {
            query: params.query.clone(),
            pillar: params.pillar,
            content_type: params.content_type,
            status: params.status,
        }
    }
}
