//! Post-level operations for the ContentPlanner.

use jiff::Timestamp;
use tokio::task;

use super::ContentPlanner;
use crate::calendar::WeekId;
use crate::catalog;
use crate::error::{PautaError, Result};
use crate::generator;
use crate::models::{Post, PostFilter, PostStatus};
use crate::params::{AddPost, ListPosts, PostRef, UpdateMetrics};
use crate::store::Storage;

/// Instagram's caption length ceiling.
const MAX_CAPTION_CHARS: usize = 2200;

/// Instagram's hashtag ceiling.
const MAX_HASHTAGS_PER_POST: usize = 30;

fn validate(params: &AddPost) -> Result<()> {
    if params.caption.trim().is_empty() {
        return Err(PautaError::invalid_input("caption").with_reason("caption must not be empty"));
    }
    if params.caption.chars().count() > MAX_CAPTION_CHARS {
        return Err(PautaError::invalid_input("caption")
            .with_reason(format!("caption exceeds {MAX_CAPTION_CHARS} characters")));
    }
    if params.hashtags.is_empty() || params.hashtags.len() > MAX_HASHTAGS_PER_POST {
        return Err(PautaError::invalid_input("hashtags").with_reason(format!(
            "between 1 and {MAX_HASHTAGS_PER_POST} hashtags required, got {}",
            params.hashtags.len()
        )));
    }
    Ok(())
}

impl ContentPlanner {
    /// Adds a manually entered post to the referenced week's agenda,
    /// creating the agenda first if needed. The post's identifier and
    /// creation timestamp are assigned here and its status is always
    /// Planned, regardless of anything the caller supplied.
    ///
    /// The new post is prepended, so manual additions read most recent
    /// first.
    pub async fn add_post(&self, params: &AddPost) -> Result<Post> {
        validate(params)?;

        let data_dir = self.data_dir.clone();
        let rng = self.rng.clone();
        let week = params.week.unwrap_or_else(WeekId::current);
        let params = params.clone();

        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            let mut book = storage.load_agendas();
            if book.get(week).is_none() {
                let agenda = if book.is_empty() {
                    generator::bootstrap(week)
                } else {
                    generator::generate(week, &mut *super::lock_rng(&rng))
                };
                book.insert(agenda);
            }

            let post = Post {
                id: generator::new_post_id(&mut *super::lock_rng(&rng)),
                content_type: params.content_type,
                pillar: params.pillar,
                date: params.date,
                caption: params.caption,
                hashtags: params.hashtags,
                tags: params.tags,
                location: catalog::LOCATION.to_string(),
                status: PostStatus::Planned,
                metrics: None,
                created_at: Timestamp::now(),
                posted_at: None,
                week,
            };

            let agenda = book.get_mut(week).ok_or_else(|| PautaError::Configuration {
                message: format!("agenda for {week} missing after creation"),
            })?;
            agenda.posts.insert(0, post.clone());
            storage.save_agendas(&book)?;
            Ok(post)
        })
        .await
        .map_err(|e| PautaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Marks a post as posted, stamping the time of the first transition.
    ///
    /// Idempotent: re-marking an already posted post changes nothing and
    /// keeps the original posted timestamp. Returns `None` without side
    /// effects when the post id is unknown in that week.
    pub async fn mark_posted(&self, params: &PostRef) -> Result<Option<Post>> {
        let data_dir = self.data_dir.clone();
        let week = params.week.unwrap_or_else(WeekId::current);
        let post_id = params.post_id.clone();

        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            let mut book = storage.load_agendas();
            let Some(agenda) = book.get_mut(week) else {
                return Ok(None);
            };
            let Some(post) = agenda.post_mut(&post_id) else {
                return Ok(None);
            };

            if post.status == PostStatus::Posted {
                return Ok(Some(post.clone()));
            }
            post.status = PostStatus::Posted;
            post.posted_at = Some(Timestamp::now());
            let updated = post.clone();
            storage.save_agendas(&book)?;
            Ok(Some(updated))
        })
        .await
        .map_err(|e| PautaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Replaces a post's metrics object wholesale (fields absent from the
    /// new object do not survive). May be called any number of times,
    /// regardless of status. Returns `None` without side effects when the
    /// post id is unknown in that week.
    pub async fn update_metrics(&self, params: &UpdateMetrics) -> Result<Option<Post>> {
        let data_dir = self.data_dir.clone();
        let week = params.week.unwrap_or_else(WeekId::current);
        let post_id = params.post_id.clone();
        let metrics = params.metrics;

        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            let mut book = storage.load_agendas();
            let Some(agenda) = book.get_mut(week) else {
                return Ok(None);
            };
            let Some(post) = agenda.post_mut(&post_id) else {
                return Ok(None);
            };

            post.metrics = Some(metrics);
            let updated = post.clone();
            storage.save_agendas(&book)?;
            Ok(Some(updated))
        })
        .await
        .map_err(|e| PautaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Queries posts in the referenced week. Non-mutating: an absent week
    /// yields an empty list rather than creating an agenda.
    pub async fn list_posts(&self, params: &ListPosts) -> Result<Vec<Post>> {
        let data_dir = self.data_dir.clone();
        let week = params.week.unwrap_or_else(WeekId::current);
        let filter = PostFilter::from(params);

        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            let book = storage.load_agendas();
            let Some(agenda) = book.get(week) else {
                return Ok(Vec::new());
            };
            Ok(agenda
                .posts
                .iter()
                .filter(|p| filter.matches(p))
                .cloned()
                .collect())
        })
        .await
        .map_err(|e| PautaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
