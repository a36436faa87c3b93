//! Weekly agenda generation.
//!
//! The generator produces a deterministic-shape, randomized-content agenda
//! for a week: Sundays are skipped, Saturday gets exactly one post, every
//! other weekday gets one or two. The random source is injected so tests
//! can seed it; production callers draw from OS entropy, so two calls for
//! the same week intentionally produce different content (this is also
//! what the explicit "regenerate" operation relies on).

use jiff::civil::Date;
use jiff::Timestamp;
use rand::distr::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::calendar::{add_days, WeekId};
use crate::catalog;
use crate::models::{ContentType, Post, PostStatus, WeekAgenda, PILLARS};

/// Number of tips attached to every agenda.
const TIPS_PER_WEEK: usize = 4;

/// Length of generated post identifiers.
const POST_ID_LEN: usize = 7;

/// Generates a fresh agenda for the given week.
pub fn generate<R: Rng>(week: WeekId, rng: &mut R) -> WeekAgenda {
    let week_start = week.week_start();
    let mut posts = Vec::new();

    for offset in 0..7 {
        let date = add_days(week_start, offset);
        // Sunday-zero weekday: 0 = Sunday (skipped), 6 = Saturday.
        match date.weekday().to_sunday_zero_offset() {
            0 => continue,
            6 => posts.push(build_post(week, date, rng)),
            _ => {
                let count = if rng.random_bool(0.5) { 2 } else { 1 };
                for _ in 0..count {
                    posts.push(build_post(week, date, rng));
                }
            }
        }
    }

    WeekAgenda {
        week,
        week_start,
        posts,
        tips: pick_tips(rng),
        created_at: Timestamp::now(),
    }
}

/// Deterministic first-run agenda used only when the store is empty, so
/// the first screen is never blank: three posts cycling through the
/// pillars, each using the first template of its pillar.
pub fn bootstrap(week: WeekId) -> WeekAgenda {
    let week_start = week.week_start();
    let types = [ContentType::Reel, ContentType::Feed, ContentType::Story];

    let posts = (0..3)
        .map(|i| {
            let pillar = PILLARS[i % PILLARS.len()];
            Post {
                id: format!("boot-{}", i + 1),
                content_type: types[i % types.len()],
                pillar,
                date: add_days(week_start, i as i64),
                caption: catalog::caption_templates(pillar)[0].to_string(),
                hashtags: catalog::hashtags_for(pillar),
                tags: Vec::new(),
                location: catalog::LOCATION.to_string(),
                status: PostStatus::Planned,
                metrics: None,
                created_at: Timestamp::now(),
                posted_at: None,
                week,
            }
        })
        .collect();

    WeekAgenda {
        week,
        week_start,
        posts,
        tips: catalog::TIPS[..TIPS_PER_WEEK]
            .iter()
            .map(|t| (*t).to_string())
            .collect(),
        created_at: Timestamp::now(),
    }
}

/// Builds one randomized post slot for a date.
fn build_post<R: Rng>(week: WeekId, date: Date, rng: &mut R) -> Post {
    let pillar = PILLARS[rng.random_range(0..PILLARS.len())];
    let templates = catalog::caption_templates(pillar);
    let caption = templates[rng.random_range(0..templates.len())];

    Post {
        id: new_post_id(rng),
        content_type: pick_content_type(rng.random::<f64>()),
        pillar,
        date,
        caption: caption.to_string(),
        hashtags: catalog::hashtags_for(pillar),
        tags: Vec::new(),
        location: catalog::LOCATION.to_string(),
        status: PostStatus::Planned,
        metrics: None,
        created_at: Timestamp::now(),
        posted_at: None,
        week,
    }
}

/// Cumulative-probability draw: 40% Reel, 40% Feed, 20% Story.
/// Live posts are never generated, only added manually.
fn pick_content_type(roll: f64) -> ContentType {
    if roll < 0.4 {
        ContentType::Reel
    } else if roll < 0.8 {
        ContentType::Feed
    } else {
        ContentType::Story
    }
}

/// Four tips chosen without replacement: full shuffle, then take four.
fn pick_tips<R: Rng>(rng: &mut R) -> Vec<String> {
    let mut tips: Vec<&str> = catalog::TIPS.to_vec();
    tips.shuffle(rng);
    tips.truncate(TIPS_PER_WEEK);
    tips.into_iter().map(str::to_string).collect()
}

/// Generates an opaque 7-character post identifier.
pub(crate) fn new_post_id<R: Rng>(rng: &mut R) -> String {
    (0..POST_ID_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
        .collect()
}
