use std::str::FromStr;

use jiff::civil::date;
use pauta_core::{
    params::{AddPost, ListPosts, PostRef, RestoreBackup, UpdateMetrics, WeekRef},
    ContentType, Metrics, PautaError, Pillar, PostStatus, WeekId,
};

mod common;
use common::create_test_planner;

fn week(s: &str) -> WeekRef {
    WeekRef {
        week: Some(WeekId::from_str(s).expect("valid week id")),
    }
}

fn add_post_params(week_id: &str, caption: &str) -> AddPost {
    let week = WeekId::from_str(week_id).expect("valid week id");
    AddPost {
        week: Some(week),
        content_type: ContentType::Feed,
        pillar: Pillar::SocialProof,
        date: pauta_core::calendar::add_days(week.week_start(), 2),
        caption: caption.to_string(),
        hashtags: vec!["#JetChicken".to_string()],
        tags: vec![],
    }
}

#[tokio::test]
async fn test_first_agenda_comes_from_bootstrap() {
    let (_temp_dir, planner) = create_test_planner().await;

    let agenda = planner
        .get_or_create(&week("2024-W10"))
        .await
        .expect("Failed to create agenda");

    // First agenda in an empty store is the fixed starter content.
    assert_eq!(agenda.posts.len(), 3);
    assert!(agenda.posts.iter().all(|p| p.id.starts_with("boot-")));
    assert_eq!(agenda.week_start, date(2024, 3, 4));
    assert_eq!(agenda.tips.len(), 4);

    // Later weeks are randomly generated, not bootstrapped.
    let next = planner
        .get_or_create(&week("2024-W11"))
        .await
        .expect("Failed to create second agenda");
    assert!(!next.posts.iter().any(|p| p.id.starts_with("boot-")));
    assert!((6..=12).contains(&next.posts.len()));
}

#[tokio::test]
async fn test_get_or_create_is_idempotent() {
    let (_temp_dir, planner) = create_test_planner().await;

    let first = planner
        .get_or_create(&week("2024-W20"))
        .await
        .expect("Failed to create agenda");
    let second = planner
        .get_or_create(&week("2024-W20"))
        .await
        .expect("Failed to fetch agenda");

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_regenerate_replaces_posts_but_keeps_created_at() {
    let (_temp_dir, planner) = create_test_planner().await;

    let original = planner
        .get_or_create(&week("2024-W10"))
        .await
        .expect("Failed to create agenda");
    let other = planner
        .get_or_create(&week("2024-W11"))
        .await
        .expect("Failed to create second agenda");

    let regenerated = planner
        .regenerate(&week("2024-W10"))
        .await
        .expect("Failed to regenerate");

    assert_ne!(regenerated.posts, original.posts);
    assert_eq!(regenerated.created_at, original.created_at);

    // Other weeks are untouched.
    let other_after = planner
        .get_or_create(&week("2024-W11"))
        .await
        .expect("Failed to fetch second agenda");
    assert_eq!(other_after, other);
}

#[tokio::test]
async fn test_added_post_is_prepended_and_forced_planned() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner
        .get_or_create(&week("2024-W10"))
        .await
        .expect("Failed to create agenda");

    let post = planner
        .add_post(&add_post_params("2024-W10", "Depoimento da Maria"))
        .await
        .expect("Failed to add post");

    assert_eq!(post.status, PostStatus::Planned);
    assert!(post.posted_at.is_none());
    assert_eq!(post.location, "Jet Chicken - Londrina - PR");

    let agenda = planner
        .get_or_create(&week("2024-W10"))
        .await
        .expect("Failed to fetch agenda");
    assert_eq!(agenda.posts[0].id, post.id);
}

#[tokio::test]
async fn test_added_posts_get_distinct_ids() {
    let (_temp_dir, planner) = create_test_planner().await;

    let first = planner
        .add_post(&add_post_params("2024-W10", "Primeiro post manual"))
        .await
        .expect("Failed to add first post");
    let second = planner
        .add_post(&add_post_params("2024-W10", "Segundo post manual"))
        .await
        .expect("Failed to add second post");

    // One random stream lives for the planner's lifetime, so consecutive
    // additions never draw the same id, seeded or not.
    assert_ne!(first.id, second.id);

    // Ids stay unique against generated posts in other weeks too.
    let agenda = planner
        .get_or_create(&week("2024-W11"))
        .await
        .expect("Failed to create agenda");
    let mut ids: Vec<&str> = agenda.posts.iter().map(|p| p.id.as_str()).collect();
    ids.push(&first.id);
    ids.push(&second.id);
    let unique: std::collections::HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test]
async fn test_add_post_validates_caption_and_hashtags() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner
        .add_post(&add_post_params("2024-W10", "   "))
        .await
        .expect_err("blank caption should be rejected");
    assert!(matches!(err, PautaError::InvalidInput { .. }));

    let mut params = add_post_params("2024-W10", "Legenda ok");
    params.caption = "x".repeat(2201);
    let err = planner
        .add_post(&params)
        .await
        .expect_err("oversized caption should be rejected");
    assert!(matches!(err, PautaError::InvalidInput { .. }));

    let mut params = add_post_params("2024-W10", "Legenda ok");
    params.hashtags = (0..31).map(|i| format!("#tag{i}")).collect();
    let err = planner
        .add_post(&params)
        .await
        .expect_err("31 hashtags should be rejected");
    assert!(matches!(err, PautaError::InvalidInput { .. }));

    let mut params = add_post_params("2024-W10", "Legenda ok");
    params.hashtags = vec![];
    assert!(planner.add_post(&params).await.is_err());
}

#[tokio::test]
async fn test_mark_posted_is_one_way_and_idempotent() {
    let (_temp_dir, planner) = create_test_planner().await;
    let post = planner
        .add_post(&add_post_params("2024-W10", "Post para publicar"))
        .await
        .expect("Failed to add post");

    let post_ref = PostRef {
        week: Some(WeekId::from_str("2024-W10").unwrap()),
        post_id: post.id.clone(),
    };

    let posted = planner
        .mark_posted(&post_ref)
        .await
        .expect("Failed to mark posted")
        .expect("post should exist");
    assert_eq!(posted.status, PostStatus::Posted);
    let first_posted_at = posted.posted_at.expect("posted_at should be set");

    // Marking again changes nothing, including the timestamp.
    let again = planner
        .mark_posted(&post_ref)
        .await
        .expect("Failed to mark posted twice")
        .expect("post should exist");
    assert_eq!(again.posted_at, Some(first_posted_at));

    let missing = planner
        .mark_posted(&PostRef {
            week: Some(WeekId::from_str("2024-W10").unwrap()),
            post_id: "nope999".to_string(),
        })
        .await
        .expect("lookup of unknown post should not error");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_update_metrics_replaces_wholesale() {
    let (_temp_dir, planner) = create_test_planner().await;
    let post = planner
        .add_post(&add_post_params("2024-W10", "Post com métricas"))
        .await
        .expect("Failed to add post");

    let week_id = WeekId::from_str("2024-W10").unwrap();
    planner
        .update_metrics(&UpdateMetrics {
            week: Some(week_id),
            post_id: post.id.clone(),
            metrics: Metrics {
                views: Some(1000),
                likes: Some(50),
                comments: Some(5),
            },
        })
        .await
        .expect("Failed to update metrics")
        .expect("post should exist");

    // A second update omitting views must not keep the old views value.
    let updated = planner
        .update_metrics(&UpdateMetrics {
            week: Some(week_id),
            post_id: post.id.clone(),
            metrics: Metrics {
                views: None,
                likes: Some(80),
                comments: None,
            },
        })
        .await
        .expect("Failed to update metrics again")
        .expect("post should exist");

    let metrics = updated.metrics.expect("metrics should be set");
    assert_eq!(metrics.views, None);
    assert_eq!(metrics.likes, Some(80));
    assert_eq!(metrics.comments, None);
}

#[tokio::test]
async fn test_list_posts_applies_filters() {
    let (_temp_dir, planner) = create_test_planner().await;
    // The first store access bootstraps starter posts into the week, so
    // counts below are relative to that baseline.
    let starters = planner
        .get_or_create(&week("2024-W10"))
        .await
        .expect("Failed to create agenda")
        .posts
        .len();

    planner
        .add_post(&add_post_params("2024-W10", "Depoimento do João"))
        .await
        .expect("Failed to add post");
    let mut reel = add_post_params("2024-W10", "Bastidores da cozinha");
    reel.content_type = ContentType::Reel;
    reel.pillar = Pillar::Institutional;
    planner.add_post(&reel).await.expect("Failed to add post");

    let week_id = WeekId::from_str("2024-W10").unwrap();

    let all = planner
        .list_posts(&ListPosts {
            week: Some(week_id),
            ..Default::default()
        })
        .await
        .expect("Failed to list posts");
    assert_eq!(all.len(), starters + 2);

    let reels = planner
        .list_posts(&ListPosts {
            week: Some(week_id),
            content_type: Some(ContentType::Reel),
            ..Default::default()
        })
        .await
        .expect("Failed to list reels");
    assert!(reels.iter().all(|p| p.content_type == ContentType::Reel));
    assert!(reels.iter().any(|p| p.caption == "Bastidores da cozinha"));

    let by_query = planner
        .list_posts(&ListPosts {
            week: Some(week_id),
            query: Some("depoimento".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to query posts");
    assert_eq!(by_query.len(), 1);

    // Unknown weeks list as empty, without creating an agenda.
    let empty = planner
        .list_posts(&ListPosts {
            week: Some(WeekId::from_str("2030-W01").unwrap()),
            ..Default::default()
        })
        .await
        .expect("Failed to list empty week");
    assert!(empty.is_empty());
    let agendas = planner.list_agendas().await.expect("Failed to list agendas");
    assert!(!agendas.iter().any(|a| a.week.to_string() == "2030-W01"));
}

#[tokio::test]
async fn test_backups_rotate_and_restore_requires_confirmation() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .get_or_create(&week("2024-W10"))
        .await
        .expect("Failed to create agenda");
    let snapshot_posts = planner
        .get_or_create(&week("2024-W10"))
        .await
        .expect("Failed to fetch agenda")
        .posts;

    planner
        .add_post(&add_post_params("2024-W10", "Post que será desfeito"))
        .await
        .expect("Failed to add post");

    let backups = planner.list_backups().await.expect("Failed to list backups");
    assert_eq!(backups.len(), 2, "each mutation pushes one backup");

    let err = planner
        .restore_backup(&RestoreBackup {
            index: 1,
            confirmed: false,
        })
        .await
        .expect_err("restore without confirmation must fail");
    assert!(matches!(err, PautaError::InvalidInput { .. }));

    let err = planner
        .restore_backup(&RestoreBackup {
            index: 99,
            confirmed: true,
        })
        .await
        .expect_err("out-of-range index must fail");
    assert!(matches!(err, PautaError::InvalidInput { .. }));

    // Backups snapshot the state each save produced: index 1 mirrors the
    // live store, index 2 is one mutation back.
    planner
        .restore_backup(&RestoreBackup {
            index: 2,
            confirmed: true,
        })
        .await
        .expect("Failed to restore backup");

    let agenda = planner
        .get_or_create(&week("2024-W10"))
        .await
        .expect("Failed to fetch restored agenda");
    assert_eq!(agenda.posts, snapshot_posts);
}

#[tokio::test]
async fn test_preferences_persist() {
    let (temp_dir, planner) = create_test_planner().await;

    let prefs = planner.preferences().await.expect("Failed to read prefs");
    assert!(!prefs.compact_week_view);

    planner
        .set_compact_view(true)
        .await
        .expect("Failed to set preference");

    // A fresh planner over the same directory sees the stored value.
    let reopened = pauta_core::ContentPlannerBuilder::new()
        .with_data_dir(Some(temp_dir.path()))
        .build()
        .await
        .expect("Failed to reopen planner");
    let prefs = reopened.preferences().await.expect("Failed to read prefs");
    assert!(prefs.compact_week_view);
}

#[tokio::test]
async fn test_csv_export_of_a_generated_week() {
    let (_temp_dir, planner) = create_test_planner().await;
    let agenda = planner
        .get_or_create(&week("2024-W10"))
        .await
        .expect("Failed to create agenda");

    let csv = pauta_core::export::week_to_csv(&agenda);
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Data,Tipo,Pilar,Legenda,Hashtags,Status,Views,Likes,Comments")
    );
    assert_eq!(lines.count(), agenda.posts.len());
    assert_eq!(
        pauta_core::export::csv_filename(&agenda),
        "agenda-semana-2024-W10.csv"
    );
}
