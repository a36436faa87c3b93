use pauta_core::{params::MarkExecuted, ApiConfig, GenerationContext, IdeaGenerator};
use tempfile::TempDir;

/// Generator with no credential configured: every call takes the demo
/// path, so these tests never touch the network.
fn create_offline_generator() -> (TempDir, IdeaGenerator) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = ApiConfig {
        api_key: None,
        ..ApiConfig::default()
    };
    let generator = IdeaGenerator::new(temp_dir.path().to_path_buf(), config);
    (temp_dir, generator)
}

#[tokio::test]
async fn test_missing_credential_yields_demo_batch() {
    let (_temp_dir, generator) = create_offline_generator();
    assert!(!generator.has_credential());

    let context = GenerationContext {
        season: Some("Verão".to_string()),
        special_events: Some("Carnaval".to_string()),
        previous_performance: None,
    };
    let batch = generator
        .generate(context)
        .await
        .expect("Failed to generate batch");

    assert!(batch.is_demo);
    assert_eq!(batch.ideas.len(), 5);
    assert!(batch.ideas[0].description.contains("Verão"));
    assert!(batch.ideas[2].description.contains("Carnaval"));
}

#[tokio::test]
async fn test_history_is_most_recent_first() {
    let (_temp_dir, generator) = create_offline_generator();

    let first = generator
        .generate(GenerationContext::default())
        .await
        .expect("Failed to generate first batch");
    let second = generator
        .generate(GenerationContext::default())
        .await
        .expect("Failed to generate second batch");

    let history = generator.history().await.expect("Failed to load history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, second.id);
    assert_eq!(history[1].id, first.id);
}

#[tokio::test]
async fn test_mark_executed_records_performance() {
    let (_temp_dir, generator) = create_offline_generator();
    let batch = generator
        .generate(GenerationContext::default())
        .await
        .expect("Failed to generate batch");

    let executed = generator
        .mark_executed(&MarkExecuted {
            batch_id: batch.id,
            likes: Some(120),
            comments: Some(15),
        })
        .await
        .expect("Failed to mark executed")
        .expect("batch should exist");

    assert!(executed.executed_at.is_some());
    assert_eq!(executed.engagement(), 135);

    let stats = generator.stats().await.expect("Failed to compute stats");
    assert_eq!(stats.executed_count, 1);
    assert_eq!(stats.total_ideas, 5);
    assert_eq!(stats.average_engagement, 135);
    assert_eq!(stats.top_performing[0].id, batch.id);
}

#[tokio::test]
async fn test_mark_executed_ignores_unknown_batch() {
    let (_temp_dir, generator) = create_offline_generator();
    generator
        .generate(GenerationContext::default())
        .await
        .expect("Failed to generate batch");

    let result = generator
        .mark_executed(&MarkExecuted {
            batch_id: 12345,
            likes: Some(1),
            comments: None,
        })
        .await
        .expect("unknown batch should not error");
    assert!(result.is_none());

    let history = generator.history().await.expect("Failed to load history");
    assert!(history.iter().all(|b| b.performance.is_none()));
}
