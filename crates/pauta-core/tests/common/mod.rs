use pauta_core::{ContentPlanner, ContentPlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner over a temporary data
/// directory, with a fixed seed so generation is reproducible.
pub async fn create_test_planner() -> (TempDir, ContentPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = ContentPlannerBuilder::new()
        .with_data_dir(Some(temp_dir.path()))
        .with_rng_seed(Some(42))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}
