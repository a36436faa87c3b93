//! High-level planner API for managing weekly agendas.
//!
//! [`ContentPlanner`] is the central coordinator between interface layers
//! and the JSON snapshot store. All operations are async; file I/O runs
//! on the blocking pool. Every mutating operation persists the full
//! snapshot and pushes a rolling backup, so callers never deal with
//! partial state.
//!
//! ```rust,no_run
//! use pauta_core::{params::WeekRef, ContentPlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = ContentPlannerBuilder::new().build().await?;
//!
//! // Show (and lazily create) the current week's agenda.
//! let agenda = planner.get_or_create(&WeekRef::default()).await?;
//! println!("{} posts planned", agenda.posts.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub mod agenda_ops;
pub mod builder;
pub mod config_ops;
pub mod post_ops;

pub use builder::ContentPlannerBuilder;

/// Shared handle to the planner's random source.
///
/// One RNG lives for the planner's whole lifetime so consecutive draws
/// advance the same stream, even under a fixed seed.
pub(crate) type SharedRng = Arc<Mutex<SmallRng>>;

/// Main planner interface for weekly agendas, posts and backups.
pub struct ContentPlanner {
    pub(crate) data_dir: PathBuf,
    pub(crate) rng: SharedRng,
}

impl ContentPlanner {
    /// Creates a planner over the given data directory, seeding the
    /// random source when configured (tests) and from OS entropy
    /// otherwise.
    pub(crate) fn new(data_dir: PathBuf, rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            data_dir,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Directory holding the JSON snapshot files. Shared with the idea
    /// generator so both histories live side by side.
    pub fn data_dir(&self) -> &std::path::Path {
        &self.data_dir
    }
}

/// Locks the shared random source. A poisoned lock is recovered: the RNG
/// holds no invariants a panic could break.
pub(crate) fn lock_rng(rng: &SharedRng) -> std::sync::MutexGuard<'_, SmallRng> {
    rng.lock().unwrap_or_else(PoisonError::into_inner)
}
