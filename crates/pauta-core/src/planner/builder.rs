//! Builder for creating and configuring ContentPlanner instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::ContentPlanner;
use crate::error::{PautaError, Result};
use crate::store::Storage;

/// Builder for creating and configuring [`ContentPlanner`] instances.
#[derive(Debug, Clone, Default)]
pub struct ContentPlannerBuilder {
    data_dir: Option<PathBuf>,
    rng_seed: Option<u64>,
}

impl ContentPlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom data directory.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/pauta` or `~/.local/share/pauta`.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Seeds the random source so agenda generation is reproducible.
    /// Production callers leave this unset and draw from OS entropy.
    pub fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PautaError::Storage` if the data directory cannot be
    /// created, or `PautaError::XdgDirectory` if no default location is
    /// available.
    pub async fn build(self) -> Result<ContentPlanner> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => Self::default_data_dir()?,
        };

        let dir = data_dir.clone();
        task::spawn_blocking(move || {
            let _storage = Storage::open(&dir)?;
            Ok::<(), PautaError>(())
        })
        .await
        .map_err(|e| PautaError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(ContentPlanner::new(data_dir, self.rng_seed))
    }

    /// Returns the default data directory following the XDG Base
    /// Directory specification.
    fn default_data_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("pauta")
            .get_data_home()
            .ok_or_else(|| {
                PautaError::XdgDirectory("no XDG data home available".to_string())
            })
    }
}
