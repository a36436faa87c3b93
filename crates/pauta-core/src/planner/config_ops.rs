//! Display-preference operations for the ContentPlanner.

use tokio::task;

use super::ContentPlanner;
use crate::error::{PautaError, Result};
use crate::store::{Preferences, Storage};

impl ContentPlanner {
    /// Loads the persisted display preferences.
    pub async fn preferences(&self) -> Result<Preferences> {
        let data_dir = self.data_dir.clone();

        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            Ok(storage.load_prefs())
        })
        .await
        .map_err(|e| PautaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Persists the compact-week-view display preference.
    pub async fn set_compact_view(&self, compact: bool) -> Result<Preferences> {
        let data_dir = self.data_dir.clone();

        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            let mut prefs = storage.load_prefs();
            prefs.compact_week_view = compact;
            storage.save_prefs(&prefs)?;
            Ok(prefs)
        })
        .await
        .map_err(|e| PautaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
