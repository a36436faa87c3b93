//! Week-level operations for the ContentPlanner.

use tokio::task;

use super::ContentPlanner;
use crate::calendar::WeekId;
use crate::error::{PautaError, Result};
use crate::generator;
use crate::models::WeekAgenda;
use crate::params::{RestoreBackup, WeekRef};
use crate::store::{AgendaBook, BackupEntry, Storage};

impl ContentPlanner {
    /// Returns the agenda for the referenced week, creating and
    /// persisting it on first access. The very first agenda ever created
    /// comes from the deterministic bootstrap routine; later weeks are
    /// randomly generated.
    ///
    /// Calling twice with the same never-seen week yields the same stored
    /// agenda, not a second generation.
    pub async fn get_or_create(&self, params: &WeekRef) -> Result<WeekAgenda> {
        let data_dir = self.data_dir.clone();
        let rng = self.rng.clone();
        let week = params.week.unwrap_or_else(WeekId::current);

        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            let mut book = storage.load_agendas();
            if let Some(agenda) = book.get(week) {
                return Ok(agenda.clone());
            }

            let agenda = if book.is_empty() {
                generator::bootstrap(week)
            } else {
                generator::generate(week, &mut *super::lock_rng(&rng))
            };
            book.insert(agenda.clone());
            storage.save_agendas(&book)?;
            Ok(agenda)
        })
        .await
        .map_err(|e| PautaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Replaces the referenced week's posts and tips with freshly
    /// generated content, discarding prior posts and any metrics recorded
    /// on them. Other weeks are untouched.
    pub async fn regenerate(&self, params: &WeekRef) -> Result<WeekAgenda> {
        let data_dir = self.data_dir.clone();
        let rng = self.rng.clone();
        let week = params.week.unwrap_or_else(WeekId::current);

        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            let mut book = storage.load_agendas();

            let mut agenda = generator::generate(week, &mut *super::lock_rng(&rng));
            if let Some(existing) = book.get(week) {
                agenda.created_at = existing.created_at;
            }
            book.insert(agenda.clone());
            storage.save_agendas(&book)?;
            Ok(agenda)
        })
        .await
        .map_err(|e| PautaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all stored agendas in week order.
    pub async fn list_agendas(&self) -> Result<Vec<WeekAgenda>> {
        let data_dir = self.data_dir.clone();

        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            Ok(storage.load_agendas().iter().cloned().collect())
        })
        .await
        .map_err(|e| PautaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists the rolling snapshot backups, most recent first.
    pub async fn list_backups(&self) -> Result<Vec<BackupEntry>> {
        let data_dir = self.data_dir.clone();

        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            let mut entries = storage.load_backups();
            entries.reverse();
            Ok(entries)
        })
        .await
        .map_err(|e| PautaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Replaces the live store wholesale with the chosen backup.
    ///
    /// Destructive to any edits made after the snapshot was taken, so it
    /// requires explicit confirmation. Returns the restored snapshot.
    ///
    /// # Errors
    ///
    /// Returns `PautaError::InvalidInput` if `confirmed` is false or the
    /// index does not name an existing backup.
    pub async fn restore_backup(&self, params: &RestoreBackup) -> Result<AgendaBook> {
        if !params.confirmed {
            return Err(PautaError::invalid_input("confirmed").with_reason(
                "Restoring a backup overwrites all current agendas. \
                 Set 'confirmed' to true to proceed.",
            ));
        }

        let data_dir = self.data_dir.clone();
        let index = params.index;

        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            let entries = storage.load_backups();
            if index == 0 || index > entries.len() {
                return Err(PautaError::invalid_input("index").with_reason(format!(
                    "no backup at index {index}; {} available",
                    entries.len()
                )));
            }
            // Listing shows most recent first; the file stores oldest
            // first.
            let entry = &entries[entries.len() - index];
            storage.replace_agendas(&entry.agendas)?;
            Ok(entry.agendas.clone())
        })
        .await
        .map_err(|e| PautaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
