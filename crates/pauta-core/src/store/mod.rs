//! JSON snapshot storage for agendas, backups, idea history and
//! preferences.
//!
//! Each concern is one versioned JSON document in the data directory.
//! Every mutating save overwrites the whole document (there is exactly one
//! logical writer) and pushes a timestamped copy onto a bounded rolling
//! backup list. Unreadable or absent documents silently reinitialize to
//! their defaults; corruption is never surfaced as an error.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::calendar::WeekId;
use crate::error::{Result, StorageResultExt};
use crate::models::WeekAgenda;

pub mod backups;

pub use backups::BackupEntry;

/// Versioned document names.
const AGENDAS_FILE: &str = "agendas_v1.json";
const BACKUPS_FILE: &str = "backups_v1.json";
const IDEAS_FILE: &str = "ideas_v1.json";
const PREFS_FILE: &str = "prefs_v1.json";

/// The live agenda snapshot: one agenda per week identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AgendaBook {
    agendas: BTreeMap<WeekId, WeekAgenda>,
}

impl AgendaBook {
    /// Returns the agenda for a week, if present.
    pub fn get(&self, week: WeekId) -> Option<&WeekAgenda> {
        self.agendas.get(&week)
    }

    /// Returns the agenda for a week for mutation, if present.
    pub fn get_mut(&mut self, week: WeekId) -> Option<&mut WeekAgenda> {
        self.agendas.get_mut(&week)
    }

    /// Inserts or replaces the agenda for its week.
    pub fn insert(&mut self, agenda: WeekAgenda) {
        self.agendas.insert(agenda.week, agenda);
    }

    /// True when no week has ever been stored.
    pub fn is_empty(&self) -> bool {
        self.agendas.is_empty()
    }

    /// Number of stored week agendas.
    pub fn len(&self) -> usize {
        self.agendas.len()
    }

    /// Iterates agendas in week-identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &WeekAgenda> {
        self.agendas.values()
    }
}

/// Persisted display preferences.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    /// Render the weekly agenda in compact form
    #[serde(default)]
    pub compact_week_view: bool,
}

/// File-backed storage handler for one data directory.
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    /// Opens storage rooted at the given directory, creating it if needed.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir).storage_context(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Reads a JSON document, falling back to the default on any read or
    /// parse failure.
    fn read_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let raw = match std::fs::read_to_string(self.path(name)) {
            Ok(raw) => raw,
            Err(_) => return T::default(),
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.path(name);
        let raw = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, raw).storage_context(&path)
    }

    /// Loads the live agenda snapshot.
    pub fn load_agendas(&self) -> AgendaBook {
        self.read_or_default(AGENDAS_FILE)
    }

    /// Persists the full agenda snapshot and pushes a rolling backup.
    pub fn save_agendas(&self, book: &AgendaBook) -> Result<()> {
        self.push_backup(book)?;
        self.write_json(AGENDAS_FILE, book)
    }

    /// Replaces the live snapshot with a backup's contents, without
    /// pushing a new backup for the overwritten state.
    pub fn replace_agendas(&self, book: &AgendaBook) -> Result<()> {
        self.write_json(AGENDAS_FILE, book)
    }

    /// Loads the rolling backup list, most recent last.
    pub fn load_backups(&self) -> Vec<BackupEntry> {
        self.read_or_default(BACKUPS_FILE)
    }

    fn push_backup(&self, book: &AgendaBook) -> Result<()> {
        let mut entries = self.load_backups();
        backups::push(&mut entries, book.clone());
        self.write_json(BACKUPS_FILE, &entries)
    }

    /// Loads the idea-batch history, most recent first.
    pub fn load_history(&self) -> Vec<crate::models::IdeaBatch> {
        self.read_or_default(IDEAS_FILE)
    }

    /// Persists the idea-batch history.
    pub fn save_history(&self, history: &[crate::models::IdeaBatch]) -> Result<()> {
        self.write_json(IDEAS_FILE, &history)
    }

    /// Loads display preferences.
    pub fn load_prefs(&self) -> Preferences {
        self.read_or_default(PREFS_FILE)
    }

    /// Persists display preferences.
    pub fn save_prefs(&self, prefs: &Preferences) -> Result<()> {
        self.write_json(PREFS_FILE, prefs)
    }
}
