//! Rolling snapshot backups.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::AgendaBook;

/// Number of snapshots retained for manual restore.
pub const MAX_BACKUPS: usize = 5;

/// One timestamped full-store snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackupEntry {
    /// When the snapshot was taken (UTC)
    pub taken_at: Timestamp,

    /// The complete agenda snapshot at that moment
    pub agendas: AgendaBook,
}

/// Appends a snapshot, dropping the oldest entries beyond [`MAX_BACKUPS`].
pub fn push(entries: &mut Vec<BackupEntry>, agendas: AgendaBook) {
    entries.push(BackupEntry {
        taken_at: Timestamp::now(),
        agendas,
    });
    if entries.len() > MAX_BACKUPS {
        let excess = entries.len() - MAX_BACKUPS;
        entries.drain(..excess);
    }
}
