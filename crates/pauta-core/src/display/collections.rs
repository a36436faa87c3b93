//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper handles its own empty case so callers never special-case
//! "nothing found" messaging.

use std::{fmt, ops::Index};

use super::datetime::LocalDateTime;
use crate::models::{IdeaBatch, Post};
use crate::store::BackupEntry;

/// Newtype wrapper for displaying a filtered post list.
pub struct Posts(pub Vec<Post>);

impl Posts {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of posts in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the post at the given index.
    pub fn get(&self, index: usize) -> Option<&Post> {
        self.0.get(index)
    }

    /// Get an iterator over the posts.
    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.0.iter()
    }
}

impl Index<usize> for Posts {
    type Output = Post;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Posts {
    type Item = Post;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Posts {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Posts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "Nenhum post encontrado.")
        } else {
            for post in &self.0 {
                write!(f, "{post}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the backup listing.
///
/// Entries are expected most recent first; the printed index is the
/// 1-based value accepted by the restore operation.
pub struct Backups(pub Vec<BackupEntry>);

impl fmt::Display for Backups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Nenhum backup disponível.");
        }
        for (i, entry) in self.0.iter().enumerate() {
            let posts: usize = entry.agendas.iter().map(|a| a.posts.len()).sum();
            writeln!(
                f,
                "{}. {} — {} semana(s), {} post(s)",
                i + 1,
                LocalDateTime(&entry.taken_at),
                entry.agendas.len(),
                posts
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the idea batch history.
pub struct Batches(pub Vec<IdeaBatch>);

impl fmt::Display for Batches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Nenhum lote de ideias gerado ainda.");
        }
        for batch in &self.0 {
            write!(f, "{batch}")?;
        }
        Ok(())
    }
}
