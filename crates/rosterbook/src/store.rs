//! Roster store for rosterbook.
//!
//! This module provides the single source of truth for the student
//! collection. All mutations pass through it, and every mutation re-persists
//! the full collection as a JSON snapshot before returning, so the snapshot
//! on disk and the in-memory state never disagree.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::seed;
use crate::student::{StudentPatch, StudentRecord};

/// The roster store.
///
/// Owns the ordered student collection and its snapshot file. Insertion
/// order is preserved; new records are appended at the end. After any public
/// mutation returns, durable storage and in-memory state agree exactly.
#[derive(Debug)]
pub struct RosterStore {
    /// Path to the snapshot file.
    path: PathBuf,
    /// The authoritative ordered collection.
    students: Vec<StudentRecord>,
}

impl RosterStore {
    /// Open the store backed by the snapshot at the given path.
    ///
    /// Restores the collection from the snapshot when one is present and
    /// parseable; otherwise adopts the bootstrap dataset, assigning each
    /// entry a fresh id. Either way the adopted collection is persisted
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// adopted collection cannot be persisted. A missing or corrupt snapshot
    /// is not an error; it is treated as "no prior state".
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let students = match Self::load_snapshot(&path) {
            Some(students) => {
                info!(
                    "restored {} students from {}",
                    students.len(),
                    path.display()
                );
                students
            }
            None => {
                let seeded = seed::bootstrap_roster();
                info!("seeding {} students into {}", seeded.len(), path.display());
                seeded
            }
        };

        let store = Self { path, students };
        store.persist()?;
        Ok(store)
    }

    /// Read and parse the snapshot, tolerating absence and malformed content.
    fn load_snapshot(path: &Path) -> Option<Vec<StudentRecord>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no snapshot at {}", path.display());
                return None;
            }
            Err(err) => {
                warn!("snapshot at {} unreadable: {err}", path.display());
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(students) => Some(students),
            Err(err) => {
                warn!("snapshot at {} unparseable: {err}", path.display());
                None
            }
        }
    }

    /// Get the path to the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full collection, in insertion order.
    #[must_use]
    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Get a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Append a record to the end of the collection and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn add(&mut self, student: StudentRecord) -> Result<()> {
        debug!("adding student {} ({})", student.full_name(), student.id);
        self.students.push(student);
        self.persist()
    }

    /// Apply a shallow-merge edit to every record matching the patch id.
    ///
    /// Returns whether any record matched. A mismatched id is a no-op, not a
    /// failure; the collection is re-persisted either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn update(&mut self, patch: &StudentPatch) -> Result<bool> {
        let mut matched = false;
        for student in self.students.iter_mut().filter(|s| s.id == patch.id) {
            patch.apply(student);
            matched = true;
        }
        if !matched {
            debug!("update matched no record for id {}", patch.id);
        }
        self.persist()?;
        Ok(matched)
    }

    /// Remove every record with the given id.
    ///
    /// Returns whether any record was removed. A mismatched id is a no-op,
    /// not a failure; the collection is re-persisted either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.students.len();
        self.students.retain(|s| s.id != id);
        let removed = self.students.len() < before;
        if !removed {
            debug!("remove matched no record for id {id}");
        }
        self.persist()?;
        Ok(removed)
    }

    /// Distinct graduation years across the entire collection, ascending.
    ///
    /// Always derived from the full collection, never from a filtered view.
    #[must_use]
    pub fn grad_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.students.iter().map(|s| s.grad_year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Persist the full collection as a snapshot, overwriting any prior one.
    ///
    /// The snapshot is written to a temporary sibling file and renamed into
    /// place, so a failed write never leaves a truncated snapshot behind.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.students)?;
        let tmp = self.path.with_extension("json.tmp");

        fs::write(&tmp, json).map_err(|source| Error::SnapshotWrite {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| Error::SnapshotWrite {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            "persisted {} students to {}",
            self.students.len(),
            self.path.display()
        );
        Ok(())
    }
}
