//! JSON persistence for a [`Profile`].
//!
//! Saved files carry badge ids and unlock dates only; definitions are
//! re-resolved from the [`BadgeCatalog`] on load and every unlock is replayed,
//! so attribute bonuses and the title are recomputed rather than copied.
//! The persisted activity log is kept verbatim and replays add no entries.
//!
//! Writes go to a temporary file in the target directory which is then
//! renamed over the old file, so an interrupted save leaves the previous
//! file intact.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::badge::BadgeCatalog;
use super::profile::{format_date, parse_date, LogEntry, Profile, ProfileError};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error, Diagnostic)]
pub enum StorageError {
    #[error("save file {path} is corrupt: {reason}")]
    #[diagnostic(
        code(lifewappen::storage::corrupt),
        help("fix the file by hand or delete it to start a fresh profile")
    )]
    CorruptSaveData { path: PathBuf, reason: String },

    #[error("I/O error on {path}")]
    #[diagnostic(code(lifewappen::storage::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode profile: {0}")]
    #[diagnostic(code(lifewappen::storage::encode))]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Profile(#[from] ProfileError),
}

pub type StorageResult<T> = Result<T, StorageError>;

// ============================================================================
// Document
// ============================================================================

/// On-disk shape of a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProfile {
    pub name: String,
    pub birth_date: String,
    pub title: String,
    pub attributes: IndexMap<String, i64>,
    /// Badge id → unlock date, in unlock order.
    pub unlocked_badges: IndexMap<String, String>,
    /// Newest first, unstyled.
    pub activity_log: Vec<String>,
}

impl From<&Profile> for SavedProfile {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name().to_string(),
            birth_date: format_date(profile.birth_date()),
            title: profile.title().to_string(),
            attributes: profile.attributes().clone(),
            unlocked_badges: profile
                .unlocked_badges()
                .values()
                .map(|u| (u.badge_id.clone(), format_date(u.date)))
                .collect(),
            activity_log: profile.activity_log().iter().map(LogEntry::plain_text).collect(),
        }
    }
}

impl SavedProfile {
    /// Rebuild a profile, replaying unlocks against `catalog`.
    ///
    /// `path` is only used for error reporting.
    pub fn into_profile(self, catalog: &BadgeCatalog, path: &Path) -> StorageResult<Profile> {
        let corrupt = |reason: String| StorageError::CorruptSaveData {
            path: path.to_path_buf(),
            reason,
        };

        let birth_date = parse_date(&self.birth_date)
            .map_err(|_| corrupt(format!("invalid birth_date `{}`", self.birth_date)))?;

        let mut profile = Profile::with_birth_date(self.name, birth_date);
        profile.set_title(self.title);

        for (badge_id, date) in &self.unlocked_badges {
            let date = parse_date(date)
                .map_err(|_| corrupt(format!("invalid unlock date `{date}` for badge `{badge_id}`")))?;
            match catalog.lookup(badge_id) {
                Some(badge) => {
                    let _ = profile.restore_unlock(badge, date);
                }
                None => warn!(badge = %badge_id, "skipping unknown badge id in save file"),
            }
        }

        if &self.attributes != profile.attributes() {
            warn!(
                stored = ?self.attributes,
                recomputed = ?profile.attributes(),
                "stored attributes differ from recomputed values; using recomputed"
            );
        }

        let log = self
            .activity_log
            .iter()
            .map(|line| {
                let mut entry = LogEntry::parse(line);
                entry.badge_id = catalog
                    .find_by_unlock_message(&entry.message)
                    .map(|b| b.id.to_string());
                entry
            })
            .collect();
        profile.set_activity_log(log);

        Ok(profile)
    }
}

// ============================================================================
// Store
// ============================================================================

/// A profile save file at a fixed path.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the profile, or create a fresh one from the defaults when no save
    /// file exists. A file that exists but does not parse is an error.
    pub fn load(
        &self,
        catalog: &BadgeCatalog,
        default_name: &str,
        default_birth_date: &str,
    ) -> StorageResult<Profile> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no save file, creating fresh profile");
                return Ok(Profile::create(default_name, default_birth_date)?);
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let saved: SavedProfile =
            serde_json::from_str(&contents).map_err(|e| StorageError::CorruptSaveData {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        let profile = saved.into_profile(catalog, &self.path)?;
        info!(
            path = %self.path.display(),
            badges = profile.unlocked_badges().len(),
            log_entries = profile.activity_log().len(),
            "profile loaded"
        );
        Ok(profile)
    }

    /// Write the profile, replacing any previous file.
    pub fn save(&self, profile: &Profile) -> StorageResult<()> {
        let io_err = |source: io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(io_err)?;

        let doc = SavedProfile::from(profile);
        let mut tmp = NamedTempFile::new_in(&dir).map_err(io_err)?;
        serde_json::to_writer_pretty(&mut tmp, &doc)?;
        tmp.write_all(b"\n").map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;

        debug!(path = %self.path.display(), "save file replaced");
        info!(path = %self.path.display(), "profile saved");
        Ok(())
    }
}
