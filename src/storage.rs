use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::models::CourseSession;
use crate::schedule::Schedule;

/// Durable shape of a schedule, written whole on every save.
///
/// `totalCredits` is there for anyone inspecting the file; loads
/// recompute it from `sessions` and never trust the stored value.
/// `lastUpdated` records the save moment and is never read back to
/// drive behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSnapshot {
    pub label: String,
    pub sessions: Vec<CourseSession>,
    pub total_credits: u32,
    pub last_updated: DateTime<Utc>,
}

impl ScheduleSnapshot {
    pub fn capture(schedule: &Schedule) -> Self {
        Self {
            label: schedule.label.clone(),
            sessions: schedule.sessions.clone(),
            total_credits: schedule.total_credits(),
            last_updated: Utc::now(),
        }
    }

    /// Rehydrates a schedule, dropping the derived fields on the floor.
    pub fn into_schedule(self) -> Schedule {
        Schedule {
            label: self.label,
            sessions: self.sessions,
        }
    }
}

/// Single-slot JSON store for the schedule. One file, replaced whole;
/// there is no history and no second slot.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the slot. Anything short of a well-formed snapshot, from a
    /// missing file to malformed JSON, comes back as `None` and the
    /// caller falls back to its defaults.
    pub fn load(&self) -> Option<ScheduleSnapshot> {
        if !self.path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!("Failed to read schedule from {}: {}", self.path.display(), err);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(
                    "Discarding unreadable schedule in {}: {}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }

    /// Writes the slot. Failures are logged and swallowed; the
    /// in-memory schedule is already the source of truth.
    pub fn save(&self, snapshot: &ScheduleSnapshot) {
        match self.write_snapshot(snapshot) {
            Ok(()) => debug!(
                "Saved {} sessions to {}",
                snapshot.sessions.len(),
                self.path.display()
            ),
            Err(err) => warn!(
                "Failed to write schedule to {}: {:#}",
                self.path.display(),
                err
            ),
        }
    }

    fn write_snapshot(&self, snapshot: &ScheduleSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let serialized = serde_json::to_string_pretty(snapshot)?;

        // Write a sibling temp file and rename it into place so a crash
        // mid-write cannot leave a half-written slot behind.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serialized)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        match fs::rename(&tmp_path, &self.path) {
            Ok(()) => Ok(()),
            Err(rename_err) => {
                if self.path.exists() {
                    fs::remove_file(&self.path)?;
                    fs::rename(&tmp_path, &self.path)?;
                    Ok(())
                } else {
                    Err(rename_err)
                        .with_context(|| format!("Failed to replace {}", self.path.display()))
                }
            }
        }
    }
}

/// Where the schedule lives unless the caller points elsewhere.
pub fn default_data_path() -> PathBuf {
    home_dir().join(".horario").join("schedule.json")
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("USERPROFILE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
