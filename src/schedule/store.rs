use log::{debug, info};
use thiserror::Error;

use crate::models::CourseSession;
use crate::schedule::Schedule;
use crate::storage::{ScheduleSnapshot, SnapshotStore};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// `add_session` refuses to shadow an existing record; ids stay
    /// unique within a schedule.
    #[error("a session with id {0} already exists")]
    DuplicateId(String),
}

/// Owns the live schedule and its storage slot. Single writer: every
/// mutating call updates memory first, then writes one whole snapshot.
/// A failed write is logged by the slot and never rolls memory back.
pub struct ScheduleStore {
    schedule: Schedule,
    storage: SnapshotStore,
}

impl ScheduleStore {
    /// Hydrates from the slot, or seeds the starter week when the slot
    /// is absent or unreadable.
    pub fn open(storage: SnapshotStore) -> Self {
        let schedule = match storage.load() {
            Some(snapshot) => {
                debug!("Loaded schedule from {}", storage.path().display());
                snapshot.into_schedule()
            }
            None => {
                info!(
                    "No usable schedule at {}; starting from the seed week",
                    storage.path().display()
                );
                Schedule::seed()
            }
        };

        Self { schedule, storage }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn sessions(&self) -> &[CourseSession] {
        &self.schedule.sessions
    }

    pub fn label(&self) -> &str {
        &self.schedule.label
    }

    pub fn total_credits(&self) -> u32 {
        self.schedule.total_credits()
    }

    pub fn session_count(&self) -> usize {
        self.schedule.session_count()
    }

    /// Appends an already-validated session. An id collision is refused
    /// rather than replacing the incumbent.
    pub fn add_session(&mut self, record: CourseSession) -> Result<(), ScheduleError> {
        if self.schedule.sessions.iter().any(|s| s.id == record.id) {
            return Err(ScheduleError::DuplicateId(record.id));
        }
        self.schedule.sessions.push(record);
        self.persist();
        Ok(())
    }

    /// Drops every session carrying the id. Unknown ids are a no-op,
    /// not an error.
    pub fn remove_session(&mut self, id: &str) {
        self.schedule.sessions.retain(|s| s.id != id);
        self.persist();
    }

    /// Renames the term. Any text goes, empty included.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.schedule.label = label.into();
        self.persist();
    }

    /// Sessions sharing a day with the candidate whose hours cross it.
    /// The candidate's own id is skipped so an edited record does not
    /// clash with itself. Reported only; nothing here blocks an add.
    pub fn find_conflicts(&self, candidate: &CourseSession) -> Vec<&CourseSession> {
        self.schedule
            .sessions
            .iter()
            .filter(|existing| existing.id != candidate.id && existing.overlaps(candidate))
            .collect()
    }

    fn persist(&self) {
        self.storage.save(&ScheduleSnapshot::capture(&self.schedule));
    }
}
