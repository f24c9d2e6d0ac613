//! Core of a single-user weekly class schedule: course records with
//! validation, a persistent schedule store, and a pure mapper from
//! sessions to grid coordinates.

pub mod grid;
pub mod models;
pub mod schedule;
pub mod storage;

pub use grid::{hour_label, layout, CellSpan, GridConfig, LayoutError};
pub use models::{ColorTheme, CourseDraft, CourseSession, ValidationError, Weekday};
pub use schedule::{Schedule, ScheduleError, ScheduleStore};
pub use storage::{default_data_path, ScheduleSnapshot, SnapshotStore};
