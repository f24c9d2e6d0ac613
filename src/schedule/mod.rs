pub mod state;
pub mod store;

pub use state::{Schedule, DEFAULT_LABEL};
pub use store::{ScheduleError, ScheduleStore};
