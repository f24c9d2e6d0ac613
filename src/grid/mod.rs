pub mod config;
pub mod layout;

pub use config::{hour_label, GridConfig, DAY_ORDER, FIRST_HOUR, LAST_HOUR};
pub use layout::{layout, CellSpan, LayoutError};
