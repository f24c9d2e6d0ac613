use std::ops::RangeInclusive;

use crate::models::Weekday;

/// Earliest hour with a slot on the grid (6 AM).
pub const FIRST_HOUR: u8 = 6;

/// Latest hour on the grid's axis (10 PM). Sessions must end by it.
pub const LAST_HOUR: u8 = 22;

/// Columns of the teaching week, left to right.
pub const DAY_ORDER: [Weekday; 6] = [
    Weekday::Lunes,
    Weekday::Martes,
    Weekday::Miercoles,
    Weekday::Jueves,
    Weekday::Viernes,
    Weekday::Sabado,
];

/// Geometry of the week grid. Fixed at the constants above; a separate
/// instance exists only so placement stays a pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// First hour rendered on the hour axis.
    pub first_hour: u8,
    /// Last hour rendered on the hour axis.
    pub last_hour: u8,
    /// Day for each column, in display order.
    pub day_order: [Weekday; 6],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            first_hour: FIRST_HOUR,
            last_hour: LAST_HOUR,
            day_order: DAY_ORDER,
        }
    }
}

impl GridConfig {
    /// Rows on the hour axis, both ends included.
    pub fn row_count(&self) -> usize {
        self.last_hour.saturating_sub(self.first_hour) as usize + 1
    }

    pub fn hours(&self) -> RangeInclusive<u8> {
        self.first_hour..=self.last_hour
    }
}

/// Axis label for an hour row on a 12-hour clock: "6:00 AM", "12:00 PM",
/// "10:00 PM".
pub fn hour_label(hour: u8) -> String {
    let display = if hour > 12 { hour - 12 } else { hour };
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    format!("{display}:00 {meridiem}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_covers_the_teaching_day() {
        let config = GridConfig::default();
        assert_eq!(config.first_hour, 6);
        assert_eq!(config.last_hour, 22);
        assert_eq!(config.row_count(), 17);
        assert_eq!(config.hours().count(), 17);
        assert_eq!(config.day_order[0], Weekday::Lunes);
        assert_eq!(config.day_order[5], Weekday::Sabado);
    }

    #[test]
    fn hour_labels_use_a_twelve_hour_clock() {
        assert_eq!(hour_label(6), "6:00 AM");
        assert_eq!(hour_label(11), "11:00 AM");
        assert_eq!(hour_label(12), "12:00 PM");
        assert_eq!(hour_label(13), "1:00 PM");
        assert_eq!(hour_label(22), "10:00 PM");
    }
}
