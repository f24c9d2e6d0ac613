use thiserror::Error;

use crate::grid::config::GridConfig;
use crate::models::{CourseSession, Weekday};

/// Where a session lands on the grid: a zero-based day column plus a
/// vertical hour span. Header offsets are the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub column: usize,
    pub row_start: usize,
    pub row_span: usize,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The record names a day the configuration has no column for.
    /// Validated records never hit this; it guards hand-built data.
    #[error("no grid column for day {0}")]
    UnknownDay(Weekday),
}

/// Maps a session onto grid coordinates. Pure: the same record and
/// config always produce the same span. Overlapping spans come out
/// as-is; stacking them is up to the renderer.
pub fn layout(record: &CourseSession, config: &GridConfig) -> Result<CellSpan, LayoutError> {
    let column = config
        .day_order
        .iter()
        .position(|day| *day == record.day)
        .ok_or(LayoutError::UnknownDay(record.day))?;

    Ok(CellSpan {
        column,
        row_start: record.start_time.saturating_sub(config.first_hour) as usize,
        row_span: record.end_time.saturating_sub(record.start_time) as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorTheme;

    fn session_on(day: Weekday, start: u8, end: u8) -> CourseSession {
        CourseSession {
            id: "s1".into(),
            name: "Física I".into(),
            professor: "Dr. X".into(),
            room: "A1".into(),
            credits: 3,
            day,
            start_time: start,
            end_time: end,
            color_theme: ColorTheme::Green,
        }
    }

    #[test]
    fn places_a_tuesday_afternoon_block() {
        let span = layout(&session_on(Weekday::Martes, 14, 16), &GridConfig::default())
            .expect("day is on the grid");
        assert_eq!(span, CellSpan { column: 1, row_start: 8, row_span: 2 });
    }

    #[test]
    fn is_deterministic() {
        let record = session_on(Weekday::Viernes, 8, 10);
        let config = GridConfig::default();
        assert_eq!(layout(&record, &config), layout(&record, &config));
    }

    #[test]
    fn column_follows_the_day_order() {
        let config = GridConfig::default();
        for (index, day) in config.day_order.iter().enumerate() {
            let span = layout(&session_on(*day, 9, 10), &config).expect("day is on the grid");
            assert_eq!(span.column, index);
        }
    }

    #[test]
    fn a_full_day_block_stays_inside_the_grid() {
        let config = GridConfig::default();
        let span = layout(&session_on(Weekday::Lunes, 6, 22), &config).expect("valid");
        assert_eq!(span.row_start, 0);
        assert_eq!(span.row_span, 16);
        assert!(span.row_start + span.row_span <= config.row_count());
    }

    #[test]
    fn reports_a_day_missing_from_the_column_order() {
        let config = GridConfig {
            day_order: [Weekday::Lunes; 6],
            ..GridConfig::default()
        };
        let result = layout(&session_on(Weekday::Martes, 9, 10), &config);
        assert_eq!(result, Err(LayoutError::UnknownDay(Weekday::Martes)));
    }
}
