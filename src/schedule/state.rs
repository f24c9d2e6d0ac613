use serde::{Deserialize, Serialize};

use crate::models::{ColorTheme, CourseSession, Weekday};

pub const DEFAULT_LABEL: &str = "Semestre 2024-1";

/// A week of course sessions under one term label. Sessions keep their
/// insertion order; the totals are derived on read, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub label: String,
    pub sessions: Vec<CourseSession>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            sessions: Vec::new(),
        }
    }
}

impl Schedule {
    pub fn total_credits(&self) -> u32 {
        self.sessions.iter().map(|s| u32::from(s.credits)).sum()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// The starter week shown on first run or after a lost slot.
    pub fn seed() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            sessions: vec![
                CourseSession {
                    id: "1".to_string(),
                    name: "Matemáticas I".to_string(),
                    professor: "Dr. Alberto Rivera".to_string(),
                    room: "Salón B203".to_string(),
                    credits: 4,
                    day: Weekday::Lunes,
                    start_time: 8,
                    end_time: 10,
                    color_theme: ColorTheme::Blue,
                },
                CourseSession {
                    id: "1-b".to_string(),
                    name: "Matemáticas I".to_string(),
                    professor: "Dr. Alberto Rivera".to_string(),
                    room: "Salón B203".to_string(),
                    credits: 4,
                    day: Weekday::Miercoles,
                    start_time: 8,
                    end_time: 10,
                    color_theme: ColorTheme::Blue,
                },
                CourseSession {
                    id: "2".to_string(),
                    name: "Intro. a los Negocios".to_string(),
                    professor: "Lic. Mariana López".to_string(),
                    room: "Salón A105".to_string(),
                    credits: 3,
                    day: Weekday::Martes,
                    start_time: 10,
                    end_time: 12,
                    color_theme: ColorTheme::Pink,
                },
                CourseSession {
                    id: "3".to_string(),
                    name: "Contabilidad".to_string(),
                    professor: "Mtra. Sofia Gonzalez".to_string(),
                    room: "Salón C110".to_string(),
                    credits: 4,
                    day: Weekday::Jueves,
                    start_time: 14,
                    end_time: 16,
                    color_theme: ColorTheme::Purple,
                },
                CourseSession {
                    id: "4".to_string(),
                    name: "Inglés II".to_string(),
                    professor: "Prof. John Smith".to_string(),
                    room: "Salón B101".to_string(),
                    credits: 2,
                    day: Weekday::Viernes,
                    start_time: 8,
                    end_time: 10,
                    color_theme: ColorTheme::Green,
                },
                CourseSession {
                    id: "5".to_string(),
                    name: "Economía".to_string(),
                    professor: "Dr. Carlos Méndez".to_string(),
                    room: "Salón D004".to_string(),
                    credits: 5,
                    day: Weekday::Sabado,
                    start_time: 9,
                    end_time: 12,
                    color_theme: ColorTheme::Orange,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_is_the_six_course_starter_week() {
        let schedule = Schedule::seed();
        assert_eq!(schedule.label, "Semestre 2024-1");
        assert_eq!(schedule.session_count(), 6);
        assert_eq!(schedule.total_credits(), 22);

        let ids: HashSet<&str> = schedule.sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), 6);

        let saturday = schedule
            .sessions
            .iter()
            .find(|s| s.day == Weekday::Sabado)
            .expect("the seed has a Saturday course");
        assert_eq!(saturday.name, "Economía");
        assert_eq!(saturday.start_time, 9);
        assert_eq!(saturday.end_time, 12);
    }

    #[test]
    fn totals_track_the_session_list() {
        let mut schedule = Schedule::default();
        assert_eq!(schedule.session_count(), 0);
        assert_eq!(schedule.total_credits(), 0);

        schedule.sessions.push(CourseSession {
            id: "x".to_string(),
            name: "Física I".to_string(),
            professor: "Dr. X".to_string(),
            room: "A1".to_string(),
            credits: 3,
            day: Weekday::Martes,
            start_time: 14,
            end_time: 16,
            color_theme: ColorTheme::Green,
        });
        assert_eq!(schedule.session_count(), 1);
        assert_eq!(schedule.total_credits(), 3);
    }
}
