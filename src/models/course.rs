use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::grid::{FIRST_HOUR, LAST_HOUR};

pub const MIN_CREDITS: u8 = 1;
pub const MAX_CREDITS: u8 = 10;

/// The six teaching days. Sunday has no column on the grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Weekday {
    Lunes,
    Martes,
    #[serde(rename = "Miércoles")]
    Miercoles,
    Jueves,
    Viernes,
    #[serde(rename = "Sábado")]
    Sabado,
}

impl Weekday {
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Lunes => "Lunes",
            Weekday::Martes => "Martes",
            Weekday::Miercoles => "Miércoles",
            Weekday::Jueves => "Jueves",
            Weekday::Viernes => "Viernes",
            Weekday::Sabado => "Sábado",
        }
    }

    /// Case-insensitive; accepts the unaccented spellings so the day can
    /// be typed on any keyboard.
    pub fn from_label(label: &str) -> Option<Weekday> {
        match label.trim().to_lowercase().as_str() {
            "lunes" => Some(Weekday::Lunes),
            "martes" => Some(Weekday::Martes),
            "miércoles" | "miercoles" => Some(Weekday::Miercoles),
            "jueves" => Some(Weekday::Jueves),
            "viernes" => Some(Weekday::Viernes),
            "sábado" | "sabado" => Some(Weekday::Sabado),
            _ => None,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Color tag for a session block. Purely cosmetic; the renderer decides
/// what each name looks like.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    Pink,
    Blue,
    Purple,
    Green,
    Orange,
}

impl Default for ColorTheme {
    fn default() -> Self {
        ColorTheme::Pink
    }
}

impl ColorTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Pink => "pink",
            ColorTheme::Blue => "blue",
            ColorTheme::Purple => "purple",
            ColorTheme::Green => "green",
            ColorTheme::Orange => "orange",
        }
    }

    pub fn from_name(name: &str) -> Option<ColorTheme> {
        match name.trim().to_lowercase().as_str() {
            "pink" => Some(ColorTheme::Pink),
            "blue" => Some(ColorTheme::Blue),
            "purple" => Some(ColorTheme::Purple),
            "green" => Some(ColorTheme::Green),
            "orange" => Some(ColorTheme::Orange),
            _ => None,
        }
    }
}

/// A placed course session. Instances come out of `CourseDraft::validate`
/// or a stored snapshot; the id is minted once and never reused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseSession {
    pub id: String,
    pub name: String,
    pub professor: String,
    pub room: String,
    pub credits: u8,
    pub day: Weekday,
    pub start_time: u8,
    pub end_time: u8,
    pub color_theme: ColorTheme,
}

impl CourseSession {
    /// True when both sessions sit on the same day and their hour ranges
    /// intersect. Back-to-back blocks do not overlap.
    pub fn overlaps(&self, other: &CourseSession) -> bool {
        self.day == other.day
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }
}

/// User-entered field values, nothing checked yet. `validate` turns a
/// draft into a `CourseSession` or reports the first broken rule.
#[derive(Debug, Clone, Default)]
pub struct CourseDraft {
    pub name: String,
    pub professor: String,
    pub room: String,
    pub credits: i64,
    pub day: String,
    pub start_time: i64,
    pub end_time: i64,
    pub color_theme: ColorTheme,
}

/// First broken rule for a draft, addressed to the input field that owns
/// it so a form can highlight the right control.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl CourseDraft {
    /// Checks fields in a fixed order (name, professor, room, credits,
    /// day, start, end, start-before-end) and stops at the first
    /// violation. On success the session carries the trimmed text and a
    /// fresh v4 id.
    pub fn validate(&self) -> Result<CourseSession, ValidationError> {
        let name = required_text("name", &self.name)?;
        let professor = required_text("professor", &self.professor)?;
        let room = required_text("room", &self.room)?;

        if self.credits < i64::from(MIN_CREDITS) || self.credits > i64::from(MAX_CREDITS) {
            return Err(ValidationError::new(
                "credits",
                format!("must be between {MIN_CREDITS} and {MAX_CREDITS}"),
            ));
        }

        let day = Weekday::from_label(&self.day).ok_or_else(|| {
            ValidationError::new("day", format!("'{}' is not a teaching day", self.day))
        })?;

        let start_time = grid_hour("startTime", self.start_time)?;
        let end_time = grid_hour("endTime", self.end_time)?;
        if end_time <= start_time {
            return Err(ValidationError::new("endTime", "must be after the start hour"));
        }

        Ok(CourseSession {
            id: Uuid::new_v4().to_string(),
            name,
            professor,
            room,
            credits: self.credits as u8,
            day,
            start_time,
            end_time,
            color_theme: self.color_theme,
        })
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn grid_hour(field: &'static str, value: i64) -> Result<u8, ValidationError> {
    if value < i64::from(FIRST_HOUR) || value > i64::from(LAST_HOUR) {
        return Err(ValidationError::new(
            field,
            format!("must be an hour between {FIRST_HOUR} and {LAST_HOUR}"),
        ));
    }
    Ok(value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physics_draft() -> CourseDraft {
        CourseDraft {
            name: "Física I".into(),
            professor: "Dr. X".into(),
            room: "A1".into(),
            credits: 3,
            day: "Martes".into(),
            start_time: 14,
            end_time: 16,
            color_theme: ColorTheme::Green,
        }
    }

    fn field_of(draft: CourseDraft) -> &'static str {
        draft.validate().expect_err("draft should be rejected").field
    }

    #[test]
    fn valid_draft_becomes_a_session_with_trimmed_text() {
        let draft = CourseDraft {
            name: "  Física I ".into(),
            professor: " Dr. X".into(),
            room: "A1  ".into(),
            ..physics_draft()
        };

        let session = draft.validate().expect("draft is valid");
        assert_eq!(session.name, "Física I");
        assert_eq!(session.professor, "Dr. X");
        assert_eq!(session.room, "A1");
        assert_eq!(session.credits, 3);
        assert_eq!(session.day, Weekday::Martes);
        assert_eq!(session.start_time, 14);
        assert_eq!(session.end_time, 16);
        assert_eq!(session.color_theme, ColorTheme::Green);
        assert!(!session.id.is_empty());
    }

    #[test]
    fn each_session_gets_its_own_id() {
        let first = physics_draft().validate().expect("valid");
        let second = physics_draft().validate().expect("valid");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn rejects_blank_text_fields() {
        assert_eq!(field_of(CourseDraft { name: "   ".into(), ..physics_draft() }), "name");
        assert_eq!(
            field_of(CourseDraft { professor: String::new(), ..physics_draft() }),
            "professor"
        );
        assert_eq!(field_of(CourseDraft { room: " ".into(), ..physics_draft() }), "room");
    }

    #[test]
    fn rejects_credits_outside_one_to_ten() {
        assert_eq!(field_of(CourseDraft { credits: 0, ..physics_draft() }), "credits");
        assert_eq!(field_of(CourseDraft { credits: 11, ..physics_draft() }), "credits");
        assert!(CourseDraft { credits: 1, ..physics_draft() }.validate().is_ok());
        assert!(CourseDraft { credits: 10, ..physics_draft() }.validate().is_ok());
    }

    #[test]
    fn rejects_days_off_the_teaching_week() {
        assert_eq!(field_of(CourseDraft { day: "Domingo".into(), ..physics_draft() }), "day");
        assert_eq!(field_of(CourseDraft { day: String::new(), ..physics_draft() }), "day");
    }

    #[test]
    fn rejects_hours_outside_the_grid() {
        assert_eq!(field_of(CourseDraft { start_time: 5, ..physics_draft() }), "startTime");
        assert_eq!(field_of(CourseDraft { start_time: 23, ..physics_draft() }), "startTime");
        assert_eq!(field_of(CourseDraft { end_time: 23, ..physics_draft() }), "endTime");
    }

    #[test]
    fn rejects_sessions_that_do_not_run_forward() {
        let equal = CourseDraft { start_time: 10, end_time: 10, ..physics_draft() };
        let error = equal.validate().expect_err("zero-length session");
        assert_eq!(error.field, "endTime");
        assert_eq!(error.reason, "must be after the start hour");

        let backwards = CourseDraft { start_time: 16, end_time: 14, ..physics_draft() };
        assert_eq!(backwards.validate().expect_err("runs backwards").field, "endTime");
    }

    #[test]
    fn reports_only_the_first_violation() {
        let draft = CourseDraft {
            name: String::new(),
            credits: 0,
            day: "Domingo".into(),
            ..physics_draft()
        };
        assert_eq!(field_of(draft), "name");
    }

    #[test]
    fn day_labels_parse_with_or_without_accents() {
        assert_eq!(Weekday::from_label("Miércoles"), Some(Weekday::Miercoles));
        assert_eq!(Weekday::from_label("miercoles"), Some(Weekday::Miercoles));
        assert_eq!(Weekday::from_label("SÁBADO"), Some(Weekday::Sabado));
        assert_eq!(Weekday::from_label("sabado"), Some(Weekday::Sabado));
        assert_eq!(Weekday::from_label("Domingo"), None);
    }

    #[test]
    fn sessions_serialize_with_the_exported_key_spelling() {
        let session = physics_draft().validate().expect("valid");
        let json = serde_json::to_string(&session).expect("serializes");
        assert!(json.contains("\"startTime\":14"));
        assert!(json.contains("\"endTime\":16"));
        assert!(json.contains("\"colorTheme\":\"green\""));
        assert!(json.contains("\"day\":\"Martes\""));
    }

    #[test]
    fn accented_day_labels_round_trip() {
        let mut session = physics_draft().validate().expect("valid");
        session.day = Weekday::Miercoles;
        let json = serde_json::to_string(&session).expect("serializes");
        assert!(json.contains("\"day\":\"Miércoles\""));

        let back: CourseSession = serde_json::from_str(&json).expect("parses");
        assert_eq!(back.day, Weekday::Miercoles);
    }

    #[test]
    fn overlap_needs_shared_day_and_crossing_hours() {
        let base = physics_draft().validate().expect("valid");

        let mut crossing = base.clone();
        crossing.id = "other".into();
        crossing.start_time = 15;
        crossing.end_time = 17;
        assert!(base.overlaps(&crossing));

        let mut back_to_back = base.clone();
        back_to_back.id = "other".into();
        back_to_back.start_time = 16;
        back_to_back.end_time = 18;
        assert!(!base.overlaps(&back_to_back));

        let mut other_day = crossing.clone();
        other_day.day = Weekday::Jueves;
        assert!(!base.overlaps(&other_day));
    }
}
