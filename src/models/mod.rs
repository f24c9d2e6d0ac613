pub mod course;

pub use course::{
    ColorTheme, CourseDraft, CourseSession, ValidationError, Weekday, MAX_CREDITS, MIN_CREDITS,
};
