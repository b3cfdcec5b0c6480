use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};

/// Kind of lesson an instructor offers or a student requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonType {
    Private,
    Group,
}

impl LessonType {
    /// Parses a lesson type from its CSV representation ("private"/"group", any case)
    pub fn parse(value: &str) -> Option<LessonType> {
        match value.trim().to_lowercase().as_str() {
            "private" => Some(LessonType::Private),
            "group" => Some(LessonType::Group),
            _ => None,
        }
    }
}

/// Canonical block length for an instructor/lesson-type pair.
/// Private lessons book whole multiples of it, group lessons exactly one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitDuration {
    Min30,
    Min45,
    Min60,
}

impl UnitDuration {
    pub fn minutes(self) -> u32 {
        match self {
            UnitDuration::Min30 => 30,
            UnitDuration::Min45 => 45,
            UnitDuration::Min60 => 60,
        }
    }

    pub fn from_minutes(minutes: u32) -> Option<UnitDuration> {
        match minutes {
            30 => Some(UnitDuration::Min30),
            45 => Some(UnitDuration::Min45),
            60 => Some(UnitDuration::Min60),
            _ => None,
        }
    }
}

/// One instructor's availability window for one lesson type.
/// Dates and times are zero-padded strings comparable lexically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRule {
    pub instructor_name: String,
    pub lesson_type: LessonType,
    pub min_date: String,
    pub max_date: String,
    pub min_time: String,
    pub max_time: String,
    pub group_capacity: u32,
    pub unit_duration: UnitDuration,
}

/// A single lesson-booking request. Accepted requests are kept as-is in the
/// accepted-lesson pool for the rest of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonRequest {
    pub id: String,
    pub student_name: String,
    pub lesson_type: LessonType,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub instructor_name: String,
}

/// Why a request could not be scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConflictReason {
    InstructorNotFound,
    InstructorNotAvailable,
    InvalidLessonDuration,
    StudentNotAvailable,
}

impl ConflictReason {
    /// Stable label used in terminal and JSON reports
    pub fn label(self) -> &'static str {
        match self {
            ConflictReason::InstructorNotFound => "instructor not found",
            ConflictReason::InstructorNotAvailable => "instructor not available",
            ConflictReason::InvalidLessonDuration => "invalid lesson duration",
            ConflictReason::StudentNotAvailable => "student not available",
        }
    }
}

/// Outcome of resolving one request. A rejection always carries at least
/// one reason; the set is deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(BTreeSet<ConflictReason>),
}
