mod availability;
mod driver;
mod resolver;
mod time_utils;
mod types;

pub use availability::AvailabilityIndex;
pub use driver::{process_requests, ConflictReport, RunOutcome};
pub use resolver::resolve_request;
pub use time_utils::parse_time_to_minutes;
pub use types::{AvailabilityRule, ConflictReason, LessonRequest, LessonType, UnitDuration, Verdict};
