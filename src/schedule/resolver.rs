use std::collections::BTreeSet;

use super::availability::AvailabilityIndex;
use super::time_utils::duration_minutes;
use super::types::{AvailabilityRule, ConflictReason, LessonRequest, LessonType, Verdict};

/// Checks whether the requested date/time range falls inside the
/// instructor's availability window. All four bounds are independent.
fn check_availability_range(
    request: &LessonRequest,
    rule: &AvailabilityRule,
    reasons: &mut BTreeSet<ConflictReason>,
) {
    if request.start_date < rule.min_date
        || request.end_date > rule.max_date
        || request.start_time < rule.min_time
        || request.end_time > rule.max_time
    {
        reasons.insert(ConflictReason::InstructorNotAvailable);
    }
}

/// Checks the requested duration against the instructor's block length:
/// private lessons must be a whole number of blocks, group lessons exactly one.
fn check_duration(
    request: &LessonRequest,
    rule: &AvailabilityRule,
    reasons: &mut BTreeSet<ConflictReason>,
) {
    let unit = rule.unit_duration.minutes();
    let valid = match duration_minutes(&request.start_time, &request.end_time) {
        Some(duration) => match request.lesson_type {
            LessonType::Private => duration % unit == 0,
            LessonType::Group => duration == unit,
        },
        None => false,
    };
    if !valid {
        reasons.insert(ConflictReason::InvalidLessonDuration);
    }
}

/// True when the two lessons' date spans intersect. Inclusive on both
/// ends: sharing a boundary date counts as overlapping.
fn dates_overlap(a: &LessonRequest, b: &LessonRequest) -> bool {
    a.start_date <= b.end_date && a.end_date >= b.start_date
}

/// True when the two lessons' clock-time spans intersect. Half-open
/// intervals: a lesson ending exactly when the other starts does not
/// overlap. Asymmetric with the inclusive date test on purpose; changing
/// either side changes which back-to-back bookings conflict.
fn times_overlap(a: &LessonRequest, b: &LessonRequest) -> bool {
    a.start_time < b.end_time && b.start_time < a.end_time
}

fn lessons_overlap(a: &LessonRequest, b: &LessonRequest) -> bool {
    dates_overlap(a, b) && times_overlap(a, b)
}

/// True when `lesson`'s date/time span fully contains the request's span,
/// i.e. the request joins the same group session rather than merely
/// overlapping it.
fn subsumes(lesson: &LessonRequest, request: &LessonRequest) -> bool {
    request.start_date >= lesson.start_date
        && request.end_date <= lesson.end_date
        && request.start_time >= lesson.start_time
        && request.end_time <= lesson.end_time
}

/// Compares the request against one previously accepted lesson and records
/// any instructor/student double-booking. A single accepted lesson can
/// contribute both reasons.
fn check_overlap(
    request: &LessonRequest,
    accepted: &LessonRequest,
    reasons: &mut BTreeSet<ConflictReason>,
) {
    if !lessons_overlap(request, accepted) {
        return;
    }
    if accepted.instructor_name.eq_ignore_ascii_case(&request.instructor_name) {
        reasons.insert(ConflictReason::InstructorNotAvailable);
    }
    if accepted.student_name == request.student_name {
        reasons.insert(ConflictReason::StudentNotAvailable);
    }
}

/// Resolves one request against the availability index and the lessons
/// accepted so far this run. Every applicable reason is collected; nothing
/// here is a fatal error. The pool is not consulted when no rule matches,
/// since there is nothing to validate the request against.
pub fn resolve_request(
    request: &LessonRequest,
    index: &AvailabilityIndex,
    accepted_lessons: &[LessonRequest],
) -> Verdict {
    let mut reasons = BTreeSet::new();

    let rule = match index.find(&request.instructor_name, request.lesson_type) {
        Some(rule) => rule,
        None => {
            reasons.insert(ConflictReason::InstructorNotFound);
            return Verdict::Rejected(reasons);
        }
    };

    check_availability_range(request, rule, &mut reasons);
    check_duration(request, rule, &mut reasons);

    match request.lesson_type {
        LessonType::Group => {
            // Accepted group lessons whose slot contains this request are
            // the same session; everything else goes through the plain
            // overlap test.
            let mut session_students = 0u32;
            for lesson in accepted_lessons {
                let same_session = lesson.lesson_type == LessonType::Group
                    && lesson.instructor_name.eq_ignore_ascii_case(&request.instructor_name)
                    && subsumes(lesson, request);
                if same_session {
                    if lesson.student_name == request.student_name {
                        reasons.insert(ConflictReason::StudentNotAvailable);
                    } else {
                        session_students += 1;
                    }
                } else {
                    check_overlap(request, lesson, &mut reasons);
                }
            }
            if session_students >= rule.group_capacity {
                reasons.insert(ConflictReason::InstructorNotAvailable);
            }
        }
        LessonType::Private => {
            for lesson in accepted_lessons {
                check_overlap(request, lesson, &mut reasons);
            }
        }
    }

    if reasons.is_empty() {
        Verdict::Accepted
    } else {
        Verdict::Rejected(reasons)
    }
}
