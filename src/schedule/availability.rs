use super::types::{AvailabilityRule, LessonType};

/// Read-only index over the instructor availability rules loaded for a run.
/// Holds at most one rule per (instructor, lesson type) pair; the first
/// matching rule in load order wins.
#[derive(Debug, Default)]
pub struct AvailabilityIndex {
    rules: Vec<AvailabilityRule>,
}

impl AvailabilityIndex {
    pub fn new(rules: Vec<AvailabilityRule>) -> AvailabilityIndex {
        AvailabilityIndex { rules }
    }

    /// Looks up the rule for an instructor and lesson type.
    /// Instructor names match case-insensitively, lesson types exactly.
    pub fn find(&self, instructor_name: &str, lesson_type: LessonType) -> Option<&AvailabilityRule> {
        self.rules.iter().find(|rule| {
            rule.lesson_type == lesson_type
                && rule.instructor_name.eq_ignore_ascii_case(instructor_name)
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::UnitDuration;

    fn rule(name: &str, lesson_type: LessonType) -> AvailabilityRule {
        AvailabilityRule {
            instructor_name: name.to_string(),
            lesson_type,
            min_date: "2016-01-01".to_string(),
            max_date: "2016-01-31".to_string(),
            min_time: "09:00".to_string(),
            max_time: "17:00".to_string(),
            group_capacity: 4,
            unit_duration: UnitDuration::Min60,
        }
    }

    #[test]
    fn finds_instructor_ignoring_case() {
        let index = AvailabilityIndex::new(vec![rule("Smith", LessonType::Private)]);
        assert!(index.find("smith", LessonType::Private).is_some());
        assert!(index.find("SMITH", LessonType::Private).is_some());
    }

    #[test]
    fn lesson_type_must_match_exactly() {
        let index = AvailabilityIndex::new(vec![rule("Smith", LessonType::Private)]);
        assert!(index.find("Smith", LessonType::Group).is_none());
    }

    #[test]
    fn unknown_instructor_is_not_found() {
        let index = AvailabilityIndex::new(vec![rule("Smith", LessonType::Private)]);
        assert!(index.find("Jones", LessonType::Private).is_none());
    }

    #[test]
    fn reports_emptiness() {
        assert!(AvailabilityIndex::default().is_empty());
        let index = AvailabilityIndex::new(vec![rule("Smith", LessonType::Private)]);
        assert!(!index.is_empty());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn first_rule_wins_for_duplicate_pairs() {
        let mut second = rule("Smith", LessonType::Private);
        second.unit_duration = UnitDuration::Min30;
        let index = AvailabilityIndex::new(vec![rule("Smith", LessonType::Private), second]);
        let found = index.find("smith", LessonType::Private).unwrap();
        assert_eq!(found.unit_duration, UnitDuration::Min60);
    }
}
