use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

use crate::schedule::{parse_time_to_minutes, AvailabilityRule, LessonRequest, LessonType, UnitDuration};

/// Parses a positive integer field, e.g. a group capacity
fn parse_count(value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}

/// Checks that a time field is a valid HH:MM clock time
fn validate_time(value: &str) -> Option<String> {
    let trimmed = value.trim();
    parse_time_to_minutes(trimmed)?;
    Some(trimmed.to_string())
}

/// Checks that a date field is non-empty; dates are kept as strings and
/// only ever compared lexically, so no calendar parsing is needed here.
fn validate_date(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn record_error(file: &str, line: u64, message: &str) -> Box<dyn std::error::Error> {
    format!("{}: record on line {}: {}", file, line, message).into()
}

/// Reads instructor availability rules from headerless CSV records:
/// instructor, lesson type, min date, max date, min time, max time,
/// group capacity, unit duration (minutes).
pub fn read_availability<R: Read>(reader: R) -> Result<Vec<AvailabilityRule>, Box<dyn std::error::Error>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut rules = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.iter().all(|field| field.is_empty()) {
            continue; // Skip blank rows
        }
        if record.len() < 8 {
            return Err(record_error("availability", line, "expected 8 fields"));
        }

        let instructor_name = record[0].to_string();
        if instructor_name.is_empty() {
            return Err(record_error("availability", line, "missing instructor name"));
        }
        let lesson_type = LessonType::parse(&record[1])
            .ok_or_else(|| record_error("availability", line, "lesson type must be private or group"))?;
        let min_date = validate_date(&record[2])
            .ok_or_else(|| record_error("availability", line, "missing min date"))?;
        let max_date = validate_date(&record[3])
            .ok_or_else(|| record_error("availability", line, "missing max date"))?;
        let min_time = validate_time(&record[4])
            .ok_or_else(|| record_error("availability", line, "bad min time"))?;
        let max_time = validate_time(&record[5])
            .ok_or_else(|| record_error("availability", line, "bad max time"))?;
        let group_capacity = parse_count(&record[6])
            .ok_or_else(|| record_error("availability", line, "group capacity must be a positive number"))?;
        let unit_minutes: u32 = record[7]
            .parse()
            .map_err(|_| record_error("availability", line, "bad unit duration"))?;
        let unit_duration = UnitDuration::from_minutes(unit_minutes)
            .ok_or_else(|| record_error("availability", line, "unit duration must be 30, 45 or 60"))?;

        rules.push(AvailabilityRule {
            instructor_name,
            lesson_type,
            min_date,
            max_date,
            min_time,
            max_time,
            group_capacity,
            unit_duration,
        });
    }

    Ok(rules)
}

/// Reads lesson requests from headerless CSV records:
/// id, student, lesson type, start date, end date, start time, end time,
/// instructor. Input order is preserved; the run depends on it.
pub fn read_requests<R: Read>(reader: R) -> Result<Vec<LessonRequest>, Box<dyn std::error::Error>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut requests = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        if record.len() < 8 {
            return Err(record_error("requests", line, "expected 8 fields"));
        }

        let id = record[0].to_string();
        let student_name = record[1].to_string();
        if id.is_empty() || student_name.is_empty() {
            return Err(record_error("requests", line, "missing request id or student name"));
        }
        let lesson_type = LessonType::parse(&record[2])
            .ok_or_else(|| record_error("requests", line, "lesson type must be private or group"))?;
        let start_date = validate_date(&record[3])
            .ok_or_else(|| record_error("requests", line, "missing start date"))?;
        let end_date = validate_date(&record[4])
            .ok_or_else(|| record_error("requests", line, "missing end date"))?;
        let start_time = validate_time(&record[5])
            .ok_or_else(|| record_error("requests", line, "bad start time"))?;
        let end_time = validate_time(&record[6])
            .ok_or_else(|| record_error("requests", line, "bad end time"))?;
        if end_time <= start_time {
            return Err(record_error("requests", line, "end time must be after start time"));
        }
        let instructor_name = record[7].to_string();
        if instructor_name.is_empty() {
            return Err(record_error("requests", line, "missing instructor name"));
        }

        requests.push(LessonRequest {
            id,
            student_name,
            lesson_type,
            start_date,
            end_date,
            start_time,
            end_time,
            instructor_name,
        });
    }

    Ok(requests)
}

/// Loads instructor availability rules from a CSV file
pub fn load_availability<P: AsRef<Path>>(csv_path: P) -> Result<Vec<AvailabilityRule>, Box<dyn std::error::Error>> {
    let file = std::fs::File::open(csv_path)?;
    read_availability(file)
}

/// Loads lesson requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(csv_path: P) -> Result<Vec<LessonRequest>, Box<dyn std::error::Error>> {
    let file = std::fs::File::open(csv_path)?;
    read_requests(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_availability_records() {
        let csv = "Smith,private,2016-01-01,2016-01-31,09:00,17:00,1,60\n\
                   Smith,Group,2016-01-01,2016-01-31,09:00,17:00,4,30\n";
        let rules = read_availability(Cursor::new(csv)).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].instructor_name, "Smith");
        assert_eq!(rules[0].lesson_type, LessonType::Private);
        assert_eq!(rules[0].unit_duration, UnitDuration::Min60);
        assert_eq!(rules[1].lesson_type, LessonType::Group);
        assert_eq!(rules[1].group_capacity, 4);
    }

    #[test]
    fn rejects_unknown_unit_duration() {
        let csv = "Smith,private,2016-01-01,2016-01-31,09:00,17:00,1,90\n";
        let err = read_availability(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("unit duration"));
    }

    #[test]
    fn rejects_bad_time_field() {
        let csv = "Smith,private,2016-01-01,2016-01-31,09:00,25:00,1,60\n";
        let err = read_availability(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("bad max time"));
    }

    #[test]
    fn reads_requests_in_input_order() {
        let csv = "r1,Lee,private,2016-01-15,2016-01-15,10:00,11:00,Smith\n\
                   r2,Kim,group,2016-01-16,2016-01-16,10:00,10:30,Smith\n";
        let requests = read_requests(Cursor::new(csv)).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].id, "r1");
        assert_eq!(requests[1].id, "r2");
        assert_eq!(requests[1].lesson_type, LessonType::Group);
    }

    #[test]
    fn rejects_inverted_time_range() {
        let csv = "r1,Lee,private,2016-01-15,2016-01-15,11:00,10:00,Smith\n";
        let err = read_requests(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("end time"));
    }

    #[test]
    fn skips_blank_rows() {
        let csv = "r1,Lee,private,2016-01-15,2016-01-15,10:00,11:00,Smith\n,,,,,,,\n";
        let requests = read_requests(Cursor::new(csv)).unwrap();
        assert_eq!(requests.len(), 1);
    }
}
