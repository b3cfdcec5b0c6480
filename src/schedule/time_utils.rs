/// Parses a time string (HH:MM) to minutes since midnight
pub fn parse_time_to_minutes(time_str: &str) -> Option<u32> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hours: u32 = parts[0].parse().ok()?;
    let minutes: u32 = parts[1].parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Length of a lesson in minutes from its start/end clock times.
/// Simple clock arithmetic; lessons never span midnight, so an end time
/// at or before the start time yields None.
pub fn duration_minutes(start_time: &str, end_time: &str) -> Option<u32> {
    let start = parse_time_to_minutes(start_time)?;
    let end = parse_time_to_minutes(end_time)?;
    if end > start {
        Some(end - start)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_times() {
        assert_eq!(parse_time_to_minutes("00:00"), Some(0));
        assert_eq!(parse_time_to_minutes("09:30"), Some(570));
        assert_eq!(parse_time_to_minutes("23:59"), Some(1439));
    }

    #[test]
    fn rejects_malformed_times() {
        assert_eq!(parse_time_to_minutes("24:00"), None);
        assert_eq!(parse_time_to_minutes("12:60"), None);
        assert_eq!(parse_time_to_minutes("noon"), None);
        assert_eq!(parse_time_to_minutes("12"), None);
    }

    #[test]
    fn duration_requires_end_after_start() {
        assert_eq!(duration_minutes("10:00", "11:30"), Some(90));
        assert_eq!(duration_minutes("11:00", "11:00"), None);
        assert_eq!(duration_minutes("11:00", "10:00"), None);
    }
}
