use std::fs::File;
use std::path::Path;

use crate::schedule::{ConflictReport, RunOutcome};

/// Prints one conflict in the terminal report format
pub fn print_conflict(conflict: &ConflictReport) {
    println!("Conflict: request {} ({})", conflict.request_id, conflict.reasons.join(", "));
}

/// Prints the run summary after all requests have been processed
pub fn print_run_summary(outcome: &RunOutcome) {
    println!("\n=== Run Summary ===");
    println!("Lessons scheduled: {}", outcome.accepted.len());
    println!("Conflicts found: {}", outcome.conflicts.len());
}

/// Writes the full run outcome (accepted lessons and conflicts) to a JSON file
pub fn write_json_report<P: AsRef<Path>>(path: P, outcome: &RunOutcome) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, outcome)?;
    Ok(())
}
