use lesson_conflicts::parser::{load_availability, load_requests};
use lesson_conflicts::schedule::{process_requests, AvailabilityIndex};
use lesson_conflicts::display::{print_conflict, print_run_summary, write_json_report};

/// Picks an input path: explicit argument first, then the bundled sample
/// data if present, then the canonical file name in the working directory.
fn resolve_path(arg: Option<&String>, sample: &str, default: &str) -> String {
    if let Some(path) = arg {
        return path.clone();
    }
    if std::path::Path::new(sample).exists() {
        sample.to_string()
    } else {
        default.to_string()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let availability_path = resolve_path(args.get(1), "data/instructor_availability.csv", "instructor_availability.csv");
    let requests_path = resolve_path(args.get(2), "data/input.csv", "input.csv");
    let report_path = args.get(3);

    println!("Loading instructor availability from {}...", availability_path);
    let index = AvailabilityIndex::new(load_availability(&availability_path)?);
    println!("Loaded {} availability rules", index.len());
    if index.is_empty() {
        println!("Warning: no availability rules loaded; every request will conflict");
    }

    println!("Loading lesson requests from {}...", requests_path);
    let requests = load_requests(&requests_path)?;
    println!("Loaded {} lesson requests", requests.len());

    println!("\n=== Checking Requests ===");
    let outcome = process_requests(&index, &requests);
    for conflict in &outcome.conflicts {
        print_conflict(conflict);
    }
    print_run_summary(&outcome);

    if let Some(path) = report_path {
        write_json_report(path, &outcome)?;
        println!("Report saved to {}", path);
    }

    Ok(())
}
