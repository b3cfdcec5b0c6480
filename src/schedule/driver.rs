use serde::{Serialize, Deserialize};

use super::availability::AvailabilityIndex;
use super::resolver::resolve_request;
use super::types::{ConflictReason, LessonRequest, Verdict};

/// One rejected request with its reason labels, ready for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictReport {
    pub request_id: String,
    pub reasons: Vec<String>,
}

impl ConflictReport {
    fn new(request: &LessonRequest, reasons: impl IntoIterator<Item = ConflictReason>) -> ConflictReport {
        ConflictReport {
            request_id: request.id.clone(),
            reasons: reasons.into_iter().map(|r| r.label().to_string()).collect(),
        }
    }
}

/// Result of one full run over the request list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunOutcome {
    pub accepted: Vec<LessonRequest>,
    pub conflicts: Vec<ConflictReport>,
}

/// Runs every request through the resolver in input order. Each accepted
/// request joins the accepted-lesson pool before the next request is
/// resolved, so earlier acceptances decide later verdicts.
pub fn process_requests(index: &AvailabilityIndex, requests: &[LessonRequest]) -> RunOutcome {
    let mut outcome = RunOutcome::default();
    for request in requests {
        match resolve_request(request, index, &outcome.accepted) {
            Verdict::Accepted => outcome.accepted.push(request.clone()),
            Verdict::Rejected(reasons) => outcome.conflicts.push(ConflictReport::new(request, reasons)),
        }
    }
    outcome
}
