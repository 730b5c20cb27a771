/*!
 * Process Set Validation
 * Rejects malformed process sets before any scheduling starts
 */

use super::types::{Process, ProcessId};
use crate::core::errors::{SchedulerError, SchedulerResult};
use ahash::RandomState;
use std::collections::HashSet;

/// Validate a process set, failing on the first issue in declaration order
///
/// An empty set is valid: it schedules to an empty timeline.
pub fn validate(processes: &[Process]) -> SchedulerResult<()> {
    match issues(processes).next() {
        Some(issue) => Err(issue),
        None => Ok(()),
    }
}

/// Collect every issue in declaration order
///
/// Lets a process-table editor flag all offending rows at once.
pub fn validate_all(processes: &[Process]) -> Vec<SchedulerError> {
    issues(processes).collect()
}

fn issues(processes: &[Process]) -> impl Iterator<Item = SchedulerError> + '_ {
    let mut seen: HashSet<&ProcessId, RandomState> =
        HashSet::with_capacity_and_hasher(processes.len(), RandomState::new());

    processes.iter().flat_map(move |process| {
        let duplicate = !seen.insert(&process.id);
        check_process(process, duplicate)
    })
}

fn check_process(process: &Process, duplicate: bool) -> Vec<SchedulerError> {
    let mut found = Vec::new();

    if duplicate {
        found.push(SchedulerError::DuplicateProcess(process.id.clone()));
    }

    if process.burst <= 0 {
        found.push(SchedulerError::InvalidBurst {
            pid: process.id.clone(),
            burst: process.burst,
        });
    }

    if process.arrival < 0 {
        found.push(SchedulerError::InvalidArrival {
            pid: process.id.clone(),
            arrival: process.arrival,
        });
    }

    found
}
