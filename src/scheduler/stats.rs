/*!
 * Scheduler Statistics
 * Per-process metrics and run summaries derived from a timeline
 */

use super::timeline::Timeline;
use crate::core::types::{Priority, Ticks};
use crate::process::{Process, ProcessId};
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metrics for one process, derived from its intervals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStatistics {
    pub pid: ProcessId,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
    /// End of the last interval
    pub completion: Ticks,
    /// `completion - arrival`
    pub turnaround: Ticks,
    /// `turnaround - burst`
    pub waiting: Ticks,
    /// First start minus arrival
    pub response: Ticks,
}

/// Derive per-process statistics in declaration order
///
/// Uses the same formulas for every algorithm. Processes that never appear
/// in the timeline are left out.
pub fn derive_statistics(processes: &[Process], timeline: &Timeline) -> Vec<ProcessStatistics> {
    // pid -> (first start, last end)
    let mut spans: HashMap<&ProcessId, (Ticks, Ticks), RandomState> =
        HashMap::with_capacity_and_hasher(processes.len(), RandomState::new());

    for interval in timeline {
        if let Some(pid) = interval.occupant.process() {
            spans
                .entry(pid)
                .and_modify(|span| span.1 = interval.end)
                .or_insert((interval.start, interval.end));
        }
    }

    processes
        .iter()
        .filter_map(|process| {
            let &(first_start, completion) = spans.get(&process.id)?;
            let turnaround = completion - process.arrival;
            Some(ProcessStatistics {
                pid: process.id.clone(),
                arrival: process.arrival,
                burst: process.burst,
                priority: process.effective_priority(),
                completion,
                turnaround,
                waiting: turnaround - process.burst,
                response: first_start - process.arrival,
            })
        })
        .collect()
}

/// Aggregate view of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub processes: usize,
    pub makespan: Ticks,
    pub busy_time: Ticks,
    pub idle_time: Ticks,
    pub average_turnaround: f64,
    pub average_waiting: f64,
    pub average_response: f64,
    /// `busy_time / makespan`, 0 for an empty run
    pub cpu_utilization: f64,
    /// Completed processes per tick
    pub throughput: f64,
    pub context_switches: usize,
}

impl ScheduleSummary {
    pub fn from_parts(statistics: &[ProcessStatistics], timeline: &Timeline) -> Self {
        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();

        Self {
            processes: statistics.len(),
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            average_turnaround: mean(statistics.iter().map(|s| s.turnaround)),
            average_waiting: mean(statistics.iter().map(|s| s.waiting)),
            average_response: mean(statistics.iter().map(|s| s.response)),
            cpu_utilization: ratio(busy_time, makespan),
            throughput: ratio(statistics.len() as i64, makespan),
            context_switches: timeline.context_switches(),
        }
    }
}

fn mean(values: impl ExactSizeIterator<Item = Ticks>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<Ticks>() as f64 / count as f64
}

fn ratio(numerator: i64, denominator: Ticks) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
