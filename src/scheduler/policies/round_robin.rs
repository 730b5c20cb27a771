/*!
 * Round Robin
 */

use super::super::entry::{ArrivalCursor, Entry};
use super::super::run::Run;
use super::super::types::Quantum;
use std::collections::VecDeque;
use tracing::trace;

/// Quantum-based preemptive scheduling over a FIFO ready queue
///
/// Processes arriving during a slice (arrival <= slice end) are queued
/// before the preempted process goes back to the tail.
pub(in crate::scheduler) fn run(run: &mut Run<'_>, entries: &mut [Entry], quantum: Quantum) {
    let mut arrivals = ArrivalCursor::new(entries);
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(entries.len());

    arrivals.admit(run.now(), |index| queue.push_back(index));

    loop {
        let Some(index) = queue.pop_front() else {
            match arrivals.next_arrival() {
                Some(next) => {
                    run.idle_until(next);
                    arrivals.admit(next, |index| queue.push_back(index));
                    continue;
                }
                None => break,
            }
        };

        let slice = entries[index].remaining.min(quantum.ticks());
        let end = run.execute_slice(index, slice);
        entries[index].remaining -= slice;

        arrivals.admit(end, |index| queue.push_back(index));

        if entries[index].remaining > 0 {
            trace!(index, remaining = entries[index].remaining, "requeue");
            queue.push_back(index);
        }
    }
}
