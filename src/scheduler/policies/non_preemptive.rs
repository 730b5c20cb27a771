/*!
 * Non-Preemptive Selection
 * Shared control loop for SJF and Priority scheduling
 */

use super::super::entry::{ArrivalCursor, Entry, ReadyHeap, SelectionKey};
use super::super::run::Run;

/// Whenever the CPU frees up, pick the arrived process with the smallest
/// key and run it to completion
pub(super) fn run_by_key(run: &mut Run<'_>, entries: &[Entry], key: fn(&Entry) -> SelectionKey) {
    let mut arrivals = ArrivalCursor::new(entries);
    let mut ready = ReadyHeap::new();

    loop {
        arrivals.admit(run.now(), |index| ready.push(key(&entries[index])));

        if let Some(index) = ready.pop() {
            run.execute(index, entries[index].burst);
        } else if let Some(next) = arrivals.next_arrival() {
            run.idle_until(next);
        } else {
            break;
        }
    }
}
