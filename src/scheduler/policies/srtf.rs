/*!
 * Shortest Remaining Time First (preemptive)
 */

use super::super::entry::{ArrivalCursor, Entry, ReadyHeap, SelectionKey};
use super::super::run::Run;

/// Preemptive shortest-remaining-time scheduling
///
/// Selection can only change when a process arrives or completes, so the
/// chosen process runs until the earlier of its completion and the next
/// arrival. Consecutive stretches of the same process merge into one
/// interval, giving the same timeline as a tick-by-tick simulation.
pub(in crate::scheduler) fn run(run: &mut Run<'_>, entries: &mut [Entry]) {
    let mut arrivals = ArrivalCursor::new(entries);
    let mut ready = ReadyHeap::new();

    loop {
        arrivals.admit(run.now(), |index| {
            ready.push(SelectionKey::remaining(&entries[index]))
        });

        let Some(index) = ready.pop() else {
            match arrivals.next_arrival() {
                Some(next) => {
                    run.idle_until(next);
                    continue;
                }
                None => break,
            }
        };

        let entry = &mut entries[index];
        let slice = match arrivals.next_arrival() {
            Some(next) => entry.remaining.min(next - run.now()),
            None => entry.remaining,
        };
        run.execute(index, slice);
        entry.remaining -= slice;

        if entry.remaining > 0 {
            ready.push(SelectionKey::remaining(entry));
        }
    }
}
