/*!
 * First-Come-First-Served
 */

use super::super::entry::{arrival_order, Entry};
use super::super::run::Run;

/// Run every process to completion in arrival order (ties by declaration
/// order), idling across gaps between arrivals
pub(in crate::scheduler) fn run(run: &mut Run<'_>, entries: &[Entry]) {
    for index in arrival_order(entries) {
        let entry = &entries[index];
        run.idle_until(entry.arrival);
        run.execute(index, entry.burst);
    }
}
