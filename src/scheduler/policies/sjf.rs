/*!
 * Shortest Job First (non-preemptive)
 */

use super::super::entry::{Entry, SelectionKey};
use super::super::run::Run;
use super::non_preemptive::run_by_key;

/// Smallest burst among arrived processes; a running job is never preempted
pub(in crate::scheduler) fn run(run: &mut Run<'_>, entries: &[Entry]) {
    run_by_key(run, entries, SelectionKey::burst);
}
