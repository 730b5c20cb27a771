/*!
 * Priority Scheduling (non-preemptive)
 */

use super::super::entry::{Entry, SelectionKey};
use super::super::run::Run;
use super::non_preemptive::run_by_key;

/// Lowest priority value among arrived processes runs to completion
pub(in crate::scheduler) fn run(run: &mut Run<'_>, entries: &[Entry]) {
    run_by_key(run, entries, SelectionKey::priority);
}
