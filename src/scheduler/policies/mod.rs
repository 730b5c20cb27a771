/*!
 * Scheduling Policies
 * One module per discipline; each drives a `Run` to completion
 */

pub(super) mod fcfs;
mod non_preemptive;
pub(super) mod priority;
pub(super) mod round_robin;
pub(super) mod sjf;
pub(super) mod srtf;
