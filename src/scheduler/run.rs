/*!
 * Scheduling Run
 * Simulation clock and timeline builder for a single run
 */

use super::timeline::{Occupant, Timeline};
use crate::core::types::{DeclIndex, Ticks};
use crate::process::Process;
use tracing::trace;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RunState {
    NotStarted,
    Scheduling,
    Completed,
}

/// Owns the clock and the timeline under construction
///
/// A run is created per `schedule` call and consumed by [`Run::finish`], so a
/// completed run cannot be resumed or reused.
#[derive(Debug)]
pub(super) struct Run<'a> {
    processes: &'a [Process],
    state: RunState,
    clock: Ticks,
    timeline: Timeline,
}

impl<'a> Run<'a> {
    pub fn new(processes: &'a [Process]) -> Self {
        Self {
            processes,
            state: RunState::NotStarted,
            clock: 0,
            timeline: Timeline::new(),
        }
    }

    /// Enter the `Scheduling` state; called once validation has passed
    pub fn start(&mut self) {
        self.transition(RunState::Scheduling);
    }

    #[inline(always)]
    pub fn now(&self) -> Ticks {
        self.clock
    }

    /// Advance the clock to `tick`, recording the gap as idle time
    ///
    /// Has no effect when `tick` is not in the future.
    pub fn idle_until(&mut self, tick: Ticks) {
        debug_assert_eq!(self.state, RunState::Scheduling);
        if tick > self.clock {
            trace!(from = self.clock, to = tick, "cpu idle");
            self.timeline.extend(Occupant::Idle, self.clock, tick);
            self.clock = tick;
        }
    }

    /// Run a process for `duration` ticks, extending its current interval
    /// if it was already running; returns the new clock
    pub fn execute(&mut self, index: DeclIndex, duration: Ticks) -> Ticks {
        let occupant = self.occupant(index, duration);
        let start = self.clock;
        self.clock += duration;
        self.timeline.extend(occupant, start, self.clock);
        self.clock
    }

    /// Run a process for one bounded slice recorded as its own interval;
    /// returns the new clock
    pub fn execute_slice(&mut self, index: DeclIndex, duration: Ticks) -> Ticks {
        let occupant = self.occupant(index, duration);
        let start = self.clock;
        self.clock += duration;
        self.timeline.push_slice(occupant, start, self.clock);
        self.clock
    }

    fn occupant(&self, index: DeclIndex, duration: Ticks) -> Occupant {
        debug_assert_eq!(self.state, RunState::Scheduling);
        debug_assert!(duration > 0, "slices must advance the clock");
        let pid = &self.processes[index].id;
        trace!(pid = %pid, start = self.clock, duration, "dispatch");
        Occupant::Process(pid.clone())
    }

    /// Enter the terminal `Completed` state and hand over the timeline
    pub fn finish(mut self) -> Timeline {
        self.transition(RunState::Completed);
        self.timeline
    }

    fn transition(&mut self, to: RunState) {
        let legal = matches!(
            (self.state, to),
            (RunState::NotStarted, RunState::Scheduling)
                | (RunState::Scheduling, RunState::Completed)
        );
        debug_assert!(legal, "illegal run transition {:?} -> {:?}", self.state, to);
        trace!(from = ?self.state, to = ?to, "run state");
        self.state = to;
    }
}
