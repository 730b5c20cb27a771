/*!
 * Scheduling Engine
 * Computes CPU timelines and per-process statistics for a fixed process set
 *
 * A run is a pure function of `(processes, algorithm, config)`:
 * validate -> simulate -> derive statistics. Each call owns its scratch
 * state, so repeated calls with the same input give identical output.
 */

mod entry;
mod policies;
mod run;
pub mod stats;
pub mod timeline;
pub mod types;

use crate::config::EngineConfig;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Ticks;
use crate::monitoring::{log_run_summary, span_run};
use crate::process::{validate, Process, ProcessId};
use entry::Entry;
use policies::{fcfs, priority, round_robin, sjf, srtf};
use run::Run;
use serde::{Deserialize, Serialize};
use tracing::debug;

// Re-export public API
pub use stats::{derive_statistics, ProcessStatistics, ScheduleSummary};
pub use timeline::{Occupant, Timeline, TimelineInterval};
pub use types::{Algorithm, Quantum};

/// Result of one scheduling run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub algorithm: Algorithm,
    pub timeline: Timeline,
    /// One entry per process, in declaration order
    pub statistics: Vec<ProcessStatistics>,
}

impl Schedule {
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::from_parts(&self.statistics, &self.timeline)
    }

    pub fn statistics_for(&self, pid: &ProcessId) -> Option<&ProcessStatistics> {
        self.statistics.iter().find(|stats| &stats.pid == pid)
    }
}

/// Scheduling engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate the process set and schedule it under `algorithm`
    ///
    /// An empty process set yields an empty timeline and no statistics.
    pub fn schedule(&self, processes: &[Process], algorithm: Algorithm) -> SchedulerResult<Schedule> {
        let span = span_run(algorithm.as_str(), processes.len());
        let _guard = span.enter();

        let checked = validate(processes).and_then(|()| self.check_limit(processes));
        if let Err(err) = checked {
            span.record_error(&err.to_string());
            debug!(error = %err, "process set refused");
            return Err(err);
        }

        let mut run = Run::new(processes);
        run.start();

        let mut entries = Entry::table(processes);
        match algorithm {
            Algorithm::Fcfs => fcfs::run(&mut run, &entries),
            Algorithm::Sjf => sjf::run(&mut run, &entries),
            Algorithm::Srtf => srtf::run(&mut run, &mut entries),
            Algorithm::RoundRobin { quantum } => round_robin::run(&mut run, &mut entries, quantum),
            Algorithm::Priority => priority::run(&mut run, &entries),
        }

        let timeline = run.finish();
        let statistics = derive_statistics(processes, &timeline);

        span.record_timeline(timeline.len(), timeline.makespan());
        log_run_summary(
            algorithm.as_str(),
            processes.len(),
            timeline.makespan(),
            timeline.len(),
        );

        Ok(Schedule {
            algorithm,
            timeline,
            statistics,
        })
    }

    /// Refuse sets whose worst-case makespan, `max(arrival) + sum(burst)`,
    /// exceeds the configured bound
    ///
    /// A worst case that does not fit in `Ticks` is refused under any limit,
    /// since the simulation clock could not represent it.
    fn check_limit(&self, processes: &[Process]) -> SchedulerResult<()> {
        let last_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
        let required = processes
            .iter()
            .try_fold(last_arrival, |acc: Ticks, p| acc.checked_add(p.burst));

        match required {
            Some(required) if required <= self.config.max_ticks => Ok(()),
            required => Err(SchedulerError::SimulationLimitExceeded {
                required: required.unwrap_or(Ticks::MAX),
                limit: self.config.max_ticks,
            }),
        }
    }
}

impl Algorithm {
    /// Schedule `processes` with this algorithm under the default engine
    /// configuration
    pub fn schedule(&self, processes: &[Process]) -> SchedulerResult<Schedule> {
        Engine::default().schedule(processes, *self)
    }
}

/// Schedule `processes` under `algorithm` with the default configuration
pub fn schedule(processes: &[Process], algorithm: Algorithm) -> SchedulerResult<Schedule> {
    Engine::default().schedule(processes, algorithm)
}
