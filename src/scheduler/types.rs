/*!
 * Scheduler Types
 * Algorithm selection and Round Robin quantum
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Ticks;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Round Robin time quantum (at least one tick)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantum(Ticks);

impl Quantum {
    pub fn new(ticks: Ticks) -> SchedulerResult<Self> {
        if ticks < 1 {
            return Err(SchedulerError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Ticks::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Scheduling discipline
///
/// One variant per strategy; parameters travel with the variant that needs
/// them, so a Round Robin selection always carries a valid quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served, non-preemptive
    Fcfs,
    /// Shortest Job First, non-preemptive
    Sjf,
    /// Shortest Remaining Time First, preemptive
    Srtf,
    /// Round Robin with a fixed quantum
    RoundRobin { quantum: Quantum },
    /// Priority (lower value first), non-preemptive
    Priority,
}

impl Algorithm {
    /// Round Robin with a quantum validated up front
    pub fn round_robin(quantum: Ticks) -> SchedulerResult<Self> {
        Ok(Self::RoundRobin {
            quantum: Quantum::new(quantum)?,
        })
    }

    /// Parse from a name; `quantum` is required for Round Robin only
    pub fn from_name(name: &str, quantum: Option<Ticks>) -> SchedulerResult<Self> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "srtf" | "srt" | "shortest_remaining_time_first" => Ok(Self::Srtf),
            "rr" | "round_robin" | "roundrobin" => match quantum {
                Some(ticks) => Self::round_robin(ticks),
                None => Err(SchedulerError::MissingQuantum(name.into())),
            },
            "priority" | "prio" => Ok(Self::Priority),
            _ => Err(SchedulerError::UnknownAlgorithm(name.into())),
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::RoundRobin { .. } => "round_robin",
            Self::Priority => "priority",
        }
    }

    /// Human-readable name for reports
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come, First-Served",
            Self::Sjf => "Shortest Job First",
            Self::Srtf => "Shortest Remaining Time First",
            Self::RoundRobin { .. } => "Round Robin",
            Self::Priority => "Priority (non-preemptive)",
        }
    }

    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin { .. })
    }

    pub const fn quantum(&self) -> Option<Quantum> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => {
                write!(f, "{} (quantum {})", self.display_name(), quantum.ticks())
            }
            _ => f.write_str(self.display_name()),
        }
    }
}
