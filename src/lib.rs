/*!
 * CPU Scheduling Engine
 * Deterministic FCFS, SJF, SRTF, Round Robin and Priority scheduling exposed as a library
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;

// Re-exports
pub use config::{Command, EngineConfig, InputSource, OutputFormat, RunConfig};
pub use crate::core::errors::*;
pub use crate::core::types::{DeclIndex, Priority, Ticks};
pub use monitoring::init_tracing;
pub use process::{parse_input, validate, Preset, Process, ProcessId};
pub use report::{render_error_json, render_json, render_text};
pub use scheduler::{
    derive_statistics, schedule, Algorithm, Engine, Occupant, ProcessStatistics, Quantum,
    Schedule, ScheduleSummary, Timeline, TimelineInterval,
};
