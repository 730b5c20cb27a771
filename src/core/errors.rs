/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::data_structures::InlineString;
use crate::core::types::Ticks;
use crate::process::ProcessId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduling errors with serialization support
///
/// Every variant is raised before a timeline is built; a run either fully
/// succeeds or is refused.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Process {pid} has invalid burst time {burst}")]
    #[diagnostic(
        code(scheduler::invalid_burst),
        help("Every process needs a burst time of at least one tick.")
    )]
    InvalidBurst { pid: ProcessId, burst: Ticks },

    #[error("Process {pid} has negative arrival time {arrival}")]
    #[diagnostic(
        code(scheduler::invalid_arrival),
        help("Arrival times start at 0.")
    )]
    InvalidArrival { pid: ProcessId, arrival: Ticks },

    #[error("Process {0} is declared more than once")]
    #[diagnostic(
        code(scheduler::duplicate_process),
        help("Give each process a unique label.")
    )]
    DuplicateProcess(ProcessId),

    #[error("Invalid quantum {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round Robin needs a quantum of at least one tick.")
    )]
    InvalidQuantum(Ticks),

    #[error("Algorithm {0} requires a quantum")]
    #[diagnostic(
        code(scheduler::missing_quantum),
        help("Pass a quantum, e.g. `--quantum 2`.")
    )]
    MissingQuantum(InlineString),

    #[error("Unknown scheduling algorithm '{0}'")]
    #[diagnostic(
        code(scheduler::unknown_algorithm),
        help("Valid: fcfs, sjf, srtf, rr, priority")
    )]
    UnknownAlgorithm(InlineString),

    #[error("Worst-case makespan {required} exceeds the limit of {limit} ticks")]
    #[diagnostic(
        code(scheduler::simulation_limit_exceeded),
        help("Shrink the process set or raise the tick limit (SCHED_MAX_TICKS).")
    )]
    SimulationLimitExceeded { required: Ticks, limit: Ticks },
}

impl SchedulerError {
    /// Process this error points at, if it concerns a single process
    pub fn process(&self) -> Option<&ProcessId> {
        match self {
            Self::InvalidBurst { pid, .. }
            | Self::InvalidArrival { pid, .. }
            | Self::DuplicateProcess(pid) => Some(pid),
            _ => None,
        }
    }
}

/// Process table input errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ParseError {
    #[error("line {line}: expected `<id> <arrival> <burst> [priority]`, found {found} field(s)")]
    #[diagnostic(
        code(input::field_count),
        help("One process per line, e.g. `P1 0 5 2`.")
    )]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid {field} '{value}'")]
    #[diagnostic(code(input::invalid_number), help("Times and priorities are integers."))]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: InlineString,
    },

    #[error("invalid JSON process list: {0}")]
    #[diagnostic(
        code(input::invalid_json),
        help("Expected an array of {{\"id\", \"arrival\", \"burst\", \"priority\"}} objects.")
    )]
    Json(InlineString),

    #[error("too many processes: {count} (limit {limit})")]
    #[diagnostic(code(input::too_many_processes))]
    TooManyProcesses { count: usize, limit: usize },
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Json(err.to_string().into())
    }
}

/// Unified application error with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum AppError {
    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Input error: {0}")]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(app::configuration_error),
        help("Run with --help to list options and environment variables.")
    )]
    Configuration(InlineString),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(app::io_error),
        help("Check that the input file exists and is readable.")
    )]
    Io(InlineString),

    #[error("Internal error: {0}")]
    #[diagnostic(code(app::internal_error))]
    Internal(InlineString),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string().into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string().into())
    }
}

/// Serializable error representation for JSON reports
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SerializableError {
    pub error_type: InlineString,
    pub message: InlineString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<ProcessId>,
}

impl SerializableError {
    pub fn new(error_type: impl Into<InlineString>, message: impl Into<InlineString>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            process: None,
        }
    }
}

impl From<&SchedulerError> for SerializableError {
    fn from(err: &SchedulerError) -> Self {
        Self {
            process: err.process().cloned(),
            ..SerializableError::new("scheduler_error", err.to_string())
        }
    }
}

impl From<&AppError> for SerializableError {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Scheduler(inner) => inner.into(),
            AppError::Parse(_) => SerializableError::new("input_error", err.to_string()),
            AppError::Configuration(_) => {
                SerializableError::new("configuration_error", err.to_string())
            }
            AppError::Io(_) => SerializableError::new("io_error", err.to_string()),
            AppError::Internal(_) => SerializableError::new("internal_error", err.to_string()),
        }
    }
}

/// Result type for engine operations
pub type SchedulerResult<T> = std::result::Result<T, SchedulerError>;

/// Result type for the application layer (input, config, output)
pub type AppResult<T> = std::result::Result<T, AppError>;
