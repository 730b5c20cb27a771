/*!
 * Configuration
 * Engine limits and command-line run configuration
 *
 * Command-line flags win over environment variables, which win over defaults.
 */

use crate::core::data_structures::InlineString;
use crate::core::errors::{AppError, AppResult};
use crate::core::limits::{DEFAULT_MAX_TICKS, DEFAULT_QUANTUM};
use crate::core::types::Ticks;
use crate::process::Preset;
use crate::scheduler::Algorithm;
use std::path::PathBuf;
use std::str::FromStr;

pub const MAX_TICKS_ENV: &str = "SCHED_MAX_TICKS";
pub const ALGORITHM_ENV: &str = "SCHED_ALGORITHM";
pub const QUANTUM_ENV: &str = "SCHED_QUANTUM";
pub const FORMAT_ENV: &str = "SCHED_FORMAT";

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Refuse process sets whose worst-case makespan exceeds this
    pub max_ticks: Ticks,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }
}

impl EngineConfig {
    /// No practical bound on run length
    pub const fn unbounded() -> Self {
        Self {
            max_ticks: Ticks::MAX,
        }
    }

    pub const fn with_max_ticks(mut self, max_ticks: Ticks) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Defaults overridden by `SCHED_MAX_TICKS`
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup(MAX_TICKS_ENV) {
            config.max_ticks = parse_positive(MAX_TICKS_ENV, &value)?;
        }
        Ok(config)
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(configuration(format!(
                "Invalid format '{}'. Valid: text, json",
                s
            ))),
        }
    }
}

/// Where the process table comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    Preset(Preset),
}

/// Everything the CLI needs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    pub input: InputSource,
    pub format: OutputFormat,
    pub engine: EngineConfig,
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunConfig),
    Help,
}

impl Command {
    /// Parse process arguments (without the program name) with environment
    /// fallbacks
    pub fn from_env_args() -> AppResult<Self> {
        Self::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Parse arguments, resolving unset options through `lookup`
    pub fn parse<I, S>(args: I, lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut algorithm: Option<String> = None;
        let mut quantum: Option<String> = None;
        let mut format: Option<String> = None;
        let mut max_ticks: Option<String> = None;
        let mut input: Option<InputSource> = None;

        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            let (flag, inline_value) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg, None),
            };
            let mut value = |name: &str| {
                inline_value
                    .clone()
                    .or_else(|| args.next())
                    .ok_or_else(|| configuration(format!("Missing value for {}", name)))
            };

            match flag.as_str() {
                "-h" | "--help" => return Ok(Self::Help),
                "-a" | "--algorithm" => algorithm = Some(value(&flag)?),
                "-q" | "--quantum" => quantum = Some(value(&flag)?),
                "-f" | "--format" => format = Some(value(&flag)?),
                "--max-ticks" => max_ticks = Some(value(&flag)?),
                "-p" | "--preset" => input = Some(InputSource::Preset(value(&flag)?.parse()?)),
                "-i" | "--input" => {
                    let path = value(&flag)?;
                    input = Some(if path == "-" {
                        InputSource::Stdin
                    } else {
                        InputSource::File(path.into())
                    });
                }
                other if !other.starts_with('-') && input.is_none() => {
                    input = Some(InputSource::File(other.into()));
                }
                other => return Err(configuration(format!("Unknown argument '{}'", other))),
            }
        }

        let algorithm = algorithm
            .or_else(|| lookup(ALGORITHM_ENV))
            .unwrap_or_else(|| "fcfs".to_string());
        let quantum = match quantum.or_else(|| lookup(QUANTUM_ENV)) {
            Some(value) => parse_ticks(QUANTUM_ENV, &value)?,
            None => DEFAULT_QUANTUM,
        };
        let format = match format.or_else(|| lookup(FORMAT_ENV)) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };
        let mut engine = EngineConfig::from_lookup(&lookup)?;
        if let Some(value) = max_ticks {
            engine.max_ticks = parse_positive("--max-ticks", &value)?;
        }

        Ok(Self::Run(RunConfig {
            algorithm: Algorithm::from_name(&algorithm, Some(quantum))?,
            input: input.unwrap_or(InputSource::Preset(Preset::Basic)),
            format,
            engine,
        }))
    }
}

/// Usage text for `--help`
pub const USAGE: &str = "\
Usage: cpu-sched [OPTIONS] [FILE]

Schedules a process table and prints the CPU timeline and per-process statistics.

Options:
  -a, --algorithm <NAME>   fcfs | sjf | srtf | rr | priority        [env: SCHED_ALGORITHM, default: fcfs]
  -q, --quantum <TICKS>    Round Robin quantum                      [env: SCHED_QUANTUM, default: 2]
  -i, --input <FILE>       Process table file, '-' for stdin
  -p, --preset <NAME>      basic | convoy | staggered | priority-mix (default: basic)
  -f, --format <FORMAT>    text | json                              [env: SCHED_FORMAT, default: text]
      --max-ticks <TICKS>  Refuse runs longer than this             [env: SCHED_MAX_TICKS]
  -h, --help               Print this help

Input: one process per line, `<id> <arrival> <burst> [priority]`, or a JSON array.
Logging: RUST_LOG=<level>, SCHED_TRACE_JSON=1 for JSON logs (stderr).
";

fn configuration(message: String) -> AppError {
    AppError::Configuration(InlineString::from(message))
}

fn parse_ticks(name: &str, value: &str) -> AppResult<Ticks> {
    value
        .trim()
        .parse()
        .map_err(|_| configuration(format!("{} must be an integer, got '{}'", name, value)))
}

fn parse_positive(name: &str, value: &str) -> AppResult<Ticks> {
    let ticks = parse_ticks(name, value)?;
    if ticks < 1 {
        return Err(configuration(format!("{} must be positive, got {}", name, ticks)));
    }
    Ok(ticks)
}
