/*!
 * Tracing
 * Structured tracing for scheduling runs using the tracing crate
 *
 * Features:
 * - Trace ID per run for correlating events
 * - JSON-formatted logs for structured parsing
 * - Run duration recorded when the span closes
 */

use std::time::Instant;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Environment variable that switches log output to JSON
pub const TRACE_JSON_ENV: &str = "SCHED_TRACE_JSON";

/// Runs slower than this are reported at `warn`
const SLOW_RUN_MILLIS: u128 = 100;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - SCHED_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr so that reports on stdout stay machine-readable
    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        debug!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        debug!("Structured tracing initialized");
    }
}

/// Generate a unique trace ID for a run
pub fn generate_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one scheduling run
///
/// Wall-clock timing here is observational only; nothing measured by the
/// span flows back into scheduling.
pub struct RunSpan {
    span: tracing::Span,
    start: Instant,
    trace_id: String,
}

impl RunSpan {
    pub fn new(algorithm: &str, processes: usize) -> Self {
        let trace_id = generate_trace_id();

        let span = span!(
            Level::DEBUG,
            "schedule",
            trace_id = %trace_id,
            algorithm = algorithm,
            processes = processes,
            intervals = tracing::field::Empty,
            makespan = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
            duration_us = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            trace_id,
        }
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Record the shape of a finished timeline
    pub fn record_timeline(&self, intervals: usize, makespan: i64) {
        self.span.record("intervals", intervals);
        self.span.record("makespan", makespan);
        self.span.record("result", "success");
    }

    /// Record a refused run
    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
        self.span.record("result", "error");
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for RunSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        self.span.record("duration_us", duration.as_micros() as u64);
        let _entered = self.span.enter();

        if duration.as_millis() > SLOW_RUN_MILLIS {
            warn!(
                trace_id = %self.trace_id,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow scheduling run"
            );
        } else {
            debug!(trace_id = %self.trace_id, "scheduling run closed");
        }
    }
}

/// Helper to create a run span
#[inline]
pub fn span_run(algorithm: &str, processes: usize) -> RunSpan {
    RunSpan::new(algorithm, processes)
}

/// Log a one-line summary of a finished run at info level
pub fn log_run_summary(algorithm: &str, processes: usize, makespan: i64, intervals: usize) {
    info!(algorithm, processes, makespan, intervals, "scheduling run completed");
}
