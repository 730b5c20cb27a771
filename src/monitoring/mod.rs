/*!
 * Monitoring
 * Structured tracing for scheduling runs
 */

mod tracer;

pub use tracer::{
    generate_trace_id, init_tracing, log_run_summary, span_run, RunSpan, TRACE_JSON_ENV,
};
